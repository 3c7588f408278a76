use serde::{Deserialize, Serialize};

/// Fixed category set for classifying tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Personal,
    Work,
    Home,
    Other,
}

impl Category {
    /// Display name for list headers and the category picker
    pub fn label(&self) -> &'static str {
        match self {
            Category::Personal => "Personal",
            Category::Work => "Work",
            Category::Home => "Home",
            Category::Other => "Other",
        }
    }

    /// Parse a category from its display name
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Personal" => Some(Category::Personal),
            "Work" => Some(Category::Work),
            "Home" => Some(Category::Home),
            "Other" => Some(Category::Other),
            _ => None,
        }
    }

    /// All categories in picker order
    pub fn all() -> &'static [Category] {
        &[
            Category::Personal,
            Category::Work,
            Category::Home,
            Category::Other,
        ]
    }
}

/// Top-level screen the user is looking at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Home,
    Calendar,
    Timer,
    Settings,
}

impl Screen {
    /// Tab title shown in the navigation bar
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Login => "Login",
            Screen::Home => "Home",
            Screen::Calendar => "Calendar",
            Screen::Timer => "Timer",
            Screen::Settings => "Settings",
        }
    }

    /// Screens reachable from the tab bar once logged in
    pub fn tabs() -> &'static [Screen] {
        &[Screen::Home, Screen::Calendar, Screen::Timer, Screen::Settings]
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTask,
    EditingTask,
    Registering,
}

/// Color theme, persisted in settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    /// All themes in picker order
    pub fn all() -> &'static [Theme] {
        &[Theme::Light, Theme::Dark]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Light
    }
}

/// Interface language, persisted in settings as a two-letter code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Es,
    Fr,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
            Locale::Fr => "fr",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Locale::En),
            "es" => Some(Locale::Es),
            "fr" => Some(Locale::Fr),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Es => "Spanish",
            Locale::Fr => "French",
        }
    }

    /// All locales in picker order
    pub fn all() -> &'static [Locale] {
        &[Locale::En, Locale::Es, Locale::Fr]
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::En
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_label_roundtrip() {
        for cat in Category::all() {
            assert_eq!(Category::from_label(cat.label()), Some(*cat));
        }
        assert_eq!(Category::from_label("Errands"), None);
    }

    #[test]
    fn test_category_all_is_exhaustive() {
        assert_eq!(Category::all().len(), 4);
    }

    #[test]
    fn test_locale_code_roundtrip() {
        for locale in Locale::all() {
            assert_eq!(Locale::from_code(locale.code()), Some(*locale));
        }
        assert_eq!(Locale::from_code("de"), None);
    }

    #[test]
    fn test_screen_tabs_exclude_login() {
        assert!(!Screen::tabs().contains(&Screen::Login));
        assert_eq!(Screen::tabs().len(), 4);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(Locale::default(), Locale::En);
    }
}
