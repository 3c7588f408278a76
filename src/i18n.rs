use crate::domain::Locale;

/// Message keys used across the screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    TodoTask,
    DoneTask,
    RemainingTasks,
    NoTasks,
    TimeSpent,
    EditedAt,
    AddTask,
    EditTask,
    TaskTitle,
    TaskDescription,
    CategoryLabel,
    DateLabel,
    Save,
    Cancel,
    Start,
    Stop,
    Reset,
    PickTask,
    NoOpenTasks,
    Username,
    Password,
    Email,
    LoginTitle,
    RegisterTitle,
    InvalidCredentials,
    LoginSuccessful,
    RegistrationSuccessful,
    EmailAlreadyRegistered,
    WelcomeBack,
    Localization,
    ThemeLabel,
    SettingsSaved,
    Logout,
    SelectedDate,
}

/// Look up a message in the given locale
pub fn tr(locale: Locale, text: Text) -> &'static str {
    match locale {
        Locale::En => english(text),
        Locale::Es => spanish(text),
        Locale::Fr => french(text),
    }
}

fn english(text: Text) -> &'static str {
    match text {
        Text::TodoTask => "Todo Task",
        Text::DoneTask => "Done Task",
        Text::RemainingTasks => "Remaining Tasks",
        Text::NoTasks => "No tasks for selected date.",
        Text::TimeSpent => "Time spent",
        Text::EditedAt => "Edited at",
        Text::AddTask => "Add Task",
        Text::EditTask => "Edit Task",
        Text::TaskTitle => "Title",
        Text::TaskDescription => "Description",
        Text::CategoryLabel => "Category",
        Text::DateLabel => "Date",
        Text::Save => "Save",
        Text::Cancel => "Cancel",
        Text::Start => "Start",
        Text::Stop => "Stop",
        Text::Reset => "Reset",
        Text::PickTask => "Pick a task to track",
        Text::NoOpenTasks => "No open tasks to track.",
        Text::Username => "Username",
        Text::Password => "Password",
        Text::Email => "Email",
        Text::LoginTitle => "Welcome to Petal",
        Text::RegisterTitle => "Create Account",
        Text::InvalidCredentials => "Invalid credentials. Please try again.",
        Text::LoginSuccessful => "Login successful",
        Text::RegistrationSuccessful => "Registration successful",
        Text::EmailAlreadyRegistered => "Email already registered",
        Text::WelcomeBack => "Welcome Back",
        Text::Localization => "Localization",
        Text::ThemeLabel => "Theme",
        Text::SettingsSaved => "Settings saved!",
        Text::Logout => "Logout",
        Text::SelectedDate => "Selected date",
    }
}

fn spanish(text: Text) -> &'static str {
    match text {
        Text::TodoTask => "Tarea pendiente",
        Text::DoneTask => "Tarea hecha",
        Text::RemainingTasks => "Tareas restantes",
        Text::NoTasks => "No hay tareas para la fecha seleccionada.",
        Text::TimeSpent => "Tiempo dedicado",
        Text::EditedAt => "Editado a las",
        Text::AddTask => "Agregar tarea",
        Text::EditTask => "Editar tarea",
        Text::TaskTitle => "Título",
        Text::TaskDescription => "Descripción",
        Text::CategoryLabel => "Categoría",
        Text::DateLabel => "Fecha",
        Text::Save => "Guardar",
        Text::Cancel => "Cancelar",
        Text::Start => "Iniciar",
        Text::Stop => "Detener",
        Text::Reset => "Reiniciar",
        Text::PickTask => "Elige una tarea para medir",
        Text::NoOpenTasks => "No hay tareas abiertas para medir.",
        Text::Username => "Usuario",
        Text::Password => "Contraseña",
        Text::Email => "Correo",
        Text::LoginTitle => "Bienvenido a Petal",
        Text::RegisterTitle => "Crear cuenta",
        Text::InvalidCredentials => "Credenciales inválidas. Inténtalo de nuevo.",
        Text::LoginSuccessful => "Inicio de sesión exitoso",
        Text::RegistrationSuccessful => "Registro exitoso",
        Text::EmailAlreadyRegistered => "El correo ya está registrado",
        Text::WelcomeBack => "Bienvenido de nuevo",
        Text::Localization => "Idioma",
        Text::ThemeLabel => "Tema",
        Text::SettingsSaved => "¡Configuración guardada!",
        Text::Logout => "Cerrar sesión",
        Text::SelectedDate => "Fecha seleccionada",
    }
}

fn french(text: Text) -> &'static str {
    match text {
        Text::TodoTask => "Tâche à faire",
        Text::DoneTask => "Tâche terminée",
        Text::RemainingTasks => "Tâches restantes",
        Text::NoTasks => "Aucune tâche pour la date sélectionnée.",
        Text::TimeSpent => "Temps passé",
        Text::EditedAt => "Modifié à",
        Text::AddTask => "Ajouter une tâche",
        Text::EditTask => "Modifier la tâche",
        Text::TaskTitle => "Titre",
        Text::TaskDescription => "Description",
        Text::CategoryLabel => "Catégorie",
        Text::DateLabel => "Date",
        Text::Save => "Enregistrer",
        Text::Cancel => "Annuler",
        Text::Start => "Démarrer",
        Text::Stop => "Arrêter",
        Text::Reset => "Réinitialiser",
        Text::PickTask => "Choisissez une tâche à suivre",
        Text::NoOpenTasks => "Aucune tâche ouverte à suivre.",
        Text::Username => "Nom d'utilisateur",
        Text::Password => "Mot de passe",
        Text::Email => "E-mail",
        Text::LoginTitle => "Bienvenue sur Petal",
        Text::RegisterTitle => "Créer un compte",
        Text::InvalidCredentials => "Identifiants invalides. Veuillez réessayer.",
        Text::LoginSuccessful => "Connexion réussie",
        Text::RegistrationSuccessful => "Inscription réussie",
        Text::EmailAlreadyRegistered => "E-mail déjà enregistré",
        Text::WelcomeBack => "Bon retour",
        Text::Localization => "Langue",
        Text::ThemeLabel => "Thème",
        Text::SettingsSaved => "Paramètres enregistrés !",
        Text::Logout => "Déconnexion",
        Text::SelectedDate => "Date sélectionnée",
    }
}
