use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Get the petal directory - checks for local .petal first, then falls back to global ~/.petal
pub fn get_petal_dir() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    if let Some(local_dir) = find_local_petal(&current_dir) {
        return Ok(local_dir);
    }

    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".petal"))
}

/// Find local .petal directory by walking up the directory tree
fn find_local_petal(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        let petal_dir = current.join(".petal");
        if petal_dir.exists() && petal_dir.is_dir() {
            return Some(petal_dir);
        }

        current = current.parent()?;
    }
}

/// Ensure the petal directory exists
pub fn ensure_petal_dir() -> Result<PathBuf> {
    let dir = get_petal_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(dir)
}

/// Initialize a local .petal directory in the current directory
pub fn init_local_petal() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    let petal_dir = current_dir.join(".petal");

    if petal_dir.exists() {
        anyhow::bail!("Petal directory already exists: {}", petal_dir.display());
    }

    fs::create_dir_all(&petal_dir)
        .with_context(|| format!("Failed to create directory: {}", petal_dir.display()))?;

    Ok(petal_dir)
}

/// Path to settings.json (username, locale, theme)
pub fn settings_file() -> Result<PathBuf> {
    Ok(ensure_petal_dir()?.join("settings.json"))
}

/// Path to users.json (registered credential records)
pub fn users_file() -> Result<PathBuf> {
    Ok(ensure_petal_dir()?.join("users.json"))
}

/// Path to session.json (currently logged-in user)
pub fn session_file() -> Result<PathBuf> {
    Ok(ensure_petal_dir()?.join("session.json"))
}

/// Atomically write content to a file using temp file + rename
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = path
        .parent()
        .context("File path has no parent directory")?;

    let mut temp_file =
        NamedTempFile::new_in(dir).context("Failed to create temporary file")?;

    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temporary file")?;

    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file: {}", path.display()))?;

    Ok(())
}

/// Read file content, return empty string if file doesn't exist
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(String::new());
    }
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_petal_dir() {
        let dir = get_petal_dir().unwrap();
        assert!(dir.to_string_lossy().contains(".petal"));
    }

    #[test]
    fn test_atomic_write_and_read() {
        let temp_dir = tempfile::tempdir().unwrap();
        let test_file = temp_dir.path().join("test.txt");

        let content = "Hello, world!";
        atomic_write(&test_file, content).unwrap();

        let read_content = read_file(&test_file).unwrap();
        assert_eq!(read_content, content);
    }

    #[test]
    fn test_atomic_write_replaces_existing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let test_file = temp_dir.path().join("test.txt");

        atomic_write(&test_file, "first").unwrap();
        atomic_write(&test_file, "second").unwrap();

        assert_eq!(read_file(&test_file).unwrap(), "second");
    }

    #[test]
    fn test_read_nonexistent_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let test_file = temp_dir.path().join("nonexistent.txt");

        let content = read_file(&test_file).unwrap();
        assert_eq!(content, "");
    }
}
