use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// A registered user record in users.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Registration failure
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("email already registered")]
    EmailTaken,
    #[error(transparent)]
    Io(#[from] anyhow::Error),
}

/// Capability interface over the credential store. The core never
/// depends on how records are kept.
pub trait UserDirectory {
    /// Add a new user. Fails when the email is already registered.
    fn register_user(&mut self, record: UserRecord) -> Result<(), AuthError>;

    /// Look up a user by username + password, None on mismatch.
    fn find_user_by_credential(&self, username: &str, password: &str) -> Option<UserRecord>;
}

/// users.json-backed directory
#[derive(Debug)]
pub struct JsonUserDirectory {
    path: PathBuf,
    users: Vec<UserRecord>,
}

impl JsonUserDirectory {
    /// Load the directory from disk; a missing file yields an empty one
    pub fn open(path: PathBuf) -> Result<Self> {
        let content = crate::persistence::read_file(&path)?;
        let users = if content.is_empty() {
            Vec::new()
        } else {
            serde_json::from_str(&content)
                .with_context(|| format!("Malformed users file: {}", path.display()))?
        };

        Ok(Self { path, users })
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    fn persist(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.users)?;
        crate::persistence::atomic_write(&self.path, &json)?;
        Ok(())
    }
}

impl UserDirectory for JsonUserDirectory {
    fn register_user(&mut self, record: UserRecord) -> Result<(), AuthError> {
        if self.users.iter().any(|u| u.email == record.email) {
            return Err(AuthError::EmailTaken);
        }
        self.users.push(record);
        self.persist()?;
        Ok(())
    }

    fn find_user_by_credential(&self, username: &str, password: &str) -> Option<UserRecord> {
        self.users
            .iter()
            .find(|u| u.username == username && u.password == password)
            .cloned()
    }
}

/// The logged-in user, stored in session.json
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
}

/// Load the stored session, None when nobody is logged in
pub fn load_session(path: &PathBuf) -> Result<Option<Session>> {
    let content = crate::persistence::read_file(path)?;
    if content.is_empty() {
        return Ok(None);
    }
    let session = serde_json::from_str(&content)
        .with_context(|| format!("Malformed session file: {}", path.display()))?;
    Ok(Some(session))
}

/// Persist the session after a successful login
pub fn save_session(path: &PathBuf, session: &Session) -> Result<()> {
    let json = serde_json::to_string_pretty(session)?;
    crate::persistence::atomic_write(path, &json)
}

/// Remove the session on logout
pub fn clear_session(path: &PathBuf) -> Result<()> {
    if path.exists() {
        std::fs::remove_file(path)
            .with_context(|| format!("Failed to remove session file: {}", path.display()))?;
    }
    Ok(())
}
