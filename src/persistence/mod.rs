pub mod auth;
pub mod files;
pub mod settings;

pub use auth::{
    clear_session, load_session, save_session, AuthError, JsonUserDirectory, Session, UserDirectory,
    UserRecord,
};
pub use files::{
    atomic_write, ensure_petal_dir, get_petal_dir, init_local_petal, read_file, session_file,
    settings_file, users_file,
};
pub use settings::{load_settings, save_settings, Settings};
