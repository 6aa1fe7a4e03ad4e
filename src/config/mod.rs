/// Database connection and schema creation
pub mod database;

/// Application settings from config.toml and the environment
pub mod settings;

/// In-memory API users and their credentials
pub mod users;

pub use settings::Settings;
pub use users::{Credentials, UserStore};
