//! Shared test utilities.
//!
//! Helpers for setting up in-memory databases, API state and employee records
//! with sensible defaults.

use crate::{
    api::AppState,
    config::{Credentials, UserStore, users::ROLE_USER},
    entities::EmployeeRecord,
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

/// Username of the user configured by [`setup_test_state`].
pub const TEST_USERNAME: &str = "user";
/// Password of the user configured by [`setup_test_state`].
pub const TEST_PASSWORD: &str = "password";

/// Creates an in-memory `SQLite` database with all tables initialized.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates API state over a fresh database with one `USER` account.
pub async fn setup_test_state() -> Result<AppState> {
    let db = setup_test_db().await?;
    let mut users = UserStore::new();
    users.add_user(&test_credentials(TEST_USERNAME, TEST_PASSWORD), &[ROLE_USER])?;
    Ok(AppState::new(db, users))
}

/// Builds credentials from plain strings.
pub fn test_credentials(username: &str, password: &str) -> Credentials {
    Credentials {
        username: username.to_string(),
        password: password.to_string(),
    }
}

/// Creates an unsaved, active record with the given first name.
///
/// # Defaults
/// * `middle_initial`: "O"
/// * `last_name`: "User"
/// * `date_of_birth`: 1985-01-02
/// * `date_of_employment`: 2018-06-03
pub fn test_record(first_name: &str) -> EmployeeRecord {
    EmployeeRecord::new(
        first_name,
        "O",
        "User",
        NaiveDate::from_ymd_opt(1985, 1, 2).unwrap_or_default(),
        NaiveDate::from_ymd_opt(2018, 6, 3).unwrap_or_default(),
    )
}
