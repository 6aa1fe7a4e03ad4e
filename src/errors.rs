use thiserror::Error;

/// Unified error type for the employee roster.
///
/// "Not found" is deliberately absent: lookups return `Ok(None)` and the HTTP
/// layer turns that into a 404.
#[derive(Debug, Error)]
pub enum Error {
    /// Settings file, environment or credential setup failed.
    #[error("Configuration error: {message}")]
    Config {
        /// Human readable description
        message: String,
    },

    /// Error surfaced by the data-access layer.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Filesystem error, e.g. creating the database directory.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The loader registry has no strategy for the file's extension.
    #[error("No loader strategy registered for extension '{extension}'")]
    UnregisteredStrategy {
        /// Lowercased extension that was looked up
        extension: String,
    },

    /// The HTTP server failed to bind or stopped with an error.
    #[error("Server error: {message}")]
    Serve {
        /// Human readable description
        message: String,
    },
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
