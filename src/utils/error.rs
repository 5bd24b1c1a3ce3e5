use thiserror::Error;

/// Error carried through the facade, service and repository layers. Lower
/// layers never swallow an error; the handlers are the only place where one
/// is turned into a status code and a fixed client-facing message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error")]
    Database(#[from] sqlx::Error),
}
