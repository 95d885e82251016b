use std::path::PathBuf;
use thiserror::Error;

/// Security invariants checked before a configuration is handed out.
///
/// Messages are stable: operators and tests match on the exact text.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("JWT secret must be set")]
    MissingJwtSecret,

    #[error("JWT secret must be at least 32 characters")]
    JwtSecretTooShort,

    #[error("encryption key must be exactly 32 bytes (256 bits)")]
    InvalidEncryptionKeyLength,

    #[error("database password must be set")]
    MissingDatabasePassword,

    #[error("audit database password must be set")]
    MissingAuditDatabasePassword,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("config validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("error loading env file {}: {source}", .path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    #[error("Logging error: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_is_wrapped_with_context() {
        let err = Error::from(ValidationError::MissingJwtSecret);
        assert_eq!(
            err.to_string(),
            "config validation failed: JWT secret must be set"
        );
    }
}
