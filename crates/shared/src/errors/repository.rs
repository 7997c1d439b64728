use sqlx::Error as SqlxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(SqlxError),

    #[error("Not found")]
    NotFound,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Foreign key violation: {0}")]
    ForeignKey(String),
}

/// Classifies a database error by its SQLSTATE so constraint races that slip
/// past the service-layer checks surface as 409/400 instead of 500.
fn classify(code: Option<&str>, message: &str) -> Option<RepositoryError> {
    match code {
        Some("23505") => Some(RepositoryError::AlreadyExists(message.to_string())),
        Some("23503") => Some(RepositoryError::ForeignKey(message.to_string())),
        Some("40001") => Some(RepositoryError::Conflict(message.to_string())),
        _ => None,
    }
}

impl From<SqlxError> for RepositoryError {
    fn from(err: SqlxError) -> Self {
        if let SqlxError::Database(db_err) = &err {
            if let Some(classified) = classify(db_err.code().as_deref(), db_err.message()) {
                return classified;
            }
        }
        RepositoryError::Sqlx(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constraint_codes_map_to_dedicated_variants() {
        let dup = classify(Some("23505"), "duplicate key value").unwrap();
        assert!(matches!(dup, RepositoryError::AlreadyExists(msg) if msg == "duplicate key value"));

        let fk = classify(Some("23503"), "violates foreign key").unwrap();
        assert!(matches!(fk, RepositoryError::ForeignKey(_)));

        let serialization = classify(Some("40001"), "could not serialize access").unwrap();
        assert!(matches!(serialization, RepositoryError::Conflict(_)));
    }

    #[test]
    fn other_codes_stay_unclassified() {
        assert!(classify(Some("42P01"), "relation does not exist").is_none());
        assert!(classify(None, "whatever").is_none());
    }

    #[test]
    fn non_database_errors_pass_through() {
        let err = RepositoryError::from(SqlxError::RowNotFound);
        assert!(matches!(err, RepositoryError::Sqlx(_)));
    }
}
