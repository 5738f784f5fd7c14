use sqlx::error::ErrorKind;

pub type Result<T, E = RegistryError> = std::result::Result<T, E>;

/// Errors surfaced by registry operations. Updates and deletes that target
/// a nonexistent id are not errors; they complete with zero rows affected.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The database could not be reached or refused the session.
    #[error("database unreachable: {0}")]
    Connectivity(#[source] sqlx::Error),

    /// The database rejected a write (unique, not-null, check or foreign
    /// key violation).
    #[error("constraint violated: {0}")]
    Constraint(#[source] sqlx::Error),

    /// Any other driver-reported failure.
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl From<sqlx::Error> for RegistryError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.kind() != ErrorKind::Other => {
                RegistryError::Constraint(err)
            }
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Configuration(_) => RegistryError::Connectivity(err),
            _ => RegistryError::Database(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_failures_classify_as_connectivity() {
        let err = sqlx::Error::Io(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        ));
        assert!(matches!(
            RegistryError::from(err),
            RegistryError::Connectivity(_)
        ));
    }

    #[test]
    fn pool_timeout_classifies_as_connectivity() {
        assert!(matches!(
            RegistryError::from(sqlx::Error::PoolTimedOut),
            RegistryError::Connectivity(_)
        ));
    }

    #[test]
    fn row_not_found_stays_a_plain_database_error() {
        assert!(matches!(
            RegistryError::from(sqlx::Error::RowNotFound),
            RegistryError::Database(_)
        ));
    }
}
