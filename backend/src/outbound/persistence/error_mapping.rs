//! Shared mapping from pool/Diesel failures to domain errors.
//!
//! Connection-level failures surface as `ServiceUnavailable`; everything
//! else is a query failure reported as an internal error. Raw driver
//! messages are logged, never returned to clients.

use tracing::debug;

use crate::domain::DomainError;

use super::pool::PoolError;

/// Map a pool failure to a domain error.
pub(crate) fn map_pool_error(error: PoolError) -> DomainError {
    let message = match error {
        PoolError::Checkout(message) | PoolError::Build(message) => message,
    };
    debug!(message, "database pool failure");
    DomainError::service_unavailable("database unavailable")
}

/// Map a Diesel failure to a domain error.
pub(crate) fn map_diesel_error(error: diesel::result::Error) -> DomainError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            DomainError::service_unavailable("database connection error")
        }
        _ => DomainError::internal("database query failed"),
    }
}
