//! bb8-backed pool of `AsyncPgConnection`s for the legacy database.
//!
//! Query adapters hold a cloned [`DbPool`] handle and check connections
//! out per call. Checkout waits up to [`CHECKOUT_TIMEOUT`]; a slot that
//! cannot be produced in that window surfaces as [`PoolError::Checkout`],
//! which the error mapping layer turns into a 503.

use std::time::Duration;

use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::AsyncPgConnection;

/// Connections kept when `DB_POOL_MAX_SIZE` is not set.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// How long a checkout may wait for a free connection.
const CHECKOUT_TIMEOUT: Duration = Duration::from_secs(30);

/// Failure in the pool itself, as opposed to a query failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// The pool could not be constructed from the database URL.
    #[error("could not build database pool: {0}")]
    Build(String),

    /// No connection became available within the checkout timeout.
    #[error("no database connection available: {0}")]
    Checkout(String),
}

/// Cloneable handle to the shared connection pool.
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<AsyncPgConnection>,
}

impl DbPool {
    /// Open a pool with [`DEFAULT_MAX_CONNECTIONS`] slots.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Build`] when the pool cannot be constructed.
    pub async fn connect(database_url: &str) -> Result<Self, PoolError> {
        Self::connect_with_size(database_url, DEFAULT_MAX_CONNECTIONS).await
    }

    /// Open a pool with an explicit connection limit.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Build`] when the pool cannot be constructed.
    pub async fn connect_with_size(
        database_url: &str,
        max_connections: u32,
    ) -> Result<Self, PoolError> {
        let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(database_url);
        let inner = Pool::builder()
            .max_size(max_connections)
            .connection_timeout(CHECKOUT_TIMEOUT)
            .build(manager)
            .await
            .map_err(|err| PoolError::Build(err.to_string()))?;
        Ok(Self { inner })
    }

    /// Check a connection out of the pool.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Checkout`] when no connection can be obtained
    /// within the checkout timeout.
    pub async fn get(&self) -> Result<PooledConnection<'_, AsyncPgConnection>, PoolError> {
        self.inner
            .get()
            .await
            .map_err(|err| PoolError::Checkout(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(PoolError::Build("malformed url".into()), "could not build")]
    #[case(PoolError::Checkout("checkout timed out".into()), "no database connection")]
    fn errors_name_the_stage_and_keep_the_cause(
        #[case] error: PoolError,
        #[case] stage: &str,
    ) {
        let rendered = error.to_string();
        assert!(rendered.contains(stage), "missing stage in: {rendered}");
        match error {
            PoolError::Build(cause) | PoolError::Checkout(cause) => {
                assert!(rendered.contains(&cause), "missing cause in: {rendered}");
            }
        }
    }

    #[test]
    fn build_and_checkout_failures_are_distinct() {
        let build = PoolError::Build("same text".into());
        let checkout = PoolError::Checkout("same text".into());
        assert_ne!(build, checkout);
    }
}
