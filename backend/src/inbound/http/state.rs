//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    DirectoryQuery, ExchangeRateQuery, FixtureDirectoryQuery, FixtureExchangeRateQuery,
    FixtureMenuQuery, FixturePermissionQuery, MenuQuery, PermissionQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub menus: Arc<dyn MenuQuery>,
    pub directory: Arc<dyn DirectoryQuery>,
    pub permissions: Arc<dyn PermissionQuery>,
    pub rates: Arc<dyn ExchangeRateQuery>,
}

impl HttpState {
    /// State backed entirely by deterministic fixtures, for tests and
    /// DB-less operation.
    pub fn fixtures() -> Self {
        Self {
            menus: Arc::new(FixtureMenuQuery),
            directory: Arc::new(FixtureDirectoryQuery),
            permissions: Arc::new(FixturePermissionQuery),
            rates: Arc::new(FixtureExchangeRateQuery),
        }
    }
}

impl Default for HttpState {
    fn default() -> Self {
        Self::fixtures()
    }
}
