//! Diesel-backed persistence adapters for the legacy schema.

mod diesel_directory_query;
mod diesel_exchange_rate_query;
mod diesel_menu_query;
mod diesel_permission_query;
mod error_mapping;
mod models;
pub mod pool;
pub mod schema;

pub use diesel_directory_query::DieselDirectoryQuery;
pub use diesel_exchange_rate_query::DieselExchangeRateQuery;
pub use diesel_menu_query::DieselMenuQuery;
pub use diesel_permission_query::DieselPermissionQuery;
pub use pool::{DbPool, PoolError};
