//! Driving ports for the domain use-cases.
//!
//! Each port is an async trait with a deterministic `Fixture*`
//! implementation; production adapters live under `outbound::persistence`.

mod directory_query;
mod exchange_rate_query;
mod menu_query;
mod permission_query;

pub use directory_query::{DirectoryQuery, FixtureDirectoryQuery};
pub use exchange_rate_query::{ExchangeRateQuery, FixtureExchangeRateQuery};
pub use menu_query::{FixtureMenuQuery, MenuQuery};
pub use permission_query::{FixturePermissionQuery, PermissionQuery};
