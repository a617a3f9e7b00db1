//! Transport-agnostic domain types and ports.
//!
//! The legacy schema is expressed as explicit typed records per table
//! rather than runtime field maps, and table associations are plain
//! configuration consumed by the query adapters instead of registrations
//! against shared singletons.

pub mod accounts;
pub mod error;
pub mod menu;
pub mod permissions;
pub mod ports;
pub mod rates;

pub use accounts::{AccountSummary, UserGroup, Usuario};
pub use error::{DomainError, ErrorCode};
pub use menu::{MenuItem, MenuTree};
pub use permissions::PermissionGrant;
pub use rates::ExchangeRate;
