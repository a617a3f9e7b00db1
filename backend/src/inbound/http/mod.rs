//! HTTP inbound adapter: handlers, shared state and error envelope.

pub mod error;
pub mod health;
pub mod menus;
pub mod rates;
pub mod state;
pub mod users;

pub use error::{ApiError, ApiResult};
pub use health::HealthState;
pub use state::HttpState;
