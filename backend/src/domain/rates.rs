//! Exchange-rate records backed by the `ExCHRate` table.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An `ExCHRate` row keyed by (`RateDate`, `Currency`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct ExchangeRate {
    /// Rate day (composite key part).
    pub rate_date: NaiveDate,
    /// Currency code (composite key part).
    #[schema(example = "EUR")]
    pub currency: String,
    /// The exchange rate itself.
    pub rate: Option<f64>,
    /// Signing user reference (`UserSign`).
    pub user_sign: Option<i32>,
}
