//! Driving port for exchange-rate lookups against the `ExCHRate` table.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{DomainError, ExchangeRate};

/// Domain use-case port for reading exchange rates.
#[async_trait]
pub trait ExchangeRateQuery: Send + Sync {
    /// Return every rate recorded for the given day.
    async fn rates_on(&self, date: NaiveDate) -> Result<Vec<ExchangeRate>, DomainError>;
}

/// Deterministic exchange-rate fixture used until persistence is wired.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureExchangeRateQuery;

#[async_trait]
impl ExchangeRateQuery for FixtureExchangeRateQuery {
    async fn rates_on(&self, date: NaiveDate) -> Result<Vec<ExchangeRate>, DomainError> {
        Ok(vec![ExchangeRate {
            rate_date: date,
            currency: "EUR".into(),
            rate: Some(1.0),
            user_sign: Some(1),
        }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn fixture_rate_echoes_requested_date() {
        let date = NaiveDate::from_ymd_opt(2025, 11, 1).expect("valid date");
        let rates = FixtureExchangeRateQuery.rates_on(date).await.expect("rates");
        assert_eq!(rates.len(), 1);
        assert_eq!(rates[0].rate_date, date);
    }
}
