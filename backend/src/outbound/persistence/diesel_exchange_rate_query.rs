//! PostgreSQL-backed `ExchangeRateQuery` implementation using Diesel.

use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::ExchangeRateQuery;
use crate::domain::{DomainError, ExchangeRate};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::ExchangeRateRow;
use super::pool::DbPool;
use super::schema::exch_rate;

/// Diesel-backed implementation of the exchange-rate query port.
#[derive(Clone)]
pub struct DieselExchangeRateQuery {
    pool: DbPool,
}

impl DieselExchangeRateQuery {
    /// Create a new adapter with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExchangeRateQuery for DieselExchangeRateQuery {
    async fn rates_on(&self, date: NaiveDate) -> Result<Vec<ExchangeRate>, DomainError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ExchangeRateRow> = exch_rate::table
            .filter(exch_rate::rate_date.eq(date))
            .order(exch_rate::currency.asc())
            .select(ExchangeRateRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(ExchangeRate::from).collect())
    }
}
