//! PostgreSQL-backed `PermissionQuery` implementation using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::PermissionQuery;
use crate::domain::{DomainError, PermissionGrant};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::AuthRow;
use super::pool::DbPool;
use super::schema::auth;

/// Diesel-backed implementation of the permission query port.
#[derive(Clone)]
pub struct DieselPermissionQuery {
    pool: DbPool,
}

impl DieselPermissionQuery {
    /// Create a new adapter with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PermissionQuery for DieselPermissionQuery {
    async fn grants_for_user(&self, user_id: i32) -> Result<Vec<PermissionGrant>, DomainError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<AuthRow> = auth::table
            .filter(auth::user_id.eq(user_id))
            .order(auth::perm_id.asc())
            .select(AuthRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(PermissionGrant::from).collect())
    }
}
