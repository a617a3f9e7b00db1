//! PostgreSQL-backed `DirectoryQuery` implementation using Diesel.
//!
//! Account reads select only the profile subset of OUSR; credential and
//! audit columns never leave the database.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::DirectoryQuery;
use crate::domain::{AccountSummary, DomainError, UserGroup, Usuario};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{AccountRow, UserGroupRow, UsuarioRow};
use super::pool::DbPool;
use super::schema::{ougr, ousr, usuarios};

/// Diesel-backed implementation of the directory query port.
#[derive(Clone)]
pub struct DieselDirectoryQuery {
    pool: DbPool,
}

impl DieselDirectoryQuery {
    /// Create a new adapter with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DirectoryQuery for DieselDirectoryQuery {
    async fn list_accounts(&self) -> Result<Vec<AccountSummary>, DomainError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<AccountRow> = ousr::table
            .order(ousr::user_id.asc())
            .select(AccountRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(AccountSummary::from).collect())
    }

    async fn list_groups(&self) -> Result<Vec<UserGroup>, DomainError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<UserGroupRow> = ougr::table
            .order(ougr::group_id.asc())
            .select(UserGroupRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(UserGroup::from).collect())
    }

    async fn list_usuarios(&self) -> Result<Vec<Usuario>, DomainError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<UsuarioRow> = usuarios::table
            .order(usuarios::id.asc())
            .select(UsuarioRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Usuario::from).collect())
    }
}
