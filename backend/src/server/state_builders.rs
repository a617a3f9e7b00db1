//! Builders for the HTTP state ports, with fixture fallbacks.

use std::sync::Arc;

use actix_web::web;

use crate::inbound::http::HttpState;
use crate::outbound::persistence::{
    DbPool, DieselDirectoryQuery, DieselExchangeRateQuery, DieselMenuQuery, DieselPermissionQuery,
};

use super::ServerConfig;

fn diesel_state(pool: &DbPool) -> HttpState {
    HttpState {
        menus: Arc::new(DieselMenuQuery::new(pool.clone())),
        directory: Arc::new(DieselDirectoryQuery::new(pool.clone())),
        permissions: Arc::new(DieselPermissionQuery::new(pool.clone())),
        rates: Arc::new(DieselExchangeRateQuery::new(pool.clone())),
    }
}

/// Build the shared HTTP state: Diesel-backed ports when a pool is
/// configured, deterministic fixtures otherwise.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => diesel_state(pool),
        None => HttpState::fixtures(),
    };
    web::Data::new(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MenuQuery;

    #[actix_web::test]
    async fn pool_absent_serves_fixture_menus() {
        let config = ServerConfig::new("127.0.0.1:0".parse().expect("addr"));
        let state = build_http_state(&config);
        let trees = state.menus.menu_tree().await.expect("fixture menus");
        assert_eq!(trees.len(), 1);
        assert_eq!(trees[0].menu.op_menu, "Home");
    }
}
