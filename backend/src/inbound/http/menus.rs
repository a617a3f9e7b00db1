//! Menu API handlers.
//!
//! `GET /` is the legacy home listing: every menu with its required
//! sub-menus, unfiltered, under a `menu` key with the legacy field names
//! the existing front end binds to. `GET /api/v1/toolbar` exposes the
//! toolbar button rows.

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::MenuQuery;
use crate::domain::{MenuItem, MenuTree};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiError, ApiResult};

/// Response body for `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IndexResponse {
    /// Menus with their nested sub-menus.
    pub menu: Vec<MenuTree>,
}

/// List every menu with its required sub-menus.
///
/// A literal, unfiltered eager load: no language, active-flag or
/// permission filtering, and menus without sub-menus are excluded.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Nested menu listing", body = IndexResponse),
        (status = 500, description = "Internal server error", body = ApiError),
        (status = 503, description = "Database unavailable", body = ApiError)
    ),
    tags = ["menus"],
    operation_id = "index"
)]
#[get("/")]
pub async fn index(state: web::Data<HttpState>) -> ApiResult<web::Json<IndexResponse>> {
    let menu = state.menus.menu_tree().await?;
    Ok(web::Json(IndexResponse { menu }))
}

/// List toolbar (BotoneraMenu) buttons.
#[utoipa::path(
    get,
    path = "/api/v1/toolbar",
    responses(
        (status = 200, description = "Toolbar buttons", body = [MenuItem]),
        (status = 500, description = "Internal server error", body = ApiError),
        (status = 503, description = "Database unavailable", body = ApiError)
    ),
    tags = ["menus"],
    operation_id = "listToolbar"
)]
#[get("/toolbar")]
pub async fn toolbar(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<MenuItem>>> {
    let buttons = state.menus.toolbar().await?;
    Ok(web::Json(buttons))
}
