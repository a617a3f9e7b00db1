//! OpenAPI document assembled from handler annotations.

use utoipa::OpenApi;

use crate::domain::{
    AccountSummary, ErrorCode, ExchangeRate, MenuItem, MenuTree, PermissionGrant, UserGroup,
    Usuario,
};
use crate::inbound::http::menus::IndexResponse;
use crate::inbound::http::ApiError;

/// Aggregated API documentation for the menu backend.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "menu-backend",
        description = "Read-only API over the legacy menu, directory and exchange-rate tables."
    ),
    paths(
        crate::inbound::http::menus::index,
        crate::inbound::http::menus::toolbar,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::list_groups,
        crate::inbound::http::users::list_usuarios,
        crate::inbound::http::users::user_permissions,
        crate::inbound::http::rates::rates_on,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        MenuItem,
        MenuTree,
        IndexResponse,
        AccountSummary,
        UserGroup,
        Usuario,
        PermissionGrant,
        ExchangeRate,
        ApiError,
        ErrorCode,
    )),
    tags(
        (name = "menus", description = "Legacy menu and toolbar listings"),
        (name = "directory", description = "Accounts, groups and permissions"),
        (name = "rates", description = "Exchange rates"),
        (name = "health", description = "Probes")
    )
)]
pub struct ApiDoc;
