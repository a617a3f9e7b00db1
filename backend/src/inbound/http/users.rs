//! Directory and permission handlers.
//!
//! Account listings expose only the profile subset of the legacy user
//! table; credential and audit columns are never selected, so they cannot
//! leak here.

use actix_web::{get, web};

use crate::domain::ports::{DirectoryQuery, PermissionQuery};
use crate::domain::{AccountSummary, PermissionGrant, UserGroup, Usuario};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiError, ApiResult};

/// List account profile summaries.
#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "Account summaries", body = [AccountSummary]),
        (status = 500, description = "Internal server error", body = ApiError),
        (status = 503, description = "Database unavailable", body = ApiError)
    ),
    tags = ["directory"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<AccountSummary>>> {
    let accounts = state.directory.list_accounts().await?;
    Ok(web::Json(accounts))
}

/// List user groups.
#[utoipa::path(
    get,
    path = "/api/v1/groups",
    responses(
        (status = 200, description = "User groups", body = [UserGroup]),
        (status = 500, description = "Internal server error", body = ApiError),
        (status = 503, description = "Database unavailable", body = ApiError)
    ),
    tags = ["directory"],
    operation_id = "listGroups"
)]
#[get("/groups")]
pub async fn list_groups(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserGroup>>> {
    let groups = state.directory.list_groups().await?;
    Ok(web::Json(groups))
}

/// List rows from the secondary usuarios table.
#[utoipa::path(
    get,
    path = "/api/v1/usuarios",
    responses(
        (status = 200, description = "Usuario records", body = [Usuario]),
        (status = 500, description = "Internal server error", body = ApiError),
        (status = 503, description = "Database unavailable", body = ApiError)
    ),
    tags = ["directory"],
    operation_id = "listUsuarios"
)]
#[get("/usuarios")]
pub async fn list_usuarios(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Usuario>>> {
    let usuarios = state.directory.list_usuarios().await?;
    Ok(web::Json(usuarios))
}

/// List permission grants for one user.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}/permissions",
    params(
        ("id" = i32, Path, description = "Internal user identifier")
    ),
    responses(
        (status = 200, description = "Permission grants for the user", body = [PermissionGrant]),
        (status = 500, description = "Internal server error", body = ApiError),
        (status = 503, description = "Database unavailable", body = ApiError)
    ),
    tags = ["directory"],
    operation_id = "listUserPermissions"
)]
#[get("/users/{id}/permissions")]
pub async fn user_permissions(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<Vec<PermissionGrant>>> {
    let user_id = path.into_inner();
    let grants = state.permissions.grants_for_user(user_id).await?;
    Ok(web::Json(grants))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test as actix_test, App};
    use serde_json::Value;

    async fn get_json(uri: &str) -> Value {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(HttpState::fixtures()))
                .service(
                    web::scope("/api/v1")
                        .service(list_users)
                        .service(list_groups)
                        .service(list_usuarios)
                        .service(user_permissions),
                ),
        )
        .await;
        let response =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request())
                .await;
        assert!(response.status().is_success(), "GET {uri} failed");
        let bytes = actix_test::read_body(response).await;
        serde_json::from_slice(&bytes).expect("response JSON")
    }

    #[actix_web::test]
    async fn users_listing_uses_camel_case_profile_fields() {
        let value = get_json("/api/v1/users").await;
        let accounts = value.as_array().expect("array");
        assert!(!accounts.is_empty());
        let first = accounts[0].as_object().expect("object");
        assert!(first.contains_key("userId"));
        assert!(first.contains_key("userCode"));
        assert!(!first.contains_key("password"));
        assert!(!first.contains_key("PASSWORD"));
    }

    #[actix_web::test]
    async fn groups_listing_returns_fixture_groups() {
        let value = get_json("/api/v1/groups").await;
        let groups = value.as_array().expect("array");
        assert!(!groups.is_empty());
        assert!(groups[0].get("id").is_some());
        assert!(groups[0].get("name").is_some());
    }

    #[actix_web::test]
    async fn usuarios_listing_returns_fixture_rows() {
        let value = get_json("/api/v1/usuarios").await;
        assert!(!value.as_array().expect("array").is_empty());
    }

    #[actix_web::test]
    async fn permissions_echo_the_requested_user_id() {
        let value = get_json("/api/v1/users/7/permissions").await;
        let grants = value.as_array().expect("array");
        assert!(!grants.is_empty());
        for grant in grants {
            assert_eq!(grant.get("userId").and_then(Value::as_i64), Some(7));
        }
    }

    #[actix_web::test]
    async fn permissions_reject_non_numeric_user_id() {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(HttpState::fixtures()))
                .service(web::scope("/api/v1").service(user_permissions)),
        )
        .await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/users/not-a-number/permissions")
                .to_request(),
        )
        .await;
        assert!(response.status().is_client_error());
    }
}
