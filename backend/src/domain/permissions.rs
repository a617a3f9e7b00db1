//! Permission grant records backed by the `Auth` table.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An `Auth` row: the grant of permission `perm_id` to `user_id` on object
/// `object_id`/`obj_type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct PermissionGrant {
    /// Granted object id (`Auth.Id`).
    pub object_id: i32,
    /// Legacy object-type tag (default '3').
    pub obj_type: Option<String>,
    /// Grantee user (`UserId`, composite key part).
    #[schema(example = 7)]
    pub user_id: i32,
    /// Permission identifier (`PermId`, composite key part).
    #[schema(example = "MENU_EDIT")]
    pub perm_id: String,
    /// Single-character permission flag, 'N' when absent.
    #[schema(example = "Y")]
    pub permission: String,
    /// Active flag.
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn grant_serialises_camel_case() {
        let grant = PermissionGrant {
            object_id: 12,
            obj_type: Some("3".into()),
            user_id: 7,
            perm_id: "MENU_EDIT".into(),
            permission: "Y".into(),
            active: true,
        };
        let value = serde_json::to_value(grant).expect("serialise");
        assert_eq!(value.get("permId"), Some(&json!("MENU_EDIT")));
        assert_eq!(value.get("objectId"), Some(&json!(12)));
        assert_eq!(value.get("active"), Some(&json!(true)));
    }
}
