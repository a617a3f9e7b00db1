//! User directory records: accounts (OUSR), groups (OUGR) and the loose
//! `Usuarios` table.
//!
//! `AccountSummary` is deliberately a profile subset of the wide OUSR row:
//! credential and audit columns (PASSWORD, LastPwds, lockout timestamps, the
//! UserPrefs blob) stay inside the persistence layer and are never
//! serialised.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Profile view of an OUSR account row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct AccountSummary {
    /// Primary key (`USERID`).
    #[schema(example = 7)]
    pub user_id: i32,
    /// Login code (`USER_CODE`).
    #[schema(example = "jdoe")]
    pub user_code: String,
    /// Display name (`U_NAME`).
    pub name: Option<String>,
    /// Contact e-mail (`E_Mail`).
    pub email: Option<String>,
    /// Group reference (`GROUPS`).
    pub groups: Option<i32>,
    /// Department reference.
    pub department: Option<i32>,
    /// Language reference.
    pub language: Option<i32>,
    /// Whether the account has the superuser flag set.
    pub superuser: bool,
    /// Whether the account is locked.
    pub locked: bool,
    /// Last successful login, when recorded.
    pub last_login: Option<DateTime<Utc>>,
}

/// An OUGR user-group row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct UserGroup {
    /// Primary key (`GroupId`).
    pub id: i32,
    /// Group name.
    pub name: String,
    /// Free-form description (`GroupDec`).
    pub description: Option<String>,
    /// Template reference (`TPLId`).
    pub template_id: Option<i32>,
    /// Active flag.
    pub active: Option<bool>,
}

/// A row from the loose `Usuarios` table. The legacy table declares no
/// primary key and no relation to OUSR, so every field is optional except
/// none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Usuario {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub dni: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn account_summary_serialises_camel_case() {
        let account = AccountSummary {
            user_id: 7,
            user_code: "jdoe".into(),
            name: Some("J. Doe".into()),
            email: None,
            groups: Some(0),
            department: Some(-2),
            language: None,
            superuser: false,
            locked: true,
            last_login: None,
        };
        let value = serde_json::to_value(account).expect("serialise");
        assert_eq!(value.get("userId"), Some(&json!(7)));
        assert_eq!(value.get("userCode"), Some(&json!("jdoe")));
        assert_eq!(value.get("locked"), Some(&json!(true)));
        assert!(value.get("password").is_none());
        assert!(value.get("PASSWORD").is_none());
    }

    #[test]
    fn user_group_serialises_camel_case() {
        let group = UserGroup {
            id: 3,
            name: "Accounting".into(),
            description: None,
            template_id: Some(1),
            active: Some(true),
        };
        let value = serde_json::to_value(group).expect("serialise");
        assert_eq!(value.get("templateId"), Some(&json!(1)));
        assert_eq!(value.get("name"), Some(&json!("Accounting")));
    }
}
