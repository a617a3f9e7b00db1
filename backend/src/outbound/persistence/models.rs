//! Diesel queryable rows and their conversions into domain records.
//!
//! Legacy Y/N `CHAR(1)` flags are decoded to booleans here so the domain
//! never sees the char encoding. The OUSR row deliberately selects only the
//! profile subset; credential and audit columns exist in the schema but are
//! never read.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::{
    AccountSummary, ExchangeRate, MenuItem, PermissionGrant, UserGroup, Usuario,
};

use super::schema::{auth, botonera_menu, exch_rate, menu, ougr, ousr, sub_menu, usuarios};

/// Decode a legacy Y/N char flag. Anything but 'Y'/'y' (including NULL and
/// padded blanks) reads as false.
pub(crate) fn yn_flag(value: Option<&str>) -> bool {
    matches!(value, Some(v) if v.trim().eq_ignore_ascii_case("y"))
}

/// Queryable row for `Menu`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = menu)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct MenuRow {
    pub id: i32,
    pub obj_type: Option<String>,
    pub id_menu: i32,
    pub op_menu: String,
    pub pos: i32,
    pub imagen: Option<String>,
    pub url: Option<String>,
    pub idioma: String,
    pub activo: Option<bool>,
}

/// Queryable row for `SubMenu`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = sub_menu)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct SubMenuRow {
    pub id: i32,
    pub obj_type: Option<String>,
    pub id_menu: i32,
    pub op_menu: String,
    pub pos: i32,
    pub imagen: Option<String>,
    pub url: Option<String>,
    pub idioma: String,
    pub activo: Option<bool>,
}

/// Queryable row for `BotoneraMenu`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = botonera_menu)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct BotoneraMenuRow {
    pub id: i32,
    pub obj_type: Option<String>,
    pub id_menu: i32,
    pub op_menu: String,
    pub pos: i32,
    pub imagen: Option<String>,
    pub url: Option<String>,
    pub idioma: String,
    pub activo: Option<bool>,
}

macro_rules! menu_row_into_item {
    ($row_ty:ty) => {
        impl From<$row_ty> for MenuItem {
            fn from(row: $row_ty) -> Self {
                Self {
                    id: row.id,
                    obj_type: row.obj_type,
                    id_menu: row.id_menu,
                    op_menu: row.op_menu,
                    pos: row.pos,
                    imagen: row.imagen,
                    url: row.url,
                    idioma: row.idioma,
                    activo: row.activo,
                }
            }
        }
    };
}

menu_row_into_item!(MenuRow);
menu_row_into_item!(SubMenuRow);
menu_row_into_item!(BotoneraMenuRow);

/// Queryable row for `Auth`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = auth)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AuthRow {
    pub object_id: i32,
    pub obj_type: Option<String>,
    pub user_id: i32,
    pub perm_id: String,
    pub permission: Option<String>,
    pub activo: bool,
}

impl From<AuthRow> for PermissionGrant {
    fn from(row: AuthRow) -> Self {
        Self {
            object_id: row.object_id,
            obj_type: row.obj_type,
            user_id: row.user_id,
            perm_id: row.perm_id,
            // NULL reads as the column default.
            permission: row
                .permission
                .map(|p| p.trim().to_owned())
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| "N".to_owned()),
            active: row.activo,
        }
    }
}

/// Queryable row for `OUGR`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = ougr)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserGroupRow {
    pub group_id: i32,
    pub group_name: String,
    pub group_dec: Option<String>,
    pub tpl_id: Option<i32>,
    pub activo: Option<bool>,
}

impl From<UserGroupRow> for UserGroup {
    fn from(row: UserGroupRow) -> Self {
        Self {
            id: row.group_id,
            name: row.group_name,
            description: row.group_dec,
            template_id: row.tpl_id,
            active: row.activo,
        }
    }
}

/// Profile subset of an `OUSR` row.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = ousr)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AccountRow {
    pub user_id: i32,
    pub user_code: String,
    pub u_name: Option<String>,
    pub e_mail: Option<String>,
    pub groups: Option<i32>,
    pub department: Option<i32>,
    pub language: Option<i32>,
    pub superuser: Option<String>,
    pub locked: Option<String>,
    pub last_login: Option<DateTime<Utc>>,
}

impl From<AccountRow> for AccountSummary {
    fn from(row: AccountRow) -> Self {
        Self {
            user_id: row.user_id,
            user_code: row.user_code,
            name: row.u_name,
            email: row.e_mail,
            groups: row.groups,
            department: row.department,
            language: row.language,
            superuser: yn_flag(row.superuser.as_deref()),
            locked: yn_flag(row.locked.as_deref()),
            last_login: row.last_login,
        }
    }
}

/// Queryable row for `Usuarios`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = usuarios)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UsuarioRow {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub dni: Option<String>,
}

impl From<UsuarioRow> for Usuario {
    fn from(row: UsuarioRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            last_name: row.last_name,
            dni: row.dni,
        }
    }
}

/// Queryable row for `ExCHRate`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = exch_rate)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ExchangeRateRow {
    pub rate_date: chrono::NaiveDate,
    pub currency: String,
    pub rate: Option<f64>,
    pub user_sign: Option<i32>,
}

impl From<ExchangeRateRow> for ExchangeRate {
    fn from(row: ExchangeRateRow) -> Self {
        Self {
            rate_date: row.rate_date,
            currency: row.currency,
            rate: row.rate,
            user_sign: row.user_sign,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some("Y"), true)]
    #[case(Some("y"), true)]
    #[case(Some("Y "), true)]
    #[case(Some("N"), false)]
    #[case(Some(" "), false)]
    #[case(None, false)]
    fn yn_flag_decodes_legacy_chars(#[case] raw: Option<&str>, #[case] expected: bool) {
        assert_eq!(yn_flag(raw), expected);
    }

    #[test]
    fn menu_row_converts_to_item() {
        let row = MenuRow {
            id: 1,
            obj_type: Some("1".into()),
            id_menu: 0,
            op_menu: "Home".into(),
            pos: 1,
            imagen: None,
            url: Some("/home".into()),
            idioma: "ES".into(),
            activo: Some(true),
        };
        let item = MenuItem::from(row);
        assert_eq!(item.id, 1);
        assert_eq!(item.op_menu, "Home");
        assert_eq!(item.id_menu, 0);
    }

    #[test]
    fn auth_row_defaults_null_permission_to_n() {
        let row = AuthRow {
            object_id: 1,
            obj_type: Some("3".into()),
            user_id: 7,
            perm_id: "MENU_VIEW".into(),
            permission: None,
            activo: true,
        };
        assert_eq!(PermissionGrant::from(row).permission, "N");
    }

    #[test]
    fn auth_row_trims_padded_permission() {
        let row = AuthRow {
            object_id: 1,
            obj_type: None,
            user_id: 7,
            perm_id: "MENU_VIEW".into(),
            permission: Some("Y ".into()),
            activo: false,
        };
        assert_eq!(PermissionGrant::from(row).permission, "Y");
    }

    #[test]
    fn account_row_decodes_flags() {
        let row = AccountRow {
            user_id: 7,
            user_code: "jdoe".into(),
            u_name: Some("J. Doe".into()),
            e_mail: None,
            groups: Some(0),
            department: Some(-2),
            language: None,
            superuser: Some("Y".into()),
            locked: Some("N".into()),
            last_login: None,
        };
        let summary = AccountSummary::from(row);
        assert!(summary.superuser);
        assert!(!summary.locked);
        assert_eq!(summary.user_code, "jdoe");
    }
}
