//! Menu domain records.
//!
//! The legacy schema stores three structurally identical menu tables
//! (`Menu`, `SubMenu`, `BotoneraMenu`) that differ only in their `ObjType`
//! default and owning relation, so a single typed record covers all three.
//! Serialisation deliberately keeps the legacy field names (`Id`, `OpMenu`,
//! `SubMenus`, ...) because the existing front end binds to them.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A row from one of the menu tables.
///
/// `id_menu` points at the owning `Menu.Id` for sub-menu rows and holds the
/// parent-menu reference (default 0) for top-level rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct MenuItem {
    /// Primary key in the owning table.
    #[schema(example = 1)]
    pub id: i32,
    /// Legacy object-type tag ('1' menu, '2' sub-menu, '4' toolbar).
    pub obj_type: Option<String>,
    /// Owning/parent menu reference.
    #[schema(example = 0)]
    pub id_menu: i32,
    /// Operation/label code shown to the user.
    #[schema(example = "Home")]
    pub op_menu: String,
    /// Ordering rank within the menu.
    pub pos: i32,
    /// Icon reference.
    pub imagen: Option<String>,
    /// Target link.
    pub url: Option<String>,
    /// Language code.
    #[schema(example = "ES")]
    pub idioma: String,
    /// Active flag (legacy BIT column).
    pub activo: Option<bool>,
}

/// A `Menu` row together with its nested `SubMenu` rows.
///
/// Only produced for menus with at least one sub-menu: the listing query is
/// a required (inner) join, so `sub_menus` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MenuTree {
    /// The owning `Menu` row, flattened into the payload.
    #[serde(flatten)]
    pub menu: MenuItem,
    /// Child rows whose `IdMenu` matches `menu.id`.
    #[serde(rename = "SubMenus")]
    pub sub_menus: Vec<MenuItem>,
}
