//! PostgreSQL-backed `MenuQuery` implementation using Diesel.
//!
//! The listing is the legacy "find with required include": every `Menu` row
//! inner-joined with its `SubMenu` rows, no filtering of any kind. Menus
//! without sub-menus never leave the database. The join result arrives as
//! flat pairs and is grouped in memory preserving arrival order, so repeated
//! reads of unchanged data produce identical payloads.

use std::collections::HashMap;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::MenuQuery;
use crate::domain::{DomainError, MenuItem, MenuTree};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{BotoneraMenuRow, MenuRow, SubMenuRow};
use super::pool::DbPool;
use super::schema::{botonera_menu, menu, sub_menu};

/// Diesel-backed implementation of the menu query port.
#[derive(Clone)]
pub struct DieselMenuQuery {
    pool: DbPool,
}

impl DieselMenuQuery {
    /// Create a new adapter with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Group flat (menu, sub-menu) join pairs into nested trees.
///
/// Order is stable: menus appear in first-seen order and keep their
/// sub-menus in arrival order. Every produced tree has at least one
/// sub-menu because only join matches reach this function.
fn group_rows(rows: Vec<(MenuRow, SubMenuRow)>) -> Vec<MenuTree> {
    let mut slot_by_menu_id: HashMap<i32, usize> = HashMap::new();
    let mut trees: Vec<MenuTree> = Vec::new();

    for (menu_row, sub_row) in rows {
        let slot = match slot_by_menu_id.get(&menu_row.id) {
            Some(slot) => *slot,
            None => {
                slot_by_menu_id.insert(menu_row.id, trees.len());
                trees.push(MenuTree {
                    menu: menu_row.into(),
                    sub_menus: Vec::new(),
                });
                trees.len() - 1
            }
        };
        if let Some(tree) = trees.get_mut(slot) {
            tree.sub_menus.push(sub_row.into());
        }
    }

    trees
}

#[async_trait]
impl MenuQuery for DieselMenuQuery {
    async fn menu_tree(&self) -> Result<Vec<MenuTree>, DomainError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<(MenuRow, SubMenuRow)> = menu::table
            .inner_join(sub_menu::table)
            .order((menu::id.asc(), sub_menu::id.asc()))
            .select((MenuRow::as_select(), SubMenuRow::as_select()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(group_rows(rows))
    }

    async fn toolbar(&self) -> Result<Vec<MenuItem>, DomainError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<BotoneraMenuRow> = botonera_menu::table
            .order(botonera_menu::id.asc())
            .select(BotoneraMenuRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(MenuItem::from).collect())
    }
}

#[cfg(test)]
mod tests {
    //! Grouping coverage for the required-join listing.

    use super::*;
    use rstest::rstest;

    fn menu_row(id: i32, op_menu: &str) -> MenuRow {
        MenuRow {
            id,
            obj_type: Some("1".into()),
            id_menu: 0,
            op_menu: op_menu.into(),
            pos: id,
            imagen: None,
            url: None,
            idioma: "ES".into(),
            activo: Some(true),
        }
    }

    fn sub_row(id: i32, id_menu: i32, op_menu: &str) -> SubMenuRow {
        SubMenuRow {
            id,
            obj_type: Some("2".into()),
            id_menu,
            op_menu: op_menu.into(),
            pos: id,
            imagen: None,
            url: None,
            idioma: "ES".into(),
            activo: Some(true),
        }
    }

    #[test]
    fn groups_menu_with_its_two_children() {
        let rows = vec![
            (menu_row(1, "Home"), sub_row(10, 1, "Profile")),
            (menu_row(1, "Home"), sub_row(11, 1, "Settings")),
        ];

        let trees = group_rows(rows);

        assert_eq!(trees.len(), 1);
        assert_eq!(trees[0].menu.id, 1);
        let child_ids: Vec<i32> = trees[0].sub_menus.iter().map(|s| s.id).collect();
        assert_eq!(child_ids, vec![10, 11]);
    }

    #[test]
    fn empty_join_result_produces_no_trees() {
        // A menu without sub-menus yields no join pairs at all.
        assert!(group_rows(Vec::new()).is_empty());
    }

    #[test]
    fn interleaved_pairs_keep_first_seen_menu_order() {
        let rows = vec![
            (menu_row(2, "Reports"), sub_row(20, 2, "Daily")),
            (menu_row(1, "Home"), sub_row(10, 1, "Profile")),
            (menu_row(2, "Reports"), sub_row(21, 2, "Monthly")),
        ];

        let trees = group_rows(rows);

        let menu_ids: Vec<i32> = trees.iter().map(|t| t.menu.id).collect();
        assert_eq!(menu_ids, vec![2, 1]);
        assert_eq!(trees[0].sub_menus.len(), 2);
        assert_eq!(trees[1].sub_menus.len(), 1);
    }

    #[rstest]
    #[case(vec![(menu_row(1, "Home"), sub_row(10, 1, "Profile"))])]
    #[case(vec![
        (menu_row(1, "Home"), sub_row(10, 1, "Profile")),
        (menu_row(3, "Admin"), sub_row(30, 3, "Users")),
    ])]
    fn grouping_is_deterministic(#[case] rows: Vec<(MenuRow, SubMenuRow)>) {
        let first = group_rows(rows.clone());
        let second = group_rows(rows);
        assert_eq!(first, second);
    }
}
