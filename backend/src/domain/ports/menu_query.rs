//! Driving port for the menu listing.
//!
//! Inbound adapters (HTTP handlers) use this port to fetch the nested menu
//! structure without importing outbound persistence concerns. Production
//! backs it with the Diesel adapter; tests and DB-less runs use the
//! deterministic fixture.

use async_trait::async_trait;

use crate::domain::{DomainError, MenuItem, MenuTree};

/// Domain use-case port for reading menu structures.
#[async_trait]
pub trait MenuQuery: Send + Sync {
    /// Return every `Menu` row joined with its required `SubMenu` rows.
    ///
    /// This is a literal, unfiltered eager load: no language, active-flag or
    /// permission filtering, and menus without sub-menus are excluded by the
    /// required-join semantics.
    async fn menu_tree(&self) -> Result<Vec<MenuTree>, DomainError>;

    /// Return every `BotoneraMenu` (toolbar button) row.
    async fn toolbar(&self) -> Result<Vec<MenuItem>, DomainError>;
}

fn fixture_item(id: i32, obj_type: &str, id_menu: i32, op_menu: &str, pos: i32) -> MenuItem {
    MenuItem {
        id,
        obj_type: Some(obj_type.into()),
        id_menu,
        op_menu: op_menu.into(),
        pos,
        imagen: None,
        url: None,
        idioma: "ES".into(),
        activo: Some(true),
    }
}

/// Deterministic menu fixture used until persistence is wired.
///
/// Mirrors the canonical worked example: menu 1 ("Home") owning sub-menus
/// 10 ("Profile") and 11 ("Settings").
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureMenuQuery;

#[async_trait]
impl MenuQuery for FixtureMenuQuery {
    async fn menu_tree(&self) -> Result<Vec<MenuTree>, DomainError> {
        Ok(vec![MenuTree {
            menu: fixture_item(1, "1", 0, "Home", 1),
            sub_menus: vec![
                fixture_item(10, "2", 1, "Profile", 1),
                fixture_item(11, "2", 1, "Settings", 2),
            ],
        }])
    }

    async fn toolbar(&self) -> Result<Vec<MenuItem>, DomainError> {
        Ok(vec![fixture_item(100, "4", 1, "Refresh", 1)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn fixture_returns_home_menu_with_two_children() {
        let trees = FixtureMenuQuery.menu_tree().await.expect("menu tree");
        assert_eq!(trees.len(), 1);
        let home = &trees[0];
        assert_eq!(home.menu.id, 1);
        assert_eq!(home.menu.op_menu, "Home");
        let child_ids: Vec<i32> = home.sub_menus.iter().map(|item| item.id).collect();
        assert_eq!(child_ids, vec![10, 11]);
        assert!(home.sub_menus.iter().all(|item| item.id_menu == 1));
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_reads_are_idempotent() {
        let query = FixtureMenuQuery;
        let first = query.menu_tree().await.expect("first read");
        let second = query.menu_tree().await.expect("second read");
        assert_eq!(first, second);
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_toolbar_uses_toolbar_obj_type() {
        let toolbar = FixtureMenuQuery.toolbar().await.expect("toolbar");
        assert!(toolbar.iter().all(|b| b.obj_type.as_deref() == Some("4")));
    }
}
