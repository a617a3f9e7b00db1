//! Driving port for permission-grant lookups against the `Auth` table.

use async_trait::async_trait;

use crate::domain::{DomainError, PermissionGrant};

/// Domain use-case port for listing a user's permission grants.
#[async_trait]
pub trait PermissionQuery: Send + Sync {
    /// Return every `Auth` grant for the given user, active or not.
    async fn grants_for_user(&self, user_id: i32) -> Result<Vec<PermissionGrant>, DomainError>;
}

/// Deterministic permission fixture used until persistence is wired.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePermissionQuery;

#[async_trait]
impl PermissionQuery for FixturePermissionQuery {
    async fn grants_for_user(&self, user_id: i32) -> Result<Vec<PermissionGrant>, DomainError> {
        Ok(vec![PermissionGrant {
            object_id: 1,
            obj_type: Some("3".into()),
            user_id,
            perm_id: "MENU_VIEW".into(),
            permission: "Y".into(),
            active: true,
        }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn fixture_grant_echoes_requested_user() {
        let grants = FixturePermissionQuery
            .grants_for_user(42)
            .await
            .expect("grants");
        assert_eq!(grants.len(), 1);
        assert_eq!(grants[0].user_id, 42);
        assert_eq!(grants[0].perm_id, "MENU_VIEW");
    }
}
