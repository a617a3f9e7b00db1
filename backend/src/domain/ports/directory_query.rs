//! Driving port for the user directory (OUSR accounts, OUGR groups and the
//! loose `Usuarios` table).

use async_trait::async_trait;

use crate::domain::{AccountSummary, DomainError, UserGroup, Usuario};

/// Domain use-case port for directory reads.
#[async_trait]
pub trait DirectoryQuery: Send + Sync {
    /// List OUSR accounts as profile summaries.
    async fn list_accounts(&self) -> Result<Vec<AccountSummary>, DomainError>;

    /// List OUGR user groups.
    async fn list_groups(&self) -> Result<Vec<UserGroup>, DomainError>;

    /// List rows from the loose `Usuarios` table.
    async fn list_usuarios(&self) -> Result<Vec<Usuario>, DomainError>;
}

/// Deterministic directory fixture used until persistence is wired.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureDirectoryQuery;

#[async_trait]
impl DirectoryQuery for FixtureDirectoryQuery {
    async fn list_accounts(&self) -> Result<Vec<AccountSummary>, DomainError> {
        Ok(vec![AccountSummary {
            user_id: 1,
            user_code: "manager".into(),
            name: Some("Site Manager".into()),
            email: None,
            groups: Some(0),
            department: Some(-2),
            language: None,
            superuser: true,
            locked: false,
            last_login: None,
        }])
    }

    async fn list_groups(&self) -> Result<Vec<UserGroup>, DomainError> {
        Ok(vec![UserGroup {
            id: 1,
            name: "Administrators".into(),
            description: None,
            template_id: None,
            active: Some(true),
        }])
    }

    async fn list_usuarios(&self) -> Result<Vec<Usuario>, DomainError> {
        Ok(vec![Usuario {
            id: Some(1),
            name: Some("Ana".into()),
            last_name: Some("García".into()),
            dni: Some("00000001A".into()),
        }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn fixture_account_is_the_manager() {
        let accounts = FixtureDirectoryQuery.list_accounts().await.expect("accounts");
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].user_code, "manager");
        assert!(accounts[0].superuser);
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_groups_and_usuarios_are_non_empty() {
        let query = FixtureDirectoryQuery;
        assert!(!query.list_groups().await.expect("groups").is_empty());
        assert!(!query.list_usuarios().await.expect("usuarios").is_empty());
    }
}
