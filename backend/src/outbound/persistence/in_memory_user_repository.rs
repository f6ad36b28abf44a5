//! Process-local `UserRepository` used when no database is configured.
//!
//! Rows live in a `BTreeMap` keyed by id so listing and name lookups follow
//! ascending id order, matching the SQL adapter. Identifiers come from a
//! monotonically increasing counter and are never reused.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{NewUser, User, UserId};

#[derive(Debug, Default)]
struct State {
    rows: BTreeMap<UserId, User>,
    last_id: i32,
}

/// In-memory implementation of the [`UserRepository`] port.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    state: Mutex<State>,
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, State>, UserPersistenceError> {
        self.state
            .lock()
            .map_err(|_| UserPersistenceError::query("user store lock poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, new_user: &NewUser) -> Result<User, UserPersistenceError> {
        let mut state = self.lock()?;
        let next = state
            .last_id
            .checked_add(1)
            .ok_or_else(|| UserPersistenceError::query("user id sequence exhausted"))?;
        state.last_id = next;

        let user = new_user.clone().into_user(UserId::new(next));
        state.rows.insert(user.id(), user.clone());
        Ok(user)
    }

    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        Ok(self.lock()?.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        Ok(self.lock()?.rows.get(&id).cloned())
    }

    async fn find_first_by_nombre(
        &self,
        nombre: &str,
    ) -> Result<Option<User>, UserPersistenceError> {
        Ok(self
            .lock()?
            .rows
            .values()
            .find(|user| user.nombre() == nombre)
            .cloned())
    }

    async fn update(&self, user: &User) -> Result<Option<User>, UserPersistenceError> {
        let mut state = self.lock()?;
        match state.rows.get_mut(&user.id()) {
            Some(slot) => {
                *slot = user.clone();
                Ok(Some(user.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError> {
        Ok(self.lock()?.rows.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewUserDraft, validate_new_user};
    use rstest::{fixture, rstest};
    use serde_json::json;

    fn new_user(user: &str, nombre: &str, edad: i32) -> NewUser {
        validate_new_user(NewUserDraft {
            user: Some(json!(user)),
            nombre: Some(json!(nombre)),
            edad: Some(json!(edad)),
        })
        .expect("valid payload")
    }

    #[fixture]
    fn repo() -> InMemoryUserRepository {
        InMemoryUserRepository::new()
    }

    #[rstest]
    #[tokio::test]
    async fn insert_assigns_increasing_ids(repo: InMemoryUserRepository) {
        let first = repo.insert(&new_user("u1", "Ana", 25)).await.expect("insert");
        let second = repo.insert(&new_user("u2", "Luis", 40)).await.expect("insert");

        assert_eq!(first.id(), UserId::new(1));
        assert_eq!(second.id(), UserId::new(2));
        assert_eq!(repo.list().await.expect("list"), vec![first, second]);
    }

    #[rstest]
    #[tokio::test]
    async fn ids_are_not_reused_after_delete(repo: InMemoryUserRepository) {
        let first = repo.insert(&new_user("u1", "Ana", 25)).await.expect("insert");
        assert!(repo.delete(first.id()).await.expect("delete"));

        let second = repo.insert(&new_user("u2", "Luis", 40)).await.expect("insert");

        assert_eq!(second.id(), UserId::new(2));
    }

    #[rstest]
    #[tokio::test]
    async fn name_lookup_returns_lowest_id_match(repo: InMemoryUserRepository) {
        repo.insert(&new_user("u1", "Luis", 30)).await.expect("insert");
        let ana = repo.insert(&new_user("u2", "Ana", 25)).await.expect("insert");
        repo.insert(&new_user("u3", "Ana", 50)).await.expect("insert");

        let found = repo.find_first_by_nombre("Ana").await.expect("lookup");

        assert_eq!(found, Some(ana));
        assert!(
            repo.find_first_by_nombre("ana")
                .await
                .expect("lookup")
                .is_none()
        );
    }

    #[rstest]
    #[tokio::test]
    async fn update_of_missing_row_returns_none(repo: InMemoryUserRepository) {
        let ghost = User::new(UserId::new(9), "u9", "Nadie", 1);

        assert!(repo.update(&ghost).await.expect("update").is_none());
        assert!(repo.list().await.expect("list").is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn update_overwrites_existing_row(repo: InMemoryUserRepository) {
        let ana = repo.insert(&new_user("u1", "Ana", 25)).await.expect("insert");
        let updated_row = User::new(ana.id(), "u1", "Ana", 31);

        let updated = repo.update(&updated_row).await.expect("update");

        assert_eq!(updated, Some(updated_row.clone()));
        assert_eq!(repo.find_by_id(ana.id()).await.expect("find"), Some(updated_row));
    }

    #[rstest]
    #[tokio::test]
    async fn delete_reports_whether_a_row_was_removed(repo: InMemoryUserRepository) {
        let ana = repo.insert(&new_user("u1", "Ana", 25)).await.expect("insert");

        assert!(repo.delete(ana.id()).await.expect("delete"));
        assert!(!repo.delete(ana.id()).await.expect("delete"));
        assert!(repo.find_by_id(ana.id()).await.expect("find").is_none());
    }
}
