//! In-memory opening storage with the same soft-delete semantics as the
//! Postgres repository. Used by tests and handy for running without a database.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::database::opening_repository::OpeningRepository;
use crate::error::Result;
use crate::models::opening::{NewOpening, Opening};

#[derive(Default)]
struct Store {
    next_id: i64,
    rows: BTreeMap<i64, Opening>,
}

#[derive(Default)]
pub struct InMemoryOpeningRepository {
    store: RwLock<Store>,
}

impl InMemoryOpeningRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows held, soft-deleted ones included.
    pub async fn row_count(&self) -> usize {
        self.store.read().await.rows.len()
    }
}

#[async_trait]
impl OpeningRepository for InMemoryOpeningRepository {
    async fn create(&self, opening: NewOpening) -> Result<Opening> {
        let mut store = self.store.write().await;
        store.next_id += 1;
        let now = Utc::now();
        let row = Opening {
            id: store.next_id,
            role: opening.role,
            company: opening.company,
            location: opening.location,
            remote: opening.remote,
            link: opening.link,
            salary: opening.salary,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        store.rows.insert(row.id, row.clone());
        Ok(row)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Opening>> {
        let store = self.store.read().await;
        Ok(store
            .rows
            .get(&id)
            .filter(|row| row.deleted_at.is_none())
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<Opening>> {
        let store = self.store.read().await;
        Ok(store
            .rows
            .values()
            .filter(|row| row.deleted_at.is_none())
            .cloned()
            .collect())
    }

    async fn save(&self, opening: &Opening) -> Result<Option<Opening>> {
        let mut store = self.store.write().await;
        let Some(row) = store
            .rows
            .get_mut(&opening.id)
            .filter(|row| row.deleted_at.is_none())
        else {
            return Ok(None);
        };

        row.role = opening.role.clone();
        row.company = opening.company.clone();
        row.location = opening.location.clone();
        row.remote = opening.remote;
        row.link = opening.link.clone();
        row.salary = opening.salary;
        row.updated_at = Utc::now();
        Ok(Some(row.clone()))
    }

    async fn soft_delete(&self, opening: &Opening) -> Result<Option<Opening>> {
        let mut store = self.store.write().await;
        let Some(row) = store
            .rows
            .get_mut(&opening.id)
            .filter(|row| row.deleted_at.is_none())
        else {
            return Ok(None);
        };

        row.deleted_at = Some(Utc::now());
        Ok(Some(row.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_opening(role: &str) -> NewOpening {
        NewOpening {
            role: role.to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            remote: true,
            link: "http://x".to_string(),
            salary: 1000.0,
        }
    }

    #[tokio::test]
    async fn assigns_sequential_ids_and_timestamps() {
        let repo = InMemoryOpeningRepository::new();
        let first = repo.create(new_opening("a")).await.unwrap();
        let second = repo.create(new_opening("b")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.created_at, first.updated_at);
        assert!(first.deleted_at.is_none());
    }

    #[tokio::test]
    async fn soft_deleted_rows_are_hidden_but_kept() {
        let repo = InMemoryOpeningRepository::new();
        let kept = repo.create(new_opening("kept")).await.unwrap();
        let gone = repo.create(new_opening("gone")).await.unwrap();

        let deleted = repo.soft_delete(&gone).await.unwrap().unwrap();
        assert!(deleted.deleted_at.is_some());

        assert!(repo.find_by_id(gone.id).await.unwrap().is_none());
        let all = repo.find_all().await.unwrap();
        assert_eq!(all, vec![kept]);
        assert_eq!(repo.row_count().await, 2);

        assert!(repo.soft_delete(&gone).await.unwrap().is_none());
        assert!(repo.save(&gone).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_overwrites_business_fields() {
        let repo = InMemoryOpeningRepository::new();
        let mut row = repo.create(new_opening("a")).await.unwrap();
        row.company = "NewCo".to_string();
        row.salary = 42.0;

        let saved = repo.save(&row).await.unwrap().unwrap();
        assert_eq!(saved.company, "NewCo");
        assert_eq!(saved.salary, 42.0);
        assert_eq!(saved.created_at, row.created_at);
        assert_eq!(repo.find_by_id(row.id).await.unwrap(), Some(saved));
    }
}
