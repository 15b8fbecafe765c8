use std::sync::Arc;

use tracing::{error, info, warn};

use crate::database::opening_repository::OpeningRepository;
use crate::dto::opening_dto::{CreateOpeningPayload, UpdateOpeningPayload};
use crate::error::{Error, Result};
use crate::models::opening::Opening;

#[derive(Clone)]
pub struct OpeningService {
    repo: Arc<dyn OpeningRepository>,
}

impl OpeningService {
    pub fn new(repo: Arc<dyn OpeningRepository>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(skip_all)]
    pub async fn create(&self, payload: CreateOpeningPayload) -> Result<Opening> {
        let new_opening = payload.into_new_opening().map_err(rejected)?;

        let opening = self
            .repo
            .create(new_opening)
            .await
            .map_err(|e| storage_failure("error creating opening on database", e))?;

        info!(id = opening.id, "opening created");
        Ok(opening)
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_by_id(&self, id: i64) -> Result<Opening> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| storage_failure("error fetching opening", e))?
            .ok_or_else(|| not_found(id))
    }

    #[tracing::instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Opening>> {
        self.repo
            .find_all()
            .await
            .map_err(|e| storage_failure("error listing openings", e))
    }

    /// Merges the supplied fields into the stored opening. The read and the
    /// write are separate storage calls; concurrent updates of the same id
    /// are ordered by the database only.
    #[tracing::instrument(skip(self, payload))]
    pub async fn update(&self, id: i64, payload: UpdateOpeningPayload) -> Result<Opening> {
        payload.validate().map_err(rejected)?;

        let mut opening = self.get_by_id(id).await?;
        payload.apply_to(&mut opening);

        let opening = self
            .repo
            .save(&opening)
            .await
            .map_err(|e| storage_failure("error updating opening", e))?
            .ok_or_else(|| not_found(id))?;

        info!(id, "opening updated");
        Ok(opening)
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<Opening> {
        let opening = self.get_by_id(id).await?;

        let deleted = self
            .repo
            .soft_delete(&opening)
            .await
            .map_err(|e| {
                storage_failure(&format!("error deleting opening with id: {}", id), e)
            })?
            .ok_or_else(|| not_found(id))?;

        info!(id, "opening deleted");
        Ok(deleted)
    }
}

fn rejected(err: Error) -> Error {
    warn!("validation error: {}", err);
    err
}

fn storage_failure(message: &str, err: Error) -> Error {
    error!(error = ?err, "{}", message);
    Error::Internal(message.to_string())
}

fn not_found(id: i64) -> Error {
    Error::NotFound(format!("opening with id: {} not found", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::opening_repository::MockOpeningRepository;
    use chrono::Utc;

    fn stored(id: i64) -> Opening {
        let now = Utc::now();
        Opening {
            id,
            role: "Engineer".into(),
            company: "Acme".into(),
            location: "Remote".into(),
            remote: true,
            link: "http://x".into(),
            salary: 1000.0,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    fn valid_payload() -> CreateOpeningPayload {
        CreateOpeningPayload {
            role: Some("Engineer".into()),
            company: Some("Acme".into()),
            location: Some("Remote".into()),
            remote: Some(true),
            link: Some("http://x".into()),
            salary: Some(1000.0),
        }
    }

    fn service(repo: MockOpeningRepository) -> OpeningService {
        OpeningService::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn invalid_create_never_reaches_storage() {
        let mut repo = MockOpeningRepository::new();
        repo.expect_create().never();

        let mut payload = valid_payload();
        payload.salary = Some(0.0);
        let err = service(repo).create(payload).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn create_storage_failure_is_generic() {
        let mut repo = MockOpeningRepository::new();
        repo.expect_create()
            .once()
            .returning(|_| Err(Error::Database(sqlx::Error::PoolTimedOut)));

        let err = service(repo).create(valid_payload()).await.unwrap_err();
        match err {
            Error::Internal(msg) => assert_eq!(msg, "error creating opening on database"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn create_passes_validated_fields_to_storage() {
        let mut repo = MockOpeningRepository::new();
        repo.expect_create()
            .once()
            .withf(|new| new.role == "Engineer" && new.remote && new.salary == 1000.0)
            .returning(|_| Ok(stored(1)));

        let opening = service(repo).create(valid_payload()).await.unwrap();
        assert_eq!(opening.id, 1);
    }

    #[tokio::test]
    async fn get_missing_opening_is_not_found() {
        let mut repo = MockOpeningRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let err = service(repo).get_by_id(9).await.unwrap_err();
        match err {
            Error::NotFound(msg) => assert_eq!(msg, "opening with id: 9 not found"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn list_scan_failure_is_internal() {
        let mut repo = MockOpeningRepository::new();
        repo.expect_find_all()
            .returning(|| Err(Error::Database(sqlx::Error::PoolClosed)));

        let err = service(repo).list().await.unwrap_err();
        assert!(matches!(err, Error::Internal(_)));
    }

    #[tokio::test]
    async fn empty_update_is_rejected_before_lookup() {
        let mut repo = MockOpeningRepository::new();
        repo.expect_find_by_id().never();
        repo.expect_save().never();

        let err = service(repo)
            .update(1, UpdateOpeningPayload::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn update_saves_merged_record() {
        let mut repo = MockOpeningRepository::new();
        repo.expect_find_by_id()
            .with(mockall::predicate::eq(3))
            .returning(|id| Ok(Some(stored(id))));
        repo.expect_save()
            .once()
            .withf(|o: &Opening| {
                o.company == "NewCo" && o.role == "Engineer" && o.salary == 1000.0 && o.remote
            })
            .returning(|o| Ok(Some(o.clone())));

        let payload = UpdateOpeningPayload {
            company: Some("NewCo".into()),
            ..Default::default()
        };
        let updated = service(repo).update(3, payload).await.unwrap();
        assert_eq!(updated.company, "NewCo");
    }

    #[tokio::test]
    async fn update_of_unknown_id_does_not_save() {
        let mut repo = MockOpeningRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_save().never();

        let payload = UpdateOpeningPayload {
            remote: Some(false),
            ..Default::default()
        };
        let err = service(repo).update(5, payload).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn update_storage_failure_is_internal() {
        let mut repo = MockOpeningRepository::new();
        repo.expect_find_by_id().returning(|id| Ok(Some(stored(id))));
        repo.expect_save()
            .returning(|_| Err(Error::Database(sqlx::Error::PoolTimedOut)));

        let payload = UpdateOpeningPayload {
            link: Some("http://y".into()),
            ..Default::default()
        };
        let err = service(repo).update(1, payload).await.unwrap_err();
        match err {
            Error::Internal(msg) => assert_eq!(msg, "error updating opening"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn delete_storage_failure_names_the_id() {
        let mut repo = MockOpeningRepository::new();
        repo.expect_find_by_id().returning(|id| Ok(Some(stored(id))));
        repo.expect_soft_delete()
            .returning(|_| Err(Error::Database(sqlx::Error::PoolTimedOut)));

        let err = service(repo).delete(4).await.unwrap_err();
        match err {
            Error::Internal(msg) => assert_eq!(msg, "error deleting opening with id: 4"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn delete_of_unknown_id_is_not_found() {
        let mut repo = MockOpeningRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_soft_delete().never();

        let err = service(repo).delete(4).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
