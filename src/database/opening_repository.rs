use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::Result;
use crate::models::opening::{NewOpening, Opening};

/// Storage operations the opening service relies on. Every read ignores
/// soft-deleted rows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OpeningRepository: Send + Sync {
    async fn create(&self, opening: NewOpening) -> Result<Opening>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Opening>>;
    async fn find_all(&self) -> Result<Vec<Opening>>;
    /// Persists every business field of `opening`. Returns `None` when the
    /// row no longer exists or was deleted in the meantime.
    async fn save(&self, opening: &Opening) -> Result<Option<Opening>>;
    async fn soft_delete(&self, opening: &Opening) -> Result<Option<Opening>>;
}

#[derive(Clone)]
pub struct PgOpeningRepository {
    pool: PgPool,
}

impl PgOpeningRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OpeningRepository for PgOpeningRepository {
    async fn create(&self, opening: NewOpening) -> Result<Opening> {
        let row = sqlx::query_as::<_, Opening>(
            r#"
            INSERT INTO openings (role, company, location, remote, link, salary)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, role, company, location, remote, link, salary, created_at, updated_at, deleted_at
            "#,
        )
        .bind(opening.role)
        .bind(opening.company)
        .bind(opening.location)
        .bind(opening.remote)
        .bind(opening.link)
        .bind(opening.salary)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Opening>> {
        let row = sqlx::query_as::<_, Opening>(
            r#"
            SELECT id, role, company, location, remote, link, salary, created_at, updated_at, deleted_at
            FROM openings
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn find_all(&self) -> Result<Vec<Opening>> {
        let rows = sqlx::query_as::<_, Opening>(
            r#"
            SELECT id, role, company, location, remote, link, salary, created_at, updated_at, deleted_at
            FROM openings
            WHERE deleted_at IS NULL
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn save(&self, opening: &Opening) -> Result<Option<Opening>> {
        let row = sqlx::query_as::<_, Opening>(
            r#"
            UPDATE openings
            SET
                role = $2,
                company = $3,
                location = $4,
                remote = $5,
                link = $6,
                salary = $7,
                updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING id, role, company, location, remote, link, salary, created_at, updated_at, deleted_at
            "#,
        )
        .bind(opening.id)
        .bind(&opening.role)
        .bind(&opening.company)
        .bind(&opening.location)
        .bind(opening.remote)
        .bind(&opening.link)
        .bind(opening.salary)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn soft_delete(&self, opening: &Opening) -> Result<Option<Opening>> {
        let row = sqlx::query_as::<_, Opening>(
            r#"
            UPDATE openings
            SET deleted_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING id, role, company, location, remote, link, salary, created_at, updated_at, deleted_at
            "#,
        )
        .bind(opening.id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }
}
