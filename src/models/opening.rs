use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Opening {
    pub id: i64,
    pub role: String,
    pub company: String,
    pub location: String,
    pub remote: bool,
    pub link: String,
    pub salary: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Validated business fields of an opening that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOpening {
    pub role: String,
    pub company: String,
    pub location: String,
    pub remote: bool,
    pub link: String,
    pub salary: f64,
}
