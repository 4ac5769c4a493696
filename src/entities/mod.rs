use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One row per successful extraction: an audit trail of what the bot fetched
/// and from where. Rows are written once and never mutated or deleted.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct MediaRecord {
    pub id: Uuid,
    pub platform: String,
    pub media_url: String,
    pub thumbnail: Option<String>,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}
