use crate::entities::MediaRecord;
use crate::extractor::MediaInfo;
use anyhow::Result;
use sqlx::PgPool;
use uuid::Uuid;

/// Repository for the extraction audit trail.
pub struct MediaRecordRepository {
    pool: PgPool,
}

impl MediaRecordRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert one record for a successful extraction. `created_at` defaults to
    /// insertion time in the schema.
    pub async fn insert(&self, media: &MediaInfo, original_url: &str) -> Result<MediaRecord> {
        let record = sqlx::query_as::<_, MediaRecord>(
            r#"
            INSERT INTO media_records (id, platform, media_url, thumbnail, original_url)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, platform, media_url, thumbnail, original_url, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&media.platform)
        .bind(&media.media_url)
        .bind(&media.thumbnail)
        .bind(original_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }
}
