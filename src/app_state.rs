use crate::config::Config;
use crate::delivery::MediaDownloader;
use crate::extractor::ExtractionClient;
use crate::platforms::{PlatformConfigError, PlatformDirectory};
use crate::repositories::MediaRecordRepository;
use sqlx::PgPool;
use std::path::PathBuf;
use std::sync::Arc;

/// Shared, immutable per-process state handed to every message handler.
pub struct AppState {
    pub platforms: Arc<PlatformDirectory>,
    pub extractor: ExtractionClient,
    pub downloader: MediaDownloader,
    pub records: MediaRecordRepository,
    pub staging_dir: PathBuf,
}

impl AppState {
    pub fn new(config: &Config, pool: PgPool) -> Result<Self, PlatformConfigError> {
        let platforms = Arc::new(PlatformDirectory::from_json(config.platforms_json())?);
        Ok(Self {
            extractor: ExtractionClient::new(config, platforms.clone()),
            downloader: MediaDownloader::new(),
            records: MediaRecordRepository::new(pool),
            staging_dir: std::env::temp_dir(),
            platforms,
        })
    }
}
