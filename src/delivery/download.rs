use crate::delivery::errors::DeliveryError;
use bytes::Bytes;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::instrument;

/// Media files can be large; the fetch gets a generous fixed ceiling.
const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(90);

/// Fetches the raw media bytes behind a selected candidate URL.
pub struct MediaDownloader {
    http: Client,
}

impl MediaDownloader {
    pub fn new() -> Self {
        let http = ClientBuilder::new()
            .connect_timeout(Duration::from_secs(10))
            .timeout(DOWNLOAD_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");
        Self { http }
    }

    #[instrument(skip_all, fields(url = %url))]
    pub async fn fetch_bytes(&self, url: &str) -> Result<Bytes, DeliveryError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(DeliveryError::download)?;

        let status = response.status();
        if !status.is_success() {
            return Err(DeliveryError::Download {
                reason: format!("http {}", status),
            });
        }

        response.bytes().await.map_err(DeliveryError::download)
    }
}

impl Default for MediaDownloader {
    fn default() -> Self {
        Self::new()
    }
}
