use crate::config::Config;
use crate::extractor::errors::ExtractError;
use crate::extractor::model::{ExtractionPayload, MediaInfo, RawResponse};
use crate::extractor::select::select_best;
use crate::platforms::PlatformDirectory;
use reqwest::{Client, ClientBuilder};
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

const HEADER_API_KEY: &str = "x-api-key";
const HEADER_API_HOST: &str = "x-api-host";

/// Client for the third-party media-extraction API.
///
/// One POST per pasted URL; the parsed response goes straight through the
/// selection policy so callers only ever see a `MediaInfo` or a typed error.
pub struct ExtractionClient {
    http: Client,
    endpoint: String,
    api_key: String,
    api_host: String,
    platforms: Arc<PlatformDirectory>,
}

impl ExtractionClient {
    pub fn new(config: &Config, platforms: Arc<PlatformDirectory>) -> Self {
        let http = ClientBuilder::new()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http,
            endpoint: config.extractor_api_url().to_owned(),
            api_key: config.extractor_api_key().to_owned(),
            api_host: config.extractor_api_host().to_owned(),
            platforms,
        }
    }

    /// Ask the extraction API about `url` and pick the best media variant.
    #[instrument(skip_all, fields(url = %url))]
    pub async fn fetch_media(&self, url: &str) -> Result<MediaInfo, ExtractError> {
        let response = self
            .http
            .post(&self.endpoint)
            .header(HEADER_API_KEY, &self.api_key)
            .header(HEADER_API_HOST, &self.api_host)
            .json(&serde_json::json!({ "url": url }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractError::Api { status });
        }

        let body = response.text().await?;
        let raw: RawResponse = serde_json::from_str(&body).map_err(ExtractError::Decode)?;
        let payload = ExtractionPayload::from_response(raw)?;

        select_best(&payload, url, &self.platforms)
    }
}
