use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("media download failed: {reason}")]
    Download { reason: String },

    #[error("failed to stage media on disk: {0}")]
    Storage(#[from] std::io::Error),
}

impl DeliveryError {
    pub fn download(err: reqwest::Error) -> Self {
        let reason = if err.is_timeout() {
            "timed out".to_owned()
        } else {
            err.to_string()
        };
        Self::Download { reason }
    }
}
