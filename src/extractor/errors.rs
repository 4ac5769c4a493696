use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("extraction request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("extraction api returned http {status}")]
    Api { status: reqwest::StatusCode },

    #[error("extraction api response is not valid json: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("extraction api response matches no known payload shape")]
    UnrecognizedPayload,

    #[error("no usable media in extraction response")]
    NoMedia,
}
