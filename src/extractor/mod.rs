pub mod client;
pub mod errors;
pub mod model;
pub mod select;

#[cfg(test)]
mod tests;

pub use client::ExtractionClient;
pub use errors::ExtractError;
pub use model::{ExtractionPayload, MediaCandidate, MediaInfo, MediaKind, RawResponse};
pub use select::select_best;
