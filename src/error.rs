//! Error types for the exploration core.

use thiserror::Error;

/// Errors from dataset loading and collaborator calls.
///
/// Coordinate conversions and zoom operations are pure arithmetic and never
/// produce errors; out-of-range inputs are clamped instead.
#[derive(Error, Debug)]
pub enum ExploreError {
    /// I/O error while reading a dataset file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The dataset file parsed but contains no images
    #[error("dataset contains no images")]
    EmptyDataset,

    /// A dataset image was referenced by an unknown id
    #[error("no dataset image with id '{id}'")]
    ImageNotFound {
        /// The id that was looked up
        id: String,
    },

    /// The AI analysis collaborator failed
    #[error(transparent)]
    Analyzer(#[from] AnalyzerError),
}

/// Errors from the AI analysis collaborator.
///
/// These never mutate session state; the shell surfaces them as
/// user-visible notifications.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyzerError {
    /// The feature description was empty
    #[error("search description can't be empty")]
    EmptyQuery,

    /// The analyzer backend could not be reached
    #[error("analyzer unavailable: {0}")]
    Unavailable(String),

    /// The analysis ran but failed
    #[error("analysis failed: {0}")]
    Failed(String),

    /// The analyzer returned something the shell could not interpret
    #[error("malformed analyzer response: {0}")]
    MalformedResponse(String),
}
