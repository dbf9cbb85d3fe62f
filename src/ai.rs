//! AI analysis collaborator seam.
//!
//! The session never talks to a model directly. The surrounding shell
//! implements [`FeatureAnalyzer`], runs it however it likes (typically off
//! the UI thread), parses the coordinate hint, and feeds any resolved
//! image-space coordinate back as a
//! [`crate::message::SessionMessage::RecenterOn`]. On failure the shell
//! surfaces a notification; session state is never touched.

use crate::error::AnalyzerError;

/// Input for an AI feature search over the displayed image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureQuery {
    /// Raw bytes of the displayed image.
    pub image_data: Vec<u8>,
    /// Free-text description of the feature to locate.
    pub description: String,
}

impl FeatureQuery {
    /// Build a query, rejecting empty feature descriptions up front.
    pub fn new(image_data: Vec<u8>, description: impl Into<String>) -> Result<Self, AnalyzerError> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(AnalyzerError::EmptyQuery);
        }
        Ok(Self {
            image_data,
            description,
        })
    }
}

/// Result of a feature search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureMatch {
    /// Unparsed coordinate hint as returned by the model. Parsing it into
    /// image-space coordinates is the caller's concern; the core only ever
    /// consumes the parsed result.
    pub coordinate_hint: String,
    /// Model reasoning, shown to the user verbatim.
    pub reasoning: String,
}

/// Result of an open-ended pattern discovery run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryReport {
    /// Free-text analysis shown to the user.
    pub analysis: String,
}

/// Remote image analysis operations.
pub trait FeatureAnalyzer {
    /// Locate a described feature within the image.
    fn search(&self, query: &FeatureQuery) -> Result<FeatureMatch, AnalyzerError>;

    /// Run open-ended pattern analysis of the image against a task prompt.
    fn discover(&self, image_data: &[u8], task: &str) -> Result<DiscoveryReport, AnalyzerError>;
}

/// Build the discovery task prompt for the selected image.
pub fn discovery_task(image_description: &str) -> String {
    format!(
        "Analyze the image of {image_description} and identify any interesting \
         geological patterns, anomalies, or features that stand out. Provide a \
         concise report on your findings."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_description_is_rejected() {
        assert_eq!(
            FeatureQuery::new(vec![1, 2, 3], "  "),
            Err(AnalyzerError::EmptyQuery)
        );
    }

    #[test]
    fn test_query_keeps_inputs() {
        let query = FeatureQuery::new(vec![0xff], "a large crater").unwrap();
        assert_eq!(query.image_data, vec![0xff]);
        assert_eq!(query.description, "a large crater");
    }

    #[test]
    fn test_discovery_task_mentions_the_image() {
        let task = discovery_task("Olympus Mons caldera");
        assert!(task.contains("Olympus Mons caldera"));
    }
}
