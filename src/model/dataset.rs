//! Read-only dataset image references.
//!
//! The dataset is an ordered collection of image descriptors fixed at
//! startup. Image bytes themselves are fetched by a collaborator; the core
//! only needs the metadata to drive selection and the render model.

use serde::{Deserialize, Serialize};

use crate::error::ExploreError;

/// Descriptor for one image in the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetImage {
    /// Stable identifier within the dataset.
    pub id: String,
    /// Human-readable description shown in the timeline.
    pub description: String,
    /// Where the rendering collaborator fetches the pixels from.
    pub image_url: String,
    /// Short content hint used when prompting the AI analyzer.
    #[serde(default)]
    pub image_hint: String,
    /// Intrinsic pixel width.
    pub width: u32,
    /// Intrinsic pixel height.
    pub height: u32,
}

/// Ordered, immutable collection of dataset images.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    /// Images in timeline order.
    #[serde(alias = "placeholderImages")]
    pub images: Vec<DatasetImage>,
}

impl Dataset {
    /// Parse a dataset from JSON. Rejects datasets with no images.
    pub fn from_json(json: &str) -> Result<Self, ExploreError> {
        let dataset: Dataset = serde_json::from_str(json)?;
        if dataset.images.is_empty() {
            return Err(ExploreError::EmptyDataset);
        }
        log::info!("Loaded dataset with {} images", dataset.images.len());
        Ok(dataset)
    }

    /// Read and parse a dataset file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ExploreError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Number of images in the dataset.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether the dataset has no images.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Get an image by timeline index.
    pub fn get(&self, index: usize) -> Option<&DatasetImage> {
        self.images.get(index)
    }

    /// Find the timeline index of an image id.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.images.iter().position(|img| img.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "images": [
            {
                "id": "vm-001",
                "description": "Valles Marineris canyon system",
                "imageUrl": "https://example.org/vm-001.jpg",
                "imageHint": "canyon system",
                "width": 4096,
                "height": 2048
            },
            {
                "id": "om-002",
                "description": "Olympus Mons caldera",
                "imageUrl": "https://example.org/om-002.jpg",
                "width": 2048,
                "height": 2048
            }
        ]
    }"#;

    #[test]
    fn test_from_json() {
        let dataset = Dataset::from_json(SAMPLE).unwrap();
        assert_eq!(dataset.len(), 2);

        let first = dataset.get(0).unwrap();
        assert_eq!(first.id, "vm-001");
        assert_eq!(first.image_url, "https://example.org/vm-001.jpg");
        assert_eq!(first.width, 4096);
        // imageHint is optional
        assert_eq!(dataset.get(1).unwrap().image_hint, "");
    }

    #[test]
    fn test_accepts_placeholder_images_key() {
        // Field name used by upstream dataset exports
        let json = SAMPLE.replacen("\"images\"", "\"placeholderImages\"", 1);
        let dataset = Dataset::from_json(&json).unwrap();
        assert_eq!(dataset.len(), 2);
    }

    #[test]
    fn test_empty_dataset_is_rejected() {
        let err = Dataset::from_json(r#"{ "images": [] }"#).unwrap_err();
        assert!(matches!(err, ExploreError::EmptyDataset));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(
            Dataset::from_json("{ nope"),
            Err(ExploreError::Json(_))
        ));
    }

    #[test]
    fn test_index_of() {
        let dataset = Dataset::from_json(SAMPLE).unwrap();
        assert_eq!(dataset.index_of("om-002"), Some(1));
        assert_eq!(dataset.index_of("missing"), None);
    }
}
