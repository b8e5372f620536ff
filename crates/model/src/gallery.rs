//! Gallery image records

use haven_core::{Collection, RecordId, Resource};
use serde::{Deserialize, Serialize};

use crate::draft::{Draft, validatable_draft};
use crate::image::ImageSlot;
use crate::lenient;
use crate::validation::ValidationResult;

/// A captioned photo in the public gallery
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    #[serde(rename = "_id", alias = "id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub image: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,
}

impl Resource for GalleryImage {
    const COLLECTION: Collection = Collection::Gallery;

    fn id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }

    fn label(&self) -> String {
        if self.title.is_empty() {
            "Untitled image".to_string()
        } else {
            self.title.clone()
        }
    }

    fn image_url(&self) -> Option<&str> {
        Some(self.image.as_str()).filter(|s| !s.is_empty())
    }
}

/// Form state for gallery uploads
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalleryDraft {
    pub title: String,
    pub image: ImageSlot,
}

impl GalleryDraft {
    pub fn from_record(image: &GalleryImage) -> Self {
        Self {
            title: image.title.clone(),
            image: ImageSlot::with_url(image.image.clone()),
        }
    }
}

impl Draft for GalleryDraft {
    type Record = GalleryImage;
    const IMAGE_FIELDS: &'static [&'static str] = &["image"];

    fn check(&self) -> ValidationResult {
        let mut result = ValidationResult::ok();
        result
            .require("title", &self.title)
            .require_image("image", &self.image);
        result
    }

    fn to_record(&self) -> GalleryImage {
        GalleryImage {
            id: None,
            image: self.image.url().unwrap_or_default().to_string(),
            title: self.title.trim().to_string(),
        }
    }
}

validatable_draft!(GalleryDraft);
