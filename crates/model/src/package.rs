//! Holiday package records

use haven_core::{Collection, RecordId, Resource};
use serde::{Deserialize, Serialize};

use crate::draft::{Draft, validatable_draft};
use crate::image::ImageSlot;
use crate::lenient;
use crate::room::format_amount;
use crate::validation::{ValidationResult, parse_amount};

/// A bundled stay (room + extras) sold at a fixed price
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    #[serde(rename = "_id", alias = "id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,

    #[serde(default, deserialize_with = "lenient::amount", skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// Free-form duration ("3 Days / 2 Nights")
    #[serde(default, deserialize_with = "lenient::text")]
    pub duration: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub image: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,

    /// Ordered feature bullet points
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub features: Vec<String>,
}

impl Resource for Package {
    const COLLECTION: Collection = Collection::Packages;

    fn id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }

    fn label(&self) -> String {
        self.title.clone()
    }

    fn image_url(&self) -> Option<&str> {
        Some(self.image.as_str()).filter(|s| !s.is_empty())
    }
}

/// Form state for package create/edit
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackageDraft {
    pub title: String,
    pub price: String,
    pub duration: String,
    pub image: ImageSlot,
    pub description: String,
    /// One feature per line or comma separated
    pub features: String,
}

impl PackageDraft {
    /// Start an edit form from an existing package
    pub fn from_record(package: &Package) -> Self {
        Self {
            title: package.title.clone(),
            price: package.price.map(format_amount).unwrap_or_default(),
            duration: package.duration.clone(),
            image: ImageSlot::with_url(package.image.clone()),
            description: package.description.clone(),
            features: package.features.join("\n"),
        }
    }
}

impl Draft for PackageDraft {
    type Record = Package;
    const IMAGE_FIELDS: &'static [&'static str] = &["image"];

    fn check(&self) -> ValidationResult {
        let mut result = ValidationResult::ok();
        result
            .require("title", &self.title)
            .require_amount("price", &self.price)
            .require("duration", &self.duration)
            .require("description", &self.description)
            .require_image("image", &self.image);
        result
    }

    fn to_record(&self) -> Package {
        Package {
            id: None,
            title: self.title.trim().to_string(),
            price: parse_amount(&self.price),
            duration: self.duration.trim().to_string(),
            image: self.image.url().unwrap_or_default().to_string(),
            description: self.description.trim().to_string(),
            features: lenient::split_list(&self.features),
        }
    }
}

validatable_draft!(PackageDraft);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_features_accept_string_or_array() {
        let from_array: Package =
            serde_json::from_value(json!({"title": "Honeymoon", "features": ["Spa", "Dinner"]}))
                .unwrap();
        let from_text: Package =
            serde_json::from_value(json!({"title": "Honeymoon", "features": "Spa, Dinner"}))
                .unwrap();
        assert_eq!(from_array.features, from_text.features);
    }

    #[test]
    fn test_draft_splits_features() {
        let mut draft = PackageDraft {
            title: "Honeymoon".into(),
            price: "999".into(),
            duration: "3 Days".into(),
            description: "Romantic escape".into(),
            features: "Spa\nCandle-lit dinner, Late checkout".into(),
            ..PackageDraft::default()
        };
        draft.image.finish_upload("https://res.cloudinary.com/h/honeymoon.jpg");

        let package = draft.build().unwrap();
        assert_eq!(
            package.features,
            vec!["Spa", "Candle-lit dinner", "Late checkout"]
        );
    }

    #[test]
    fn test_draft_rejected_while_uploading() {
        let mut draft = PackageDraft::from_record(&Package {
            title: "Honeymoon".into(),
            price: Some(999.0),
            duration: "3 Days".into(),
            description: "Romantic escape".into(),
            image: "https://cdn/old.jpg".into(),
            ..Package::default()
        });
        assert!(draft.is_submittable());

        draft.image.begin_upload();
        assert!(!draft.is_submittable());
        assert!(draft.build().is_err());
    }
}
