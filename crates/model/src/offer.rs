//! Special offer records

use haven_core::{Collection, RecordId, Resource};
use serde::{Deserialize, Serialize};

use crate::draft::{Draft, validatable_draft};
use crate::image::ImageSlot;
use crate::lenient;
use crate::room::format_amount;
use crate::validation::{ValidationResult, parse_amount};

/// A time-limited promotion
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    #[serde(rename = "_id", alias = "id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,

    #[serde(default, deserialize_with = "lenient::amount", skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// Free-form validity window ("Valid till 31 March")
    #[serde(default, deserialize_with = "lenient::text")]
    pub validity: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub image_url: String,

    /// Free-form discount label ("20% OFF")
    #[serde(default, deserialize_with = "lenient::text")]
    pub discount: String,
}

impl Resource for Offer {
    const COLLECTION: Collection = Collection::Offers;

    fn id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }

    fn label(&self) -> String {
        self.title.clone()
    }

    fn image_url(&self) -> Option<&str> {
        Some(self.image_url.as_str()).filter(|s| !s.is_empty())
    }
}

/// Form state for offer create/edit
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OfferDraft {
    pub title: String,
    pub description: String,
    pub price: String,
    pub validity: String,
    pub image: ImageSlot,
    pub discount: String,
}

impl OfferDraft {
    /// Start an edit form from an existing offer
    pub fn from_record(offer: &Offer) -> Self {
        Self {
            title: offer.title.clone(),
            description: offer.description.clone(),
            price: offer.price.map(format_amount).unwrap_or_default(),
            validity: offer.validity.clone(),
            image: ImageSlot::with_url(offer.image_url.clone()),
            discount: offer.discount.clone(),
        }
    }
}

impl Draft for OfferDraft {
    type Record = Offer;
    const IMAGE_FIELDS: &'static [&'static str] = &["imageUrl"];

    fn check(&self) -> ValidationResult {
        let mut result = ValidationResult::ok();
        result
            .require("title", &self.title)
            .require("description", &self.description)
            .require_amount("price", &self.price)
            .require("validity", &self.validity)
            .require("discount", &self.discount)
            .require_image("imageUrl", &self.image);
        result
    }

    fn to_record(&self) -> Offer {
        Offer {
            id: None,
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            price: parse_amount(&self.price),
            validity: self.validity.trim().to_string(),
            image_url: self.image.url().unwrap_or_default().to_string(),
            discount: self.discount.trim().to_string(),
        }
    }
}

validatable_draft!(OfferDraft);

#[cfg(test)]
mod tests {
    use super::*;
    use haven_core::{HavenError, Validatable};

    #[test]
    fn test_offer_wire_names() {
        let offer = Offer {
            title: "Early Bird".into(),
            image_url: "https://i.ibb.co/eb.jpg".into(),
            ..Offer::default()
        };
        let value = serde_json::to_value(&offer).unwrap();
        assert_eq!(value["imageUrl"], "https://i.ibb.co/eb.jpg");
    }

    #[test]
    fn test_failed_upload_blocks_offer() {
        let mut draft = OfferDraft {
            title: "Early Bird".into(),
            description: "Book 30 days ahead".into(),
            price: "150".into(),
            validity: "Till March".into(),
            discount: "20% OFF".into(),
            ..OfferDraft::default()
        };
        draft.image.begin_upload();
        draft.image.fail_upload("host unreachable");

        let err = draft.validate().unwrap_err();
        assert!(matches!(err, HavenError::ImageMissing { ref field } if field == "imageUrl"));
    }
}
