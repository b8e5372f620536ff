//! Room records
//!
//! Rooms are admin-managed and read by the public catalog and by the
//! reservation wizard, which only needs their titles.

use haven_core::{Collection, RecordId, Resource, RoomCategory};
use heck::ToKebabCase;
use serde::{Deserialize, Serialize};

use crate::draft::{Draft, validatable_draft};
use crate::image::ImageSlot;
use crate::lenient;
use crate::validation::{ValidationResult, parse_amount};

// ============================================================================
// Room
// ============================================================================

/// A bookable room type as stored by the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Backend identifier
    #[serde(rename = "_id", alias = "id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,

    /// Display title, also the source of the URL slug
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,

    /// Category (unknown values preserved)
    #[serde(default)]
    pub category: RoomCategory,

    /// Nightly price in currency units
    #[serde(default, deserialize_with = "lenient::amount", skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,

    /// Hosted image URL
    #[serde(default, deserialize_with = "lenient::text")]
    pub image: String,

    /// Floor area, free text ("45 m²")
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "String::is_empty")]
    pub area: String,
}

impl Room {
    /// URL slug for `/room/:slug`
    pub fn slug(&self) -> String {
        slugify(&self.title)
    }
}

impl Resource for Room {
    const COLLECTION: Collection = Collection::Rooms;

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

/// Kebab-case slug for a title
pub fn slugify(title: &str) -> String {
    title.trim().to_kebab_case()
}

/// Find the room whose title slugs to `slug`
pub fn find_by_slug<'a>(rooms: &'a [Room], slug: &str) -> Option<&'a Room> {
    rooms.iter().find(|room| room.slug() == slug)
}

/// Distinct room titles in first-seen order, blanks skipped
pub fn distinct_titles(rooms: &[Room]) -> Vec<String> {
    let mut titles: Vec<String> = Vec::with_capacity(rooms.len());
    for room in rooms {
        let title = room.title.trim();
        if !title.is_empty() && !titles.iter().any(|t| t == title) {
            titles.push(title.to_string());
        }
    }
    titles
}

// ============================================================================
// RoomDraft
// ============================================================================

/// Form state for the add-room / edit-room screens
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomDraft {
    pub title: String,
    pub category: RoomCategory,
    pub price: String,
    pub description: String,
    pub image: ImageSlot,
    pub area: String,
}

impl RoomDraft {
    /// Start an edit form from an existing room
    pub fn from_record(room: &Room) -> Self {
        Self {
            title: room.title.clone(),
            category: room.category.clone(),
            price: room.price.map(format_amount).unwrap_or_default(),
            description: room.description.clone(),
            image: ImageSlot::with_url(room.image.clone()),
            area: room.area.clone(),
        }
    }
}

impl Draft for RoomDraft {
    type Record = Room;
    const IMAGE_FIELDS: &'static [&'static str] = &["image"];

    fn check(&self) -> ValidationResult {
        let mut result = ValidationResult::ok();
        result
            .require("title", &self.title)
            .require_amount("price", &self.price)
            .require("description", &self.description)
            .require_image("image", &self.image);
        result
    }

    fn to_record(&self) -> Room {
        Room {
            id: None,
            title: self.title.trim().to_string(),
            category: self.category.clone(),
            price: parse_amount(&self.price),
            description: self.description.trim().to_string(),
            image: self.image.url().unwrap_or_default().to_string(),
            area: self.area.trim().to_string(),
        }
    }
}

validatable_draft!(RoomDraft);

/// Render an amount for an input box without a trailing `.0`
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{}", amount as i64)
    } else {
        format!("{amount:.2}")
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use haven_core::Validatable;
    use serde_json::json;

    fn room(title: &str) -> Room {
        Room {
            title: title.to_string(),
            ..Room::default()
        }
    }

    #[test]
    fn test_deserialize_backend_room() {
        let room: Room = serde_json::from_value(json!({
            "_id": "65f0aa",
            "title": "Ocean Suite",
            "category": "suite",
            "price": "240",
            "description": "Sea view",
            "image": "https://i.ibb.co/ocean.jpg"
        }))
        .unwrap();

        assert_eq!(room.id, Some(RecordId::new("65f0aa")));
        assert_eq!(room.category, RoomCategory::Suite);
        assert_eq!(room.price, Some(240.0));
        assert_eq!(room.slug(), "ocean-suite");
        assert!(room.area.is_empty());
    }

    #[test]
    fn test_create_payload_has_no_id() {
        let value = serde_json::to_value(room("Garden Villa")).unwrap();
        assert!(value.get("_id").is_none());
        assert_eq!(value["title"], "Garden Villa");
    }

    #[test]
    fn test_distinct_titles_first_seen() {
        let rooms = vec![room("Ocean Suite"), room("Garden Villa"), room("Ocean Suite"), room(" ")];
        assert_eq!(distinct_titles(&rooms), vec!["Ocean Suite", "Garden Villa"]);
        assert!(distinct_titles(&[]).is_empty());
    }

    #[test]
    fn test_find_by_slug() {
        let rooms = vec![room("Ocean Suite"), room("Royal Penthouse")];
        assert_eq!(
            find_by_slug(&rooms, "royal-penthouse").map(|r| r.title.as_str()),
            Some("Royal Penthouse")
        );
        assert!(find_by_slug(&rooms, "missing").is_none());
    }

    #[test]
    fn test_draft_requires_uploaded_image() {
        let mut draft = RoomDraft {
            title: "Ocean Suite".to_string(),
            price: "240".to_string(),
            description: "Sea view".to_string(),
            ..RoomDraft::default()
        };
        assert!(!draft.is_valid());
        assert!(draft.build().is_err());

        draft.image.finish_upload("https://i.ibb.co/ocean.jpg");
        let record = draft.build().unwrap();
        assert_eq!(record.image, "https://i.ibb.co/ocean.jpg");
        assert_eq!(record.price, Some(240.0));
    }

    #[test]
    fn test_draft_from_record_round_trip() {
        let mut original = room("Ocean Suite");
        original.price = Some(240.0);
        original.image = "https://cdn/ocean.jpg".to_string();
        let draft = RoomDraft::from_record(&original);
        assert_eq!(draft.price, "240");
        assert_eq!(draft.image.url(), Some("https://cdn/ocean.jpg"));
    }
}
