//! Blog post records

use chrono::{DateTime, Utc};
use haven_core::{BlogCategory, Collection, RecordId, Resource};
use serde::{Deserialize, Serialize};

use crate::draft::{Draft, validatable_draft};
use crate::image::ImageSlot;
use crate::lenient;
use crate::validation::ValidationResult;

/// A journal entry shown on the public blog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(rename = "_id", alias = "id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub image: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,

    #[serde(default)]
    pub category: BlogCategory,

    #[serde(default, deserialize_with = "lenient::timestamp", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl BlogPost {
    /// First `max` characters of the body, cut at a word boundary
    pub fn excerpt(&self, max: usize) -> String {
        let body = self.description.trim();
        if body.chars().count() <= max {
            return body.to_string();
        }
        let cut: String = body.chars().take(max).collect();
        let trimmed = cut.rsplit_once(' ').map(|(head, _)| head).unwrap_or(&cut);
        format!("{}…", trimmed.trim_end())
    }

    /// Publication date for display
    pub fn published_label(&self) -> String {
        self.created_at
            .map(|ts| ts.format("%B %-d, %Y").to_string())
            .unwrap_or_default()
    }
}

impl Resource for BlogPost {
    const COLLECTION: Collection = Collection::Blogs;

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

/// Form state for blog create/edit
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogDraft {
    pub title: String,
    pub image: ImageSlot,
    pub description: String,
    pub category: BlogCategory,
}

impl BlogDraft {
    /// Start an edit form from an existing post
    pub fn from_record(post: &BlogPost) -> Self {
        Self {
            title: post.title.clone(),
            image: ImageSlot::with_url(post.image.clone()),
            description: post.description.clone(),
            category: post.category.clone(),
        }
    }
}

impl Draft for BlogDraft {
    type Record = BlogPost;
    const IMAGE_FIELDS: &'static [&'static str] = &["image"];

    fn check(&self) -> ValidationResult {
        let mut result = ValidationResult::ok();
        result
            .require("title", &self.title)
            .require("description", &self.description)
            .require_image("image", &self.image);
        result
    }

    fn to_record(&self) -> BlogPost {
        BlogPost {
            id: None,
            title: self.title.trim().to_string(),
            image: self.image.url().unwrap_or_default().to_string(),
            description: self.description.trim().to_string(),
            category: self.category.clone(),
            created_at: None,
        }
    }
}

validatable_draft!(BlogDraft);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_cuts_on_word() {
        let post = BlogPost {
            description: "A slow morning by the lagoon with fresh coffee".into(),
            ..BlogPost::default()
        };
        assert_eq!(post.excerpt(20), "A slow morning by…");
        assert_eq!(post.excerpt(200), post.description);
    }

    #[test]
    fn test_unknown_category_survives() {
        let post: BlogPost =
            serde_json::from_str(r#"{"title":"x","category":"Wellness"}"#).unwrap();
        assert_eq!(post.category, BlogCategory::Other("Wellness".into()));
    }
}
