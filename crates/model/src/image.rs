//! Image field state for record forms
//!
//! A record's image-bearing field only ever holds a URL that an upload
//! service has already returned. `ImageSlot` tracks that URL alongside
//! the in-flight upload flag and the last failure, so a form can refuse
//! submission while an upload is pending or has never succeeded.

use serde::{Deserialize, Serialize};

/// Upload state of one image field
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageSlot {
    url: Option<String>,
    uploading: bool,
    last_error: Option<String>,
}

impl ImageSlot {
    /// Slot with no image yet
    pub fn empty() -> Self {
        Self::default()
    }

    /// Slot pre-filled with an existing hosted URL (edit forms)
    pub fn with_url(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            url: (!url.trim().is_empty()).then_some(url),
            ..Self::default()
        }
    }

    /// Hosted URL, if an upload has succeeded
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Whether an upload is in flight
    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    /// Message from the most recent failed upload
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Whether the owning record may be submitted
    pub fn is_ready(&self) -> bool {
        !self.uploading && self.url.is_some()
    }

    /// Mark an upload as started.
    ///
    /// Returns `false` (and changes nothing) if one is already in flight.
    pub fn begin_upload(&mut self) -> bool {
        if self.uploading {
            return false;
        }
        self.uploading = true;
        self.last_error = None;
        true
    }

    /// Store the URL returned by the image host
    pub fn finish_upload(&mut self, url: impl Into<String>) {
        self.uploading = false;
        self.url = Some(url.into());
        self.last_error = None;
    }

    /// Record a failed upload. Any previously held URL is kept.
    pub fn fail_upload(&mut self, message: impl Into<String>) {
        self.uploading = false;
        self.last_error = Some(message.into());
    }

    /// Drop the current image
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_lifecycle() {
        let mut slot = ImageSlot::empty();
        assert!(!slot.is_ready());

        assert!(slot.begin_upload());
        assert!(!slot.begin_upload(), "second upload must be refused");
        assert!(!slot.is_ready());

        slot.finish_upload("https://i.ibb.co/x/room.jpg");
        assert!(slot.is_ready());
        assert_eq!(slot.url(), Some("https://i.ibb.co/x/room.jpg"));
    }

    #[test]
    fn test_failed_upload_keeps_previous_url() {
        let mut slot = ImageSlot::with_url("https://cdn/old.jpg");
        assert!(slot.begin_upload());
        slot.fail_upload("network down");

        assert_eq!(slot.url(), Some("https://cdn/old.jpg"));
        assert_eq!(slot.last_error(), Some("network down"));
        assert!(slot.is_ready());
    }

    #[test]
    fn test_with_blank_url_is_empty() {
        assert_eq!(ImageSlot::with_url("  ").url(), None);
    }
}
