//! Core types used throughout Haven
//!
//! Identifiers, collection names and the enumerations shared by the
//! catalog and the back-office. Every enumeration here is normalised at
//! the deserialisation boundary so nothing downstream compares raw strings.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ============================================================================
// Unique Identifiers
// ============================================================================

/// Opaque record identifier assigned by the backend on creation
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Wrap an identifier string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Some backends hand out numeric keys
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(s) => Ok(Self(s)),
            serde_json::Value::Number(n) => Ok(Self(n.to_string())),
            other => Err(serde::de::Error::custom(format!(
                "expected string or number identifier, found {other}"
            ))),
        }
    }
}

// ============================================================================
// Collections
// ============================================================================

/// The six backend-managed resource collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Rooms,
    Bookings,
    Packages,
    Offers,
    Blogs,
    Gallery,
}

impl Collection {
    /// All collections in display order
    pub const ALL: [Collection; 6] = [
        Collection::Rooms,
        Collection::Bookings,
        Collection::Packages,
        Collection::Offers,
        Collection::Blogs,
        Collection::Gallery,
    ];

    /// Path segment under the API root (`/api/<segment>`)
    pub fn path(&self) -> &'static str {
        match self {
            Collection::Rooms => "rooms",
            Collection::Bookings => "bookings",
            Collection::Packages => "packages",
            Collection::Offers => "offers",
            Collection::Blogs => "blogs",
            Collection::Gallery => "gallery",
        }
    }

    /// Singular display noun, used in alerts ("Failed to delete room")
    pub fn noun(&self) -> &'static str {
        match self {
            Collection::Rooms => "room",
            Collection::Bookings => "booking",
            Collection::Packages => "package",
            Collection::Offers => "offer",
            Collection::Blogs => "blog post",
            Collection::Gallery => "gallery image",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

// ============================================================================
// Booking Status
// ============================================================================

/// Lifecycle state of a booking
///
/// Transitions are unordered: any state may follow any other and none is
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    /// All statuses in display order
    pub const ALL: [BookingStatus; 3] = [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::Cancelled,
    ];

    /// Canonical wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Cancelled => "Cancelled",
        }
    }

    /// Parse a status string regardless of case.
    ///
    /// Returns `None` for anything that is not a known status.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pending" => Some(BookingStatus::Pending),
            "confirmed" => Some(BookingStatus::Confirmed),
            "cancelled" | "canceled" => Some(BookingStatus::Cancelled),
            _ => None,
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for BookingStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BookingStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
        Ok(raw
            .as_ref()
            .and_then(|v| v.as_str())
            .and_then(BookingStatus::parse)
            .unwrap_or_default())
    }
}

/// Admin action on a booking card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusAction {
    Confirm,
    MarkPending,
    Cancel,
}

impl StatusAction {
    /// All actions in the order the admin card shows them
    pub const ALL: [StatusAction; 3] = [
        StatusAction::Confirm,
        StatusAction::MarkPending,
        StatusAction::Cancel,
    ];

    /// Status the booking holds after this action
    pub fn target(&self) -> BookingStatus {
        match self {
            StatusAction::Confirm => BookingStatus::Confirmed,
            StatusAction::MarkPending => BookingStatus::Pending,
            StatusAction::Cancel => BookingStatus::Cancelled,
        }
    }

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            StatusAction::Confirm => "Confirm",
            StatusAction::MarkPending => "Pending",
            StatusAction::Cancel => "Cancel",
        }
    }
}

// ============================================================================
// Catalog Categories
// ============================================================================

/// Generates an open enumeration: known variants plus `Other(String)` so
/// unexpected backend values survive a round trip untouched.
macro_rules! open_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
            Other(String),
        }

        impl $name {
            /// Known variants in display order
            pub const KNOWN: &'static [$name] = &[$($name::$variant),+];

            /// Display / wire label
            pub fn label(&self) -> &str {
                match self {
                    $($name::$variant => $label,)+
                    $name::Other(raw) => raw.as_str(),
                }
            }

            /// Parse a label, case-insensitively for known variants
            pub fn parse(raw: &str) -> Self {
                let trimmed = raw.trim();
                $(
                    if trimmed.eq_ignore_ascii_case($label) {
                        return $name::$variant;
                    }
                )+
                $name::Other(trimmed.to_string())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let raw = Option::<String>::deserialize(deserializer)?;
                Ok(raw.map(|r| $name::parse(&r)).unwrap_or_default())
            }
        }
    };
}

open_enum! {
    /// Room category. Not strictly validated: unknown values are preserved.
    RoomCategory {
        Single => "Single",
        Double => "Double",
        Luxury => "Luxury",
        Suite => "Suite",
        Penthouse => "Penthouse",
        Villa => "Villa",
        Standard => "Standard",
        Deluxe => "Deluxe",
    }
}

impl Default for RoomCategory {
    fn default() -> Self {
        RoomCategory::Standard
    }
}

open_enum! {
    /// Blog post category
    BlogCategory {
        Travel => "Travel",
        Luxury => "Luxury",
        Food => "Food",
        News => "News",
    }
}

impl Default for BlogCategory {
    fn default() -> Self {
        BlogCategory::Travel
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_collection_paths() {
        assert_eq!(Collection::Bookings.path(), "bookings");
        assert_eq!(Collection::Gallery.path(), "gallery");
        assert_eq!(Collection::Blogs.noun(), "blog post");
    }

    #[test]
    fn test_status_parse_is_case_insensitive() {
        assert_eq!(BookingStatus::parse("confirmed"), Some(BookingStatus::Confirmed));
        assert_eq!(BookingStatus::parse("CONFIRMED"), Some(BookingStatus::Confirmed));
        assert_eq!(BookingStatus::parse(" Pending "), Some(BookingStatus::Pending));
        assert_eq!(BookingStatus::parse("canceled"), Some(BookingStatus::Cancelled));
        assert_eq!(BookingStatus::parse("archived"), None);
    }

    #[test]
    fn test_status_deserialize_normalizes() {
        let status: BookingStatus = serde_json::from_str("\"confirmed\"").unwrap();
        assert_eq!(status, BookingStatus::Confirmed);

        let status: BookingStatus = serde_json::from_str("null").unwrap();
        assert_eq!(status, BookingStatus::Pending);

        let status: BookingStatus = serde_json::from_str("\"weird\"").unwrap();
        assert_eq!(status, BookingStatus::Pending);

        assert_eq!(
            serde_json::to_string(&BookingStatus::Cancelled).unwrap(),
            "\"Cancelled\""
        );
    }

    #[test]
    fn test_status_action_targets() {
        assert_eq!(StatusAction::Confirm.target(), BookingStatus::Confirmed);
        assert_eq!(StatusAction::MarkPending.target(), BookingStatus::Pending);
        assert_eq!(StatusAction::Cancel.target(), BookingStatus::Cancelled);
    }

    #[test]
    fn test_room_category_open_enum() {
        assert_eq!(RoomCategory::parse("suite"), RoomCategory::Suite);
        assert_eq!(
            RoomCategory::parse("Treehouse"),
            RoomCategory::Other("Treehouse".to_string())
        );

        let cat: RoomCategory = serde_json::from_str("\"Treehouse\"").unwrap();
        assert_eq!(serde_json::to_string(&cat).unwrap(), "\"Treehouse\"");
    }

    #[test]
    fn test_record_id_accepts_numbers() {
        let id: RecordId = serde_json::from_str("42").unwrap();
        assert_eq!(id.as_str(), "42");

        let id: RecordId = serde_json::from_str("\"65f0c1\"").unwrap();
        assert_eq!(id.to_string(), "65f0c1");
    }
}
