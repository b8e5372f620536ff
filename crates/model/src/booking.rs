//! Booking records
//!
//! Bookings are created by the public reservation wizard (and by the
//! offer/package inquiry form) and are only ever mutated by the admin:
//! status transitions and deletion.

use chrono::{DateTime, NaiveDate, Utc};
use haven_core::{BookingStatus, Collection, RecordId, Resource};
use serde::{Deserialize, Serialize};

use crate::lenient;

/// A reservation request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Backend identifier
    #[serde(rename = "_id", alias = "id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub guest_name: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub email: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub phone: String,

    /// Title of the chosen room at booking time. Not a live reference.
    #[serde(default, deserialize_with = "lenient::text")]
    pub room_title: String,

    #[serde(default, deserialize_with = "lenient::date", skip_serializing_if = "Option::is_none")]
    pub check_in: Option<NaiveDate>,

    #[serde(default, deserialize_with = "lenient::date", skip_serializing_if = "Option::is_none")]
    pub check_out: Option<NaiveDate>,

    /// Party description ("2 Adults"), free-form
    #[serde(default, deserialize_with = "lenient::text")]
    pub members: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub address: String,

    #[serde(default)]
    pub status: BookingStatus,

    #[serde(default, deserialize_with = "lenient::amount", skip_serializing_if = "Option::is_none")]
    pub total_price: Option<f64>,

    /// Server-assigned creation time
    #[serde(default, deserialize_with = "lenient::timestamp", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Note left through the offer/package inquiry form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Booking {
    /// Revenue contribution; missing or non-numeric prices count as zero
    pub fn revenue(&self) -> f64 {
        self.total_price.unwrap_or(0.0)
    }

    /// Number of nights, when both dates are present and ordered
    pub fn nights(&self) -> Option<i64> {
        let (check_in, check_out) = (self.check_in?, self.check_out?);
        let nights = (check_out - check_in).num_days();
        (nights > 0).then_some(nights)
    }

    /// Date range for display ("2026-02-24 → 2026-02-26")
    pub fn stay_label(&self) -> String {
        let fmt = |d: Option<NaiveDate>| d.map(|d| d.to_string()).unwrap_or_else(|| "—".into());
        format!("{} → {}", fmt(self.check_in), fmt(self.check_out))
    }
}

impl Resource for Booking {
    const COLLECTION: Collection = Collection::Bookings;

    fn id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }

    fn label(&self) -> String {
        if self.room_title.is_empty() {
            self.guest_name.clone()
        } else {
            format!("{} ({})", self.guest_name, self.room_title)
        }
    }
}

/// Body of the status PATCH
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatusPatch {
    pub status: BookingStatus,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_loose_booking() {
        let booking: Booking = serde_json::from_value(json!({
            "_id": "b1",
            "guestName": "A. Rahman",
            "roomTitle": "Ocean Suite",
            "checkIn": "2026-02-24T00:00:00.000Z",
            "checkOut": "2026-02-26",
            "members": 2,
            "status": "confirmed",
            "totalPrice": "bad",
            "createdAt": "2026-02-20T09:00:00.000Z"
        }))
        .unwrap();

        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(booking.members, "2");
        assert_eq!(booking.total_price, None);
        assert_eq!(booking.revenue(), 0.0);
        assert_eq!(booking.nights(), Some(2));
        assert!(booking.created_at.is_some());
        assert_eq!(booking.email, "");
    }

    #[test]
    fn test_serialize_uses_camel_case_and_canonical_status() {
        let booking = Booking {
            guest_name: "A. Rahman".into(),
            room_title: "Ocean Suite".into(),
            check_in: NaiveDate::from_ymd_opt(2026, 2, 24),
            total_price: Some(0.0),
            ..Booking::default()
        };
        let value = serde_json::to_value(&booking).unwrap();
        assert_eq!(value["guestName"], "A. Rahman");
        assert_eq!(value["checkIn"], "2026-02-24");
        assert_eq!(value["status"], "Pending");
        assert_eq!(value["totalPrice"], 0.0);
        assert!(value.get("_id").is_none());
        assert!(value.get("createdAt").is_none());
    }

    #[test]
    fn test_status_patch_body() {
        let body = serde_json::to_value(StatusPatch {
            status: BookingStatus::Confirmed,
        })
        .unwrap();
        assert_eq!(body, json!({"status": "Confirmed"}));
    }
}
