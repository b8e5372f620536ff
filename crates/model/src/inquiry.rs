//! Offer / package inquiry form
//!
//! The offer and package detail pages share one short form. An inquiry is
//! persisted as a booking so it shows up in the admin bookings tab: the
//! subject title becomes `roomTitle`, the guests selector becomes `members`
//! and the subject's price becomes `totalPrice`.

use haven_core::{BookingStatus, HavenError, HavenResult};
use uuid::Uuid;

use crate::booking::Booking;
use crate::lenient::parse_date;
use crate::offer::Offer;
use crate::package::Package;
use crate::validation::ValidationResult;

/// What the guest is asking about
#[derive(Debug, Clone, PartialEq)]
pub struct InquirySubject {
    pub title: String,
    pub price: Option<f64>,
}

impl From<&Offer> for InquirySubject {
    fn from(offer: &Offer) -> Self {
        Self {
            title: offer.title.clone(),
            price: offer.price,
        }
    }
}

impl From<&Package> for InquirySubject {
    fn from(package: &Package) -> Self {
        Self {
            title: package.title.clone(),
            price: package.price,
        }
    }
}

/// Inquiry field values
#[derive(Debug, Clone, PartialEq)]
pub struct InquiryDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub check_in: String,
    pub check_out: String,
    pub guests: String,
    pub message: String,
}

impl Default for InquiryDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            check_in: String::new(),
            check_out: String::new(),
            guests: "2 Adults".to_string(),
            message: String::new(),
        }
    }
}

impl InquiryDraft {
    pub fn check(&self) -> ValidationResult {
        let mut result = ValidationResult::ok();
        result
            .require("name", &self.name)
            .require_email("email", &self.email)
            .require("phone", &self.phone)
            .require_date("checkIn", &self.check_in)
            .require_date("checkOut", &self.check_out);
        result
    }

    /// Map onto the booking record the backend stores
    pub fn to_booking(&self, subject: &InquirySubject) -> Booking {
        let message = self.message.trim();
        Booking {
            guest_name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            room_title: subject.title.clone(),
            check_in: parse_date(&self.check_in),
            check_out: parse_date(&self.check_out),
            members: self.guests.clone(),
            status: BookingStatus::Pending,
            total_price: Some(subject.price.unwrap_or(0.0)),
            message: (!message.is_empty()).then(|| message.to_string()),
            ..Booking::default()
        }
    }
}

/// Inquiry form state, with the same single-flight guard as the wizard
#[derive(Debug, Clone, PartialEq)]
pub struct InquiryForm {
    pub subject: InquirySubject,
    pub draft: InquiryDraft,
    sending: bool,
    sent: bool,
    idempotency_key: Uuid,
}

impl InquiryForm {
    pub fn new(subject: InquirySubject) -> Self {
        Self {
            subject,
            draft: InquiryDraft::default(),
            sending: false,
            sent: false,
            idempotency_key: Uuid::new_v4(),
        }
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    pub fn is_sent(&self) -> bool {
        self.sent
    }

    pub fn idempotency_key(&self) -> String {
        self.idempotency_key.to_string()
    }

    /// Validate and mark as in flight
    pub fn begin_send(&mut self) -> HavenResult<Booking> {
        if self.sending {
            return Err(HavenError::validation("Your inquiry is already being sent"));
        }
        self.draft.check().into_result(&[])?;
        self.sending = true;
        Ok(self.draft.to_booking(&self.subject))
    }

    pub fn complete(&mut self) {
        self.sending = false;
        self.sent = true;
    }

    pub fn fail(&mut self) {
        self.sending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> InquiryForm {
        let offer = Offer {
            title: "Early Bird".into(),
            price: Some(150.0),
            ..Offer::default()
        };
        let mut form = InquiryForm::new(InquirySubject::from(&offer));
        form.draft = InquiryDraft {
            name: "A. Rahman".into(),
            email: "a@x.com".into(),
            phone: "+880".into(),
            check_in: "2026-02-24".into(),
            check_out: "2026-02-26".into(),
            guests: "3 Adults".into(),
            message: "  Late arrival  ".into(),
        };
        form
    }

    #[test]
    fn test_inquiry_maps_to_booking() {
        let mut form = filled();
        let booking = form.begin_send().unwrap();
        assert_eq!(booking.room_title, "Early Bird");
        assert_eq!(booking.members, "3 Adults");
        assert_eq!(booking.total_price, Some(150.0));
        assert_eq!(booking.message.as_deref(), Some("Late arrival"));
        assert_eq!(booking.status, BookingStatus::Pending);
    }

    #[test]
    fn test_inquiry_single_flight() {
        let mut form = filled();
        form.begin_send().unwrap();
        assert!(form.begin_send().is_err());
        form.fail();
        assert!(form.begin_send().is_ok());
    }

    #[test]
    fn test_package_without_price_sends_zero() {
        let package = Package {
            title: "Honeymoon".into(),
            ..Package::default()
        };
        let booking = InquiryDraft::default().to_booking(&InquirySubject::from(&package));
        assert_eq!(booking.total_price, Some(0.0));
        assert_eq!(booking.message, None);
    }
}
