//! Reservation wizard
//!
//! Three linear steps that accumulate one booking draft:
//!
//! 1. Suite & dates: room title, check-in, check-out
//! 2. Guest identity: name, email
//! 3. Contact & party: phone, address, members
//!
//! Going back never loses data. Submission is only possible from the last
//! step, and only once at a time: the phase moves to `Submitting` until the
//! caller reports the outcome. `Submitted` is terminal: the wizard cannot be
//! edited or reset afterwards, leaving the page is the only exit. The
//! idempotency key is fixed per wizard instance so a retried POST after a
//! failure carries the same key.

use haven_core::{BookingStatus, HavenError, HavenResult};
use uuid::Uuid;

use crate::booking::Booking;
use crate::lenient::parse_date;
use crate::room::{Room, distinct_titles};
use crate::validation::ValidationResult;

/// Party choices offered on step 3
pub const MEMBER_OPTIONS: &[&str] = &[
    "1 Adult",
    "2 Adults",
    "2 Adults, 1 Child",
    "2 Adults, 2 Children",
    "3 Adults",
    "Family (4+)",
];

// ============================================================================
// Step / Phase
// ============================================================================

/// Wizard position
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WizardStep {
    SuiteAndDates,
    GuestIdentity,
    ContactAndParty,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [
        WizardStep::SuiteAndDates,
        WizardStep::GuestIdentity,
        WizardStep::ContactAndParty,
    ];

    /// 1-based step number shown in the progress header
    pub fn number(self) -> u8 {
        match self {
            WizardStep::SuiteAndDates => 1,
            WizardStep::GuestIdentity => 2,
            WizardStep::ContactAndParty => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::SuiteAndDates => "Suite & Dates",
            WizardStep::GuestIdentity => "Guest Identity",
            WizardStep::ContactAndParty => "Contact & Party",
        }
    }

    fn next(self) -> Option<WizardStep> {
        match self {
            WizardStep::SuiteAndDates => Some(WizardStep::GuestIdentity),
            WizardStep::GuestIdentity => Some(WizardStep::ContactAndParty),
            WizardStep::ContactAndParty => None,
        }
    }

    fn previous(self) -> Option<WizardStep> {
        match self {
            WizardStep::SuiteAndDates => None,
            WizardStep::GuestIdentity => Some(WizardStep::SuiteAndDates),
            WizardStep::ContactAndParty => Some(WizardStep::GuestIdentity),
        }
    }
}

/// Submission lifecycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WizardPhase {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

// ============================================================================
// Draft
// ============================================================================

/// Field values collected across all steps
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationDraft {
    pub room_title: String,
    /// `YYYY-MM-DD` as typed into a date input
    pub check_in: String,
    pub check_out: String,
    pub guest_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub members: String,
}

impl Default for ReservationDraft {
    fn default() -> Self {
        Self {
            room_title: String::new(),
            check_in: String::new(),
            check_out: String::new(),
            guest_name: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            members: MEMBER_OPTIONS[0].to_string(),
        }
    }
}

impl ReservationDraft {
    /// Validate the fields owned by one step
    pub fn check_step(&self, step: WizardStep) -> ValidationResult {
        let mut result = ValidationResult::ok();
        match step {
            WizardStep::SuiteAndDates => {
                result
                    .require_date("checkIn", &self.check_in)
                    .require_date("checkOut", &self.check_out);
            }
            WizardStep::GuestIdentity => {
                result
                    .require("guestName", &self.guest_name)
                    .require_email("email", &self.email);
            }
            WizardStep::ContactAndParty => {
                result
                    .require("phone", &self.phone)
                    .require("address", &self.address);
            }
        }
        result
    }

    /// Validate every step, in order
    pub fn check_all(&self) -> ValidationResult {
        let mut all = ValidationResult::ok();
        for step in WizardStep::ALL {
            all.errors.extend(self.check_step(step).errors);
        }
        all
    }

    /// The booking to POST. Price is settled on arrival, so it is zero here.
    pub fn to_booking(&self) -> Booking {
        Booking {
            guest_name: self.guest_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            room_title: self.room_title.clone(),
            check_in: parse_date(&self.check_in),
            check_out: parse_date(&self.check_out),
            members: self.members.clone(),
            address: self.address.trim().to_string(),
            status: BookingStatus::Pending,
            total_price: Some(0.0),
            ..Booking::default()
        }
    }
}

// ============================================================================
// Wizard
// ============================================================================

/// The reservation wizard state machine
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationWizard {
    step: WizardStep,
    phase: WizardPhase,
    draft: ReservationDraft,
    room_titles: Vec<String>,
    idempotency_key: Uuid,
    confirmed: Option<Booking>,
}

impl Default for ReservationWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl ReservationWizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::SuiteAndDates,
            phase: WizardPhase::Editing,
            draft: ReservationDraft::default(),
            room_titles: Vec::new(),
            idempotency_key: Uuid::new_v4(),
            confirmed: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn phase(&self) -> WizardPhase {
        self.phase
    }

    pub fn draft(&self) -> &ReservationDraft {
        &self.draft
    }

    /// Mutable access for input bindings. Ignored once submitted.
    pub fn draft_mut(&mut self) -> Option<&mut ReservationDraft> {
        match self.phase {
            WizardPhase::Editing => Some(&mut self.draft),
            _ => None,
        }
    }

    /// Header value for the booking POST
    pub fn idempotency_key(&self) -> String {
        self.idempotency_key.to_string()
    }

    /// Room choices for step 1
    pub fn room_titles(&self) -> &[String] {
        &self.room_titles
    }

    /// Whether any room can be chosen; the UI shows a placeholder otherwise
    pub fn has_rooms(&self) -> bool {
        !self.room_titles.is_empty()
    }

    /// Feed the fetched room collection in. The room defaults to the first
    /// title unless the guest already picked one that still exists.
    pub fn set_rooms(&mut self, rooms: &[Room]) {
        self.room_titles = distinct_titles(rooms);
        let keep = self.room_titles.iter().any(|t| *t == self.draft.room_title);
        if !keep {
            self.draft.room_title = self.room_titles.first().cloned().unwrap_or_default();
        }
    }

    /// Errors for the current step, for inline display
    pub fn current_errors(&self) -> ValidationResult {
        self.draft.check_step(self.step)
    }

    /// Advance one step if the current step is complete
    pub fn next(&mut self) -> HavenResult<WizardStep> {
        if self.phase != WizardPhase::Editing {
            return Err(HavenError::validation("The reservation can no longer be edited"));
        }
        let Some(next) = self.step.next() else {
            return Err(HavenError::validation("Already on the last step"));
        };
        self.draft.check_step(self.step).into_result(&[])?;
        self.step = next;
        Ok(next)
    }

    /// Go back one step, keeping every value entered so far
    pub fn back(&mut self) -> WizardStep {
        if self.phase == WizardPhase::Editing {
            if let Some(previous) = self.step.previous() {
                self.step = previous;
            }
        }
        self.step
    }

    /// Whether the submit button should be enabled
    pub fn can_submit(&self) -> bool {
        self.step == WizardStep::ContactAndParty
            && self.phase == WizardPhase::Editing
            && self.draft.check_all().is_valid()
    }

    /// Enter the `Submitting` phase and return the booking to send.
    ///
    /// Refused unless on the last step with every field valid and no
    /// submission already in flight.
    pub fn begin_submit(&mut self) -> HavenResult<Booking> {
        match self.phase {
            WizardPhase::Submitting => {
                return Err(HavenError::validation("A reservation is already being sent"));
            }
            WizardPhase::Submitted => {
                return Err(HavenError::validation("This reservation was already sent"));
            }
            WizardPhase::Editing => {}
        }
        if self.step != WizardStep::ContactAndParty {
            return Err(HavenError::validation("Complete every step before confirming"));
        }
        self.draft.check_all().into_result(&[])?;
        self.phase = WizardPhase::Submitting;
        Ok(self.draft.to_booking())
    }

    /// Server accepted the booking
    pub fn complete(&mut self, booking: Booking) {
        if self.phase != WizardPhase::Submitting {
            return;
        }
        self.phase = WizardPhase::Submitted;
        self.confirmed = Some(booking);
    }

    /// Submission failed: back to step 3 with the draft intact
    pub fn fail(&mut self) {
        if self.phase != WizardPhase::Submitting {
            return;
        }
        self.phase = WizardPhase::Editing;
        self.step = WizardStep::ContactAndParty;
    }

    /// Booking echoed by the server after a successful submit
    pub fn confirmed(&self) -> Option<&Booking> {
        self.confirmed.as_ref()
    }

    /// Thank-you text for the terminal screen
    pub fn thank_you(&self) -> Option<String> {
        if self.phase != WizardPhase::Submitted {
            return None;
        }
        let (name, room) = match &self.confirmed {
            Some(b) if !b.guest_name.is_empty() => (b.guest_name.as_str(), b.room_title.as_str()),
            _ => (self.draft.guest_name.as_str(), self.draft.room_title.as_str()),
        };
        Some(if room.is_empty() {
            format!("Thank you {name}! Your reservation request has been received.")
        } else {
            format!("Thank you {name}! Your reservation request for {room} has been received.")
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn rooms(titles: &[&str]) -> Vec<Room> {
        titles
            .iter()
            .map(|t| Room {
                title: t.to_string(),
                ..Room::default()
            })
            .collect()
    }

    fn filled_wizard() -> ReservationWizard {
        let mut wizard = ReservationWizard::new();
        wizard.set_rooms(&rooms(&["Ocean Suite", "Garden Villa"]));
        {
            let draft = wizard.draft_mut().unwrap();
            draft.check_in = "2026-02-24".into();
            draft.check_out = "2026-02-26".into();
        }
        wizard.next().unwrap();
        {
            let draft = wizard.draft_mut().unwrap();
            draft.guest_name = "A. Rahman".into();
            draft.email = "a@x.com".into();
        }
        wizard.next().unwrap();
        {
            let draft = wizard.draft_mut().unwrap();
            draft.phone = "+8801700000000".into();
            draft.address = "Dhaka".into();
            draft.members = "2 Adults".into();
        }
        wizard
    }

    #[test]
    fn test_room_defaults_to_first_title() {
        let mut wizard = ReservationWizard::new();
        wizard.set_rooms(&rooms(&["Ocean Suite", "Garden Villa", "Ocean Suite"]));
        assert_eq!(wizard.room_titles(), ["Ocean Suite", "Garden Villa"]);
        assert_eq!(wizard.draft().room_title, "Ocean Suite");
    }

    #[test]
    fn test_empty_room_list_does_not_block() {
        let mut wizard = ReservationWizard::new();
        wizard.set_rooms(&[]);
        assert!(!wizard.has_rooms());
        {
            let draft = wizard.draft_mut().unwrap();
            draft.check_in = "2026-02-24".into();
            draft.check_out = "2026-02-26".into();
        }
        assert_eq!(wizard.next().unwrap(), WizardStep::GuestIdentity);
    }

    #[test]
    fn test_step_one_requires_dates() {
        let mut wizard = ReservationWizard::new();
        assert!(wizard.next().is_err());
        assert_eq!(wizard.step(), WizardStep::SuiteAndDates);
        assert!(wizard.current_errors().message_for("checkIn").is_some());
    }

    #[test]
    fn test_no_date_ordering_check() {
        let mut wizard = ReservationWizard::new();
        let draft = wizard.draft_mut().unwrap();
        draft.check_in = "2026-03-01".into();
        draft.check_out = "2026-02-01".into();
        assert!(wizard.next().is_ok());
    }

    #[test]
    fn test_invalid_email_blocks_step_two() {
        let mut wizard = ReservationWizard::new();
        {
            let draft = wizard.draft_mut().unwrap();
            draft.check_in = "2026-02-24".into();
            draft.check_out = "2026-02-26".into();
        }
        wizard.next().unwrap();
        {
            let draft = wizard.draft_mut().unwrap();
            draft.guest_name = "A. Rahman".into();
            draft.email = "not-an-email".into();
        }
        assert!(wizard.next().is_err());
        assert_eq!(wizard.step(), WizardStep::GuestIdentity);
    }

    #[test]
    fn test_back_keeps_values() {
        let mut wizard = filled_wizard();
        assert_eq!(wizard.back(), WizardStep::GuestIdentity);
        assert_eq!(wizard.back(), WizardStep::SuiteAndDates);
        assert_eq!(wizard.back(), WizardStep::SuiteAndDates);
        assert_eq!(wizard.draft().guest_name, "A. Rahman");
        assert_eq!(wizard.draft().phone, "+8801700000000");
    }

    #[test]
    fn test_submit_builds_pending_zero_price_booking() {
        let mut wizard = filled_wizard();
        assert!(wizard.can_submit());

        let booking = wizard.begin_submit().unwrap();
        assert_eq!(booking.room_title, "Ocean Suite");
        assert_eq!(booking.check_in, NaiveDate::from_ymd_opt(2026, 2, 24));
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.total_price, Some(0.0));
        assert_eq!(booking.members, "2 Adults");
        assert_eq!(wizard.phase(), WizardPhase::Submitting);
    }

    #[test]
    fn test_double_submit_refused() {
        let mut wizard = filled_wizard();
        wizard.begin_submit().unwrap();
        assert!(wizard.begin_submit().is_err());
        assert!(!wizard.can_submit());
        assert!(wizard.draft_mut().is_none());
    }

    #[test]
    fn test_submit_only_from_last_step() {
        let mut wizard = filled_wizard();
        wizard.back();
        assert!(wizard.begin_submit().is_err());
        assert_eq!(wizard.phase(), WizardPhase::Editing);
    }

    #[test]
    fn test_failure_returns_to_step_three_with_same_key() {
        let mut wizard = filled_wizard();
        let key = wizard.idempotency_key();
        wizard.begin_submit().unwrap();
        wizard.fail();

        assert_eq!(wizard.phase(), WizardPhase::Editing);
        assert_eq!(wizard.step(), WizardStep::ContactAndParty);
        assert_eq!(wizard.draft().guest_name, "A. Rahman");
        assert_eq!(wizard.idempotency_key(), key);
        assert!(wizard.begin_submit().is_ok());
    }

    #[test]
    fn test_success_shows_thank_you() {
        let mut wizard = filled_wizard();
        let booking = wizard.begin_submit().unwrap();
        wizard.complete(booking);

        assert_eq!(wizard.phase(), WizardPhase::Submitted);
        let text = wizard.thank_you().unwrap();
        assert!(text.contains("A. Rahman"));
        assert!(text.contains("Ocean Suite"));
    }

    #[test]
    fn test_submitted_is_terminal() {
        let mut wizard = filled_wizard();
        let key = wizard.idempotency_key();
        let booking = wizard.begin_submit().unwrap();
        wizard.complete(booking);

        assert!(wizard.next().is_err());
        assert_eq!(wizard.back(), WizardStep::ContactAndParty);
        assert!(wizard.draft_mut().is_none());
        assert!(wizard.begin_submit().is_err());
        wizard.fail();

        assert_eq!(wizard.phase(), WizardPhase::Submitted);
        assert_eq!(wizard.idempotency_key(), key);
        assert!(wizard.thank_you().is_some());
    }

    #[test]
    fn test_outcome_ignored_unless_submitting() {
        let mut wizard = filled_wizard();
        wizard.complete(Booking::default());
        assert_eq!(wizard.phase(), WizardPhase::Editing);
        assert!(wizard.confirmed().is_none());
    }
}
