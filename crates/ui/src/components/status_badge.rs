//! Booking status badge
//!
//! The one place a [`BookingStatus`] turns into colours, used by the admin
//! bookings tab and the dashboard's recent bookings.

use dioxus::prelude::*;
use haven_core::BookingStatus;

/// Tailwind classes for a status
pub fn status_class(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Pending => "bg-amber-500/20 text-amber-300 border-amber-500/40",
        BookingStatus::Confirmed => "bg-emerald-500/20 text-emerald-300 border-emerald-500/40",
        BookingStatus::Cancelled => "bg-rose-500/20 text-rose-300 border-rose-500/40",
    }
}

#[component]
pub fn StatusBadge(status: BookingStatus) -> Element {
    let class = status_class(status);
    rsx! {
        span {
            class: "inline-block px-2 py-0.5 rounded-full border text-xs font-medium {class}",
            "{status}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_status_has_distinct_colour() {
        let classes: Vec<_> = BookingStatus::ALL.iter().map(|s| status_class(*s)).collect();
        assert!(classes[0].contains("amber"));
        assert!(classes[1].contains("emerald"));
        assert!(classes[2].contains("rose"));
    }
}
