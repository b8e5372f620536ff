//! Admin dashboard figures

use chrono::{DateTime, TimeZone};
use haven_core::BookingStatus;

use crate::booking::Booking;
use crate::package::Package;
use crate::room::Room;

/// Headline numbers on the stats tab
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DashboardSummary {
    pub total_rooms: usize,
    pub total_packages: usize,
    pub total_bookings: usize,
    /// Bookings created on the current local day, or the total when none were
    pub bookings_today: usize,
    pub pending_bookings: usize,
    pub revenue: f64,
}

impl DashboardSummary {
    /// Compute the summary relative to `now`, whose timezone defines "today"
    pub fn compute<Tz: TimeZone>(
        rooms: &[Room],
        bookings: &[Booking],
        packages: &[Package],
        now: &DateTime<Tz>,
    ) -> Self {
        let today = now.date_naive();
        let tz = now.timezone();

        let created_today = bookings
            .iter()
            .filter_map(|b| b.created_at)
            .filter(|ts| ts.with_timezone(&tz).date_naive() == today)
            .count();

        Self {
            total_rooms: rooms.len(),
            total_packages: packages.len(),
            total_bookings: bookings.len(),
            bookings_today: if created_today == 0 {
                bookings.len()
            } else {
                created_today
            },
            pending_bookings: bookings
                .iter()
                .filter(|b| b.status == BookingStatus::Pending)
                .count(),
            revenue: bookings.iter().map(Booking::revenue).sum(),
        }
    }

    /// Revenue with thousands separators, no cents when whole
    pub fn revenue_label(&self) -> String {
        format_currency(self.revenue)
    }
}

/// `1250.5` → `$1,250.50`, `1200.0` → `$1,200`
pub fn format_currency(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let whole = (cents / 100).abs();
    let frac = (cents % 100).abs();

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if cents < 0 { "-" } else { "" };
    if frac == 0 {
        format!("{sign}${grouped}")
    } else {
        format!("{sign}${grouped}.{frac:02}")
    }
}
