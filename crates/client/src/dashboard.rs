//! Dashboard loading

use chrono::Local;
use haven_model::{Booking, DashboardSummary, Package, Room};

use crate::api::ApiClient;

/// Lists behind the stats tab plus the computed summary
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    pub rooms: Vec<Room>,
    pub bookings: Vec<Booking>,
    pub packages: Vec<Package>,
    pub summary: DashboardSummary,
}

/// Fetch rooms, bookings and packages concurrently. A failed fetch counts
/// as an empty list.
pub async fn load_dashboard(api: &ApiClient) -> DashboardData {
    let rooms_client = api.rooms();
    let bookings_client = api.bookings();
    let packages_client = api.packages();

    let (rooms, bookings, packages) = tokio::join!(
        rooms_client.list_or_empty(),
        bookings_client.list_or_empty(),
        packages_client.list_or_empty(),
    );

    let summary = DashboardSummary::compute(&rooms, &bookings, &packages, &Local::now());
    DashboardData {
        rooms,
        bookings,
        packages,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MockTransport;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_failed_fetch_counts_as_empty() {
        let mock = MockTransport::new();
        mock.route(
            "http://api.test/api/rooms",
            200,
            json!([{"_id": "r1", "title": "Ocean Suite"}]).to_string(),
        )
        .route("http://api.test/api/bookings", 500, "")
        .route(
            "http://api.test/api/packages",
            200,
            json!([{"_id": "p1"}, {"_id": "p2"}]).to_string(),
        );

        let api = ApiClient::with_transport(Arc::new(mock.clone()), "http://api.test");
        let data = load_dashboard(&api).await;

        assert_eq!(mock.request_count(), 3);
        assert_eq!(data.summary.total_rooms, 1);
        assert_eq!(data.summary.total_bookings, 0);
        assert_eq!(data.summary.total_packages, 2);
        assert_eq!(data.summary.revenue, 0.0);
    }
}
