//! The cleanup roster
//!
//! A fixed in-memory list standing in for a future network call; the grid
//! treats it exactly like fetched data (it arrives via `EventsDidLoad`).

use crate::state::CleanupEvent;

/// Upcoming cleanups, in display order.
pub fn sample_events() -> Vec<CleanupEvent> {
    vec![
        CleanupEvent {
            id: 1,
            title: "Pasir Ris Beach Cleanup".into(),
            date: "2025-12-05".into(),
            time: "09:00".into(),
            location: "Pasir Ris Beach, Singapore".into(),
            participants: 24,
            weather: "⛈ Thundery Showers, 33°C".into(),
        },
        CleanupEvent {
            id: 2,
            title: "East Coast Park Clean Squad".into(),
            date: "2025-12-08".into(),
            time: "10:00".into(),
            location: "East Coast Park, Singapore".into(),
            participants: 18,
            weather: "⛈ Thundery Showers, 33°C".into(),
        },
        CleanupEvent {
            id: 3,
            title: "Sentosa Beach Mission".into(),
            date: "2025-12-10".into(),
            time: "06:30".into(),
            location: "Sentosa Island, Singapore".into(),
            participants: 32,
            weather: "⛈ Thundery Showers, 34°C".into(),
        },
        CleanupEvent {
            id: 4,
            title: "Changi Beach Cleanup".into(),
            date: "2025-12-12".into(),
            time: "08:00".into(),
            location: "Changi Beach, Singapore".into(),
            participants: 15,
            weather: "🌤 Partly Cloudy, 32°C".into(),
        },
    ]
}

/// Location filter choices. The first entry means "no filter".
pub fn locations() -> Vec<String> {
    vec![
        "All locations".into(),
        "Pasir Ris".into(),
        "East Coast".into(),
        "Sentosa".into(),
        "Changi".into(),
    ]
}
