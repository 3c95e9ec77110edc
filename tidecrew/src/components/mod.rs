pub mod events_grid;
pub mod help_bar;
pub mod location_filter;
pub mod page;
pub mod search_bar;
pub mod stats_panel;
pub mod weather_panel;

// Re-export core Component trait
pub use tidecrew_core::Component;

pub use events_grid::{EventsGrid, EventsGridProps};
pub use help_bar::{HelpBar, HelpBarProps};
pub use location_filter::{LocationFilter, LocationFilterProps};
pub use page::Page;
pub use search_bar::{SearchBar, SearchBarProps};
pub use stats_panel::{StatsPanel, StatsPanelProps};
pub use weather_panel::{WeatherPanel, WeatherPanelProps};

/// Spinner frames shared by the loading states.
pub const SPINNERS: [&str; 4] = ["◐", "◓", "◑", "◒"];
