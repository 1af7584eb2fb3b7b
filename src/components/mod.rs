pub mod best_hours_card;
pub mod day_panel;
pub mod day_tabs;
pub mod hourly_breakdown;
pub mod now_card;
pub mod price_chart;
pub mod price_indicator;
pub mod prices_summary;
pub mod status;
pub mod theme_toggle;
pub mod tomorrow_pending;

pub use day_panel::DayPanel;
pub use day_tabs::DayTabs;
pub use now_card::NowCard;
pub use price_indicator::PriceIndicator;
pub use status::Status;
pub use theme_toggle::ThemeToggle;
pub use tomorrow_pending::TomorrowPending;
