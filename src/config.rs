/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Enable automatic data refresh polling
    pub const ENABLE_AUTO_REFRESH: bool = true;

    /// Price refresh interval in milliseconds (1 hour = 3,600,000ms)
    pub const REFRESH_INTERVAL_MS: u32 = 3_600_000;

    /// How often the current hour is re-read from the wall clock (1 minute)
    pub const CLOCK_TICK_MS: u32 = 60_000;

    /// Local hour from which tomorrow's prices are published
    pub const TOMORROW_PUBLICATION_HOUR: u32 = 20;

    /// Number of hours listed in the best-hours card
    pub const BEST_HOURS_COUNT: usize = 3;

    /// Decimal places kept for synthesized prices and shown in the UI
    pub const PRICE_DECIMALS: i32 = 5;
}
