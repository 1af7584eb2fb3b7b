pub mod analytics;
pub mod day_period;
pub mod error;
pub mod price_level;
pub mod prices;
