pub mod use_current_hour;
pub mod use_prices;
pub mod use_theme;
