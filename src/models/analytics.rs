//! Presentation-ready facts derived from a [`DailyPrices`] snapshot.

use super::price_level::PriceLevel;
use super::prices::{DailyPrices, HourlyPrice};

pub use super::price_level::classify_price_level;

/// The `n` cheapest hours, ascending by price.
///
/// The sort is stable, so equal prices keep their hour order.
pub fn best_hours(daily: &DailyPrices, n: usize) -> Vec<HourlyPrice> {
    let mut sorted = daily.prices().to_vec();
    sorted.sort_by(|a, b| a.price.total_cmp(&b.price));
    sorted.truncate(n);
    sorted
}

/// All hours ascending by hour (0 to 23).
pub fn sort_by_hour(daily: &DailyPrices) -> Vec<HourlyPrice> {
    let mut sorted = daily.prices().to_vec();
    sorted.sort_by_key(|p| p.hour);
    sorted
}

/// Each hour paired with its level in the day's range, in hour order
pub fn hourly_levels(daily: &DailyPrices) -> Vec<(HourlyPrice, PriceLevel)> {
    let thresholds = daily.thresholds();
    sort_by_hour(daily)
        .into_iter()
        .map(|p| {
            let level = thresholds.classify(p.price);
            (p, level)
        })
        .collect()
}

/// Level of the price in effect during `hour`
pub fn level_at(daily: &DailyPrices, hour: u32) -> Option<(HourlyPrice, PriceLevel)> {
    daily
        .price_at(hour)
        .map(|p| (p.clone(), daily.level_of(p.price)))
}
