use super::error::AppError;
use super::price_level::{PriceLevel, PriceThresholds};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::rc::Rc;

pub const HOURS_PER_DAY: usize = 24;

/// Target day of a price request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Day {
    #[default]
    Today,
    Tomorrow,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HourlyPrice {
    pub hour: u32,
    /// €/kWh
    pub price: f64,
    pub date: NaiveDate,
}

/// Immutable snapshot of one calendar day of hourly prices.
///
/// Only constructible through [`DailyPrices::new`], which checks that the
/// entries cover every hour exactly once and derives the summary fields.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPrices {
    date: NaiveDate,
    prices: Vec<HourlyPrice>,
    average_price: f64,
    cheapest_hour: HourlyPrice,
    expensive_hour: HourlyPrice,
}

impl DailyPrices {
    pub fn new(date: NaiveDate, mut prices: Vec<HourlyPrice>) -> Result<Self, AppError> {
        if prices.len() != HOURS_PER_DAY {
            return Err(AppError::DataError(format!(
                "Expected {HOURS_PER_DAY} hourly prices, got {}",
                prices.len()
            )));
        }

        prices.sort_by_key(|p| p.hour);

        for (expected, entry) in (0u32..).zip(&prices) {
            if entry.hour != expected {
                return Err(AppError::DataError(format!(
                    "Hours must cover 0-23 exactly once (found {} at position {expected})",
                    entry.hour
                )));
            }
            if entry.date != date {
                return Err(AppError::DataError(format!(
                    "Hour {} is dated {}, expected {date}",
                    entry.hour, entry.date
                )));
            }
            if !entry.price.is_finite() || entry.price < 0.0 {
                return Err(AppError::DataError(format!(
                    "Invalid price {} at hour {}",
                    entry.price, entry.hour
                )));
            }
        }

        let average_price = prices.iter().map(|p| p.price).sum::<f64>() / prices.len() as f64;

        // Earliest hour wins on ties for both extremes
        let mut cheapest_hour = &prices[0];
        let mut expensive_hour = &prices[0];
        for entry in &prices[1..] {
            if entry.price < cheapest_hour.price {
                cheapest_hour = entry;
            }
            if entry.price > expensive_hour.price {
                expensive_hour = entry;
            }
        }
        let cheapest_hour = cheapest_hour.clone();
        let expensive_hour = expensive_hour.clone();

        Ok(Self {
            date,
            prices,
            average_price,
            cheapest_hour,
            expensive_hour,
        })
    }

    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Entries ordered by hour (0-23)
    pub fn prices(&self) -> &[HourlyPrice] {
        &self.prices
    }

    pub const fn average_price(&self) -> f64 {
        self.average_price
    }

    pub const fn cheapest_hour(&self) -> &HourlyPrice {
        &self.cheapest_hour
    }

    pub const fn expensive_hour(&self) -> &HourlyPrice {
        &self.expensive_hour
    }

    pub fn price_at(&self, hour: u32) -> Option<&HourlyPrice> {
        self.prices.get(usize::try_from(hour).ok()?)
    }

    /// Level boundaries for this day's min-max range
    pub fn thresholds(&self) -> PriceThresholds {
        PriceThresholds::new(self.cheapest_hour.price, self.expensive_hour.price)
    }

    pub fn level_of(&self, price: f64) -> PriceLevel {
        self.thresholds().classify(price)
    }
}

/// Tomorrow's slot in the dashboard state
#[derive(Clone, Debug, PartialEq, Default)]
pub enum TomorrowPrices {
    /// Before the publication hour; not an error
    #[default]
    NotPublished,
    Published(Rc<DailyPrices>),
    /// The fetch failed; shown the same way as `NotPublished`
    Unavailable,
}

impl TomorrowPrices {
    pub const fn data(&self) -> Option<&Rc<DailyPrices>> {
        match self {
            Self::Published(prices) => Some(prices),
            _ => None,
        }
    }
}
