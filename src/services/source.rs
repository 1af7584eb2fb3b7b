use crate::config::Config;
use crate::models::{
    day_period::DayPeriod,
    error::AppError,
    prices::{DailyPrices, HOURS_PER_DAY, HourlyPrice},
};
use chrono::NaiveDate;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::cell::RefCell;

/// Anything that can produce one day of hourly prices.
///
/// The mock generator and a real market-data client are interchangeable
/// behind this trait.
#[allow(async_fn_in_trait)]
pub trait PriceSource {
    async fn fetch_day(&self, date: NaiveDate) -> Result<DailyPrices, AppError>;
}

/// Synthesizes a diurnal price curve: cheap nights, expensive midday and
/// evening peaks. Stands in for the regulated-tariff market feed.
pub struct MockPriceSource<R = StdRng> {
    rng: RefCell<R>,
}

impl MockPriceSource {
    /// Creates a source seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates a deterministic source (primarily for testing).
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for MockPriceSource {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> MockPriceSource<R> {
    pub const fn with_rng(rng: R) -> Self {
        Self {
            rng: RefCell::new(rng),
        }
    }

    fn draw(&self, hour: u32) -> Result<f64, AppError> {
        let period = DayPeriod::from_hour(hour)
            .ok_or_else(|| AppError::SourceError(format!("Hour out of range: {hour}")))?;
        let raw = self.rng.borrow_mut().gen_range(period.price_band());
        Ok(round_to_decimals(raw, Config::PRICE_DECIMALS))
    }
}

impl<R: Rng> PriceSource for MockPriceSource<R> {
    async fn fetch_day(&self, date: NaiveDate) -> Result<DailyPrices, AppError> {
        let prices = (0u32..)
            .take(HOURS_PER_DAY)
            .map(|hour| {
                Ok(HourlyPrice {
                    hour,
                    price: self.draw(hour)?,
                    date,
                })
            })
            .collect::<Result<Vec<_>, AppError>>()?;

        DailyPrices::new(date, prices)
    }
}

pub fn round_to_decimals(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 4).unwrap()
    }

    #[test]
    fn test_round_to_decimals() {
        assert_eq!(round_to_decimals(0.123_456_7, 5), 0.123_46);
        assert_eq!(round_to_decimals(0.1, 5), 0.1);
    }

    #[test]
    fn test_prices_stay_in_period_band() {
        let source = MockPriceSource::seeded(7);
        let daily = block_on(source.fetch_day(date())).unwrap();

        for entry in daily.prices() {
            let band = DayPeriod::from_hour(entry.hour).unwrap().price_band();
            // Rounding may land exactly on the open upper bound
            assert!(entry.price >= band.start && entry.price <= band.end);
        }
    }

    #[test]
    fn test_prices_have_five_decimals() {
        let source = MockPriceSource::seeded(11);
        let daily = block_on(source.fetch_day(date())).unwrap();

        for entry in daily.prices() {
            assert_eq!(round_to_decimals(entry.price, 5), entry.price);
        }
    }

    #[test]
    fn test_seeded_sources_agree() {
        let a = block_on(MockPriceSource::seeded(3).fetch_day(date())).unwrap();
        let b = block_on(MockPriceSource::seeded(3).fetch_day(date())).unwrap();
        assert_eq!(a, b);
    }
}
