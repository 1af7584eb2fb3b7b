use super::source::{MockPriceSource, PriceSource};
use crate::config::Config;
use crate::models::{
    error::AppError,
    prices::{DailyPrices, Day, TomorrowPrices},
};
use chrono::{Days, NaiveDateTime, Timelike};
use std::rc::Rc;

/// Both days' prices as produced by a single refresh
#[derive(Clone, Debug, PartialEq)]
pub struct PricesSnapshot {
    pub today: Rc<DailyPrices>,
    pub tomorrow: TomorrowPrices,
}

/// Serves today's and tomorrow's prices from a [`PriceSource`].
///
/// Every failure from the source is collapsed into [`AppError::FetchFailed`].
pub struct PriceProvider<S = MockPriceSource> {
    source: S,
    publication_hour: u32,
}

impl PriceProvider {
    /// Creates a provider backed by the mock generator.
    pub fn mock() -> Self {
        Self::new(MockPriceSource::new())
    }
}

impl<S: PriceSource> PriceProvider<S> {
    pub const fn new(source: S) -> Self {
        Self {
            source,
            publication_hour: Config::TOMORROW_PUBLICATION_HOUR,
        }
    }

    /// Overrides the local hour from which tomorrow's prices are served.
    pub fn with_publication_hour(mut self, hour: u32) -> Self {
        self.publication_hour = hour;
        self
    }

    /// Fetches today's prices. `now` is the caller's local wall-clock time.
    pub async fn today(&self, now: NaiveDateTime) -> Result<DailyPrices, AppError> {
        self.source
            .fetch_day(now.date())
            .await
            .map_err(|_| AppError::FetchFailed)
    }

    /// Fetches tomorrow's prices, or `None` before the publication hour.
    pub async fn tomorrow(&self, now: NaiveDateTime) -> Result<Option<DailyPrices>, AppError> {
        if now.hour() < self.publication_hour {
            return Ok(None);
        }

        let date = now
            .date()
            .checked_add_days(Days::new(1))
            .ok_or(AppError::FetchFailed)?;

        self.source
            .fetch_day(date)
            .await
            .map(Some)
            .map_err(|_| AppError::FetchFailed)
    }

    pub async fn prices_for(
        &self,
        day: Day,
        now: NaiveDateTime,
    ) -> Result<Option<DailyPrices>, AppError> {
        match day {
            Day::Today => self.today(now).await.map(Some),
            Day::Tomorrow => self.tomorrow(now).await,
        }
    }

    /// Fetches both days. Only a failure for today fails the snapshot;
    /// tomorrow degrades to [`TomorrowPrices::Unavailable`].
    pub async fn snapshot(&self, now: NaiveDateTime) -> Result<PricesSnapshot, AppError> {
        let today = Rc::new(self.today(now).await?);

        let tomorrow = match self.tomorrow(now).await {
            Ok(Some(prices)) => TomorrowPrices::Published(Rc::new(prices)),
            Ok(None) => TomorrowPrices::NotPublished,
            Err(_) => TomorrowPrices::Unavailable,
        };

        Ok(PricesSnapshot { today, tomorrow })
    }
}

impl Default for PriceProvider {
    fn default() -> Self {
        Self::mock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use futures::executor::block_on;

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 12, 31)
            .unwrap()
            .and_hms_opt(hour, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_today_uses_local_date() {
        let provider = PriceProvider::new(MockPriceSource::seeded(1));
        let daily = block_on(provider.today(at(9))).unwrap();
        assert_eq!(daily.date(), at(9).date());
    }

    #[test]
    fn test_tomorrow_crosses_year_boundary() {
        let provider = PriceProvider::new(MockPriceSource::seeded(1));
        let daily = block_on(provider.tomorrow(at(21))).unwrap().unwrap();
        assert_eq!(daily.date(), NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
    }

    #[test]
    fn test_custom_publication_hour() {
        let provider = PriceProvider::new(MockPriceSource::seeded(1)).with_publication_hour(13);
        assert!(block_on(provider.tomorrow(at(12))).unwrap().is_none());
        assert!(block_on(provider.tomorrow(at(13))).unwrap().is_some());
    }

    #[test]
    fn test_prices_for_dispatches_on_day() {
        let provider = PriceProvider::new(MockPriceSource::seeded(1));
        assert!(block_on(provider.prices_for(Day::Today, at(8))).unwrap().is_some());
        assert!(block_on(provider.prices_for(Day::Tomorrow, at(8))).unwrap().is_none());
    }
}
