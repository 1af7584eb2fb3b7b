#[cfg(test)]
mod tests {
    use chrono::{Days, NaiveDate, NaiveDateTime};
    use futures::executor::block_on;
    use pvpc_dashboard::components::price_chart::series_data;
    use pvpc_dashboard::hooks::use_prices::{
        FETCH_ERROR_MESSAGE, PricesAction, PricesState, RefreshTicket,
    };
    use pvpc_dashboard::models::{
        analytics::{best_hours, classify_price_level, hourly_levels, sort_by_hour},
        day_period::DayPeriod,
        error::AppError,
        price_level::PriceLevel,
        prices::{DailyPrices, HourlyPrice, TomorrowPrices},
    };
    use pvpc_dashboard::services::{
        provider::{PriceProvider, PricesSnapshot},
        source::{MockPriceSource, PriceSource},
    };
    use std::collections::HashSet;
    use std::rc::Rc;
    use yew::functional::Reducible;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 4).unwrap()
    }

    fn at(hour: u32) -> NaiveDateTime {
        today().and_hms_opt(hour, 0, 0).unwrap()
    }

    // 24 entries whose first hours carry `head`, the rest priced at `rest`
    fn daily_with(head: &[f64], rest: f64) -> DailyPrices {
        let prices = (0u32..24)
            .map(|hour| HourlyPrice {
                hour,
                price: head.get(hour as usize).copied().unwrap_or(rest),
                date: today(),
            })
            .collect();
        DailyPrices::new(today(), prices).unwrap()
    }

    fn generated(seed: u64) -> DailyPrices {
        block_on(MockPriceSource::seeded(seed).fetch_day(today())).unwrap()
    }

    fn snapshot(seed: u64) -> PricesSnapshot {
        PricesSnapshot {
            today: Rc::new(generated(seed)),
            tomorrow: TomorrowPrices::NotPublished,
        }
    }

    /// Source that always fails
    struct BrokenSource;

    impl PriceSource for BrokenSource {
        async fn fetch_day(&self, _date: NaiveDate) -> Result<DailyPrices, AppError> {
            Err(AppError::SourceError("feed offline".to_string()))
        }
    }

    /// Source that only serves one date
    struct TodayOnlySource(MockPriceSource);

    impl PriceSource for TodayOnlySource {
        async fn fetch_day(&self, date: NaiveDate) -> Result<DailyPrices, AppError> {
            if date == today() {
                self.0.fetch_day(date).await
            } else {
                Err(AppError::SourceError(format!("{date} not published")))
            }
        }
    }

    // ===== Generated Snapshot Tests =====

    #[test]
    fn test_generated_day_covers_every_hour() {
        for seed in 0..20 {
            let daily = generated(seed);
            assert_eq!(daily.prices().len(), 24);

            let hours: HashSet<u32> = daily.prices().iter().map(|p| p.hour).collect();
            assert_eq!(hours, (0..24).collect::<HashSet<_>>());
            assert!(daily.prices().iter().all(|p| p.date == daily.date()));
        }
    }

    #[test]
    fn test_generated_day_statistics() {
        for seed in 0..20 {
            let daily = generated(seed);
            let mean = daily.prices().iter().map(|p| p.price).sum::<f64>() / 24.0;
            assert!((daily.average_price() - mean).abs() < 1e-12);

            for entry in daily.prices() {
                assert!(daily.cheapest_hour().price <= entry.price);
                assert!(entry.price <= daily.expensive_hour().price);
            }
        }
    }

    #[test]
    fn test_bracket_means_follow_demand_curve() {
        let source = MockPriceSource::seeded(2024);
        let mut totals = [0.0; 3];
        let mut counts = [0usize; 3];

        for offset in 0..60 {
            let date = today().checked_add_days(Days::new(offset)).unwrap();
            let daily = block_on(source.fetch_day(date)).unwrap();
            for entry in daily.prices() {
                let slot = match DayPeriod::from_hour(entry.hour).unwrap() {
                    DayPeriod::Night => 0,
                    DayPeriod::MiddayPeak => 1,
                    DayPeriod::EveningPeak => 2,
                    _ => continue,
                };
                totals[slot] += entry.price;
                counts[slot] += 1;
            }
        }

        let means: Vec<f64> = (0..3).map(|i| totals[i] / counts[i] as f64).collect();
        assert!(means[0] < means[1], "night {} >= midday {}", means[0], means[1]);
        assert!(means[1] < means[2], "midday {} >= evening {}", means[1], means[2]);
    }

    #[test]
    fn test_daily_prices_serialization() {
        let daily = daily_with(&[0.10, 0.30, 0.20], 0.25);
        let json = serde_json::to_value(&daily).unwrap();

        assert_eq!(json["date"], "2025-10-04");
        assert_eq!(json["prices"].as_array().unwrap().len(), 24);
        assert_eq!(json["cheapestHour"]["hour"], 0);
        assert_eq!(json["expensiveHour"]["hour"], 1);
        assert!(json["averagePrice"].is_f64());
    }

    // ===== Analytics Tests =====

    #[test]
    fn test_classify_range_endpoints() {
        let daily = generated(5);
        let min = daily.cheapest_hour().price;
        let max = daily.expensive_hour().price;
        assert!(max > min);
        assert_eq!(classify_price_level(min, min, max), PriceLevel::Cheap);
        assert_eq!(classify_price_level(max, min, max), PriceLevel::Expensive);
    }

    #[test]
    fn test_classify_degenerate_range() {
        for price in [0.0, 0.1, 0.25] {
            assert_eq!(classify_price_level(price, price, price), PriceLevel::Cheap);
        }
    }

    #[test]
    fn test_worked_example() {
        let daily = daily_with(&[0.10, 0.30, 0.20], 0.30);

        assert_eq!(classify_price_level(0.10, 0.10, 0.30), PriceLevel::Cheap);
        assert_eq!(classify_price_level(0.30, 0.10, 0.30), PriceLevel::Expensive);
        assert_eq!(classify_price_level(0.20, 0.10, 0.30), PriceLevel::Medium);

        let best: Vec<(u32, f64)> = best_hours(&daily, 2)
            .into_iter()
            .map(|p| (p.hour, p.price))
            .collect();
        assert_eq!(best, vec![(0, 0.10), (2, 0.20)]);
    }

    #[test]
    fn test_best_hours_sorted_subset() {
        let daily = generated(9);
        let best = best_hours(&daily, 3);

        assert_eq!(best.len(), 3);
        assert!(best.windows(2).all(|w| w[0].price <= w[1].price));
        assert!(best.iter().all(|p| daily.prices().contains(p)));
        assert_eq!(best[0], *daily.cheapest_hour());
    }

    #[test]
    fn test_best_hours_ties_keep_hour_order() {
        let daily = daily_with(&[0.2, 0.2, 0.1, 0.2], 0.3);
        let hours: Vec<u32> = best_hours(&daily, 4).iter().map(|p| p.hour).collect();
        assert_eq!(hours, vec![2, 0, 1, 3]);
    }

    #[test]
    fn test_best_hours_more_than_available() {
        let daily = generated(1);
        assert_eq!(best_hours(&daily, 100).len(), 24);
    }

    #[test]
    fn test_sort_by_hour() {
        let daily = generated(4);
        let hours: Vec<u32> = sort_by_hour(&daily).iter().map(|p| p.hour).collect();
        assert_eq!(hours, (0..24).collect::<Vec<_>>());
    }

    #[test]
    fn test_hourly_levels_match_day_range() {
        let daily = daily_with(&[0.10, 0.30, 0.20], 0.30);
        let levels = hourly_levels(&daily);

        assert_eq!(levels[0].1, PriceLevel::Cheap);
        assert_eq!(levels[1].1, PriceLevel::Expensive);
        assert_eq!(levels[2].1, PriceLevel::Medium);
    }

    #[test]
    fn test_chart_series_in_hour_order() {
        let daily = daily_with(&[0.10, 0.30, 0.20], 0.25);
        let (labels, values) = series_data(&daily);

        assert_eq!(labels.len(), 24);
        assert_eq!(labels[0], "00:00");
        assert_eq!(labels[23], "23:00");
        assert_eq!(&values[..3], &[0.10, 0.30, 0.20]);
    }

    // ===== Provider Tests =====

    #[test]
    fn test_tomorrow_absent_before_publication() {
        let provider = PriceProvider::new(MockPriceSource::seeded(1));
        assert_eq!(block_on(provider.tomorrow(at(19))).unwrap(), None);
    }

    #[test]
    fn test_tomorrow_published_from_twenty() {
        let provider = PriceProvider::new(MockPriceSource::seeded(1));
        let expected = today().checked_add_days(Days::new(1)).unwrap();

        for hour in [20, 23] {
            let daily = block_on(provider.tomorrow(at(hour))).unwrap().unwrap();
            assert_eq!(daily.date(), expected);
            assert_eq!(daily.prices().len(), 24);
        }
    }

    #[test]
    fn test_source_failure_is_generic() {
        let provider = PriceProvider::new(BrokenSource);
        assert_eq!(block_on(provider.today(at(10))), Err(AppError::FetchFailed));
        assert_eq!(block_on(provider.tomorrow(at(21))), Err(AppError::FetchFailed));
        assert_eq!(
            AppError::FetchFailed.to_string(),
            "Failed to fetch electricity prices"
        );
    }

    #[test]
    fn test_snapshot_fails_only_for_today() {
        let provider = PriceProvider::new(BrokenSource);
        assert_eq!(block_on(provider.snapshot(at(21))), Err(AppError::FetchFailed));
    }

    #[test]
    fn test_snapshot_tomorrow_states() {
        let provider = PriceProvider::new(TodayOnlySource(MockPriceSource::seeded(3)));

        let early = block_on(provider.snapshot(at(8))).unwrap();
        assert_eq!(early.tomorrow, TomorrowPrices::NotPublished);

        let late = block_on(provider.snapshot(at(21))).unwrap();
        assert_eq!(late.today.date(), today());
        assert_eq!(late.tomorrow, TomorrowPrices::Unavailable);
        assert!(late.tomorrow.data().is_none());

        let provider = PriceProvider::new(MockPriceSource::seeded(3));
        let published = block_on(provider.snapshot(at(21))).unwrap();
        assert!(published.tomorrow.data().is_some());
    }

    // ===== PricesState Tests =====

    #[test]
    fn test_state_commits_latest_refresh() {
        let t1 = RefreshTicket::default().next();
        let state = Rc::new(PricesState::default()).reduce(PricesAction::Started(t1));
        assert!(state.is_loading());

        let snap = snapshot(1);
        let state = state.reduce(PricesAction::Loaded {
            ticket: t1,
            snapshot: snap.clone(),
        });

        assert!(!state.is_loading());
        assert_eq!(state.today, Some(snap.today));
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_state_discards_stale_result() {
        let t1 = RefreshTicket::default().next();
        let t2 = t1.next();

        let state = Rc::new(PricesState::default())
            .reduce(PricesAction::Started(t1))
            .reduce(PricesAction::Started(t2));

        let state = state.reduce(PricesAction::Loaded {
            ticket: t1,
            snapshot: snapshot(1),
        });
        assert!(state.today.is_none());
        assert!(state.is_loading());

        let fresh = snapshot(2);
        let state = state.reduce(PricesAction::Loaded {
            ticket: t2,
            snapshot: fresh.clone(),
        });
        assert_eq!(state.today, Some(fresh.today));
    }

    #[test]
    fn test_state_ignores_duplicate_completion() {
        let t1 = RefreshTicket::default().next();
        let first = snapshot(1);

        let state = Rc::new(PricesState::default())
            .reduce(PricesAction::Started(t1))
            .reduce(PricesAction::Loaded {
                ticket: t1,
                snapshot: first.clone(),
            });
        let before = state.clone();

        let state = state.reduce(PricesAction::Loaded {
            ticket: t1,
            snapshot: snapshot(2),
        });
        assert!(Rc::ptr_eq(&before, &state));
        assert_eq!(state.today, Some(first.today));
    }

    #[test]
    fn test_state_failure_keeps_previous_data() {
        let t1 = RefreshTicket::default().next();
        let t2 = t1.next();
        let first = snapshot(1);

        let state = Rc::new(PricesState::default())
            .reduce(PricesAction::Started(t1))
            .reduce(PricesAction::Loaded {
                ticket: t1,
                snapshot: first.clone(),
            })
            .reduce(PricesAction::Started(t2))
            .reduce(PricesAction::Failed {
                ticket: t2,
                message: FETCH_ERROR_MESSAGE.to_string(),
            });

        assert!(!state.is_loading());
        assert_eq!(state.error.as_deref(), Some(FETCH_ERROR_MESSAGE));
        assert_eq!(state.today, Some(first.today));
    }

    #[test]
    fn test_state_new_refresh_clears_error() {
        let t1 = RefreshTicket::default().next();
        let state = Rc::new(PricesState::default())
            .reduce(PricesAction::Started(t1))
            .reduce(PricesAction::Failed {
                ticket: t1,
                message: FETCH_ERROR_MESSAGE.to_string(),
            })
            .reduce(PricesAction::Started(t1.next()));

        assert_eq!(state.error, None);
        assert!(state.is_loading());
    }

    #[test]
    fn test_state_rejects_reused_ticket() {
        let t1 = RefreshTicket::default().next();
        let state = Rc::new(PricesState::default())
            .reduce(PricesAction::Started(t1))
            .reduce(PricesAction::Failed {
                ticket: t1,
                message: FETCH_ERROR_MESSAGE.to_string(),
            });
        let before = state.clone();

        let state = state.reduce(PricesAction::Started(t1));
        assert!(Rc::ptr_eq(&before, &state));
        assert!(!state.is_loading());
    }
}
