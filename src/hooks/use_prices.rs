use std::cell::RefCell;
use std::rc::Rc;

use chrono::Local;
use gloo_timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::Config;
use crate::hooks::use_current_hour::use_current_hour;
use crate::models::prices::{DailyPrices, TomorrowPrices};
use crate::services::provider::{PriceProvider, PricesSnapshot};

/// Message shown when today's prices cannot be loaded
pub const FETCH_ERROR_MESSAGE: &str =
    "No se pudieron cargar los precios. Por favor, inténtelo de nuevo más tarde.";

/// Version stamp of a refresh request; later requests compare greater.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
pub struct RefreshTicket(u64);

impl RefreshTicket {
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum PricesAction {
    Started(RefreshTicket),
    Loaded {
        ticket: RefreshTicket,
        snapshot: PricesSnapshot,
    },
    Failed {
        ticket: RefreshTicket,
        message: String,
    },
}

/// Single owner of the dashboard's price data.
///
/// Only the most recently started refresh may commit; results of older or
/// already-settled requests leave the state untouched.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct PricesState {
    pub today: Option<Rc<DailyPrices>>,
    pub tomorrow: TomorrowPrices,
    pub error: Option<String>,
    in_flight: Option<RefreshTicket>,
    latest: RefreshTicket,
}

impl PricesState {
    /// Returns true while a refresh is pending
    pub const fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Returns true when `ticket` is the refresh allowed to commit
    pub fn accepts(&self, ticket: RefreshTicket) -> bool {
        self.in_flight == Some(ticket)
    }
}

impl Reducible for PricesState {
    type Action = PricesAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            PricesAction::Started(ticket) if ticket > self.latest => Rc::new(Self {
                error: None,
                in_flight: Some(ticket),
                latest: ticket,
                ..(*self).clone()
            }),
            PricesAction::Loaded { ticket, snapshot } if self.accepts(ticket) => Rc::new(Self {
                today: Some(snapshot.today),
                tomorrow: snapshot.tomorrow,
                error: None,
                in_flight: None,
                latest: self.latest,
            }),
            PricesAction::Failed { ticket, message } if self.accepts(ticket) => Rc::new(Self {
                error: Some(message),
                in_flight: None,
                ..(*self).clone()
            }),
            _ => self,
        }
    }
}

/// Everything the view layer reads from the price core
#[derive(Clone, PartialEq)]
pub struct PricesHandle {
    pub today: Option<Rc<DailyPrices>>,
    pub tomorrow: TomorrowPrices,
    pub current_hour: u32,
    pub loading: bool,
    pub error: Option<String>,
    pub refresh: Callback<()>,
}

#[hook]
pub fn use_prices() -> PricesHandle {
    let state = use_reducer(PricesState::default);
    let current_hour = use_current_hour();
    let provider = use_memo((), |_| PriceProvider::mock());
    let counter = use_mut_ref(RefreshTicket::default);
    let disposed = use_mut_ref(|| false);

    let refresh = {
        let dispatcher = state.dispatcher();
        let disposed = disposed.clone();
        Callback::from(move |()| {
            start_refresh(&dispatcher, &provider, &counter, &disposed);
        })
    };

    // Initial load, hourly refresh, teardown on unmount
    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());

            let interval = Config::ENABLE_AUTO_REFRESH
                .then(|| Interval::new(Config::REFRESH_INTERVAL_MS, move || refresh.emit(())));

            move || {
                *disposed.borrow_mut() = true;
                drop(interval);
            }
        });
    }

    PricesHandle {
        today: state.today.clone(),
        tomorrow: state.tomorrow.clone(),
        current_hour,
        loading: state.is_loading(),
        error: state.error.clone(),
        refresh,
    }
}

fn start_refresh(
    dispatcher: &UseReducerDispatcher<PricesState>,
    provider: &Rc<PriceProvider>,
    counter: &Rc<RefCell<RefreshTicket>>,
    disposed: &Rc<RefCell<bool>>,
) {
    let ticket = {
        let mut counter = counter.borrow_mut();
        *counter = counter.next();
        *counter
    };
    dispatcher.dispatch(PricesAction::Started(ticket));

    let dispatcher = dispatcher.clone();
    let provider = provider.clone();
    let disposed = disposed.clone();

    spawn_local(async move {
        let result = provider.snapshot(Local::now().naive_local()).await;

        if *disposed.borrow() {
            gloo::console::debug!("Dropping price refresh delivered after unmount");
            return;
        }

        let action = match result {
            Ok(snapshot) => {
                if snapshot.tomorrow == TomorrowPrices::Unavailable {
                    gloo::console::warn!("Failed to fetch tomorrow's prices");
                }
                PricesAction::Loaded { ticket, snapshot }
            }
            Err(e) => {
                gloo::console::error!(&format!("Failed to fetch prices: {e}"));
                PricesAction::Failed {
                    ticket,
                    message: FETCH_ERROR_MESSAGE.to_string(),
                }
            }
        };

        dispatcher.dispatch(action);
    });
}
