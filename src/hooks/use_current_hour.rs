use chrono::{Local, Timelike};
use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config::Config;

/// Local wall-clock hour (0-23), re-read every [`Config::CLOCK_TICK_MS`].
#[hook]
pub fn use_current_hour() -> u32 {
    let hour = use_state(|| Local::now().hour());

    {
        let setter = hour.setter();
        use_effect_with((), move |_| {
            let interval = Interval::new(Config::CLOCK_TICK_MS, move || {
                setter.set(Local::now().hour());
            });

            move || drop(interval)
        });
    }

    *hour
}
