//! Hourly electricity price dashboard for the Spanish regulated tariff (PVPC).
//!
//! The price core (`models`, `services`) is plain Rust; `hooks` and
//! `components` compose it into a Yew single-page app.

pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod services;
pub mod utils;
