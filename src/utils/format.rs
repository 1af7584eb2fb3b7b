use crate::config::Config;
use chrono::{Datelike, NaiveDate};

const WEEKDAYS: [&str; 7] = [
    "lunes",
    "martes",
    "miércoles",
    "jueves",
    "viernes",
    "sábado",
    "domingo",
];

const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// `0.12345 €/kWh`
pub fn format_price(price: f64) -> String {
    let decimals = usize::try_from(Config::PRICE_DECIMALS).unwrap_or(5);
    format!("{price:.decimals$} €/kWh")
}

/// `07:00`
pub fn hour_label(hour: u32) -> String {
    format!("{hour:02}:00")
}

/// `23:00 - 00:00`
pub fn hour_range(hour: u32) -> String {
    format!("{} - {}", hour_label(hour), hour_label((hour + 1) % 24))
}

/// `jueves, 16 de octubre`
pub fn long_date(date: NaiveDate) -> String {
    let weekday = WEEKDAYS[date.weekday().num_days_from_monday() as usize];
    let month = MONTHS[date.month0() as usize];
    format!("{weekday}, {} de {month}", date.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0.1), "0.10000 €/kWh");
        assert_eq!(format_price(0.123_456), "0.12346 €/kWh");
    }

    #[test]
    fn test_hour_range_wraps_at_midnight() {
        assert_eq!(hour_range(7), "07:00 - 08:00");
        assert_eq!(hour_range(23), "23:00 - 00:00");
    }

    #[test]
    fn test_long_date() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(long_date(date), "viernes, 16 de octubre");
    }
}
