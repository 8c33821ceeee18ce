//! Daily quote shown above the dashboard

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub text: &'static str,
    #[serde(rename = "ref")]
    pub reference: &'static str,
}

const QUOTES: &[(&str, &str)] = &[
    ("Poco a poco se anda lejos.", "Refrán popular"),
    ("Grano a grano llena la gallina el buche.", "Refrán popular"),
    ("Quien guarda, halla.", "Refrán popular"),
    ("Gota a gota se llena el vaso.", "Refrán popular"),
    ("Más vale prevenir que lamentar.", "Refrán popular"),
    ("No dejes para mañana lo que puedas hacer hoy.", "Refrán popular"),
    ("Al que madruga, Dios lo ayuda.", "Refrán popular"),
    ("Despacio se llega lejos.", "Refrán popular"),
];

/// The same quote all day, changing with the day of the year
pub fn daily_quote(date: NaiveDate) -> Quote {
    let (text, reference) = QUOTES[date.ordinal0() as usize % QUOTES.len()];
    Quote { text, reference }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_same_day_same_quote() {
        assert_eq!(daily_quote(date(2025, 5, 4)), daily_quote(date(2025, 5, 4)));
    }

    #[test]
    fn test_consecutive_days_differ() {
        assert_ne!(daily_quote(date(2025, 5, 4)), daily_quote(date(2025, 5, 5)));
        assert_eq!(daily_quote(date(2025, 1, 1)).text, QUOTES[0].0);
    }

    #[test]
    fn test_serializes_with_ref_key() {
        let json = serde_json::to_value(daily_quote(date(2025, 1, 1))).unwrap();
        assert_eq!(json["ref"], "Refrán popular");
        assert!(json["text"].is_string());
    }
}
