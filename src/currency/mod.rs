//! Fixed exchange-rate table and conversion helpers.
//!
//! All ledger amounts are rubles; conversion divides by the rubles-per-unit
//! rate of the target currency.

/// Rubles per one US dollar.
pub const USD_RATE: f64 = 78.0;
/// Rubles per one euro.
pub const EUR_RATE: f64 = 92.0;
/// Rubles per one ruble.
pub const RUB_RATE: f64 = 1.0;

/// A supported currency: lowercase code, display name, rubles-per-unit rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Currency {
    pub code: &'static str,
    pub name: &'static str,
    pub rate: f64,
}

/// Resolves a currency by its exact lowercase code.
pub fn lookup(code: &str) -> Option<Currency> {
    match code {
        "usd" => Some(Currency {
            code: "usd",
            name: "USD",
            rate: USD_RATE,
        }),
        "eur" => Some(Currency {
            code: "eur",
            name: "Euro",
            rate: EUR_RATE,
        }),
        "rub" => Some(Currency {
            code: "rub",
            name: "руб",
            rate: RUB_RATE,
        }),
        _ => None,
    }
}

/// Converts a ruble amount into `currency` units.
pub fn convert(amount: i64, currency: &Currency) -> f64 {
    amount as f64 / currency.rate
}

/// Renders a value rounded to two decimal places, followed by the currency's
/// display name.
pub fn format_amount(value: f64, currency: &Currency) -> String {
    format!("{:.2} {}", value, currency.name)
}
