use crate::currency;
use crate::ledger::DailyLedger;
use crate::time::Clock;

const NO_MONEY: &str = "Денег нет, держись";

/// Renders cash advice for today's spending against the ledger limit,
/// converted into a requested currency.
pub struct CashService;

impl CashService {
    /// Returns today's remaining allowance (or debt) in the currency named by
    /// `currency_code` — one of `usd`, `eur`, `rub`, lowercase.
    ///
    /// An unrecognized code is a recoverable condition: the result is the
    /// unknown-currency message, never an error. An exactly spent limit wins
    /// over currency validation, matching the canonical behavior.
    pub fn today_remained<C: Clock>(
        ledger: &DailyLedger,
        clock: &C,
        currency_code: &str,
    ) -> String {
        let money = ledger.remaining_today(clock);
        if money == 0 {
            return NO_MONEY.to_string();
        }

        let currency = match currency::lookup(currency_code) {
            Some(currency) => currency,
            None => return format!("Не знаю такую валюту: {}", currency_code),
        };

        // Sign is decided on the raw quotient; only the display is rounded.
        let converted = currency::convert(money, &currency);
        if converted > 0.0 {
            format!(
                "На сегодня осталось {}",
                currency::format_amount(converted, &currency)
            )
        } else {
            format!(
                "{}: твой долг - {}",
                NO_MONEY,
                currency::format_amount(converted.abs(), &currency)
            )
        }
    }
}
