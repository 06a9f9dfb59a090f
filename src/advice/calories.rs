use crate::ledger::DailyLedger;
use crate::time::Clock;

const STOP_EATING: &str = "Хватит есть!";

/// Renders calorie advice for today's intake against the ledger limit.
pub struct CalorieService;

impl CalorieService {
    /// Returns the remaining caloric allowance for today, or the stop-eating
    /// message once the limit is reached.
    pub fn daily_advice<C: Clock>(ledger: &DailyLedger, clock: &C) -> String {
        let consumed = ledger.today_total(clock);
        if consumed < ledger.limit() {
            format!(
                "Сегодня можно съесть что-нибудь ещё, но с общей калорийностью не более {} кКал",
                ledger.limit() - consumed
            )
        } else {
            STOP_EATING.to_string()
        }
    }
}
