use chrono::NaiveDate;
use tracker_core::advice::{CalorieService, CashService};
use tracker_core::ledger::{DailyLedger, Record};
use tracker_core::time::FixedClock;

fn clock() -> FixedClock {
    FixedClock::new(NaiveDate::from_ymd_opt(2023, 6, 15).unwrap())
}

#[test]
fn calorie_advice_embeds_remaining_allowance() {
    let mut ledger = DailyLedger::new(2000);
    ledger.add_record(Record::today(500, "breakfast", &clock()));

    let advice = CalorieService::daily_advice(&ledger, &clock());
    assert_eq!(
        advice,
        "Сегодня можно съесть что-нибудь ещё, но с общей калорийностью не более 1500 кКал"
    );
}

#[test]
fn calorie_advice_stops_over_the_limit() {
    let mut ledger = DailyLedger::new(2000);
    ledger.add_record(Record::today(2500, "feast", &clock()));

    assert_eq!(
        CalorieService::daily_advice(&ledger, &clock()),
        "Хватит есть!"
    );
}

#[test]
fn calorie_advice_ignores_other_days() {
    let mut ledger = DailyLedger::new(2000);
    ledger.add_record(Record::from_date_text(2500, "yesterday's feast", "14.06.2023").unwrap());

    assert_eq!(
        CalorieService::daily_advice(&ledger, &clock()),
        "Сегодня можно съесть что-нибудь ещё, но с общей калорийностью не более 2000 кКал"
    );
}

#[test]
fn cash_advice_converts_at_the_usd_rate() {
    let mut ledger = DailyLedger::new(1000);
    ledger.add_record(Record::today(500, "groceries", &clock()));

    assert_eq!(
        CashService::today_remained(&ledger, &clock(), "usd"),
        "На сегодня осталось 6.41 USD"
    );
}

#[test]
fn cash_advice_reports_debt() {
    let mut ledger = DailyLedger::new(1000);
    ledger.add_record(Record::today(1460, "splurge", &clock()));

    assert_eq!(
        CashService::today_remained(&ledger, &clock(), "eur"),
        "Денег нет, держись: твой долг - 5.00 Euro"
    );
}

#[test]
fn cash_advice_handles_unknown_currency_without_failing() {
    let mut ledger = DailyLedger::new(1000);
    ledger.add_record(Record::today(500, "groceries", &clock()));

    assert_eq!(
        CashService::today_remained(&ledger, &clock(), "gbp"),
        "Не знаю такую валюту: gbp"
    );
}

#[test]
fn cash_advice_when_nothing_is_left() {
    let mut ledger = DailyLedger::new(1000);
    ledger.add_record(Record::today(1000, "rent", &clock()));

    assert_eq!(
        CashService::today_remained(&ledger, &clock(), "rub"),
        "Денег нет, держись"
    );
}

#[test]
fn both_advisors_share_one_aggregation() {
    // The same ledger snapshot feeds both strategies; neither mutates it.
    let mut ledger = DailyLedger::new(2000);
    ledger.add_record(Record::today(500, "entry", &clock()));

    let calorie = CalorieService::daily_advice(&ledger, &clock());
    let cash = CashService::today_remained(&ledger, &clock(), "rub");
    assert!(calorie.contains("1500"));
    assert!(cash.contains("1500.00 руб"));
    assert_eq!(ledger.records().len(), 1);
}
