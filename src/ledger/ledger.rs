use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::record::Record;
use crate::time::Clock;

/// Days the trailing week window reaches back from today; both ends of the
/// window are inclusive.
const WEEK_WINDOW_DAYS: i64 = 7;

/// Owns a record collection and a per-day limit, and aggregates amounts over
/// calendar-date windows.
///
/// Records are per-instance state: insertion order is preserved, duplicates
/// are kept, and the collection only grows. Every query is a pure scan over
/// the current snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyLedger {
    limit: i64,
    #[serde(default)]
    records: Vec<Record>,
}

impl DailyLedger {
    /// Creates an empty ledger with the given per-day limit.
    pub fn new(limit: i64) -> Self {
        Self {
            limit,
            records: Vec::new(),
        }
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Returns the stored records in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Appends a record to the ledger.
    pub fn add_record(&mut self, record: Record) {
        tracing::debug!(amount = record.amount, date = %record.date, "record added");
        self.records.push(record);
    }

    /// Sums amounts of records dated exactly `date`.
    pub fn total_on(&self, date: NaiveDate) -> i64 {
        self.records
            .iter()
            .filter(|record| record.date == date)
            .map(|record| record.amount)
            .sum()
    }

    /// Sums amounts of records dated within `[start, end]`, both bounds
    /// inclusive.
    pub fn total_between(&self, start: NaiveDate, end: NaiveDate) -> i64 {
        self.records
            .iter()
            .filter(|record| record.date >= start && record.date <= end)
            .map(|record| record.amount)
            .sum()
    }

    /// Sums today's records.
    pub fn today_total<C: Clock>(&self, clock: &C) -> i64 {
        self.total_on(clock.today())
    }

    /// Sums the trailing week ending today.
    pub fn week_total<C: Clock>(&self, clock: &C) -> i64 {
        let today = clock.today();
        self.total_between(today - Duration::days(WEEK_WINDOW_DAYS), today)
    }

    /// Returns today's unspent allowance; negative when over the limit.
    pub fn remaining_today<C: Clock>(&self, clock: &C) -> i64 {
        self.limit - self.today_total(clock)
    }
}
