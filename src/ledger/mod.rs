//! Ledger domain models: dated records and the daily-limit aggregate.

#[allow(clippy::module_inception)]
pub mod ledger;
pub mod record;

pub use ledger::DailyLedger;
pub use record::{Record, DATE_TEXT_FORMAT};
