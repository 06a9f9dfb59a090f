use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{TrackerError, TrackerResult};
use crate::time::Clock;

/// Date text format accepted by [`Record::from_date_text`]: day.month.year,
/// dot-separated.
pub const DATE_TEXT_FORMAT: &str = "%d.%m.%Y";

/// A single dated entry: calories eaten or money spent, with a free-text
/// comment. Immutable once constructed.
///
/// Two records are equal iff amount, comment, and date all match exactly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    pub amount: i64,
    pub comment: String,
    pub date: NaiveDate,
}

impl Record {
    /// Creates a record with an explicit date.
    pub fn new(amount: i64, comment: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            amount,
            comment: comment.into(),
            date,
        }
    }

    /// Creates a record dated with the clock's current date.
    pub fn today<C: Clock>(amount: i64, comment: impl Into<String>, clock: &C) -> Self {
        Self::new(amount, comment, clock.today())
    }

    /// Creates a record from date text in `DD.MM.YYYY` order.
    ///
    /// Fails with [`TrackerError::InvalidDate`] when the text does not parse;
    /// the error carries the offending text.
    pub fn from_date_text(
        amount: i64,
        comment: impl Into<String>,
        date_text: &str,
    ) -> TrackerResult<Self> {
        let date =
            NaiveDate::parse_from_str(date_text, DATE_TEXT_FORMAT).map_err(|source| {
                TrackerError::InvalidDate {
                    value: date_text.to_string(),
                    source,
                }
            })?;
        Ok(Self::new(amount, comment, date))
    }
}
