//! Advisory strategies over a [`DailyLedger`](crate::ledger::DailyLedger).
//!
//! Each service is stateless and renders a message from the ledger's current
//! snapshot and an injected clock. The message texts are the tracker's
//! canonical user-facing templates.

pub mod calories;
pub mod cash;

pub use calories::CalorieService;
pub use cash::CashService;
