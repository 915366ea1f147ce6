//! Ledger domain models and the pure computation engine over them.

pub mod calendar;
pub mod category;
pub mod dates;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod recurring;
pub mod summary;
pub mod transaction;

pub use calendar::{month_grid, transactions_on, CalendarGrid, WeekRow, WeekSummary};
pub use category::SUGGESTED_CATEGORIES;
pub use dates::{days_in_month, ReferenceMonth};
pub use ledger::Ledger;
pub use recurring::RecurrenceRequest;
pub use summary::{summarize, FinancialSummary};
pub use transaction::{PaymentStatus, Transaction, TransactionType};
