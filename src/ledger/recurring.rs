use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::dates::days_in_month;
use super::transaction::{PaymentStatus, Transaction, TransactionType};
use crate::errors::LedgerError;

/// A request to create one fixed expense per month over an inclusive
/// date range. Transient: expanded once, then discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurrenceRequest {
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl RecurrenceRequest {
    /// Boundary validation; [`expand`](Self::expand) assumes this passed.
    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.description.trim().is_empty() {
            return Err(LedgerError::Validation(
                "recurrence description must not be empty".into(),
            ));
        }
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(LedgerError::Validation(format!(
                "recurrence amount must be positive, got {}",
                self.amount
            )));
        }
        if self.end_date < self.start_date {
            return Err(LedgerError::Validation(format!(
                "recurrence end date {} precedes start date {}",
                self.end_date, self.start_date
            )));
        }
        Ok(())
    }

    /// Expands the request into one pending fixed expense per calendar
    /// month, from the month of `start_date` through the month of
    /// `end_date` inclusive.
    ///
    /// Each occurrence is dated on the start date's day-of-month, clamped
    /// to the length of the target month (an anchor of 31 degrades to 30,
    /// 29, or 28). The anchor never drifts: every month re-derives from
    /// the original day, so a February clamp does not shorten March.
    /// Occurrences falling outside `[start_date, end_date]` are skipped.
    ///
    /// The generated entries are always `Expense`; recurring income is
    /// outside this contract.
    pub fn expand(&self) -> Vec<Transaction> {
        let anchor_day = self.start_date.day();
        let mut occurrences = Vec::new();

        let mut year = self.start_date.year();
        let mut month = self.start_date.month();
        let last = (self.end_date.year(), self.end_date.month());

        while (year, month) <= last {
            let actual_day = anchor_day.min(days_in_month(year, month));
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, actual_day) {
                if date >= self.start_date && date <= self.end_date {
                    occurrences.push(self.occurrence_on(date));
                }
            }
            if month == 12 {
                year += 1;
                month = 1;
            } else {
                month += 1;
            }
        }

        tracing::debug!(
            count = occurrences.len(),
            start = %self.start_date,
            end = %self.end_date,
            "expanded recurrence request"
        );
        occurrences
    }

    fn occurrence_on(&self, date: NaiveDate) -> Transaction {
        let mut txn = Transaction::new(
            self.description.clone(),
            self.amount,
            date,
            TransactionType::Expense,
            self.category.clone(),
        );
        txn.status = PaymentStatus::Pending;
        txn.is_fixed = true;
        txn
    }
}
