use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::LedgerError;

/// A single financial event in the ledger.
///
/// `amount` is always positive; the sign is derived from `kind` at
/// presentation time. `date` serializes as canonical `YYYY-MM-DD`, and
/// `NaiveDate`'s ordering reproduces the lexicographic ordering of that
/// form, which the aggregation logic relies on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub status: PaymentStatus,
    pub category: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_fixed: bool,
}

fn is_false(value: &bool) -> bool {
    !value
}

impl Transaction {
    pub fn new(
        description: impl Into<String>,
        amount: f64,
        date: NaiveDate,
        kind: TransactionType,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            amount,
            date,
            kind,
            status: PaymentStatus::Pending,
            category: category.into(),
            is_fixed: false,
        }
    }

    /// Checks the entry invariants enforced at the input boundary.
    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.description.trim().is_empty() {
            return Err(LedgerError::Validation(
                "transaction description must not be empty".into(),
            ));
        }
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(LedgerError::Validation(format!(
                "transaction amount must be positive, got {}",
                self.amount
            )));
        }
        Ok(())
    }

    pub fn toggle_status(&mut self) {
        self.status = match self.status {
            PaymentStatus::Paid => PaymentStatus::Pending,
            PaymentStatus::Pending => PaymentStatus::Paid,
        };
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    pub fn is_pending(&self) -> bool {
        self.status == PaymentStatus::Pending
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Income,
    Expense,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Paid,
    Pending,
}
