use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::dates::ReferenceMonth;
use super::transaction::{PaymentStatus, Transaction, TransactionType};
use crate::errors::LedgerError;

const CURRENT_SCHEMA_VERSION: u8 = 1;

/// The authoritative transaction collection and its mutation surface.
///
/// Mutations apply serially and touch `updated_at`; the read algorithms
/// (`summarize`, `month_grid`, the expander) only ever see `&[Transaction]`
/// snapshots obtained through [`transactions`](Ledger::transactions).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "Ledger::schema_version_default")]
    pub schema_version: u8,
}

impl Ledger {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            transactions: Vec::new(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    /// Validates and appends a single entry, returning its id.
    pub fn add_transaction(&mut self, transaction: Transaction) -> Result<Uuid, LedgerError> {
        transaction.validate()?;
        let id = transaction.id;
        self.transactions.push(transaction);
        self.touch();
        Ok(id)
    }

    /// Merges a batch, typically the output of a recurrence expansion.
    /// The whole batch is validated before anything is appended.
    pub fn append(&mut self, batch: Vec<Transaction>) -> Result<usize, LedgerError> {
        for transaction in &batch {
            transaction.validate()?;
        }
        let appended = batch.len();
        self.transactions.extend(batch);
        if appended > 0 {
            self.touch();
        }
        tracing::debug!(appended, total = self.transactions.len(), "merged batch");
        Ok(appended)
    }

    /// Whole-record replacement keyed by the (immutable) id.
    pub fn replace(&mut self, transaction: Transaction) -> Result<(), LedgerError> {
        transaction.validate()?;
        let slot = self
            .transactions
            .iter_mut()
            .find(|existing| existing.id == transaction.id)
            .ok_or(LedgerError::TransactionNotFound(transaction.id))?;
        *slot = transaction;
        self.touch();
        Ok(())
    }

    /// Removes and returns the entry with the given id.
    pub fn remove(&mut self, id: Uuid) -> Result<Transaction, LedgerError> {
        let index = self
            .transactions
            .iter()
            .position(|txn| txn.id == id)
            .ok_or(LedgerError::TransactionNotFound(id))?;
        let removed = self.transactions.remove(index);
        self.touch();
        Ok(removed)
    }

    /// Flips Paid ⇄ Pending and returns the new status.
    pub fn toggle_status(&mut self, id: Uuid) -> Result<PaymentStatus, LedgerError> {
        let txn = self
            .transactions
            .iter_mut()
            .find(|txn| txn.id == id)
            .ok_or(LedgerError::TransactionNotFound(id))?;
        txn.toggle_status();
        let status = txn.status;
        self.touch();
        Ok(status)
    }

    /// Immutable snapshot for the read algorithms.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transaction(&self, id: Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Entries dated inside the given month, in snapshot order.
    pub fn month_transactions(&self, month: ReferenceMonth) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|txn| month.contains(txn.date))
            .collect()
    }

    /// Accumulated balance over the whole ledger, counting paid entries
    /// only: paid income minus paid expense.
    pub fn settled_balance(&self) -> f64 {
        self.transactions
            .iter()
            .filter(|txn| txn.status == PaymentStatus::Paid)
            .map(|txn| match txn.kind {
                TransactionType::Income => txn.amount,
                TransactionType::Expense => -txn.amount,
            })
            .sum()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}
