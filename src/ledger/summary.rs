use serde::{Deserialize, Serialize};

use super::dates::ReferenceMonth;
use super::transaction::{PaymentStatus, Transaction, TransactionType};

/// Monthly rollup of a ledger snapshot. Derived on demand, never stored.
///
/// All fields are scoped to the reference month except `payable_future`,
/// which sums pending expenses dated in any strictly later month.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub total_income: f64,
    pub total_expense: f64,
    pub current_month_balance: f64,
    pub payable_current_month: f64,
    pub paid_expense_current_month: f64,
    pub payable_future: f64,
    pub fixed_expenses: f64,
    pub variable_expenses: f64,
}

/// Reduces a snapshot into a [`FinancialSummary`] for the given month.
///
/// Single linear pass, pure, no rounding: presentation layers round. For
/// the month's expenses the totals partition two ways,
/// `total_expense = fixed + variable` and
/// `total_expense = payable + paid`.
pub fn summarize(transactions: &[Transaction], month: ReferenceMonth) -> FinancialSummary {
    let mut summary = FinancialSummary::default();

    for txn in transactions {
        let txn_month = ReferenceMonth::from_date(txn.date);

        if txn_month == month {
            match txn.kind {
                TransactionType::Income => summary.total_income += txn.amount,
                TransactionType::Expense => {
                    summary.total_expense += txn.amount;
                    if txn.is_fixed {
                        summary.fixed_expenses += txn.amount;
                    } else {
                        summary.variable_expenses += txn.amount;
                    }
                    match txn.status {
                        PaymentStatus::Pending => summary.payable_current_month += txn.amount,
                        PaymentStatus::Paid => summary.paid_expense_current_month += txn.amount,
                    }
                }
            }
        }

        // Future payables are independent of the month scoping above.
        if txn.is_expense() && txn.is_pending() && txn_month > month {
            summary.payable_future += txn.amount;
        }
    }

    summary.current_month_balance = summary.total_income - summary.total_expense;
    summary
}
