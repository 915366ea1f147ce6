use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::dates::days_in_month;
use super::transaction::{Transaction, TransactionType};

/// Income and expense sums for one week row, paid and pending alike.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeekSummary {
    pub income: f64,
    pub expense: f64,
}

/// Seven day slots (Sunday-first); `None` pads before day 1 and after the
/// last day of the month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekRow {
    pub slots: [Option<u32>; 7],
    pub summary: WeekSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarGrid {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<WeekRow>,
}

/// Lays a month out as week rows and computes each row's rollup from the
/// snapshot.
///
/// Day slots match transactions by exact date, not month prefix, and the
/// weekly sums ignore payment status: a pending expense weighs the same
/// as a paid one in the row total. Geometry alone drives the layout, so
/// an empty snapshot still yields the full grid.
pub fn month_grid(year: i32, month: u32, transactions: &[Transaction]) -> CalendarGrid {
    let days = days_in_month(year, month);
    let leading = NaiveDate::from_ymd_opt(year, month, 1)
        .map(|first| first.weekday().num_days_from_sunday())
        .unwrap_or(0);

    let mut weeks = Vec::new();
    let mut slots: Vec<Option<u32>> = vec![None; leading as usize];

    for day in 1..=days {
        slots.push(Some(day));
        if slots.len() == 7 {
            weeks.push(finish_week(&slots, year, month, transactions));
            slots.clear();
        }
    }
    if !slots.is_empty() {
        while slots.len() < 7 {
            slots.push(None);
        }
        weeks.push(finish_week(&slots, year, month, transactions));
    }

    CalendarGrid { year, month, weeks }
}

/// The transactions dated exactly on `date`, in snapshot order.
pub fn transactions_on(transactions: &[Transaction], date: NaiveDate) -> Vec<&Transaction> {
    transactions.iter().filter(|txn| txn.date == date).collect()
}

fn finish_week(slots: &[Option<u32>], year: i32, month: u32, transactions: &[Transaction]) -> WeekRow {
    let mut summary = WeekSummary::default();
    for day in slots.iter().flatten() {
        let Some(date) = NaiveDate::from_ymd_opt(year, month, *day) else {
            continue;
        };
        for txn in transactions_on(transactions, date) {
            match txn.kind {
                TransactionType::Income => summary.income += txn.amount,
                TransactionType::Expense => summary.expense += txn.amount,
            }
        }
    }
    let mut fixed = [None; 7];
    fixed.copy_from_slice(slots);
    WeekRow {
        slots: fixed,
        summary,
    }
}
