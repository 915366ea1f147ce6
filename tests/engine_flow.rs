use chrono::NaiveDate;

use ledger_core::ledger::{
    month_grid, summarize, Ledger, PaymentStatus, RecurrenceRequest, ReferenceMonth, Transaction,
    TransactionType,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn recurring_rent_flows_through_store_summary_and_grid() {
    let request = RecurrenceRequest {
        description: "Rent".into(),
        amount: 1500.0,
        category: "Housing".into(),
        start_date: date(2024, 1, 31),
        end_date: date(2024, 4, 30),
    };
    request.validate().unwrap();

    let batch = request.expand();
    let dates: Vec<NaiveDate> = batch.iter().map(|t| t.date).collect();
    assert_eq!(
        dates,
        [
            date(2024, 1, 31),
            date(2024, 2, 29),
            date(2024, 3, 31),
            date(2024, 4, 30),
        ]
    );
    for entry in &batch {
        assert_eq!(entry.kind, TransactionType::Expense);
        assert_eq!(entry.status, PaymentStatus::Pending);
        assert!(entry.is_fixed);
        assert_eq!(entry.amount, 1500.0);
    }

    let mut ledger = Ledger::new("Personal");
    let mut salary = Transaction::new(
        "Monthly salary",
        5000.0,
        date(2024, 1, 5),
        TransactionType::Income,
        "Salary",
    );
    salary.toggle_status(); // paid
    ledger.add_transaction(salary).unwrap();
    assert_eq!(ledger.append(batch).unwrap(), 4);
    assert_eq!(ledger.transaction_count(), 5);

    // January view: one rent pending this month, three pending later.
    let january: ReferenceMonth = "2024-01".parse().unwrap();
    let summary = summarize(ledger.transactions(), january);
    assert_eq!(summary.total_income, 5000.0);
    assert_eq!(summary.total_expense, 1500.0);
    assert_eq!(summary.current_month_balance, 3500.0);
    assert_eq!(summary.payable_current_month, 1500.0);
    assert_eq!(summary.paid_expense_current_month, 0.0);
    assert_eq!(summary.fixed_expenses, 1500.0);
    assert_eq!(summary.variable_expenses, 0.0);
    assert_eq!(summary.payable_future, 4500.0);

    // Paying January's rent moves it across the payable/paid partition.
    let rent_id = ledger
        .month_transactions(january)
        .iter()
        .find(|txn| txn.is_fixed)
        .map(|txn| txn.id)
        .unwrap();
    assert_eq!(ledger.toggle_status(rent_id).unwrap(), PaymentStatus::Paid);
    let after_payment = summarize(ledger.transactions(), january);
    assert_eq!(after_payment.payable_current_month, 0.0);
    assert_eq!(after_payment.paid_expense_current_month, 1500.0);
    assert_eq!(after_payment.total_expense, 1500.0);

    // January 2024 grid: 31 days, first on a Monday, rent on the last row.
    let grid = month_grid(2024, 1, ledger.transactions());
    for week in &grid.weeks {
        assert_eq!(week.slots.len(), 7);
    }
    let days: Vec<u32> = grid
        .weeks
        .iter()
        .flat_map(|week| week.slots.iter().flatten().copied())
        .collect();
    assert_eq!(days, (1..=31).collect::<Vec<u32>>());
    let last_week = grid.weeks.last().unwrap();
    assert_eq!(last_week.summary.expense, 1500.0);
    let first_week = grid.weeks.first().unwrap();
    assert_eq!(first_week.summary.income, 5000.0);
}

#[test]
fn edits_and_removals_rederive_presentation_data() {
    let mut ledger = Ledger::new("Personal");
    let groceries = Transaction::new(
        "Groceries",
        600.0,
        date(2024, 5, 15),
        TransactionType::Expense,
        "Food",
    );
    let internet = Transaction::new(
        "Internet",
        120.0,
        date(2024, 5, 20),
        TransactionType::Expense,
        "Housing",
    );
    let groceries_id = ledger.add_transaction(groceries.clone()).unwrap();
    let internet_id = ledger.add_transaction(internet).unwrap();

    let may: ReferenceMonth = "2024-05".parse().unwrap();
    assert_eq!(summarize(ledger.transactions(), may).total_expense, 720.0);

    let mut edited = groceries;
    edited.amount = 650.0;
    ledger.replace(edited).unwrap();
    assert_eq!(summarize(ledger.transactions(), may).total_expense, 770.0);
    assert_eq!(ledger.transaction(groceries_id).unwrap().amount, 650.0);

    ledger.remove(internet_id).unwrap();
    assert_eq!(summarize(ledger.transactions(), may).total_expense, 650.0);
    assert_eq!(ledger.month_transactions(may).len(), 1);
}

#[test]
fn recurrence_span_emits_one_entry_per_month() {
    let request = RecurrenceRequest {
        description: "Gym".into(),
        amount: 80.0,
        category: "Health".into(),
        start_date: date(2023, 10, 12),
        end_date: date(2024, 9, 12),
    };
    let entries = request.expand();
    assert_eq!(entries.len(), 12);
    let mut months: Vec<ReferenceMonth> = entries
        .iter()
        .map(|t| ReferenceMonth::from_date(t.date))
        .collect();
    months.dedup();
    assert_eq!(months.len(), 12);
}

#[test]
fn empty_ledger_still_produces_presentation_data() {
    let ledger = Ledger::new("Empty");
    let month: ReferenceMonth = "2024-02".parse().unwrap();

    let summary = summarize(ledger.transactions(), month);
    assert_eq!(summary, Default::default());

    let grid = month_grid(2024, 2, ledger.transactions());
    let total_days: usize = grid
        .weeks
        .iter()
        .map(|week| week.slots.iter().flatten().count())
        .sum();
    assert_eq!(total_days, 29);
    assert_eq!(ledger.settled_balance(), 0.0);
}
