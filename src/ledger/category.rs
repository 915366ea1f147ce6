/// Suggested category labels offered when entering a transaction.
///
/// Advisory only: `Transaction::category` stays free text and is never
/// constrained to this set.
pub const SUGGESTED_CATEGORIES: [&str; 9] = [
    "Housing",
    "Food",
    "Transport",
    "Salary",
    "Leisure",
    "Health",
    "Education",
    "Investments",
    "Other",
];
