use crate::{expense::Expense, DAY_FORMAT, NO_EXPENSES};
use chrono::{DateTime, Datelike, Local};
use log::{debug, trace};
use rust_decimal::Decimal;
use std::slice::Iter;

/// An append-only, in-memory log of expenses.
///
/// Expenses are kept in insertion order, which need not be chronological. Every query
/// is a linear scan over all expenses and returns matches in insertion order. All date
/// bucketing is performed in the local time zone.
#[derive(Debug, Default)]
pub struct ExpenseLedger {
    expenses: Vec<Expense>,
}

impl ExpenseLedger {
    pub fn new() -> Self {
        ExpenseLedger::default()
    }

    /// Append an expense to the ledger
    pub fn add(&mut self, expense: Expense) {
        debug!("adding expense #{}: {}", self.expenses.len() + 1, expense);
        self.expenses.push(expense);
    }

    /// Returns the sum of every expense amount, or zero for an empty ledger.
    /// This is recalculated on every call. A sum beyond the range of `Decimal` saturates
    /// at `Decimal::MAX` (or `Decimal::MIN`).
    pub fn total(&self) -> Decimal {
        self.expenses
            .iter()
            .fold(Decimal::ZERO, |sum, e| sum.saturating_add(e.amount()))
    }

    /// Returns the expenses that fall on the same local calendar day as `date`.
    ///
    /// Both sides are formatted as "YYYY-MM-DD" in local time and compared as strings,
    /// so the time of day is ignored entirely.
    pub fn by_day(&self, date: &DateTime<Local>) -> Vec<&Expense> {
        let target = date.format(DAY_FORMAT).to_string();
        let matches = self.filter(|e| e.day_key() == target);
        trace!("{} expense(s) on {}", matches.len(), target);
        matches
    }

    /// Returns the expenses in the given local month (January = 1) of `year`.
    /// A month outside 1-12 matches nothing.
    pub fn by_month(&self, month: u32, year: i32) -> Vec<&Expense> {
        let matches = self.filter(|e| {
            let ts = e.timestamp();
            ts.month() == month && ts.year() == year
        });
        trace!("{} expense(s) in {}/{}", matches.len(), month, year);
        matches
    }

    /// Returns the expenses in the given local year
    pub fn by_year(&self, year: i32) -> Vec<&Expense> {
        let matches = self.filter(|e| e.timestamp().year() == year);
        trace!("{} expense(s) in {}", matches.len(), year);
        matches
    }

    /// Render a listing of expenses, one per line. An empty listing renders as the
    /// `NO_EXPENSES` line instead.
    pub fn render(&self, expenses: &[&Expense]) -> String {
        if expenses.is_empty() {
            return NO_EXPENSES.to_owned();
        }

        expenses
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Iterate over all expenses in insertion order
    pub fn iter(&self) -> Iter<'_, Expense> {
        self.expenses.iter()
    }

    fn filter<P>(&self, predicate: P) -> Vec<&Expense>
    where
        P: Fn(&Expense) -> bool,
    {
        self.expenses.iter().filter(|e| predicate(e)).collect()
    }
}

impl<'a> IntoIterator for &'a ExpenseLedger {
    type Item = &'a Expense;
    type IntoIter = Iter<'a, Expense>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
