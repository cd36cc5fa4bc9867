use crate::{CURRENCY_SYMBOL, DAY_FORMAT, TIMESTAMP_FORMAT};
use chrono::{DateTime, Local};
use rust_decimal::Decimal;
use std::fmt;

/// A single recorded expense.
///
/// `Expense`s are immutable once created. The amount is interpreted in a single fixed
/// currency (see `CURRENCY_SYMBOL`) and no validation is performed on any field, so a
/// negative amount or an empty category is accepted as-is.
#[derive(Clone, Debug, PartialEq)]
pub struct Expense {
    amount: Decimal,
    category: String,
    description: String,
    timestamp: DateTime<Local>,
}

impl Expense {
    /// Create a new `Expense` at the given point in time
    pub fn new<C, D>(
        amount: Decimal,
        category: C,
        description: D,
        timestamp: DateTime<Local>,
    ) -> Self
    where
        C: Into<String>,
        D: Into<String>,
    {
        Expense {
            amount,
            category: category.into(),
            description: description.into(),
            timestamp,
        }
    }

    /// Create a new `Expense` stamped with the current local time
    pub fn now<C, D>(amount: Decimal, category: C, description: D) -> Self
    where
        C: Into<String>,
        D: Into<String>,
    {
        Self::new(amount, category, description, Local::now())
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn timestamp(&self) -> &DateTime<Local> {
        &self.timestamp
    }

    /// Returns the timestamp as "YYYY-MM-DD HH:MM:SS" in local time
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    // The calendar day this expense falls on, as "YYYY-MM-DD" in local time.
    pub(crate) fn day_key(&self) -> String {
        self.timestamp.format(DAY_FORMAT).to_string()
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Amount: {}", CURRENCY_SYMBOL)?;

        // Whole amounts always show one decimal place, e.g. "Rs1.0"
        if self.amount.scale() == 0 {
            write!(f, "{:.1}", self.amount)?;
        } else {
            write!(f, "{}", self.amount)?;
        }

        write!(
            f,
            ", Category: {}, Description: {}, Date: {}",
            self.category,
            self.description,
            self.formatted_timestamp()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn lunch() -> Expense {
        let timestamp = Local.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        Expense::new(dec!(100.0), "Food", "Lunch", timestamp)
    }

    #[test]
    fn expense_accessors() {
        let expense = lunch();
        assert_eq!(expense.amount(), dec!(100));
        assert_eq!(expense.category(), "Food");
        assert_eq!(expense.description(), "Lunch");
        assert_eq!(
            *expense.timestamp(),
            Local.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn expense_display() {
        assert_eq!(
            lunch().to_string(),
            "Amount: Rs100.0, Category: Food, Description: Lunch, Date: 2024-03-15 12:00:00"
        );
    }

    #[test]
    fn expense_display_empty_description() {
        let timestamp = Local.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap();
        let expense = Expense::new(dec!(7.25), "Misc", "", timestamp);
        assert_eq!(
            expense.to_string(),
            "Amount: Rs7.25, Category: Misc, Description: , Date: 2023-12-31 23:59:59"
        );
    }

    #[test]
    fn expense_display_whole_amount() {
        let timestamp = Local.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        let expense = Expense::new(dec!(1), "Food", "x", timestamp);
        assert_eq!(
            expense.to_string(),
            "Amount: Rs1.0, Category: Food, Description: x, Date: 2024-03-15 12:00:00"
        );

        let refund = Expense::new(dec!(-20), "Refund", "", timestamp);
        assert!(refund.to_string().starts_with("Amount: Rs-20.0, "));
    }

    #[test]
    fn expense_accepts_negative_amount() {
        let expense = Expense::now(dec!(-20), "", "refund");
        assert_eq!(expense.amount(), dec!(-20));
        assert_eq!(expense.category(), "");
    }

    #[test]
    fn expense_day_key_ignores_time() {
        assert_eq!(lunch().day_key(), "2024-03-15");
    }
}
