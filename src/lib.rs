mod expense;
mod input;
mod ledger;
mod shell;

pub use expense::Expense;
pub use input::{parse_amount, parse_date, parse_integer, InputError, MenuChoice};
pub use ledger::ExpenseLedger;
pub use shell::{Shell, ShellError};

// Every amount is displayed in this one currency. There is no conversion.
pub const CURRENCY_SYMBOL: &str = "Rs";

// Formats used for displaying an expense's timestamp and for bucketing by day.
// Both are applied in the local time zone.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DAY_FORMAT: &str = "%Y-%m-%d";

/// The line shown in place of a listing when a query matches nothing
pub const NO_EXPENSES: &str = "No expenses found.";
