use crate::{
    expense::Expense,
    input::{parse_amount, parse_date, parse_integer, InputError, MenuChoice},
    ledger::ExpenseLedger,
    CURRENCY_SYMBOL,
};
use chrono::{DateTime, Local};
use log::{debug, info, warn};
use rust_decimal::RoundingStrategy;
use std::{
    convert::TryFrom,
    io::{self, BufRead, Write},
};
use thiserror::Error;

const MENU: &str = "\nExpense Tracker Menu:
1. Add Expense
2. View Total Expenses
3. View Expenses by Day
4. View Expenses by Month
5. View Expenses by Year
6. Exit";

const NOT_A_NUMBER: &str = "Invalid input. Please enter a number.";
const NOT_TEXT: &str = "Invalid input. Please try again.";

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("could not read from or write to the terminal")]
    Io(#[from] io::Error),
    #[error("invalid input: {0}")]
    Input(#[from] InputError),
}

/// An interactive, menu driven session over a single `ExpenseLedger`.
///
/// Bad input is reported to the user and re-prompted; it never ends the session. The
/// session ends when the user chooses to exit or the input is exhausted.
pub struct Shell<R, W> {
    input: R,
    output: W,
    ledger: ExpenseLedger,
    now: Option<DateTime<Local>>, // This allows overriding the current time for testing
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Shell {
            input,
            output,
            ledger: ExpenseLedger::new(),
            now: None,
        }
    }

    /// Stamp every new expense with `now` instead of the current time
    pub fn with_now(mut self, now: DateTime<Local>) -> Self {
        self.now = Some(now);
        self
    }

    pub fn ledger(&self) -> &ExpenseLedger {
        &self.ledger
    }

    pub fn into_ledger(self) -> ExpenseLedger {
        self.ledger
    }

    /// Run the menu loop until the user exits or the input runs out
    pub fn run(&mut self) -> Result<(), ShellError> {
        info!("expense tracker session started");
        writeln!(self.output, "Expense Tracker has started!")?;

        loop {
            match self.step() {
                Ok(true) => (),
                Ok(false) => break,
                Err(ShellError::Input(InputError::EndOfInput)) => {
                    debug!("input closed, ending session");
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        writeln!(self.output, "Exiting...")?;
        self.output.flush()?;
        info!(
            "expense tracker session ended with {} expense(s)",
            self.ledger.len()
        );
        Ok(())
    }

    // Show the menu and handle one choice. Returns false once the user has chosen to
    // exit.
    fn step(&mut self) -> Result<bool, ShellError> {
        writeln!(self.output, "{}", MENU)?;
        let line = self.prompt("Choose an option: ")?;

        let choice = match parse_integer(&line).and_then(MenuChoice::try_from) {
            Ok(choice) => choice,
            Err(InputError::UnknownChoice(n)) => {
                warn!("unknown menu option {}", n);
                writeln!(self.output, "Invalid choice. Try again.")?;
                return Ok(true);
            }
            Err(e) => {
                warn!("rejected menu input: {}", e);
                writeln!(self.output, "{}", NOT_A_NUMBER)?;
                return Ok(true);
            }
        };

        debug!("menu choice {:?}", choice);
        match choice {
            MenuChoice::Add => self.add_expense()?,
            MenuChoice::Total => writeln!(
                self.output,
                "Total Expenses: {}{:.2}",
                CURRENCY_SYMBOL,
                self.ledger
                    .total()
                    .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            )?,
            MenuChoice::ByDay => self.view_by_day()?,
            MenuChoice::ByMonth => self.view_by_month()?,
            MenuChoice::ByYear => self.view_by_year()?,
            MenuChoice::Exit => return Ok(false),
        }

        Ok(true)
    }

    fn add_expense(&mut self) -> Result<(), ShellError> {
        let amount = self.prompt_until("Enter amount: ", parse_amount)?;
        let category = self.prompt("Enter category (Food, Travel, etc.): ")?;
        let description = self.prompt("Enter description: ")?;
        let timestamp = self.now.unwrap_or_else(Local::now);

        self.ledger
            .add(Expense::new(amount, category, description, timestamp));
        writeln!(self.output, "Expense added successfully!")?;
        Ok(())
    }

    fn view_by_day(&mut self) -> Result<(), ShellError> {
        let line = self.prompt("Enter date (yyyy-MM-dd): ")?;
        match parse_date(&line) {
            Ok(date) => {
                let expenses = self.ledger.by_day(&date);
                writeln!(self.output, "{}", self.ledger.render(&expenses))?;
            }
            Err(e) => {
                warn!("{}", e);
                writeln!(self.output, "Invalid date format.")?;
            }
        }
        Ok(())
    }

    fn view_by_month(&mut self) -> Result<(), ShellError> {
        let month = self.prompt_until("Enter month (1-12): ", parse_integer)?;
        let year = self.prompt_until("Enter year: ", parse_integer)?;

        // Values that don't fit the calendar types can't match any expense
        let expenses = match (u32::try_from(month), i32::try_from(year)) {
            (Ok(month), Ok(year)) => self.ledger.by_month(month, year),
            _ => Vec::new(),
        };
        writeln!(self.output, "{}", self.ledger.render(&expenses))?;
        Ok(())
    }

    fn view_by_year(&mut self) -> Result<(), ShellError> {
        let year = self.prompt_until("Enter year: ", parse_integer)?;

        let expenses = match i32::try_from(year) {
            Ok(year) => self.ledger.by_year(year),
            Err(_) => Vec::new(),
        };
        writeln!(self.output, "{}", self.ledger.render(&expenses))?;
        Ok(())
    }

    // Write `text` and read one line of input, without its line ending. A line that
    // isn't valid UTF-8 is discarded and the prompt repeated.
    fn prompt(&mut self, text: &str) -> Result<String, ShellError> {
        let mut line = String::new();
        loop {
            write!(self.output, "{}", text)?;
            self.output.flush()?;

            match self.input.read_line(&mut line) {
                Ok(0) => return Err(InputError::EndOfInput.into()),
                Ok(_) => break,
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    warn!("rejected input line: {}", e);
                    writeln!(self.output, "{}", NOT_TEXT)?;
                    line.clear();
                }
                Err(e) => return Err(e.into()),
            }
        }

        let len = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(len);
        Ok(line)
    }

    // Prompt repeatedly until the input parses as a number
    fn prompt_until<T, F>(&mut self, text: &str, parse: F) -> Result<T, ShellError>
    where
        F: Fn(&str) -> Result<T, InputError>,
    {
        loop {
            let line = self.prompt(text)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    warn!("rejected input: {}", e);
                    writeln!(self.output, "{}", NOT_A_NUMBER)?;
                }
            }
        }
    }
}
