//! Line-oriented prompting and input parsing

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{AppError, AppResult};

/// Date format used for every date typed or shown on the console
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Input and output ends of an interactive session
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Print one line
    pub fn say(&mut self, text: impl Display) -> AppResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Print `label` and read the answer without its line ending
    pub fn ask(&mut self, label: &str) -> AppResult<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::InputClosed);
        }
        let len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(len);
        Ok(line)
    }

    /// Like `ask`, but a blank answer means "keep the current value"
    pub fn ask_optional(&mut self, label: &str) -> AppResult<Option<String>> {
        let answer = self.ask(label)?;
        Ok(if answer.trim().is_empty() { None } else { Some(answer) })
    }

    pub fn ask_id(&mut self, label: &str) -> AppResult<i32> {
        parse_id(&self.ask(label)?)
    }
}

pub fn parse_id(text: &str) -> AppResult<i32> {
    text.trim()
        .parse()
        .map_err(|_| AppError::Validation(format!("{:?} is not a valid ID", text.trim())))
}

pub fn parse_quantity(text: &str) -> AppResult<i32> {
    text.trim()
        .parse()
        .map_err(|_| AppError::Validation(format!("{:?} is not a valid quantity", text.trim())))
}

pub fn parse_date(text: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).map_err(|_| {
        AppError::Validation(format!("{:?} is not a date in dd/mm/yyyy format", text.trim()))
    })
}

pub fn parse_amount(text: &str) -> AppResult<Decimal> {
    Decimal::from_str(text.trim())
        .map_err(|_| AppError::Validation(format!("{:?} is not a valid amount", text.trim())))
}
