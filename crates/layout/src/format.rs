//! Amount and date rendering.
//!
//! Formatting is driven by an explicit [`NumberFormat`] handed to each call;
//! nothing reads a process-wide locale.

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Decimal and thousands separators must differ (both are '{0}')")]
    AmbiguousSeparators(char),
    #[error("Digit grouping must be at least 1")]
    InvalidGrouping,
    #[error("Separator '{0}' is a digit or a sign")]
    InvalidSeparator(char),
}

/// Separators and grouping for monetary amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NumberFormat {
    pub decimal_separator: char,
    pub thousands_separator: char,
    pub grouping: usize,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::brazilian()
    }
}

impl NumberFormat {
    /// `1.234,50`
    pub const fn brazilian() -> Self {
        Self {
            decimal_separator: ',',
            thousands_separator: '.',
            grouping: 3,
        }
    }

    /// Rejects configurations that would render an amount ambiguously.
    pub fn validate(&self) -> Result<(), FormatError> {
        if self.grouping == 0 {
            return Err(FormatError::InvalidGrouping);
        }
        for sep in [self.decimal_separator, self.thousands_separator] {
            if sep.is_ascii_digit() || sep == '-' || sep == '+' {
                return Err(FormatError::InvalidSeparator(sep));
            }
        }
        if self.decimal_separator == self.thousands_separator {
            return Err(FormatError::AmbiguousSeparators(self.decimal_separator));
        }
        Ok(())
    }

    /// Renders `value` with two decimals and grouped thousands, no currency symbol.
    ///
    /// NaN, infinities and values too large to count in cents render as an
    /// empty string.
    pub fn amount(&self, value: f64) -> String {
        let cents = (value.abs() * 100.0).round();
        if !cents.is_finite() || cents >= u64::MAX as f64 {
            log::warn!("Amount {} cannot be printed", value);
            return String::new();
        }
        let cents = cents as u64;
        let integer = (cents / 100).to_string();
        let fraction = cents % 100;

        let mut grouped = String::with_capacity(integer.len() + integer.len() / self.grouping + 4);
        if value < 0.0 && cents != 0 {
            grouped.push('-');
        }
        let lead = match integer.len() % self.grouping {
            0 => self.grouping,
            n => n,
        };
        for (i, digit) in integer.chars().enumerate() {
            if i >= lead && (i - lead) % self.grouping == 0 {
                grouped.push(self.thousands_separator);
            }
            grouped.push(digit);
        }
        grouped.push(self.decimal_separator);
        grouped.push_str(&format!("{:02}", fraction));
        grouped
    }

    /// Like [`amount`](Self::amount) but renders zero or a missing value as an
    /// empty string, for optional addition/deduction cells.
    pub fn optional_amount(&self, value: Option<f64>) -> String {
        match value {
            Some(v) if v != 0.0 => self.amount(v),
            _ => String::new(),
        }
    }
}

/// `dd/mm/yyyy`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
