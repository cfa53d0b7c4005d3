use crate::error::{RentalError, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

const SYMBOL: &str = "R$";
const NBSP: char = '\u{a0}';
const THOUSANDS_SEPARATOR: char = '.';
const DECIMAL_SEPARATOR: char = ',';

/// Renders amounts as Brazilian real (`pt-BR`, `BRL`).
///
/// Output always carries two fraction digits, rounded half away from zero:
/// `1234.565` becomes `R$ 1.234,57` (the space is a non-breaking space).
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrencyFormatter;

impl CurrencyFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn round(&self, amount: Decimal) -> Decimal {
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    pub fn format(&self, amount: Decimal) -> String {
        let rounded = self.round(amount);
        let digits = format!("{:.2}", rounded.abs());
        let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

        let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
        for (i, digit) in integer.chars().enumerate() {
            if i > 0 && (integer.len() - i) % 3 == 0 {
                grouped.push(THOUSANDS_SEPARATOR);
            }
            grouped.push(digit);
        }

        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        format!("{sign}{SYMBOL}{NBSP}{grouped}{DECIMAL_SEPARATOR}{fraction}")
    }

    /// Reads back a string produced by [`CurrencyFormatter::format`].
    ///
    /// Thousands must be grouped in threes and exactly two fraction digits are
    /// required. A plain space is accepted in place of the non-breaking one.
    pub fn parse(&self, text: &str) -> Result<Decimal> {
        let invalid = || RentalError::InvalidInput(format!("'{text}' is not a BRL amount"));

        let trimmed = text.trim();
        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let body = rest
            .strip_prefix(SYMBOL)
            .ok_or_else(invalid)?
            .trim_start_matches([NBSP, ' ']);

        let (integer, fraction) = body.split_once(DECIMAL_SEPARATOR).ok_or_else(invalid)?;
        if fraction.len() != 2 || !fraction.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let groups: Vec<&str> = integer.split(THOUSANDS_SEPARATOR).collect();
        let well_grouped = groups.iter().enumerate().all(|(i, group)| {
            let size_ok = if i == 0 {
                (1..=3).contains(&group.len())
            } else {
                group.len() == 3
            };
            size_ok && group.chars().all(|c| c.is_ascii_digit())
        });
        let leading_zero = groups[0].len() > 1 && groups[0].starts_with('0');
        if !well_grouped || leading_zero {
            return Err(invalid());
        }

        let plain = format!("{}.{fraction}", groups.concat());
        let value = Decimal::from_str(&plain).map_err(|_| invalid())?;
        Ok(if negative { -value } else { value })
    }
}
