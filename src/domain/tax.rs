use crate::error::{RentalError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// An inclusive age range and the surcharge applied to customers inside it.
///
/// `to: None` marks an open-ended bracket; only the last bracket of a table
/// may be open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub from: u32,
    #[serde(default)]
    pub to: Option<u32>,
    pub multiplier: Decimal,
}

impl TaxBracket {
    pub fn new(from: u32, to: Option<u32>, multiplier: Decimal) -> Self {
        Self {
            from,
            to,
            multiplier,
        }
    }

    pub fn contains(&self, age: u32) -> bool {
        age >= self.from && self.to.is_none_or(|to| age <= to)
    }
}

/// Ordered, contiguous, non-overlapping age brackets.
///
/// Construction is the only place the ordering rules are checked, so a
/// `TaxTable` value is always well formed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TaxTable {
    brackets: Vec<TaxBracket>,
}

impl TaxTable {
    pub fn new(brackets: Vec<TaxBracket>) -> Result<Self> {
        let Some(first) = brackets.first() else {
            return Err(RentalError::Config("tax table is empty".to_string()));
        };
        if first.from == 0 {
            return Err(RentalError::Config(
                "tax brackets must start at a positive age".to_string(),
            ));
        }

        for (i, bracket) in brackets.iter().enumerate() {
            if bracket.multiplier < Decimal::ZERO {
                return Err(RentalError::Config(format!(
                    "bracket starting at {} has a negative multiplier",
                    bracket.from
                )));
            }
            if let Some(to) = bracket.to
                && to < bracket.from
            {
                return Err(RentalError::Config(format!(
                    "bracket {}..={} is reversed",
                    bracket.from, to
                )));
            }
            let Some(next) = brackets.get(i + 1) else {
                continue;
            };
            match bracket.to {
                None => {
                    return Err(RentalError::Config(format!(
                        "open-ended bracket starting at {} must be last",
                        bracket.from
                    )));
                }
                Some(to) if to.checked_add(1) != Some(next.from) => {
                    return Err(RentalError::Config(format!(
                        "bracket ending at {} is not followed by one starting at {}",
                        to,
                        to.saturating_add(1)
                    )));
                }
                Some(_) => {}
            }
        }

        Ok(Self { brackets })
    }

    /// Youngest age any bracket accepts.
    pub fn rentable_from(&self) -> u32 {
        self.brackets[0].from
    }

    /// Oldest age that is still too young to rent. Customers at or below it
    /// are never priced.
    pub fn minimum_age(&self) -> u32 {
        self.rentable_from() - 1
    }

    /// First bracket containing `age`, scanning youngest to oldest.
    pub fn bracket_for(&self, age: u32) -> Option<&TaxBracket> {
        self.brackets.iter().find(|bracket| bracket.contains(age))
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }
}

impl Default for TaxTable {
    /// Young adults pay 10%, adults up to 30 pay 50%, everyone older pays 30%.
    fn default() -> Self {
        Self {
            brackets: vec![
                TaxBracket::new(18, Some(25), dec!(0.10)),
                TaxBracket::new(26, Some(30), dec!(0.50)),
                TaxBracket::new(31, None, dec!(0.30)),
            ],
        }
    }
}

impl<'de> Deserialize<'de> for TaxTable {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let brackets = Vec::<TaxBracket>::deserialize(deserializer)?;
        TaxTable::new(brackets).map_err(serde::de::Error::custom)
    }
}
