//! Raw roll parameters as they arrive from a form.
//!
//! Every value is a string. A key that is absent takes the default the
//! caller supplies; a key that is present must parse and fall in range.

use std::collections::{BTreeMap, BTreeSet};
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::{RulesError, RulesResult};

/// Number of dice in the pool.
pub const DICE_COUNT: &str = "diceCount";
/// Sides per die (D&D only).
pub const SIDES: &str = "sides";
/// Comma-separated faces that score double (Exalted only).
pub const DOUBLE_VALUES: &str = "doubleValues";
/// Target number to compare the total against.
pub const TARGET_NUMBER: &str = "targetNumber";
/// Advantage flag (RuneScape only).
pub const ADVANTAGE: &str = "advantage";
/// Disadvantage flag (RuneScape only).
pub const DISADVANTAGE: &str = "disadvantage";

/// Largest pool any system will roll.
pub const MAX_DICE: u32 = 1000;
/// Largest die the D&D roller accepts.
pub const MAX_SIDES: u32 = 1_000_000;

/// A flat map of named string parameters for one roll.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollParams {
    values: BTreeMap<String, String>,
}

impl RollParams {
    /// Create an empty parameter map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set a parameter, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Raw value of a parameter, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Parse an integer parameter and check it against `range`.
    pub fn integer(&self, key: &str, default: i64, range: RangeInclusive<i64>) -> RulesResult<i64> {
        let Some(raw) = self.get(key) else {
            return Ok(default);
        };
        let value = parse_integer(key, raw)?;
        if !range.contains(&value) {
            return Err(RulesError::InvalidInput(format!(
                "{key} must be between {} and {}, got {value}",
                range.start(),
                range.end()
            )));
        }
        Ok(value)
    }

    /// Parse a positive count parameter bounded by `max`.
    pub fn count(&self, key: &str, default: u32, max: u32) -> RulesResult<u32> {
        self.bounded(key, default, 1, max)
    }

    /// Parse an unsigned parameter in `min..=max`.
    pub fn bounded(&self, key: &str, default: u32, min: u32, max: u32) -> RulesResult<u32> {
        let value = self.integer(key, i64::from(default), i64::from(min)..=i64::from(max))?;
        u32::try_from(value)
            .map_err(|_| RulesError::InvalidInput(format!("{key} is out of range: {value}")))
    }

    /// Parse a checkbox-style flag. Absent or empty means unchecked.
    pub fn flag(&self, key: &str) -> RulesResult<bool> {
        let Some(raw) = self.get(key) else {
            return Ok(false);
        };
        match raw.trim().to_lowercase().as_str() {
            "" | "false" | "0" | "no" | "off" => Ok(false),
            "true" | "1" | "yes" | "on" | "checked" => Ok(true),
            other => Err(RulesError::InvalidInput(format!(
                "{key} must be a flag, got \"{other}\""
            ))),
        }
    }

    /// Parse a comma-separated set of faces, each in `range`.
    ///
    /// An empty string is an empty set.
    pub fn face_set(
        &self,
        key: &str,
        default: &[u32],
        range: RangeInclusive<u32>,
    ) -> RulesResult<BTreeSet<u32>> {
        let Some(raw) = self.get(key) else {
            return Ok(default.iter().copied().collect());
        };
        raw.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                let value = parse_integer(key, part)?;
                u32::try_from(value)
                    .ok()
                    .filter(|v| range.contains(v))
                    .ok_or_else(|| {
                        RulesError::InvalidInput(format!(
                            "{key} entries must be between {} and {}, got {value}",
                            range.start(),
                            range.end()
                        ))
                    })
            })
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RollParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

/// Check an already-typed value against `min..=max`.
pub fn check_bounded(key: &str, value: u32, min: u32, max: u32) -> RulesResult<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(RulesError::InvalidInput(format!(
            "{key} must be between {min} and {max}, got {value}"
        )))
    }
}

fn parse_integer(key: &str, raw: &str) -> RulesResult<i64> {
    raw.trim().parse::<i64>().map_err(|_| {
        RulesError::InvalidInput(format!("{key} must be an integer, got \"{}\"", raw.trim()))
    })
}
