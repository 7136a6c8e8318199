//! Exalted-style rolls: a d10 pool counting successes.
//!
//! Each die showing 7 or more is one success. Faces listed as doubles
//! (10 by default, optionally 9) score two successes instead.

use std::collections::BTreeSet;

use rw_dice::DicePool;
use serde::{Deserialize, Serialize};

use crate::error::{RulesError, RulesResult};
use crate::params::{DICE_COUNT, DOUBLE_VALUES, MAX_DICE, RollParams, check_bounded};
use crate::systems::format_faces;

/// Sides on an Exalted die.
pub const SIDES: u32 = 10;
/// Lowest face that counts as a success.
pub const SUCCESS_THRESHOLD: u32 = 7;

/// Parameters for an Exalted roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExaltedParams {
    /// Number of d10s in the pool.
    pub dice_count: u32,
    /// Faces that score two successes.
    pub doubles: BTreeSet<u32>,
}

impl Default for ExaltedParams {
    fn default() -> Self {
        Self {
            dice_count: 10,
            doubles: BTreeSet::from([10]),
        }
    }
}

impl ExaltedParams {
    /// Parse from raw form parameters.
    pub fn from_params(params: &RollParams) -> RulesResult<Self> {
        let defaults = Self::default();
        let default_doubles: Vec<u32> = defaults.doubles.iter().copied().collect();
        Ok(Self {
            dice_count: params.count(DICE_COUNT, defaults.dice_count, MAX_DICE)?,
            doubles: params.face_set(DOUBLE_VALUES, &default_doubles, 1..=SIDES)?,
        })
    }

    /// Check fields that did not come through [`Self::from_params`].
    pub fn validate(&self) -> RulesResult<()> {
        check_bounded(DICE_COUNT, self.dice_count, 1, MAX_DICE)?;
        match self.doubles.iter().find(|face| !(1..=SIDES).contains(*face)) {
            Some(face) => Err(RulesError::InvalidInput(format!(
                "{DOUBLE_VALUES} entries must be between 1 and {SIDES}, got {face}"
            ))),
            None => Ok(()),
        }
    }
}

/// A scored Exalted roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExaltedRoll {
    /// Pool notation, e.g. `10d10`.
    pub notation: String,
    /// Faces in roll order.
    pub rolls: Vec<u32>,
    /// Faces that scored double, ascending.
    pub doubles: Vec<u32>,
    /// Total successes.
    pub successes: u32,
}

/// Build the pool for an Exalted roll.
pub fn pool(params: &ExaltedParams) -> RulesResult<DicePool> {
    Ok(DicePool::new(params.dice_count, SIDES)?)
}

/// Score a rolled pool.
pub fn score(params: &ExaltedParams, pool: &DicePool) -> ExaltedRoll {
    ExaltedRoll {
        notation: pool.notation(),
        rolls: pool.last_results().to_vec(),
        doubles: params.doubles.iter().copied().collect(),
        successes: pool.count_successes(SUCCESS_THRESHOLD, &params.doubles),
    }
}

impl std::fmt::Display for ExaltedRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let noun = if self.successes == 1 { "success" } else { "successes" };
        write!(
            f,
            "Exalted ({}): {} = {} {noun}",
            self.notation,
            format_faces(&self.rolls),
            self.successes
        )
    }
}
