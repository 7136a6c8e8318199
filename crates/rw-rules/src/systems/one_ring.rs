//! The One Ring-style rolls: a d6 pool that must meet or beat a target number.

use rw_dice::DicePool;
use serde::{Deserialize, Serialize};

use crate::error::RulesResult;
use crate::params::{DICE_COUNT, MAX_DICE, RollParams, TARGET_NUMBER, check_bounded};
use crate::systems::{Outcome, format_faces};

/// Sides on a One Ring success die.
pub const SIDES: u32 = 6;

/// Parameters for a One Ring roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneRingParams {
    /// Number of d6s in the pool.
    pub dice_count: u32,
    /// Total needed to succeed.
    pub target_number: i64,
}

impl Default for OneRingParams {
    fn default() -> Self {
        Self {
            dice_count: 6,
            target_number: 18,
        }
    }
}

impl OneRingParams {
    /// Parse from raw form parameters.
    pub fn from_params(params: &RollParams) -> RulesResult<Self> {
        let defaults = Self::default();
        Ok(Self {
            dice_count: params.count(DICE_COUNT, defaults.dice_count, MAX_DICE)?,
            target_number: params.integer(
                TARGET_NUMBER,
                defaults.target_number,
                i64::MIN..=i64::MAX,
            )?,
        })
    }

    /// Check fields that did not come through [`Self::from_params`].
    pub fn validate(&self) -> RulesResult<()> {
        check_bounded(DICE_COUNT, self.dice_count, 1, MAX_DICE)
    }
}

/// A scored One Ring roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneRingRoll {
    /// Pool notation, e.g. `6d6`.
    pub notation: String,
    /// Faces in roll order.
    pub rolls: Vec<u32>,
    /// Sum of all faces.
    pub total: u64,
    /// Target number the total was compared against.
    pub target_number: i64,
    /// Success when the total meets or beats the target number.
    pub outcome: Outcome,
}

/// Build the pool for a One Ring roll.
pub fn pool(params: &OneRingParams) -> RulesResult<DicePool> {
    Ok(DicePool::new(params.dice_count, SIDES)?)
}

/// Score a rolled pool.
pub fn score(params: &OneRingParams, pool: &DicePool) -> OneRingRoll {
    let total = pool.sum();
    OneRingRoll {
        notation: pool.notation(),
        rolls: pool.last_results().to_vec(),
        total,
        target_number: params.target_number,
        outcome: Outcome::from_check(i128::from(total) >= i128::from(params.target_number)),
    }
}

impl std::fmt::Display for OneRingRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "One Ring ({}): {} = {} vs TN {} → {}",
            self.notation,
            format_faces(&self.rolls),
            self.total,
            self.target_number,
            self.outcome
        )
    }
}
