//! One-Roll Engine rolls: a d10 pool read for matching sets.

use rw_dice::{DicePool, MatchingSet};
use serde::{Deserialize, Serialize};

use crate::error::RulesResult;
use crate::params::{DICE_COUNT, MAX_DICE, RollParams, check_bounded};
use crate::systems::format_faces;

/// Sides on an O.R.E. die.
pub const SIDES: u32 = 10;

/// Parameters for an O.R.E. roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OreParams {
    /// Number of d10s in the pool.
    pub dice_count: u32,
}

impl Default for OreParams {
    fn default() -> Self {
        Self { dice_count: 10 }
    }
}

impl OreParams {
    /// Parse from raw form parameters.
    pub fn from_params(params: &RollParams) -> RulesResult<Self> {
        Ok(Self {
            dice_count: params.count(DICE_COUNT, Self::default().dice_count, MAX_DICE)?,
        })
    }

    /// Check fields that did not come through [`Self::from_params`].
    pub fn validate(&self) -> RulesResult<()> {
        check_bounded(DICE_COUNT, self.dice_count, 1, MAX_DICE)
    }
}

/// A scored O.R.E. roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OreRoll {
    /// Pool notation, e.g. `10d10`.
    pub notation: String,
    /// Faces in roll order.
    pub rolls: Vec<u32>,
    /// Matching sets, widest first, then highest face first.
    pub sets: Vec<MatchingSet>,
}

/// Build the pool for an O.R.E. roll.
pub fn pool(params: &OreParams) -> RulesResult<DicePool> {
    Ok(DicePool::new(params.dice_count, SIDES)?)
}

/// Score a rolled pool.
pub fn score(pool: &DicePool) -> OreRoll {
    OreRoll {
        notation: pool.notation(),
        rolls: pool.last_results().to_vec(),
        sets: pool.matching_sets(),
    }
}

impl std::fmt::Display for OreRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ORE ({}): {} = ", self.notation, format_faces(&self.rolls))?;
        if self.sets.is_empty() {
            return write!(f, "No Sets");
        }
        let sets: Vec<String> = self.sets.iter().map(ToString::to_string).collect();
        write!(f, "{}", sets.join(", "))
    }
}
