//! D&D-style rolls: NdM, summed.

use rw_dice::DicePool;
use serde::{Deserialize, Serialize};

use crate::error::RulesResult;
use crate::params::{DICE_COUNT, MAX_DICE, MAX_SIDES, RollParams, SIDES, check_bounded};
use crate::systems::format_faces;

/// Parameters for a D&D roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DndParams {
    /// Number of dice to roll.
    pub dice_count: u32,
    /// Sides per die.
    pub sides: u32,
}

impl Default for DndParams {
    fn default() -> Self {
        Self {
            dice_count: 1,
            sides: 20,
        }
    }
}

impl DndParams {
    /// Parse from raw form parameters.
    pub fn from_params(params: &RollParams) -> RulesResult<Self> {
        let defaults = Self::default();
        Ok(Self {
            dice_count: params.count(DICE_COUNT, defaults.dice_count, MAX_DICE)?,
            sides: params.bounded(SIDES, defaults.sides, 2, MAX_SIDES)?,
        })
    }

    /// Check fields that did not come through [`Self::from_params`].
    pub fn validate(&self) -> RulesResult<()> {
        check_bounded(DICE_COUNT, self.dice_count, 1, MAX_DICE)?;
        check_bounded(SIDES, self.sides, 2, MAX_SIDES)
    }
}

/// A scored D&D roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DndRoll {
    /// Pool notation, e.g. `2d20`.
    pub notation: String,
    /// Faces in roll order.
    pub rolls: Vec<u32>,
    /// Sum of all faces.
    pub total: u64,
}

/// Build the pool for a D&D roll.
pub fn pool(params: &DndParams) -> RulesResult<DicePool> {
    Ok(DicePool::new(params.dice_count, params.sides)?)
}

/// Score a rolled pool.
pub fn score(pool: &DicePool) -> DndRoll {
    DndRoll {
        notation: pool.notation(),
        rolls: pool.last_results().to_vec(),
        total: pool.sum(),
    }
}

impl std::fmt::Display for DndRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "D&D ({}): {} = {}",
            self.notation,
            format_faces(&self.rolls),
            self.total
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RulesError;

    #[test]
    fn validate_matches_form_bounds() {
        assert_eq!(DndParams::default().validate(), Ok(()));
        let one_sided = DndParams {
            dice_count: 3,
            sides: 1,
        };
        assert!(matches!(one_sided.validate(), Err(RulesError::InvalidInput(_))));
        let empty = DndParams {
            dice_count: 0,
            sides: 6,
        };
        assert!(empty.validate().is_err());
        let huge = DndParams {
            dice_count: 1,
            sides: MAX_SIDES + 1,
        };
        assert!(huge.validate().is_err());
    }

    #[test]
    fn defaults_to_one_d20() {
        let params = DndParams::from_params(&RollParams::new()).unwrap();
        assert_eq!(params, DndParams { dice_count: 1, sides: 20 });
    }

    #[test]
    fn one_sided_dice_are_rejected() {
        let raw = RollParams::new().with(SIDES, "1");
        assert!(matches!(
            DndParams::from_params(&raw),
            Err(RulesError::InvalidInput(_))
        ));
    }

    #[test]
    fn sums_faces() {
        let pool = DicePool::from_results(20, vec![3, 17]).unwrap();
        let roll = score(&pool);
        assert_eq!(roll.total, 20);
        assert_eq!(roll.rolls, vec![3, 17]);
        insta::assert_snapshot!(roll.to_string(), @"D&D (2d20): [3, 17] = 20");
    }

    #[test]
    fn pool_matches_params() {
        let pool = pool(&DndParams { dice_count: 3, sides: 8 }).unwrap();
        assert_eq!(pool.notation(), "3d8");
    }
}
