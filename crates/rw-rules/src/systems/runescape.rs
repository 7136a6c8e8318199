//! RuneScape-style rolls: 3d6 at or under a target number.
//!
//! Advantage or disadvantage adds a fourth die. With advantage the three
//! lowest dice are kept; with disadvantage the three highest. When both or
//! neither are set, three dice are rolled and all of them count. Lower
//! totals are better here, unlike the other systems.

use rw_dice::DicePool;
use serde::{Deserialize, Serialize};

use crate::error::RulesResult;
use crate::params::{ADVANTAGE, DISADVANTAGE, RollParams, TARGET_NUMBER};
use crate::systems::{Outcome, format_faces};

/// Sides on a RuneScape die.
pub const SIDES: u32 = 6;
/// Dice that count toward the total.
pub const KEPT_DICE: usize = 3;

/// Which dice of a sorted draw are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeepRule {
    /// Three dice, all kept.
    Normal,
    /// Four dice, keep the three lowest.
    Advantage,
    /// Four dice, keep the three highest.
    Disadvantage,
}

impl KeepRule {
    /// Resolve the checkbox pair. Both flags cancel out.
    pub fn from_flags(advantage: bool, disadvantage: bool) -> Self {
        match (advantage, disadvantage) {
            (true, false) => Self::Advantage,
            (false, true) => Self::Disadvantage,
            _ => Self::Normal,
        }
    }

    /// How many dice to roll under this rule.
    pub fn dice_count(self) -> u32 {
        match self {
            Self::Normal => 3,
            Self::Advantage | Self::Disadvantage => 4,
        }
    }

    /// Pick the kept dice from an ascending draw.
    pub fn keep(self, sorted: &[u32]) -> Vec<u32> {
        match self {
            Self::Normal => sorted.to_vec(),
            Self::Advantage => sorted.iter().take(KEPT_DICE).copied().collect(),
            Self::Disadvantage => sorted
                .iter()
                .skip(sorted.len().saturating_sub(KEPT_DICE))
                .copied()
                .collect(),
        }
    }
}

impl std::fmt::Display for KeepRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "Normal"),
            Self::Advantage => write!(f, "Advantage"),
            Self::Disadvantage => write!(f, "Disadvantage"),
        }
    }
}

/// Parameters for a RuneScape roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunescapeParams {
    /// Highest total that still succeeds.
    pub target_number: i64,
    /// Roll an extra die and keep the lowest three.
    pub advantage: bool,
    /// Roll an extra die and keep the highest three.
    pub disadvantage: bool,
}

impl Default for RunescapeParams {
    fn default() -> Self {
        Self {
            target_number: 12,
            advantage: false,
            disadvantage: false,
        }
    }
}

impl RunescapeParams {
    /// Parse from raw form parameters.
    pub fn from_params(params: &RollParams) -> RulesResult<Self> {
        Ok(Self {
            target_number: params.integer(
                TARGET_NUMBER,
                Self::default().target_number,
                i64::MIN..=i64::MAX,
            )?,
            advantage: params.flag(ADVANTAGE)?,
            disadvantage: params.flag(DISADVANTAGE)?,
        })
    }

    /// Every field combination is valid: any target, and the flags resolve
    /// through [`KeepRule::from_flags`].
    pub fn validate(&self) -> RulesResult<()> {
        Ok(())
    }

    /// The keep rule these flags select.
    pub fn keep_rule(&self) -> KeepRule {
        KeepRule::from_flags(self.advantage, self.disadvantage)
    }
}

/// A scored RuneScape roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunescapeRoll {
    /// Pool notation, e.g. `4d6`.
    pub notation: String,
    /// The keep rule applied.
    pub keep_rule: KeepRule,
    /// All faces, ascending.
    pub rolls: Vec<u32>,
    /// Faces that count toward the total, ascending.
    pub kept: Vec<u32>,
    /// Sum of the kept faces.
    pub total: u64,
    /// Target number the total was compared against.
    pub target_number: i64,
    /// Success when the total is at or under the target number.
    pub outcome: Outcome,
}

/// Build the pool for a RuneScape roll.
pub fn pool(params: &RunescapeParams) -> RulesResult<DicePool> {
    Ok(DicePool::new(params.keep_rule().dice_count(), SIDES)?)
}

/// Score a rolled pool.
pub fn score(params: &RunescapeParams, pool: &DicePool) -> RunescapeRoll {
    let keep_rule = params.keep_rule();
    let mut rolls = pool.last_results().to_vec();
    rolls.sort_unstable();
    let kept = keep_rule.keep(&rolls);
    let total: u64 = kept.iter().map(|&v| u64::from(v)).sum();
    RunescapeRoll {
        notation: pool.notation(),
        keep_rule,
        rolls,
        kept,
        total,
        target_number: params.target_number,
        outcome: Outcome::from_check(i128::from(total) <= i128::from(params.target_number)),
    }
}

impl std::fmt::Display for RunescapeRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "RuneScape ({}, {}): {} keep {} = {} vs TN {} → {}",
            self.notation,
            self.keep_rule,
            format_faces(&self.rolls),
            format_faces(&self.kept),
            self.total,
            self.target_number,
            self.outcome
        )
    }
}
