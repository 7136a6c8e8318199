//! A single polyhedral die.
//!
//! Dice carry no state beyond their number of sides. Randomness is supplied
//! by the caller at roll time, so a seeded RNG gives a reproducible draw.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{DiceError, DiceResult};

/// A polyhedral die type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Four-sided die.
    D4,
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die.
    D12,
    /// Twenty-sided die.
    D20,
    /// Percentile die (1-100).
    D100,
    /// A die with any other number of sides.
    Custom(u32),
}

impl Die {
    /// Build a die from a side count, preferring the named variants.
    ///
    /// A zero-sided die cannot be rolled and is rejected. One-sided dice are
    /// allowed and always roll 1.
    pub fn from_sides(sides: u32) -> DiceResult<Self> {
        match sides {
            0 => Err(DiceError::InvalidConfiguration(
                "a die needs at least one side".to_string(),
            )),
            4 => Ok(Self::D4),
            6 => Ok(Self::D6),
            8 => Ok(Self::D8),
            10 => Ok(Self::D10),
            12 => Ok(Self::D12),
            20 => Ok(Self::D20),
            100 => Ok(Self::D100),
            n => Ok(Self::Custom(n)),
        }
    }

    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
            Self::D100 => 100,
            Self::Custom(n) => n,
        }
    }

    /// Roll the die once, uniformly over `1..=sides`.
    pub fn roll<R: Rng + ?Sized>(self, rng: &mut R) -> u32 {
        // Custom(0) can only be built by hand; treat it as a d1.
        rng.random_range(1..=self.sides().max(1))
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}
