//! Dice pool construction, rolling, and aggregation.
//!
//! A pool remembers its most recent draw so that every metric derived for
//! one roll (sum, successes, sets) reads the same faces. Reading a pool that
//! has never been rolled is tolerated and yields neutral values: a sum of 0,
//! no successes, and no sets.

use std::collections::{BTreeMap, BTreeSet};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::die::Die;
use crate::error::{DiceError, DiceResult};

/// A face value that appeared more than once in a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingSet {
    /// The face value shared by the set.
    pub value: u32,
    /// How many dice showed that value (at least 2).
    pub count: u32,
}

impl std::fmt::Display for MatchingSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.count, self.value)
    }
}

/// A fixed number of identical dice rolled together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DicePool {
    die: Die,
    size: u32,
    results: Vec<u32>,
}

impl DicePool {
    /// Create a pool of `size` dice with `sides` sides each.
    pub fn new(size: u32, sides: u32) -> DiceResult<Self> {
        if size == 0 {
            return Err(DiceError::InvalidConfiguration(
                "a pool needs at least one die".to_string(),
            ));
        }
        let die = Die::from_sides(sides)?;
        Ok(Self {
            die,
            size,
            results: Vec::new(),
        })
    }

    /// Rebuild a pool from a known draw, as if it had just been rolled.
    pub fn from_results(sides: u32, results: Vec<u32>) -> DiceResult<Self> {
        let size = u32::try_from(results.len()).map_err(|_| {
            DiceError::InvalidConfiguration(format!("too many dice: {}", results.len()))
        })?;
        let mut pool = Self::new(size, sides)?;
        if let Some(bad) = results.iter().find(|&&v| !(1..=sides).contains(&v)) {
            return Err(DiceError::InvalidConfiguration(format!(
                "face {bad} is outside 1..={sides}"
            )));
        }
        pool.results = results;
        Ok(pool)
    }

    /// The die type shared by every die in the pool.
    pub fn die(&self) -> Die {
        self.die
    }

    /// Number of dice in the pool.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Number of sides on each die.
    pub fn sides(&self) -> u32 {
        self.die.sides()
    }

    /// Standard notation for the pool, e.g. `6d10`.
    pub fn notation(&self) -> String {
        format!("{}{}", self.size, self.die)
    }

    /// Whether the pool has been rolled at least once.
    pub fn has_rolled(&self) -> bool {
        !self.results.is_empty()
    }

    /// Faces from the most recent roll, in die order. Empty before the first roll.
    pub fn last_results(&self) -> &[u32] {
        &self.results
    }

    /// Roll every die independently, replacing the previous draw.
    pub fn roll_all<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &[u32] {
        let die = self.die;
        self.results = (0..self.size).map(|_| die.roll(rng)).collect();
        &self.results
    }

    /// Sum of the last draw.
    pub fn sum(&self) -> u64 {
        self.results.iter().map(|&v| u64::from(v)).sum()
    }

    /// Count successes in the last draw.
    ///
    /// Each face at or above `threshold` scores one success, or two when the
    /// face is listed in `doubles`. Faces below the threshold score nothing.
    pub fn count_successes(&self, threshold: u32, doubles: &BTreeSet<u32>) -> u32 {
        self.results
            .iter()
            .filter(|&&v| v >= threshold)
            .map(|v| if doubles.contains(v) { 2 } else { 1 })
            .sum()
    }

    /// Every face that appears at least twice in the last draw.
    ///
    /// Larger sets come first; sets of equal size are ordered by face value,
    /// highest first.
    pub fn matching_sets(&self) -> Vec<MatchingSet> {
        let mut counts: BTreeMap<u32, u32> = BTreeMap::new();
        for &value in &self.results {
            *counts.entry(value).or_insert(0) += 1;
        }
        let mut sets: Vec<MatchingSet> = counts
            .into_iter()
            .filter(|&(_, count)| count >= 2)
            .map(|(value, count)| MatchingSet { value, count })
            .collect();
        sets.sort_by(|a, b| b.count.cmp(&a.count).then(b.value.cmp(&a.value)));
        sets
    }
}
