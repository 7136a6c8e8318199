//! Per-system scoring rules.
//!
//! Each system module exposes typed parameters parsed from [`RollParams`],
//! a `pool` function that builds the dice pool for those parameters, and a
//! pure `score` function that reads an already-rolled pool:
//! - **D&D**: sum all dice
//! - **Exalted**: count successes at 7+, doubling selected faces
//! - **One Ring**: sum d6s and meet or beat a target number
//! - **O.R.E.**: report matching sets
//! - **RuneScape**: keep three d6s and roll at or under a target number
//!
//! [`RollParams`]: crate::params::RollParams

pub mod dnd;
pub mod exalted;
pub mod one_ring;
pub mod ore;
pub mod runescape;

pub use dnd::{DndParams, DndRoll};
pub use exalted::{ExaltedParams, ExaltedRoll};
pub use one_ring::{OneRingParams, OneRingRoll};
pub use ore::{OreParams, OreRoll};
pub use runescape::{KeepRule, RunescapeParams, RunescapeRoll};

use serde::{Deserialize, Serialize};

/// Pass/fail result of comparing a total against a target number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The check passed.
    Success,
    /// The check failed.
    Failure,
}

impl Outcome {
    /// `Success` when `passed` is true.
    pub fn from_check(passed: bool) -> Self {
        if passed { Self::Success } else { Self::Failure }
    }

    /// Returns true for [`Outcome::Success`].
    pub fn is_success(self) -> bool {
        self == Self::Success
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "Success"),
            Self::Failure => write!(f, "Failure"),
        }
    }
}

/// Render faces as `[a, b, c]`.
pub(crate) fn format_faces(faces: &[u32]) -> String {
    let values: Vec<String> = faces.iter().map(|v| v.to_string()).collect();
    format!("[{}]", values.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_from_check() {
        assert_eq!(Outcome::from_check(true), Outcome::Success);
        assert_eq!(Outcome::from_check(false), Outcome::Failure);
        assert!(Outcome::Success.is_success());
    }

    #[test]
    fn outcome_display() {
        assert_eq!(Outcome::Success.to_string(), "Success");
        assert_eq!(Outcome::Failure.to_string(), "Failure");
    }

    #[test]
    fn faces_format() {
        assert_eq!(format_faces(&[3, 17]), "[3, 17]");
        assert_eq!(format_faces(&[]), "[]");
    }
}
