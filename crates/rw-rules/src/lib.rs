//! Rules engine for Rollwerk.
//!
//! Turns a rule system tag and a flat map of string parameters into a
//! dice pool, rolls it, and scores the draw with that system's rules:
//! plain sums (D&D), success counting with doubles (Exalted), target-number
//! totals (The One Ring), matching sets (O.R.E.), and a roll-under d6 pool
//! with advantage and disadvantage (RuneScape).

pub mod engine;
pub mod error;
pub mod params;
pub mod system;
pub mod systems;

pub use engine::{RollReport, RollRequest, roll, roll_tagged};
pub use error::{RulesError, RulesResult};
pub use params::RollParams;
pub use system::RuleSystem;
pub use systems::Outcome;

/// Placeholder shown in place of a roll when the request was rejected.
pub const INVALID_INPUT_MARKER: &str = "Error: Invalid Input";
