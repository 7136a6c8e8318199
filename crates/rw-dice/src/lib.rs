//! Dice and dice pools for Rollwerk.
//!
//! A [`Die`] draws one uniformly distributed face. A [`DicePool`] owns a
//! fixed number of identical dice, remembers its last draw, and derives
//! sums, success counts, and matching sets from that draw.

pub mod die;
pub mod error;
pub mod pool;

pub use die::Die;
pub use error::{DiceError, DiceResult};
pub use pool::{DicePool, MatchingSet};
