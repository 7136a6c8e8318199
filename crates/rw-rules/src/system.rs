//! The closed set of supported rule systems.

use serde::{Deserialize, Serialize};

use crate::error::RulesError;

/// A tabletop rule system the engine knows how to score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleSystem {
    /// Sum of NdM (Dungeons & Dragons).
    Dnd,
    /// d10 pool counting successes at 7+, with doubled faces (Exalted).
    Exalted,
    /// d6 pool total against a target number (The One Ring).
    OneRing,
    /// d10 pool scored by matching sets (One-Roll Engine).
    Ore,
    /// 3d6 roll-under with advantage and disadvantage (RuneScape).
    Runescape,
}

impl RuleSystem {
    /// Every supported system, in menu order.
    pub const ALL: [Self; 5] = [
        Self::Dnd,
        Self::Exalted,
        Self::OneRing,
        Self::Ore,
        Self::Runescape,
    ];

    /// Machine tag used by the form layer (e.g. `oneRing`).
    pub fn tag(self) -> &'static str {
        match self {
            Self::Dnd => "dnd",
            Self::Exalted => "exalted",
            Self::OneRing => "oneRing",
            Self::Ore => "ore",
            Self::Runescape => "runescape",
        }
    }

    /// Human-readable name used in formatted results.
    pub fn label(self) -> &'static str {
        match self {
            Self::Dnd => "D&D",
            Self::Exalted => "Exalted",
            Self::OneRing => "One Ring",
            Self::Ore => "ORE",
            Self::Runescape => "RuneScape",
        }
    }
}

impl std::str::FromStr for RuleSystem {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dnd" | "d&d" => Ok(Self::Dnd),
            "exalted" => Ok(Self::Exalted),
            "onering" | "one_ring" | "one-ring" => Ok(Self::OneRing),
            "ore" => Ok(Self::Ore),
            "runescape" => Ok(Self::Runescape),
            _ => Err(RulesError::UnknownSystem(s.to_string())),
        }
    }
}

impl std::fmt::Display for RuleSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip_through_from_str() {
        for system in RuleSystem::ALL {
            assert_eq!(system.tag().parse::<RuleSystem>(), Ok(system));
        }
    }

    #[test]
    fn parse_is_lenient_about_case_and_separators() {
        assert_eq!("OneRing".parse(), Ok(RuleSystem::OneRing));
        assert_eq!("one_ring".parse(), Ok(RuleSystem::OneRing));
        assert_eq!(" DND ".parse(), Ok(RuleSystem::Dnd));
    }

    #[test]
    fn unknown_tag() {
        assert_eq!(
            "gurps".parse::<RuleSystem>(),
            Err(RulesError::UnknownSystem("gurps".to_string()))
        );
    }

    #[test]
    fn serde_uses_tags() {
        let json = serde_json::to_string(&RuleSystem::OneRing).unwrap();
        assert_eq!(json, "\"oneRing\"");
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(RuleSystem::Dnd.to_string(), "D&D");
        assert_eq!(RuleSystem::Runescape.to_string(), "RuneScape");
    }
}
