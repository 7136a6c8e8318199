//! Dispatch from a rule system to its pool and scoring functions.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::RulesResult;
use crate::params::RollParams;
use crate::system::RuleSystem;
use crate::systems::{
    DndParams, DndRoll, ExaltedParams, ExaltedRoll, OneRingParams, OneRingRoll, OreParams,
    OreRoll, RunescapeParams, RunescapeRoll, dnd, exalted, one_ring, ore, runescape,
};

/// A roll request for one rule system.
///
/// Requests built by [`RollRequest::parse`] are already in range. Requests
/// that arrive some other way, such as deserialized JSON, are checked by
/// [`roll`] before any dice are built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "system", rename_all = "camelCase")]
pub enum RollRequest {
    /// Sum of NdM.
    Dnd(DndParams),
    /// d10 success counting.
    Exalted(ExaltedParams),
    /// d6 total against a target number.
    OneRing(OneRingParams),
    /// d10 matching sets.
    Ore(OreParams),
    /// Roll-under 3d6 with keep rules.
    Runescape(RunescapeParams),
}

impl RollRequest {
    /// Parse and validate raw parameters for `system`.
    pub fn parse(system: RuleSystem, params: &RollParams) -> RulesResult<Self> {
        Ok(match system {
            RuleSystem::Dnd => Self::Dnd(DndParams::from_params(params)?),
            RuleSystem::Exalted => Self::Exalted(ExaltedParams::from_params(params)?),
            RuleSystem::OneRing => Self::OneRing(OneRingParams::from_params(params)?),
            RuleSystem::Ore => Self::Ore(OreParams::from_params(params)?),
            RuleSystem::Runescape => Self::Runescape(RunescapeParams::from_params(params)?),
        })
    }

    /// Check every field against the same bounds the form parser applies.
    pub fn validate(&self) -> RulesResult<()> {
        match self {
            Self::Dnd(params) => params.validate(),
            Self::Exalted(params) => params.validate(),
            Self::OneRing(params) => params.validate(),
            Self::Ore(params) => params.validate(),
            Self::Runescape(params) => params.validate(),
        }
    }

    /// The system this request targets.
    pub fn system(&self) -> RuleSystem {
        match self {
            Self::Dnd(_) => RuleSystem::Dnd,
            Self::Exalted(_) => RuleSystem::Exalted,
            Self::OneRing(_) => RuleSystem::OneRing,
            Self::Ore(_) => RuleSystem::Ore,
            Self::Runescape(_) => RuleSystem::Runescape,
        }
    }
}

/// The scored result of one roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "system", rename_all = "camelCase")]
pub enum RollReport {
    /// D&D result.
    Dnd(DndRoll),
    /// Exalted result.
    Exalted(ExaltedRoll),
    /// One Ring result.
    OneRing(OneRingRoll),
    /// O.R.E. result.
    Ore(OreRoll),
    /// RuneScape result.
    Runescape(RunescapeRoll),
}

impl RollReport {
    /// The system that produced this report.
    pub fn system(&self) -> RuleSystem {
        match self {
            Self::Dnd(_) => RuleSystem::Dnd,
            Self::Exalted(_) => RuleSystem::Exalted,
            Self::OneRing(_) => RuleSystem::OneRing,
            Self::Ore(_) => RuleSystem::Ore,
            Self::Runescape(_) => RuleSystem::Runescape,
        }
    }

    /// Every face rolled (sorted ascending for RuneScape).
    pub fn rolls(&self) -> &[u32] {
        match self {
            Self::Dnd(r) => &r.rolls,
            Self::Exalted(r) => &r.rolls,
            Self::OneRing(r) => &r.rolls,
            Self::Ore(r) => &r.rolls,
            Self::Runescape(r) => &r.rolls,
        }
    }

    /// Pool notation of the roll, e.g. `6d10`.
    pub fn notation(&self) -> &str {
        match self {
            Self::Dnd(r) => &r.notation,
            Self::Exalted(r) => &r.notation,
            Self::OneRing(r) => &r.notation,
            Self::Ore(r) => &r.notation,
            Self::Runescape(r) => &r.notation,
        }
    }
}

impl std::fmt::Display for RollReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dnd(r) => std::fmt::Display::fmt(r, f),
            Self::Exalted(r) => std::fmt::Display::fmt(r, f),
            Self::OneRing(r) => std::fmt::Display::fmt(r, f),
            Self::Ore(r) => std::fmt::Display::fmt(r, f),
            Self::Runescape(r) => std::fmt::Display::fmt(r, f),
        }
    }
}

/// Build a fresh pool for `request`, roll it once, and score the draw.
pub fn roll<R: Rng + ?Sized>(request: &RollRequest, rng: &mut R) -> RulesResult<RollReport> {
    request.validate()?;
    let report = match request {
        RollRequest::Dnd(params) => {
            let mut pool = dnd::pool(params)?;
            pool.roll_all(rng);
            RollReport::Dnd(dnd::score(&pool))
        }
        RollRequest::Exalted(params) => {
            let mut pool = exalted::pool(params)?;
            pool.roll_all(rng);
            RollReport::Exalted(exalted::score(params, &pool))
        }
        RollRequest::OneRing(params) => {
            let mut pool = one_ring::pool(params)?;
            pool.roll_all(rng);
            RollReport::OneRing(one_ring::score(params, &pool))
        }
        RollRequest::Ore(params) => {
            let mut pool = ore::pool(params)?;
            pool.roll_all(rng);
            RollReport::Ore(ore::score(&pool))
        }
        RollRequest::Runescape(params) => {
            let mut pool = runescape::pool(params)?;
            pool.roll_all(rng);
            RollReport::Runescape(runescape::score(params, &pool))
        }
    };
    debug!(
        system = request.system().tag(),
        notation = report.notation(),
        "rolled"
    );
    Ok(report)
}

/// Parse a system tag and raw parameters, then roll.
pub fn roll_tagged<R: Rng + ?Sized>(
    tag: &str,
    params: &RollParams,
    rng: &mut R,
) -> RulesResult<RollReport> {
    let system: RuleSystem = tag.parse()?;
    let request = RollRequest::parse(system, params)?;
    roll(&request, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RulesError;
    use crate::params::{ADVANTAGE, DICE_COUNT, DISADVANTAGE, SIDES};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn every_system_rolls_with_defaults() {
        let mut rng = StdRng::seed_from_u64(1);
        for system in RuleSystem::ALL {
            let request = RollRequest::parse(system, &RollParams::new()).unwrap();
            let report = roll(&request, &mut rng).unwrap();
            assert_eq!(report.system(), system);
            assert!(!report.rolls().is_empty());
        }
    }

    #[test]
    fn seeded_rolls_repeat() {
        let params = RollParams::new().with(DICE_COUNT, "5").with(SIDES, "12");
        let a = roll_tagged("dnd", &params, &mut StdRng::seed_from_u64(77)).unwrap();
        let b = roll_tagged("dnd", &params, &mut StdRng::seed_from_u64(77)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn non_numeric_count_is_invalid_input() {
        let params = RollParams::new().with(DICE_COUNT, "lots");
        let err = roll_tagged("exalted", &params, &mut StdRng::seed_from_u64(0)).unwrap_err();
        assert!(matches!(err, RulesError::InvalidInput(_)));
    }

    #[test]
    fn unknown_system_is_rejected() {
        let err = roll_tagged("shadowrun", &RollParams::new(), &mut StdRng::seed_from_u64(0))
            .unwrap_err();
        assert_eq!(err, RulesError::UnknownSystem("shadowrun".to_string()));
    }

    #[test]
    fn runescape_pool_size_follows_flags() {
        let mut rng = StdRng::seed_from_u64(5);
        let adv = RollParams::new().with(ADVANTAGE, "true");
        let report = roll_tagged("runescape", &adv, &mut rng).unwrap();
        assert_eq!(report.rolls().len(), 4);

        let both = adv.with(DISADVANTAGE, "true");
        let report = roll_tagged("runescape", &both, &mut rng).unwrap();
        assert_eq!(report.rolls().len(), 3);
    }

    #[test]
    fn report_serializes_with_system_tag() {
        let report = roll_tagged("ore", &RollParams::new(), &mut StdRng::seed_from_u64(9)).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["system"], "ore");
        assert_eq!(json["rolls"].as_array().map(Vec::len), Some(10));
    }

    #[test]
    fn deserialized_one_sided_dnd_is_invalid_input() {
        let request: RollRequest =
            serde_json::from_str(r#"{"system":"dnd","dice_count":3,"sides":1}"#).unwrap();
        let result = roll(&request, &mut StdRng::seed_from_u64(1));
        assert!(matches!(result, Err(RulesError::InvalidInput(_))));
    }

    #[test]
    fn deserialized_oversized_pool_is_invalid_input() {
        let request: RollRequest =
            serde_json::from_str(r#"{"system":"ore","dice_count":5000}"#).unwrap();
        assert!(matches!(request.validate(), Err(RulesError::InvalidInput(_))));
        assert!(roll(&request, &mut StdRng::seed_from_u64(1)).is_err());
    }

    #[test]
    fn deserialized_request_in_range_rolls() {
        let request: RollRequest =
            serde_json::from_str(r#"{"system":"exalted","dice_count":4,"doubles":[9,10]}"#)
                .unwrap();
        let report = roll(&request, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(report.rolls().len(), 4);
    }

    #[test]
    fn parsed_requests_always_validate() {
        for system in RuleSystem::ALL {
            let request = RollRequest::parse(system, &RollParams::new()).unwrap();
            assert_eq!(request.validate(), Ok(()), "{system}");
        }
    }

    proptest! {
        #[test]
        fn dnd_total_matches_faces(count in 1u32..50, sides in 2u32..100, seed in any::<u64>()) {
            let request = RollRequest::Dnd(DndParams { dice_count: count, sides });
            let report = roll(&request, &mut StdRng::seed_from_u64(seed)).unwrap();
            let RollReport::Dnd(r) = report else {
                panic!("expected a D&D report");
            };
            prop_assert_eq!(r.rolls.len(), count as usize);
            prop_assert!(r.rolls.iter().all(|v| (1..=sides).contains(v)));
            prop_assert_eq!(r.total, r.rolls.iter().map(|&v| u64::from(v)).sum::<u64>());
        }

        #[test]
        fn runescape_keeps_three(adv in any::<bool>(), dis in any::<bool>(), seed in any::<u64>()) {
            let request = RollRequest::Runescape(RunescapeParams {
                target_number: 12,
                advantage: adv,
                disadvantage: dis,
            });
            let report = roll(&request, &mut StdRng::seed_from_u64(seed)).unwrap();
            let RollReport::Runescape(r) = report else {
                panic!("expected a RuneScape report");
            };
            prop_assert_eq!(r.kept.len(), 3);
            prop_assert!(r.rolls.windows(2).all(|w| w[0] <= w[1]));
        }
    }
}
