//! Roll session management.
//!
//! `RollSession` owns the RNG, the history, and its storage. Each roll is
//! parsed, rolled on a fresh pool, formatted, and recorded. Rejected input
//! never reaches the history.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, warn};

use rw_rules::{INVALID_INPUT_MARKER, RollParams, RollReport, RollRequest, RuleSystem, RulesError};

use crate::config::SessionConfig;
use crate::error::SessionResult;
use crate::history::HistoryStore;
use crate::storage::HistoryStorage;

/// What a roll request produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RollResponse {
    /// The roll went through and was recorded.
    Rolled(RollReport),
    /// The request was invalid; nothing was rolled or recorded.
    Rejected(RulesError),
}

impl RollResponse {
    /// The scored roll, if there was one.
    pub fn report(&self) -> Option<&RollReport> {
        match self {
            Self::Rolled(report) => Some(report),
            Self::Rejected(_) => None,
        }
    }

    /// Whether the request was rejected.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

impl std::fmt::Display for RollResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rolled(report) => write!(f, "{report}"),
            Self::Rejected(_) => write!(f, "{INVALID_INPUT_MARKER}"),
        }
    }
}

/// An interactive dice-rolling session with persisted history.
pub struct RollSession<S: HistoryStorage> {
    storage: S,
    history: HistoryStore,
    rng: StdRng,
}

impl<S: HistoryStorage> RollSession<S> {
    /// Start a session, loading any history already in `storage`.
    pub fn new(storage: S, config: &SessionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let history = HistoryStore::load(&storage, config.history_capacity);
        debug!(entries = history.len(), "roll session started");
        Self {
            storage,
            history,
            rng,
        }
    }

    /// Roll for a system tag and raw form parameters.
    pub fn roll(&mut self, tag: &str, params: &RollParams) -> RollResponse {
        let request = tag
            .parse::<RuleSystem>()
            .and_then(|system| RollRequest::parse(system, params));
        match request {
            Ok(request) => self.roll_request(&request),
            Err(e) => self.reject(e),
        }
    }

    /// Roll an already validated request.
    pub fn roll_request(&mut self, request: &RollRequest) -> RollResponse {
        let report = match rw_rules::roll(request, &mut self.rng) {
            Ok(report) => report,
            Err(e) => return self.reject(e),
        };
        if let Err(e) = self.history.record(report.to_string(), &mut self.storage) {
            warn!(error = %e, "roll history was not saved");
        }
        RollResponse::Rolled(report)
    }

    /// Empty the history and persist the empty list.
    pub fn clear_history(&mut self) -> SessionResult<()> {
        self.history.clear(&mut self.storage)
    }

    /// The current history.
    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// The backing storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Consume the session, returning its storage.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn reject(&self, error: RulesError) -> RollResponse {
        debug!(error = %error, "roll rejected");
        RollResponse::Rejected(error)
    }
}
