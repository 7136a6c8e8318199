//! Roll sessions for Rollwerk.
//!
//! A [`RollSession`] is the pipeline a front end drives: it loads the roll
//! history from a [`HistoryStorage`], rolls requests through the rules
//! engine, and persists the bounded, most-recent-first history after every
//! change.

pub mod config;
pub mod error;
pub mod history;
pub mod session;
pub mod storage;

pub use config::SessionConfig;
pub use error::{SessionError, SessionResult};
pub use history::HistoryStore;
pub use session::{RollResponse, RollSession};
pub use storage::{FileStorage, HistoryStorage, MemoryStorage};
