//! # Swiss Rounds
//!
//! A Swiss-system tournament round-pairing engine with an async actor model.
//!
//! This library pairs tournament participants round by round from their
//! running scores, avoiding rematches wherever the match history allows it,
//! and keeps every event behind a message-driven actor so administrators can
//! run many events concurrently from a single process.
//!
//! ## Architecture
//!
//! Every round is planned from the current standings:
//!
//! - **Standings**: wins, draws and losses tallied from the match history
//! - **Bands**: contiguous groups of equal score, extended to even size
//! - **Matching**: augmenting-path search over the rematch constraint graph
//! - **Fallback**: unmatched leftovers paired in order, odd one out gets a bye
//!
//! Event state lives inside per-event actors owned by an [`event::EventManager`].
//! When a round starts, a deferred reminder is scheduled and delivered through
//! the [`notify::Notifier`] seam once the round duration elapses.
//!
//! ## Core Modules
//!
//! - [`pairing`]: Standings, score bands, and the pairing algorithm
//! - [`event`]: Event state, per-event actors, and their manager
//! - [`notify`]: Round reminder delivery seam
//! - [`config`]: Environment-driven event defaults
//!
//! ## Example
//!
//! ```
//! use swiss_rounds::{Username, compute_standings, plan_round};
//!
//! let players: Vec<Username> = ["alice", "bob"].into_iter().map(Username::from).collect();
//!
//! let matches = plan_round(&compute_standings(&players, &[]), &[]);
//! assert_eq!(matches.len(), 1);
//! ```

/// Environment-driven defaults for new events.
pub mod config;
pub use config::{ConfigError, EventDefaults};

/// Event state, per-event actors, and their manager.
pub mod event;
pub use event::{
    Event, EventError, EventManager, EventResult, EventStatus, Match, MatchOutcome, MatchScore,
    RoundStart, Standing, Username,
};

/// Round reminder delivery.
pub mod notify;
pub use notify::{LogNotifier, Notifier, RoundReminder};

/// Standings, score bands, and round pairing.
pub mod pairing;
pub use pairing::{compute_standings, pair_band, plan_round, score_bands};
