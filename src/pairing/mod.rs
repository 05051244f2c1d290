//! Swiss pairing pipeline: standings, score bands, and match generation.
//!
//! This module implements:
//! - Standings recomputed on demand from the full match history
//! - Banding of equal scores, with odd bands extended downwards
//! - Rematch-avoiding matching via iterative augmenting-path search
//! - Leftover fallback pairing with at most one bye per round
//!
//! ## Example
//!
//! ```
//! use swiss_rounds::event::Username;
//! use swiss_rounds::pairing::{compute_standings, plan_round};
//!
//! let participants: Vec<Username> = ["alice", "bob", "carol", "dave"]
//!     .into_iter()
//!     .map(Username::from)
//!     .collect();
//!
//! // No history yet: one band of four, two fresh matches
//! let standings = compute_standings(&participants, &[]);
//! let matches = plan_round(&standings, &[]);
//! assert_eq!(matches.len(), 2);
//! ```

pub mod bands;
pub mod matcher;
pub mod round;
pub mod standings;

pub use bands::score_bands;
pub use matcher::pair_band;
pub use round::plan_round;
pub use standings::compute_standings;
