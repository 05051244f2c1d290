//! Event error types.

use thiserror::Error;

use super::models::{AdminId, EventId, Match, Username};

/// Event errors
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum EventError {
    /// No event exists for the requesting administrator
    #[error("No event found for admin {0}")]
    EventNotFound(AdminId),

    /// Operation requires an event that has not started yet
    #[error("Event already started")]
    AlreadyStarted,

    /// Operation requires a started event
    #[error("Event not started")]
    NotStarted,

    /// Operation attempted against a finished event
    #[error("Event already ended")]
    AlreadyEnded,

    /// Round start rejected; all planned rounds were already generated
    #[error("No rounds remaining: {played} of {total} rounds played")]
    NoRoundsRemaining { played: u32, total: u32 },

    /// Round start rejected while a match awaits its result
    #[error("Match {0} has not submitted a result")]
    UndecidedMatch(Match),

    /// No unresolved match exists for the submitted pair
    #[error("Match between {first} and {second} not found")]
    MatchNotFound { first: Username, second: Username },

    /// Score string is not two colon-separated integers
    #[error("Invalid score {0:?}, expected a:b")]
    InvalidScore(String),

    /// Round count must be greater than one
    #[error("Invalid round count: must be greater than 1")]
    InvalidRoundCount,

    /// Participant cap reached
    #[error("Participant capacity reached: at most {max} allowed")]
    CapacityReached { max: usize },

    /// The event's actor task is gone
    #[error("Event {0} is no longer running")]
    EventStopped(EventId),
}

/// Result type for event operations
pub type EventResult<T> = Result<T, EventError>;
