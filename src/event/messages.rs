//! Event actor message types.

use tokio::sync::oneshot;

use super::{
    errors::EventResult,
    models::{Event, Match, MatchScore, RoundStart, Standing, Username},
};

/// Messages that can be sent to an `EventActor`
#[derive(Debug)]
pub enum EventMessage {
    /// Add participants, skipping names that are already registered
    AddParticipants {
        names: Vec<Username>,
        response: oneshot::Sender<EventResult<usize>>,
    },

    /// Remove participants, ignoring unknown names
    RemoveParticipants {
        names: Vec<Username>,
        response: oneshot::Sender<EventResult<usize>>,
    },

    /// Pin the planned round count, suppressing recalculation
    SetTotalRounds {
        rounds: u32,
        response: oneshot::Sender<EventResult<()>>,
    },

    /// Current standings, best score first
    GetStandings {
        response: oneshot::Sender<EventResult<Vec<Standing>>>,
    },

    /// Record a submitted score for the unordered pair
    SubmitResult {
        first: Username,
        second: Username,
        score: MatchScore,
        response: oneshot::Sender<EventResult<Match>>,
    },

    /// Generate and record the next round of matches
    StartRound {
        response: oneshot::Sender<EventResult<RoundStart>>,
    },

    /// Full copy of the event state
    Snapshot { response: oneshot::Sender<Event> },
}
