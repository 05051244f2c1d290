//! Event data models for Swiss-system tournaments.

use std::{cmp::Ordering, fmt, str::FromStr, time::Duration};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::EventError;

/// Event ID type
pub type EventId = i64;

/// Administrator ID type
pub type AdminId = i64;

/// Notification channel ID type
pub type ChatId = i64;

/// Points awarded for a win
pub const WIN_POINTS: u32 = 3;

/// Points awarded for a draw
pub const DRAW_POINTS: u32 = 1;

/// A participant name. Stored as given; normalization (mention prefixes,
/// casing) is the front end's concern.
#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Username(String);

impl Username {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for Username {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Username {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Result state of a match
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    /// Awaiting score submission
    NoResult,
    /// First participant won
    FirstWon,
    /// Second participant won
    SecondWon,
    /// Even result
    Draw,
}

impl MatchOutcome {
    /// Whether a result has been recorded
    pub fn is_decided(self) -> bool {
        self != Self::NoResult
    }
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::NoResult => "no result",
            Self::FirstWon => "first won",
            Self::SecondWon => "second won",
            Self::Draw => "draw",
        };
        write!(f, "{repr}")
    }
}

/// A submitted numeric score pair, e.g. `2:1`
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct MatchScore {
    pub first: i32,
    pub second: i32,
}

impl MatchScore {
    pub fn new(first: i32, second: i32) -> Self {
        Self { first, second }
    }

    /// The outcome this score decides
    pub fn outcome(self) -> MatchOutcome {
        match self.first.cmp(&self.second) {
            Ordering::Greater => MatchOutcome::FirstWon,
            Ordering::Less => MatchOutcome::SecondWon,
            Ordering::Equal => MatchOutcome::Draw,
        }
    }
}

impl FromStr for MatchScore {
    type Err = EventError;

    /// Parses exactly two colon-separated integers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || EventError::InvalidScore(s.to_string());
        let (first, second) = s.split_once(':').ok_or_else(malformed)?;
        if second.contains(':') {
            return Err(malformed());
        }
        let first = first.trim().parse().map_err(|_| malformed())?;
        let second = second.trim().parse().map_err(|_| malformed())?;
        Ok(Self { first, second })
    }
}

impl fmt::Display for MatchScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.first, self.second)
    }
}

/// One pairing of participants. `second` is absent for a bye, which is
/// decided as a first-participant win the moment it is created.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Match {
    /// First participant
    pub first: Username,
    /// Second participant; `None` denotes a bye
    pub second: Option<Username>,
    /// Result state
    pub outcome: MatchOutcome,
    /// Submitted score, if any
    pub score: Option<MatchScore>,
}

impl Match {
    /// New undecided match between two participants
    pub fn new(first: Username, second: Username) -> Self {
        Self {
            first,
            second: Some(second),
            outcome: MatchOutcome::NoResult,
            score: None,
        }
    }

    /// New bye for a participant left without an opponent
    pub fn bye(first: Username) -> Self {
        Self {
            first,
            second: None,
            outcome: MatchOutcome::FirstWon,
            score: None,
        }
    }

    pub fn is_bye(&self) -> bool {
        self.second.is_none()
    }

    /// Whether this match pairs `a` and `b` in either order
    pub fn involves_pair(&self, a: &Username, b: &Username) -> bool {
        match &self.second {
            Some(second) => (self.first == *a && *second == *b) || (self.first == *b && *second == *a),
            None => false,
        }
    }

    /// Record a submitted score, deciding the outcome
    pub fn record_score(&mut self, score: MatchScore) {
        self.outcome = score.outcome();
        self.score = Some(score);
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.second {
            Some(second) => write!(f, "{} - {}", self.first, second),
            None => write!(f, "{} - bye", self.first),
        }
    }
}

/// Event lifecycle state
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    /// Accepting participant edits; no rounds generated yet
    NotStarted,
    /// At least one round generated
    Started,
    /// All planned rounds played to a decision
    Ended,
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::NotStarted => "not started",
            Self::Started => "started",
            Self::Ended => "ended",
        };
        write!(f, "{repr}")
    }
}

/// A participant's derived summary at a point in time. Recomputed from the
/// match history on demand, never stored.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Standing {
    /// Participant name
    pub name: Username,
    /// Decided matches won, byes included
    pub wins: u32,
    /// Decided matches lost
    pub losses: u32,
    /// Decided matches drawn
    pub draws: u32,
    /// Ranking score: wins x 3 + draws
    pub score: u32,
}

impl Standing {
    /// Zeroed tally for a participant with no decided matches
    pub fn zeroed(name: Username) -> Self {
        Self {
            name,
            wins: 0,
            losses: 0,
            draws: 0,
            score: 0,
        }
    }

    /// Refresh the score from the current tallies
    pub fn recompute_score(&mut self) {
        self.score = self.wins * WIN_POINTS + self.draws * DRAW_POINTS;
    }
}

impl fmt::Display for Standing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} / {} / {} {}",
            self.name, self.wins, self.draws, self.losses, self.score
        )
    }
}

/// One tournament instance with its own participant set, status, and match
/// history. Owned by a single event actor; everything else sees clones.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Event {
    /// Event ID
    pub id: EventId,
    /// Administrator who owns the event
    pub admin_id: AdminId,
    /// Destination channel for round reminders
    pub chat_id: ChatId,
    /// Event name
    pub name: String,
    /// How long participants get before the round reminder fires
    pub round_duration: Duration,
    /// Participant names in registration order; uniqueness enforced on insert
    pub participants: Vec<Username>,
    /// Lifecycle state
    pub status: EventStatus,
    /// Rounds successfully started so far
    pub current_round: u32,
    /// Planned number of rounds
    pub total_rounds: u32,
    /// Set when an administrator pinned the round count by hand, which
    /// suppresses automatic recalculation
    pub total_rounds_manual: bool,
    /// Full match history in chronological order
    pub matches: Vec<Match>,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// First round-start time
    pub started_at: Option<DateTime<Utc>>,
    /// Completion time
    pub ended_at: Option<DateTime<Utc>>,
}

impl Event {
    /// Create a new event with no participants
    pub fn new(
        id: EventId,
        admin_id: AdminId,
        chat_id: ChatId,
        name: String,
        round_duration: Duration,
    ) -> Self {
        Self {
            id,
            admin_id,
            chat_id,
            name,
            round_duration,
            participants: Vec::new(),
            status: EventStatus::NotStarted,
            current_round: 0,
            total_rounds: 0,
            total_rounds_manual: false,
            matches: Vec::new(),
            created_at: Utc::now(),
            started_at: None,
            ended_at: None,
        }
    }

    /// Recompute the planned round count from the participant count unless
    /// it was pinned manually.
    pub fn recalc_total_rounds(&mut self) {
        if self.total_rounds_manual {
            return;
        }
        self.total_rounds = rounds_for(self.participants.len());
    }

    /// First recorded match for the unordered pair that still awaits a
    /// result. Decided matches are skipped so rematches stay addressable.
    pub fn find_unresolved_mut(&mut self, a: &Username, b: &Username) -> Option<&mut Match> {
        self.matches
            .iter_mut()
            .find(|m| m.outcome == MatchOutcome::NoResult && m.involves_pair(a, b))
    }

    /// First match still awaiting a result, if any
    pub fn first_undecided(&self) -> Option<&Match> {
        self.matches.iter().find(|m| !m.outcome.is_decided())
    }

    pub fn contains_participant(&self, name: &Username) -> bool {
        self.participants.contains(name)
    }
}

/// ceil(log2(n)) rounds suffice to single out a winner among `n`
/// participants; zero or one participant needs no rounds.
pub fn rounds_for(participants: usize) -> u32 {
    if participants <= 1 {
        return 0;
    }
    participants.next_power_of_two().trailing_zeros()
}

/// Successful round-start summary returned to the caller
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct RoundStart {
    /// Standings used to seed the pairing, best score first
    pub standings: Vec<Standing>,
    /// Matches generated for this round, in band order
    pub new_matches: Vec<Match>,
    /// The round number just started, 1-based
    pub round: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_for_powers_and_gaps() {
        assert_eq!(rounds_for(0), 0);
        assert_eq!(rounds_for(1), 0);
        assert_eq!(rounds_for(2), 1);
        assert_eq!(rounds_for(3), 2);
        assert_eq!(rounds_for(4), 2);
        assert_eq!(rounds_for(5), 3);
        assert_eq!(rounds_for(8), 3);
        assert_eq!(rounds_for(9), 4);
        assert_eq!(rounds_for(16), 4);
    }

    #[test]
    fn test_score_parse_valid() {
        let score: MatchScore = "2:1".parse().unwrap();
        assert_eq!(score, MatchScore::new(2, 1));

        let score: MatchScore = "-1:0".parse().unwrap();
        assert_eq!(score, MatchScore::new(-1, 0));

        let score: MatchScore = " 3 : 3 ".parse().unwrap();
        assert_eq!(score, MatchScore::new(3, 3));
    }

    #[test]
    fn test_score_parse_malformed() {
        for raw in ["", "2", "2:", ":1", "2:1:0", "a:b", "2-1", "1.5:0"] {
            let parsed = raw.parse::<MatchScore>();
            assert!(
                matches!(parsed, Err(EventError::InvalidScore(_))),
                "expected {raw:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_score_decides_outcome() {
        assert_eq!(MatchScore::new(2, 1).outcome(), MatchOutcome::FirstWon);
        assert_eq!(MatchScore::new(1, 2).outcome(), MatchOutcome::SecondWon);
        assert_eq!(MatchScore::new(1, 1).outcome(), MatchOutcome::Draw);
    }

    #[test]
    fn test_bye_is_decided_immediately() {
        let bye = Match::bye("alice".into());
        assert!(bye.is_bye());
        assert_eq!(bye.outcome, MatchOutcome::FirstWon);
        assert!(bye.outcome.is_decided());
        assert_eq!(bye.to_string(), "alice - bye");
    }

    #[test]
    fn test_involves_pair_is_unordered() {
        let m = Match::new("alice".into(), "bob".into());
        assert!(m.involves_pair(&"alice".into(), &"bob".into()));
        assert!(m.involves_pair(&"bob".into(), &"alice".into()));
        assert!(!m.involves_pair(&"alice".into(), &"carol".into()));

        let bye = Match::bye("alice".into());
        assert!(!bye.involves_pair(&"alice".into(), &"bob".into()));
    }

    #[test]
    fn test_record_score_updates_outcome() {
        let mut m = Match::new("alice".into(), "bob".into());
        m.record_score(MatchScore::new(0, 2));
        assert_eq!(m.outcome, MatchOutcome::SecondWon);
        assert_eq!(m.score, Some(MatchScore::new(0, 2)));
    }

    #[test]
    fn test_recalc_respects_manual_override() {
        let mut event = Event::new(1, 10, 20, "weekly".to_string(), Duration::from_secs(10));
        event.participants = vec!["a".into(), "b".into(), "c".into(), "d".into()];
        event.recalc_total_rounds();
        assert_eq!(event.total_rounds, 2);

        event.total_rounds = 3;
        event.total_rounds_manual = true;
        event.participants.push("e".into());
        event.recalc_total_rounds();
        assert_eq!(event.total_rounds, 3);
    }

    #[test]
    fn test_find_unresolved_skips_decided_matches() {
        let mut event = Event::new(1, 10, 20, "weekly".to_string(), Duration::from_secs(10));
        let mut decided = Match::new("alice".into(), "bob".into());
        decided.record_score(MatchScore::new(2, 0));
        event.matches.push(decided);
        event.matches.push(Match::new("bob".into(), "alice".into()));

        let found = event
            .find_unresolved_mut(&"alice".into(), &"bob".into())
            .expect("rematch should be addressable");
        assert_eq!(found.outcome, MatchOutcome::NoResult);
        assert_eq!(found.first, Username::from("bob"));
    }

    #[test]
    fn test_event_serde_round_trip() {
        let mut event = Event::new(7, 10, 20, "weekly".to_string(), Duration::from_secs(10));
        event.participants = vec!["alice".into(), "bob".into()];
        event.matches.push(Match::new("alice".into(), "bob".into()));

        let json = serde_json::to_string(&event).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, event.id);
        assert_eq!(back.participants, event.participants);
        assert_eq!(back.matches, event.matches);
        assert_eq!(back.status, EventStatus::NotStarted);
    }
}
