//! Event actor implementation with async message handling.

use super::{
    errors::{EventError, EventResult},
    messages::EventMessage,
    models::{
        Event, EventId, EventStatus, Match, MatchOutcome, MatchScore, RoundStart, Standing,
        Username,
    },
};
use crate::{
    config::EventDefaults,
    notify::{Notifier, RoundReminder},
    pairing::{compute_standings, plan_round},
};
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Event actor handle for sending messages
#[derive(Clone)]
pub struct EventHandle {
    sender: mpsc::Sender<EventMessage>,
    event_id: EventId,
}

impl EventHandle {
    /// Create a new event handle
    pub fn new(sender: mpsc::Sender<EventMessage>, event_id: EventId) -> Self {
        Self { sender, event_id }
    }

    /// Get event ID
    pub fn event_id(&self) -> EventId {
        self.event_id
    }

    /// Send a message to the event
    pub async fn send(&self, message: EventMessage) -> EventResult<()> {
        self.sender.send(message).await.map_err(|_| {
            log::error!("Event {}: actor inbox is gone", self.event_id);
            EventError::EventStopped(self.event_id)
        })
    }
}

/// Event actor managing a single tournament event
pub struct EventActor {
    /// Event state
    event: Event,

    /// Message inbox
    inbox: mpsc::Receiver<EventMessage>,

    /// Participant cap applied to this event
    max_participants: usize,

    /// Reminder delivery sink
    notifier: Arc<dyn Notifier>,
}

impl EventActor {
    /// Create a new event actor
    ///
    /// # Arguments
    ///
    /// * `event` - Initial event state
    /// * `defaults` - Event defaults (participant cap)
    /// * `notifier` - Reminder delivery sink
    ///
    /// # Returns
    ///
    /// * `(EventActor, EventHandle)` - Actor and handle for sending messages
    pub fn new(
        event: Event,
        defaults: &EventDefaults,
        notifier: Arc<dyn Notifier>,
    ) -> (Self, EventHandle) {
        let (sender, inbox) = mpsc::channel(100);

        let handle = EventHandle::new(sender, event.id);

        let actor = Self {
            event,
            inbox,
            max_participants: defaults.max_participants,
            notifier,
        };

        (actor, handle)
    }

    /// Run the event actor message loop
    pub async fn run(mut self) {
        log::info!("Event {} '{}' starting", self.event.id, self.event.name);

        while let Some(message) = self.inbox.recv().await {
            self.handle_message(message).await;
        }

        log::info!("Event {} '{}' stopped", self.event.id, self.event.name);
    }

    /// Handle an event message
    async fn handle_message(&mut self, message: EventMessage) {
        match message {
            EventMessage::AddParticipants { names, response } => {
                let result = self.handle_add(names);
                let _ = response.send(result);
            }

            EventMessage::RemoveParticipants { names, response } => {
                let result = self.handle_remove(&names);
                let _ = response.send(result);
            }

            EventMessage::SetTotalRounds { rounds, response } => {
                let result = self.handle_set_total_rounds(rounds);
                let _ = response.send(result);
            }

            EventMessage::GetStandings { response } => {
                let result = self.handle_standings();
                let _ = response.send(result);
            }

            EventMessage::SubmitResult {
                first,
                second,
                score,
                response,
            } => {
                let result = self.handle_submit(first, second, score);
                let _ = response.send(result);
            }

            EventMessage::StartRound { response } => {
                let result = self.handle_start_round();
                let _ = response.send(result);
            }

            EventMessage::Snapshot { response } => {
                let _ = response.send(self.event.clone());
            }
        }
    }

    /// Handle participant additions
    fn handle_add(&mut self, names: Vec<Username>) -> EventResult<usize> {
        self.require_not_started()?;

        let mut incoming: Vec<Username> = Vec::new();
        for name in names {
            if !self.event.contains_participant(&name) && !incoming.contains(&name) {
                incoming.push(name);
            }
        }

        if self.event.participants.len() + incoming.len() > self.max_participants {
            return Err(EventError::CapacityReached {
                max: self.max_participants,
            });
        }

        let added = incoming.len();
        self.event.participants.extend(incoming);
        self.event.recalc_total_rounds();

        log::info!(
            "Event {}: added {} participants ({} total)",
            self.event.id,
            added,
            self.event.participants.len()
        );

        Ok(added)
    }

    /// Handle participant removals
    fn handle_remove(&mut self, names: &[Username]) -> EventResult<usize> {
        self.require_not_started()?;

        let before = self.event.participants.len();
        self.event.participants.retain(|p| !names.contains(p));
        let removed = before - self.event.participants.len();
        self.event.recalc_total_rounds();

        log::info!(
            "Event {}: removed {} participants ({} total)",
            self.event.id,
            removed,
            self.event.participants.len()
        );

        Ok(removed)
    }

    /// Handle a manual total-rounds override
    fn handle_set_total_rounds(&mut self, rounds: u32) -> EventResult<()> {
        self.require_not_started()?;

        if rounds < 2 {
            return Err(EventError::InvalidRoundCount);
        }

        self.event.total_rounds = rounds;
        self.event.total_rounds_manual = true;

        Ok(())
    }

    /// Handle a standings request
    fn handle_standings(&self) -> EventResult<Vec<Standing>> {
        Ok(compute_standings(
            &self.event.participants,
            &self.event.matches,
        ))
    }

    /// Handle a result submission
    ///
    /// The pair of names identifies the match in either order; the score is
    /// recorded in the match's stored orientation.
    fn handle_submit(
        &mut self,
        first: Username,
        second: Username,
        score: MatchScore,
    ) -> EventResult<Match> {
        self.require_started()?;

        let Some(found) = self.event.find_unresolved_mut(&first, &second) else {
            return Err(EventError::MatchNotFound { first, second });
        };
        found.record_score(score);
        let recorded = found.clone();

        // Once the planned rounds are played out and every match is decided,
        // the event is over.
        if self.event.current_round >= self.event.total_rounds
            && self.event.first_undecided().is_none()
        {
            self.event.status = EventStatus::Ended;
            self.event.ended_at = Some(Utc::now());
            log::info!(
                "Event {} '{}' ended after round {}",
                self.event.id,
                self.event.name,
                self.event.current_round
            );
        }

        Ok(recorded)
    }

    /// Handle a round start
    fn handle_start_round(&mut self) -> EventResult<RoundStart> {
        if self.event.status == EventStatus::Ended {
            return Err(EventError::AlreadyEnded);
        }

        if let Some(pending) = self.event.first_undecided() {
            return Err(EventError::UndecidedMatch(pending.clone()));
        }

        if self.event.current_round >= self.event.total_rounds {
            return Err(EventError::NoRoundsRemaining {
                played: self.event.current_round,
                total: self.event.total_rounds,
            });
        }

        let standings = compute_standings(&self.event.participants, &self.event.matches);
        let new_matches = plan_round(&standings, &self.event.matches);
        self.event.matches.extend(new_matches.iter().cloned());

        if self.event.status == EventStatus::NotStarted {
            self.event.status = EventStatus::Started;
            self.event.started_at = Some(Utc::now());
        }
        self.event.current_round += 1;

        log::info!(
            "Event {} '{}' round {}/{} started with {} matches",
            self.event.id,
            self.event.name,
            self.event.current_round,
            self.event.total_rounds,
            new_matches.len()
        );

        self.schedule_round_reminder(&new_matches);

        Ok(RoundStart {
            standings,
            new_matches,
            round: self.event.current_round,
        })
    }

    /// Schedule the deferred reminder for a freshly started round
    ///
    /// The round's matches are captured by value here. Participants whose
    /// match was still undecided at capture time are reminded after the
    /// round duration elapses, whether or not they submitted in between.
    fn schedule_round_reminder(&self, new_matches: &[Match]) {
        let matches = new_matches.to_vec();
        let chat_id = self.event.chat_id;
        let event_id = self.event.id;
        let event_name = self.event.name.clone();
        let round = self.event.current_round;
        let delay = self.event.round_duration;
        let notifier = Arc::clone(&self.notifier);

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let mut participants: Vec<Username> = Vec::new();
            for m in &matches {
                if m.outcome != MatchOutcome::NoResult {
                    continue;
                }
                if !participants.contains(&m.first) {
                    participants.push(m.first.clone());
                }
                if let Some(second) = &m.second
                    && !participants.contains(second)
                {
                    participants.push(second.clone());
                }
            }

            // All-bye rounds have nobody to remind
            if participants.is_empty() {
                return;
            }

            let reminder = RoundReminder {
                event_name,
                round,
                participants,
            };
            if let Err(e) = notifier.round_reminder(chat_id, reminder).await {
                log::warn!("Event {event_id}: round reminder delivery failed: {e}");
            }
        });
    }

    /// Reject unless the event has not started yet
    fn require_not_started(&self) -> EventResult<()> {
        match self.event.status {
            EventStatus::NotStarted => Ok(()),
            EventStatus::Started => Err(EventError::AlreadyStarted),
            EventStatus::Ended => Err(EventError::AlreadyEnded),
        }
    }

    /// Reject unless the event is running
    fn require_started(&self) -> EventResult<()> {
        match self.event.status {
            EventStatus::NotStarted => Err(EventError::NotStarted),
            EventStatus::Started => Ok(()),
            EventStatus::Ended => Err(EventError::AlreadyEnded),
        }
    }
}
