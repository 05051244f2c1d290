//! Event manager for spawning and managing multiple event actors.

use super::{
    actor::{EventActor, EventHandle},
    errors::{EventError, EventResult},
    messages::EventMessage,
    models::{AdminId, ChatId, Event, EventId, Match, MatchScore, RoundStart, Standing, Username},
};
use crate::{config::EventDefaults, notify::Notifier};
use std::{collections::HashMap, sync::Arc};
use tokio::sync::{RwLock, oneshot};

/// Event manager for managing multiple event instances
///
/// Admin-scoped operations target the first event created by that
/// administrator. Later events stay reachable through [`Self::get_event`].
pub struct EventManager {
    /// Active event handles
    events: Arc<RwLock<HashMap<EventId, EventHandle>>>,

    /// Event IDs per administrator, in creation order
    admin_events: Arc<RwLock<HashMap<AdminId, Vec<EventId>>>>,

    /// Next event ID
    next_event_id: Arc<RwLock<EventId>>,

    /// Defaults applied to new events
    defaults: EventDefaults,

    /// Reminder delivery sink shared by all events
    notifier: Arc<dyn Notifier>,
}

impl EventManager {
    /// Create a new event manager
    ///
    /// # Arguments
    ///
    /// * `defaults` - Defaults applied to every new event
    /// * `notifier` - Reminder delivery sink
    ///
    /// # Returns
    ///
    /// * `EventManager` - New event manager instance
    pub fn new(defaults: EventDefaults, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            events: Arc::new(RwLock::new(HashMap::new())),
            admin_events: Arc::new(RwLock::new(HashMap::new())),
            next_event_id: Arc::new(RwLock::new(1)),
            defaults,
            notifier,
        }
    }

    /// Create and spawn a new event
    ///
    /// # Arguments
    ///
    /// * `admin_id` - Administrator owning the event
    /// * `chat_id` - Destination channel for round reminders
    /// * `name` - Event name
    ///
    /// # Returns
    ///
    /// * `Event` - Snapshot of the freshly created event
    pub async fn create_event(&self, admin_id: AdminId, chat_id: ChatId, name: String) -> Event {
        // Get next event ID
        let mut next_id = self.next_event_id.write().await;
        let event_id = *next_id;
        *next_id += 1;
        drop(next_id);

        let event = Event::new(event_id, admin_id, chat_id, name, self.defaults.round_duration);
        let snapshot = event.clone();

        // Create and spawn event actor
        let (actor, handle) = EventActor::new(event, &self.defaults, Arc::clone(&self.notifier));

        // Store handle
        let mut events = self.events.write().await;
        events.insert(event_id, handle);
        drop(events);

        // Record creation order for the admin
        let mut admin_events = self.admin_events.write().await;
        admin_events.entry(admin_id).or_default().push(event_id);
        drop(admin_events);

        // Spawn actor task
        tokio::spawn(async move {
            actor.run().await;
        });

        log::info!("Created and spawned event {} for admin {}", event_id, admin_id);

        snapshot
    }

    /// List an administrator's events in creation order
    ///
    /// # Arguments
    ///
    /// * `admin_id` - Administrator to list events for
    ///
    /// # Returns
    ///
    /// * `EventResult<Vec<Event>>` - Event snapshots, oldest first
    pub async fn list_events(&self, admin_id: AdminId) -> EventResult<Vec<Event>> {
        let admin_events = self.admin_events.read().await;
        let ids = admin_events.get(&admin_id).cloned().unwrap_or_default();
        drop(admin_events);

        let mut snapshots = Vec::with_capacity(ids.len());
        for event_id in ids {
            let events = self.events.read().await;
            let handle = events.get(&event_id).cloned();
            drop(events);

            if let Some(handle) = handle {
                snapshots.push(self.snapshot(&handle).await?);
            }
        }

        Ok(snapshots)
    }

    /// Add participants to the admin's first event
    ///
    /// Names already present and repeats within the list are ignored.
    ///
    /// # Arguments
    ///
    /// * `admin_id` - Administrator issuing the edit
    /// * `names` - Participant names to add
    ///
    /// # Returns
    ///
    /// * `EventResult<usize>` - Number of participants actually added
    pub async fn add_participants(
        &self,
        admin_id: AdminId,
        names: Vec<String>,
    ) -> EventResult<usize> {
        let handle = self.first_event_handle(admin_id).await?;

        let (tx, rx) = oneshot::channel();
        handle
            .send(EventMessage::AddParticipants {
                names: names.into_iter().map(Username::from).collect(),
                response: tx,
            })
            .await?;

        rx.await
            .map_err(|_| EventError::EventStopped(handle.event_id()))?
    }

    /// Remove participants from the admin's first event
    ///
    /// # Arguments
    ///
    /// * `admin_id` - Administrator issuing the edit
    /// * `names` - Participant names to remove
    ///
    /// # Returns
    ///
    /// * `EventResult<usize>` - Number of participants actually removed
    pub async fn remove_participants(
        &self,
        admin_id: AdminId,
        names: Vec<String>,
    ) -> EventResult<usize> {
        let handle = self.first_event_handle(admin_id).await?;

        let (tx, rx) = oneshot::channel();
        handle
            .send(EventMessage::RemoveParticipants {
                names: names.into_iter().map(Username::from).collect(),
                response: tx,
            })
            .await?;

        rx.await
            .map_err(|_| EventError::EventStopped(handle.event_id()))?
    }

    /// Manually override the planned round count of the admin's first event
    ///
    /// Suppresses automatic recalculation on later participant edits.
    ///
    /// # Arguments
    ///
    /// * `admin_id` - Administrator issuing the override
    /// * `rounds` - Planned number of rounds, at least 2
    ///
    /// # Returns
    ///
    /// * `EventResult<()>` - Success or validation error
    pub async fn set_total_rounds(&self, admin_id: AdminId, rounds: u32) -> EventResult<()> {
        let handle = self.first_event_handle(admin_id).await?;

        let (tx, rx) = oneshot::channel();
        handle
            .send(EventMessage::SetTotalRounds {
                rounds,
                response: tx,
            })
            .await?;

        rx.await
            .map_err(|_| EventError::EventStopped(handle.event_id()))?
    }

    /// Get current standings of the admin's first event
    ///
    /// # Arguments
    ///
    /// * `admin_id` - Administrator requesting standings
    ///
    /// # Returns
    ///
    /// * `EventResult<Vec<Standing>>` - Standings, best score first
    pub async fn standings(&self, admin_id: AdminId) -> EventResult<Vec<Standing>> {
        let handle = self.first_event_handle(admin_id).await?;

        let (tx, rx) = oneshot::channel();
        handle
            .send(EventMessage::GetStandings { response: tx })
            .await?;

        rx.await
            .map_err(|_| EventError::EventStopped(handle.event_id()))?
    }

    /// Submit a match result to the admin's first event
    ///
    /// The two names identify the match in either order; the score pair is
    /// recorded in the match's stored orientation.
    ///
    /// # Arguments
    ///
    /// * `admin_id` - Administrator submitting the result
    /// * `first` - One participant of the match
    /// * `second` - The other participant
    /// * `score` - Score string of the form `a:b`
    ///
    /// # Returns
    ///
    /// * `EventResult<Match>` - The decided match
    pub async fn submit_result(
        &self,
        admin_id: AdminId,
        first: String,
        second: String,
        score: &str,
    ) -> EventResult<Match> {
        let handle = self.first_event_handle(admin_id).await?;
        let score: MatchScore = score.parse()?;

        let (tx, rx) = oneshot::channel();
        handle
            .send(EventMessage::SubmitResult {
                first: first.into(),
                second: second.into(),
                score,
                response: tx,
            })
            .await?;

        rx.await
            .map_err(|_| EventError::EventStopped(handle.event_id()))?
    }

    /// Start the next round of the admin's first event
    ///
    /// # Arguments
    ///
    /// * `admin_id` - Administrator starting the round
    ///
    /// # Returns
    ///
    /// * `EventResult<RoundStart>` - Standings used for pairing and the new matches
    pub async fn start_round(&self, admin_id: AdminId) -> EventResult<RoundStart> {
        let handle = self.first_event_handle(admin_id).await?;

        let (tx, rx) = oneshot::channel();
        handle
            .send(EventMessage::StartRound { response: tx })
            .await?;

        rx.await
            .map_err(|_| EventError::EventStopped(handle.event_id()))?
    }

    /// Get an event handle
    ///
    /// # Arguments
    ///
    /// * `event_id` - Event ID
    ///
    /// # Returns
    ///
    /// * `Option<EventHandle>` - Event handle if found
    pub async fn get_event(&self, event_id: EventId) -> Option<EventHandle> {
        let events = self.events.read().await;
        events.get(&event_id).cloned()
    }

    /// Get active event count
    pub async fn active_event_count(&self) -> usize {
        let events = self.events.read().await;
        events.len()
    }

    /// Resolve the handle of the admin's first event
    async fn first_event_handle(&self, admin_id: AdminId) -> EventResult<EventHandle> {
        let admin_events = self.admin_events.read().await;
        let Some(event_id) = admin_events.get(&admin_id).and_then(|ids| ids.first().copied())
        else {
            return Err(EventError::EventNotFound(admin_id));
        };
        drop(admin_events);

        let events = self.events.read().await;
        events
            .get(&event_id)
            .cloned()
            .ok_or(EventError::EventNotFound(admin_id))
    }

    /// Fetch a state snapshot from an event actor
    async fn snapshot(&self, handle: &EventHandle) -> EventResult<Event> {
        let (tx, rx) = oneshot::channel();
        handle.send(EventMessage::Snapshot { response: tx }).await?;

        rx.await
            .map_err(|_| EventError::EventStopped(handle.event_id()))
    }
}
