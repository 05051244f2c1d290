//! Event module providing per-event actors and their manager.
//!
//! This module implements:
//! - EventActor: Async actor owning a single event's state
//! - EventManager: Actor registry routing admin commands to their events
//! - Message-based communication with tokio channels
//! - Event lifecycle from participant edits to the final submitted result
//!
//! ## Architecture
//!
//! Each event runs in a separate Tokio task with an mpsc message inbox.
//! The EventManager spawns and manages EventActor instances, keyed by
//! event ID, and resolves admin-scoped commands to the admin's first
//! event in creation order.
//!
//! ## Example
//!
//! ```ignore
//! use swiss_rounds::config::EventDefaults;
//! use swiss_rounds::event::EventManager;
//! use swiss_rounds::notify::LogNotifier;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let manager = EventManager::new(EventDefaults::default(), Arc::new(LogNotifier));
//!
//!     let event = manager.create_event(1, 100, "weekly cup".to_string()).await;
//!     manager
//!         .add_participants(1, vec!["alice".to_string(), "bob".to_string()])
//!         .await
//!         .unwrap();
//!
//!     let round = manager.start_round(1).await.unwrap();
//!     println!("round {} has {} matches", round.round, round.new_matches.len());
//! }
//! ```

pub mod actor;
pub mod errors;
pub mod manager;
pub mod messages;
pub mod models;

pub use actor::{EventActor, EventHandle};
pub use errors::{EventError, EventResult};
pub use manager::EventManager;
pub use messages::EventMessage;
pub use models::{
    AdminId, ChatId, DRAW_POINTS, Event, EventId, EventStatus, Match, MatchOutcome, MatchScore,
    RoundStart, Standing, Username, WIN_POINTS, rounds_for,
};
