//! # ff-lookup-core
//!
//! Everything behind the ff-lookup dashboard that is not drawing: the player
//! model, UID validation, the lookup collaborator and its mock, and the view
//! state the dashboard renders from.
//!
//! ## Example
//!
//! ```rust
//! use ff_lookup_core::{MockLookup, SearchController};
//! use std::time::Duration;
//!
//! let lookup = MockLookup::new(Duration::ZERO);
//! let mut search = SearchController::new();
//! search.set_input("12345678");
//!
//! let ticket = search.submit().unwrap();
//! let outcome = ff_lookup_core::PlayerLookup::lookup(&lookup, &ticket.uid);
//! assert!(search.complete(ticket.id, outcome));
//! assert!(search.bundle().is_some());
//! ```

pub mod config;
pub mod controller;
pub mod dashboard;
pub mod lookup;
pub mod model;
pub mod nav;
pub mod outfit;
pub mod reveal;
pub mod uid;

pub use config::{Config, ConfigError};
pub use controller::{Phase, SearchController, SubmitError, Ticket, ViewState};
pub use lookup::{LookupError, MockLookup, PlayerLookup, NOT_FOUND_SENTINELS};
pub use model::{GuildInfo, OutfitInfo, PetInfo, PlayerBundle, PlayerInfo, Presence};
pub use nav::{Navigation, Tab};
pub use outfit::OutfitView;
pub use reveal::Reveal;
pub use uid::{validate, Severity, Uid, Validation, MIN_UID_LEN, MIN_UID_VALUE};
