//! Search view-state machine
//!
//! ```text
//!            submit (valid)             complete(Ok)
//!   Idle ─────────────────▶ Loading ─────────────────▶ Results
//!    ▲                         │                          │
//!    │ input cleared           │ complete(NotFound)        │ submit (valid)
//!    └──── any state           ▼                          ▼
//!                           NotFound ──── submit ────▶ Loading
//! ```
//!
//! Every submit hands out a [`Ticket`] with a fresh id. Only a completion for
//! the ticket currently in flight is applied; clearing the input or starting a
//! newer search turns older tickets stale.

use crate::lookup::LookupError;
use crate::model::PlayerBundle;
use crate::outfit::OutfitView;
use crate::uid::{validate, Uid, Validation};
use thiserror::Error;

/// Stored phase of the search panel
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading { ticket: u64, uid: Uid },
    Results(Box<PlayerBundle>),
    NotFound { uid: Uid },
}

/// What the search panel should display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Idle,
    /// Idle, but the current input would be rejected
    Invalid,
    Loading,
    Results,
    NotFound,
}

/// Handle for one in-flight lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub id: u64,
    pub uid: Uid,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("a lookup is already in progress")]
    Busy,
    #[error("{}", invalid_message(.0))]
    Invalid(Validation),
}

fn invalid_message(validation: &Validation) -> String {
    validation
        .message()
        .unwrap_or_else(|| "enter a UID".to_string())
}

#[derive(Debug, Clone, Default)]
pub struct SearchController {
    input: String,
    phase: Phase,
    outfit_view: OutfitView,
    last_ticket: u64,
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn validation(&self) -> Validation {
        validate(&self.input)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading { .. })
    }

    /// Submit is enabled only for a valid UID with nothing in flight
    pub fn can_submit(&self) -> bool {
        !self.is_loading() && self.validation().is_valid()
    }

    /// Replace the input text. Clearing it resets everything to `Idle`.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        if validate(&self.input) == Validation::Empty {
            self.reset();
        }
    }

    /// Clear the input and return to `Idle`
    pub fn clear(&mut self) {
        self.input.clear();
        self.reset();
    }

    fn reset(&mut self) {
        if let Phase::Loading { ticket, .. } = &self.phase {
            log::debug!("dropping in-flight lookup #{ticket}");
        }
        self.phase = Phase::Idle;
        self.outfit_view = OutfitView::default();
    }

    /// Start a lookup for the current input
    pub fn submit(&mut self) -> Result<Ticket, SubmitError> {
        if self.is_loading() {
            return Err(SubmitError::Busy);
        }

        let uid = Uid::parse(&self.input).map_err(SubmitError::Invalid)?;

        self.last_ticket += 1;
        let ticket = Ticket {
            id: self.last_ticket,
            uid: uid.clone(),
        };
        log::debug!("lookup #{} started for {}", ticket.id, uid);

        self.phase = Phase::Loading {
            ticket: ticket.id,
            uid,
        };
        self.outfit_view = OutfitView::default();
        Ok(ticket)
    }

    /// Apply a finished lookup. Returns false when `ticket` is no longer the
    /// one in flight and the outcome was dropped.
    pub fn complete(
        &mut self,
        ticket: u64,
        outcome: Result<PlayerBundle, LookupError>,
    ) -> bool {
        match &self.phase {
            Phase::Loading { ticket: current, .. } if *current == ticket => {}
            _ => {
                log::debug!("ignoring stale lookup #{ticket}");
                return false;
            }
        }

        self.phase = match outcome {
            Ok(bundle) => Phase::Results(Box::new(bundle)),
            Err(LookupError::NotFound { uid }) => Phase::NotFound { uid },
        };
        true
    }

    pub fn view(&self) -> ViewState {
        match &self.phase {
            Phase::Idle if self.validation().is_problem() => ViewState::Invalid,
            Phase::Idle => ViewState::Idle,
            Phase::Loading { .. } => ViewState::Loading,
            Phase::Results(_) => ViewState::Results,
            Phase::NotFound { .. } => ViewState::NotFound,
        }
    }

    pub fn bundle(&self) -> Option<&PlayerBundle> {
        match &self.phase {
            Phase::Results(bundle) => Some(&**bundle),
            _ => None,
        }
    }

    pub fn outfit_view(&self) -> OutfitView {
        self.outfit_view
    }

    pub fn toggle_outfit_view(&mut self) {
        self.outfit_view.toggle();
    }
}
