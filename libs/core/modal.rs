//! Presentation state of the add-activity form.

use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEvent {
    /// The user asked for the form
    Open,
    /// The form was submitted
    Submit,
    /// The form was dismissed without submitting
    Cancel,
}

impl ModalState {
    /// Returns the state reached after `event`.
    ///
    /// `Open` only applies to a closed modal, `Submit` and `Cancel` only to an
    /// open one. Any other combination leaves the state unchanged.
    pub fn apply(self, event: ModalEvent) -> ModalState {
        let next = match (self, event) {
            (ModalState::Closed, ModalEvent::Open) => ModalState::Open,
            (ModalState::Open, ModalEvent::Submit | ModalEvent::Cancel) => ModalState::Closed,
            (state, event) => {
                warn!("Ignoring {event:?} while the form is {state:?}");
                return state;
            }
        };
        debug!("form modal {self:?} -> {next:?} on {event:?}");
        next
    }

    pub fn is_open(self) -> bool {
        self == ModalState::Open
    }
}
