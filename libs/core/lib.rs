pub mod activity;
pub mod date_format;
mod error;
pub mod event_emitter;
pub mod form;
pub mod modal;
pub mod screen;
pub mod store;
pub mod utils;

pub use activity::{Activity, ActivityId, ActivityInput};
pub use date_format::{DateFormatter, DateStyle};
pub use error::{Error, Result};
pub use event_emitter::{EventEmitter, EventListener};
pub use form::{ActivityForm, FormOutcome};
pub use modal::{ModalEvent, ModalState};
pub use screen::{ListScreen, Presenter};
pub use store::{ActivityStore, StoreEvent};
pub use utils::{Clock, FixedClock, SystemClock};
