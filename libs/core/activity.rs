use std::sync::Mutex;

use chrono::NaiveDate;
use lazy_static::lazy_static;
use ulid::{Generator, Ulid};

pub type ActivityId = String;

lazy_static! {
    // Monotonic so two activities created within the same millisecond still
    // get distinct, ordered ids.
    static ref ID_GENERATOR: Mutex<Generator> = Mutex::new(Generator::new());
}

fn next_id() -> ActivityId {
    let mut generator = ID_GENERATOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    generator
        .generate()
        .unwrap_or_else(|_| Ulid::new())
        .to_string()
}

/// Field values an activity is created from.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ActivityInput {
    pub hobby_name: String,
    pub venue: String,
    pub date: NaiveDate,
    /// Free-form label such as "3:00 PM", not parsed.
    pub time: String,
}

/// A recorded hobby activity. Fields are fixed at creation.
#[derive(Clone, PartialEq, Debug)]
pub struct Activity {
    id: ActivityId,
    hobby_name: String,
    venue: String,
    date: NaiveDate,
    time: String,
}

impl Activity {
    /// Creates an activity with a freshly generated id. Values are taken
    /// verbatim, empty strings included.
    pub fn create(input: ActivityInput) -> Self {
        Activity {
            id: next_id(),
            hobby_name: input.hobby_name,
            venue: input.venue,
            date: input.date,
            time: input.time,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn hobby_name(&self) -> &str {
        &self.hobby_name
    }

    pub fn venue(&self) -> &str {
        &self.venue
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> &str {
        &self.time
    }
}
