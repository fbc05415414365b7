use chrono::NaiveDate;

use crate::{Activity, ActivityInput, ActivityStore, Clock};

/// Close signal handed back to whoever presented the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormOutcome {
    Submitted(Activity),
    Cancelled,
}

/// In-progress input of the add-activity form.
///
/// Fields are edited independently and never validated: submitting an
/// untouched form records an activity with empty text fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityForm {
    hobby_name: String,
    venue: String,
    date: NaiveDate,
    time: String,
}

impl ActivityForm {
    /// Empty form whose date defaults to today.
    pub fn new(clock: &dyn Clock) -> Self {
        Self {
            hobby_name: String::new(),
            venue: String::new(),
            date: clock.today(),
            time: String::new(),
        }
    }

    pub fn hobby_name(&self) -> &str {
        &self.hobby_name
    }

    pub fn set_hobby_name(&mut self, hobby_name: impl Into<String>) {
        self.hobby_name = hobby_name.into();
    }

    pub fn venue(&self) -> &str {
        &self.venue
    }

    pub fn set_venue(&mut self, venue: impl Into<String>) {
        self.venue = venue.into();
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn set_time(&mut self, time: impl Into<String>) {
        self.time = time.into();
    }

    /// Records the current values in `store` and closes the form.
    pub fn submit(self, store: &mut ActivityStore) -> FormOutcome {
        let activity = Activity::create(ActivityInput {
            hobby_name: self.hobby_name,
            venue: self.venue,
            date: self.date,
            time: self.time,
        });
        store.append(activity.clone());
        FormOutcome::Submitted(activity)
    }

    /// Closes the form, dropping whatever was typed.
    pub fn cancel(self) -> FormOutcome {
        FormOutcome::Cancelled
    }
}
