//! The activity list screen and the add-activity form it presents.

use tracing::debug;

use crate::{
    Activity, ActivityForm, ActivityStore, Clock, EventListener, FormOutcome, ModalEvent,
    ModalState, StoreEvent,
};

/// Drawing surface provided by the front end.
pub trait Presenter {
    /// Draws the whole list, called again after every change to the store.
    fn render(&mut self, activities: &[Activity]);

    fn present_modal(&mut self);

    fn dismiss_modal(&mut self);
}

pub struct ListScreen<P: Presenter> {
    store: ActivityStore,
    store_listener: EventListener<StoreEvent>,
    presenter: P,
    modal: ModalState,
    form: Option<ActivityForm>,
    clock: Box<dyn Clock>,
}

impl<P: Presenter> ListScreen<P> {
    /// Creates the screen over an empty store and draws it once.
    pub fn new(presenter: P, clock: impl Clock + 'static) -> Self {
        let store = ActivityStore::new();
        let store_listener = store.subscribe();
        let mut screen = Self {
            store,
            store_listener,
            presenter,
            modal: ModalState::Closed,
            form: None,
            clock: Box::new(clock),
        };
        screen.render();
        screen
    }

    pub fn store(&self) -> &ActivityStore {
        &self.store
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }

    pub fn is_modal_presented(&self) -> bool {
        self.modal.is_open()
    }

    /// Presents a fresh form. An already open form is returned untouched.
    pub fn open_form(&mut self) -> &mut ActivityForm {
        let next = self.modal.apply(ModalEvent::Open);
        if next != self.modal {
            self.modal = next;
            self.presenter.present_modal();
        }
        let clock = self.clock.as_ref();
        self.form.get_or_insert_with(|| ActivityForm::new(clock))
    }

    pub fn form(&self) -> Option<&ActivityForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut ActivityForm> {
        self.form.as_mut()
    }

    /// Submits the open form, dismisses it and redraws the list.
    ///
    /// Returns the recorded activity, or `None` when no form was open.
    pub fn submit(&mut self) -> Option<Activity> {
        self.modal = self.modal.apply(ModalEvent::Submit);
        let form = self.form.take()?;

        let outcome = form.submit(&mut self.store);
        self.close(outcome)
    }

    /// Dismisses the open form without recording anything.
    pub fn cancel(&mut self) -> bool {
        self.modal = self.modal.apply(ModalEvent::Cancel);
        match self.form.take() {
            Some(form) => {
                self.close(form.cancel());
                true
            }
            None => false,
        }
    }

    /// Redraws the list if the store changed since the last draw.
    pub fn refresh(&mut self) {
        let changes = self.store_listener.drain();
        if !changes.is_empty() {
            debug!("{} store change(s), redrawing", changes.len());
            self.render();
        }
    }

    /// Unconditional redraw.
    pub fn render(&mut self) {
        self.presenter.render(self.store.list());
    }

    fn close(&mut self, outcome: FormOutcome) -> Option<Activity> {
        self.presenter.dismiss_modal();
        self.refresh();
        match outcome {
            FormOutcome::Submitted(activity) => Some(activity),
            FormOutcome::Cancelled => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedClock;
    use chrono::NaiveDate;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Render(Vec<String>),
        Present,
        Dismiss,
    }

    /// Records every call so tests can assert on what the user would see.
    #[derive(Default)]
    struct RecordingPresenter {
        calls: Vec<Call>,
    }

    impl Presenter for RecordingPresenter {
        fn render(&mut self, activities: &[Activity]) {
            let names = activities
                .iter()
                .map(|a| a.hobby_name().to_owned())
                .collect();
            self.calls.push(Call::Render(names));
        }

        fn present_modal(&mut self) {
            self.calls.push(Call::Present);
        }

        fn dismiss_modal(&mut self) {
            self.calls.push(Call::Dismiss);
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn screen() -> ListScreen<RecordingPresenter> {
        ListScreen::new(RecordingPresenter::default(), FixedClock(day(2024, 1, 15)))
    }

    #[test]
    fn new_screen_renders_empty_list() {
        let screen = screen();
        assert_eq!(screen.presenter().calls, vec![Call::Render(vec![])]);
        assert!(!screen.is_modal_presented());
    }

    #[test]
    fn chess_at_the_library() {
        let mut screen = screen();

        let form = screen.open_form();
        form.set_hobby_name("Chess");
        form.set_venue("Library");
        form.set_date(day(2024, 3, 1));
        form.set_time("6:00 PM");
        assert!(screen.is_modal_presented());

        let activity = screen.submit().expect("form was open");

        assert!(!screen.is_modal_presented());
        assert_eq!(screen.store().list(), &[activity.clone()]);
        assert_eq!(activity.hobby_name(), "Chess");
        assert_eq!(activity.venue(), "Library");
        assert_eq!(activity.date(), day(2024, 3, 1));
        assert_eq!(activity.time(), "6:00 PM");
        assert_eq!(
            screen.presenter().calls,
            vec![
                Call::Render(vec![]),
                Call::Present,
                Call::Dismiss,
                Call::Render(vec!["Chess".into()]),
            ]
        );
    }

    #[test]
    fn cancel_discards_input() {
        let mut screen = screen();
        screen.open_form().set_hobby_name("Draft");

        assert!(screen.cancel());

        assert!(!screen.is_modal_presented());
        assert!(screen.store().is_empty());
        assert!(screen.form().is_none());
        assert_eq!(
            screen.presenter().calls,
            vec![Call::Render(vec![]), Call::Present, Call::Dismiss]
        );
    }

    #[test]
    fn reopened_form_starts_fresh() {
        let mut screen = screen();
        screen.open_form().set_hobby_name("Draft");
        screen.cancel();

        let form = screen.open_form();
        assert_eq!(form.hobby_name(), "");
        assert_eq!(form.date(), day(2024, 1, 15));
    }

    #[test]
    fn submit_or_cancel_without_form_does_nothing() {
        let mut screen = screen();

        assert_eq!(screen.submit(), None);
        assert!(!screen.cancel());
        assert!(screen.store().is_empty());
        assert_eq!(screen.presenter().calls, vec![Call::Render(vec![])]);
    }

    #[test]
    fn opening_twice_keeps_the_draft() {
        let mut screen = screen();
        screen.open_form().set_venue("Park");

        assert_eq!(screen.open_form().venue(), "Park");
        assert_eq!(
            screen.presenter().calls,
            vec![Call::Render(vec![]), Call::Present]
        );
    }

    #[test]
    fn every_submission_shows_up_in_order() {
        let mut screen = screen();
        for name in ["Chess", "", "Pottery"] {
            screen.open_form().set_hobby_name(name);
            screen.submit();
        }

        let last_render = screen
            .presenter()
            .calls
            .iter()
            .rev()
            .find_map(|call| match call {
                Call::Render(names) => Some(names.clone()),
                _ => None,
            });
        assert_eq!(
            last_render,
            Some(vec!["Chess".to_owned(), String::new(), "Pottery".to_owned()])
        );

        let ids: std::collections::HashSet<&str> =
            screen.store().list().iter().map(|a| a.id()).collect();
        assert_eq!(ids.len(), 3);
    }
}
