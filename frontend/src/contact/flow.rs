use chrono::Utc;
use log::{debug, info, warn};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::error::StoreError;
use super::model::{ContactSubmission, Draft, DraftProblem, Field, SubmissionStatus};
use super::store::RecordStore;
use super::timer::Timer;
use crate::config;

/// What the form renders from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlowSnapshot {
    pub draft: Draft,
    pub status: SubmissionStatus,
}

#[derive(Debug)]
pub enum SubmitOutcome {
    Sent,
    Failed(StoreError),
    /// A submission is already in flight.
    Refused,
    Blocked(Vec<DraftProblem>),
}

type Observer = Rc<dyn Fn(&FlowSnapshot)>;

struct State<H> {
    snapshot: FlowSnapshot,
    // Left in place after it fires; replaced by the next submit or dropped with the flow.
    pending_reset: Option<H>,
    observer: Option<Observer>,
}

/// Drives the contact form: draft edits, one insert per submit, status feedback.
pub struct ContactSubmissionFlow<S, T: Timer> {
    store: S,
    timer: T,
    state: Rc<RefCell<State<T::Handle>>>,
}

impl<S: RecordStore, T: Timer> ContactSubmissionFlow<S, T> {
    pub fn new(store: S, timer: T) -> Self {
        Self {
            store,
            timer,
            state: Rc::new(RefCell::new(State {
                snapshot: FlowSnapshot::default(),
                pending_reset: None,
                observer: None,
            })),
        }
    }

    /// Called after every change with the new snapshot. Replaces any previous observer.
    pub fn subscribe(&self, observer: impl Fn(&FlowSnapshot) + 'static) {
        self.state.borrow_mut().observer = Some(Rc::new(observer));
    }

    pub fn snapshot(&self) -> FlowSnapshot {
        self.state.borrow().snapshot.clone()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.state.borrow().snapshot.status.clone()
    }

    pub fn draft(&self) -> Draft {
        self.state.borrow().snapshot.draft.clone()
    }

    pub fn update_field(&self, field: Field, value: impl Into<String>) {
        let value = value.into();
        update(&self.state, |snapshot| snapshot.draft.set(field, value));
    }

    pub async fn submit(&self) -> SubmitOutcome {
        let record = {
            let mut state = self.state.borrow_mut();
            if state.snapshot.status.is_sending() {
                debug!("Submit ignored, a submission is already in flight");
                return SubmitOutcome::Refused;
            }

            let problems = state.snapshot.draft.problems();
            if !problems.is_empty() {
                debug!("Submit blocked: {:?}", problems);
                return SubmitOutcome::Blocked(problems);
            }

            state.pending_reset = None;
            state.snapshot.status = SubmissionStatus::Sending;
            ContactSubmission::from_draft(&state.snapshot.draft, Utc::now())
        };
        notify(&self.state);

        info!("Sending contact submission");
        match self.store.insert_one(config::CONTACT_TABLE, &record).await {
            Ok(_) => {
                info!("Contact submission stored");
                update(&self.state, |snapshot| {
                    snapshot.draft.clear();
                    snapshot.status = SubmissionStatus::Success;
                });
                self.schedule_reset();
                SubmitOutcome::Sent
            }
            Err(e) => {
                warn!("Contact submission failed: {}", e);
                update(&self.state, |snapshot| {
                    snapshot.status = SubmissionStatus::Error(e.to_string());
                });
                SubmitOutcome::Failed(e)
            }
        }
    }

    fn schedule_reset(&self) {
        let state = Rc::downgrade(&self.state);
        let handle = self.timer.schedule(
            config::SUCCESS_RESET_DELAY,
            Box::new(move || reset_to_idle(&state)),
        );
        self.state.borrow_mut().pending_reset = Some(handle);
    }
}

fn reset_to_idle<H>(state: &Weak<RefCell<State<H>>>) {
    let Some(state) = state.upgrade() else {
        return;
    };
    let changed = {
        let mut state = state.borrow_mut();
        if state.snapshot.status == SubmissionStatus::Success {
            state.snapshot.status = SubmissionStatus::Idle;
            true
        } else {
            false
        }
    };
    if changed {
        notify(&state);
    }
}

fn update<H>(state: &Rc<RefCell<State<H>>>, f: impl FnOnce(&mut FlowSnapshot)) {
    f(&mut state.borrow_mut().snapshot);
    notify(state);
}

// The borrow is released before the observer runs so it may read the flow again.
fn notify<H>(state: &Rc<RefCell<State<H>>>) {
    let (observer, snapshot) = {
        let state = state.borrow();
        (state.observer.clone(), state.snapshot.clone())
    };
    if let Some(observer) = observer {
        observer(&snapshot);
    }
}
