#![allow(dead_code)]

use halftone_frontend::contact::{RecordStore, StoreError, Timer};
use serde::Serialize;
use serde_json::Value;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use tokio::sync::Notify;

/// Records every insert and answers with a canned result.
pub struct FakeStore {
    pub calls: RefCell<Vec<(String, Value)>>,
    response: RefCell<Result<(), StoreError>>,
    gate: Option<Notify>,
}

impl FakeStore {
    pub fn succeeding() -> Rc<Self> {
        Rc::new(Self {
            calls: RefCell::new(Vec::new()),
            response: RefCell::new(Ok(())),
            gate: None,
        })
    }

    pub fn failing(message: &str) -> Rc<Self> {
        let store = Self::succeeding();
        store.fail_with(message);
        store
    }

    /// Each insert waits for `release` before answering.
    pub fn gated() -> Rc<Self> {
        Rc::new(Self {
            calls: RefCell::new(Vec::new()),
            response: RefCell::new(Ok(())),
            gate: Some(Notify::new()),
        })
    }

    pub fn fail_with(&self, message: &str) {
        *self.response.borrow_mut() = Err(StoreError::rejected(403, message));
    }

    pub fn succeed(&self) {
        *self.response.borrow_mut() = Ok(());
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn last_record(&self) -> Value {
        self.calls.borrow().last().expect("no insert recorded").1.clone()
    }
}

impl RecordStore for FakeStore {
    async fn insert_one<R: Serialize + ?Sized>(
        &self,
        collection: &str,
        record: &R,
    ) -> Result<Vec<Value>, StoreError> {
        let record = serde_json::to_value(record).expect("record serializes");
        self.calls.borrow_mut().push((collection.to_string(), record.clone()));
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.response.borrow().clone().map(|()| vec![record])
    }
}

struct Scheduled {
    delay: Duration,
    cancelled: Rc<Cell<bool>>,
    task: Box<dyn FnOnce()>,
}

/// Collects scheduled tasks until the test fires them.
#[derive(Clone, Default)]
pub struct ManualTimer {
    scheduled: Rc<RefCell<Vec<Scheduled>>>,
}

pub struct ManualHandle(Rc<Cell<bool>>);

impl Drop for ManualHandle {
    fn drop(&mut self) {
        self.0.set(true);
    }
}

impl ManualTimer {
    pub fn delays(&self) -> Vec<Duration> {
        self.scheduled.borrow().iter().map(|s| s.delay).collect()
    }

    pub fn live_count(&self) -> usize {
        self.scheduled.borrow().iter().filter(|s| !s.cancelled.get()).count()
    }

    /// Runs every task that has not been cancelled. Returns how many ran.
    pub fn fire_all(&self) -> usize {
        let due: Vec<Scheduled> = self.scheduled.borrow_mut().drain(..).collect();
        let mut fired = 0;
        for scheduled in due {
            if !scheduled.cancelled.get() {
                (scheduled.task)();
                fired += 1;
            }
        }
        fired
    }
}

impl Timer for ManualTimer {
    type Handle = ManualHandle;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> ManualHandle {
        let cancelled = Rc::new(Cell::new(false));
        self.scheduled.borrow_mut().push(Scheduled {
            delay,
            cancelled: cancelled.clone(),
            task,
        });
        ManualHandle(cancelled)
    }
}
