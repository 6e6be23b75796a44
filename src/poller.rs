//! Live review polling.
//!
//! A [`Poller`] runs single fetch-and-update cycles against a
//! [`ReviewSource`]. A [`PollSchedule`] owns the repeating browser timer that
//! drives those cycles and cancels it when dropped.
//!
//! Polls are not serialized. Each one takes a sequence number when it is
//! issued and a response is only applied if nothing issued later has been
//! applied already, so a slow request can never overwrite fresher data.

use crate::api::{FetchResult, ReviewSource};
use crate::error::FetchError;
use crate::state::ViewState;
use crate::utils::leptos_owner::update_if_alive;
use gloo_timers::callback::Interval;
use leptos::logging::{error, log, warn};
use leptos::{spawn_local, RwSignal};
use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

/// How a settled poll affected the view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// The response replaced the shown reviews.
    Applied { count: usize },
    /// A poll issued later had already been applied; response dropped.
    Stale,
    /// The view state was disposed before the response arrived.
    Detached,
}

#[derive(Clone)]
pub struct Poller {
    source: Rc<dyn ReviewSource>,
    state: RwSignal<ViewState>,
    issued: Rc<Cell<u64>>,
}

impl Poller {
    pub fn new(source: Rc<dyn ReviewSource>, state: RwSignal<ViewState>) -> Self {
        Self {
            source,
            state,
            issued: Rc::new(Cell::new(0)),
        }
    }

    pub fn state(&self) -> RwSignal<ViewState> {
        self.state
    }

    /// Number of polls issued so far.
    pub fn issued(&self) -> u64 {
        self.issued.get()
    }

    /// Issues one poll now and returns the future that settles it.
    ///
    /// The sequence number and the request are taken eagerly, so issue order
    /// is call order even if the returned futures are awaited out of order.
    pub fn poll_once(&self) -> impl Future<Output = Result<PollOutcome, FetchError>> + 'static {
        let seq = self.issued.get() + 1;
        self.issued.set(seq);
        let request = self.source.fetch_reviews();
        let state = self.state;
        async move { settle(state, seq, request.await) }
    }

    /// Fire-and-forget poll on the local executor.
    pub fn spawn_poll(&self) {
        let poll = self.poll_once();
        spawn_local(async move {
            // Failures are already logged and counted in the view state.
            let _ = poll.await;
        });
    }
}

fn settle(
    state: RwSignal<ViewState>,
    seq: u64,
    result: FetchResult,
) -> Result<PollOutcome, FetchError> {
    match result {
        Ok(reviews) => {
            let count = reviews.len();
            match update_if_alive(state, "review poll result", |view| {
                view.apply_success(seq, reviews)
            }) {
                Some(true) => Ok(PollOutcome::Applied { count }),
                Some(false) => {
                    warn!("[POLL] Dropping response of poll #{}: a newer poll is already shown", seq);
                    Ok(PollOutcome::Stale)
                }
                None => {
                    warn!("[POLL] Poll #{} finished after the feed was unmounted", seq);
                    Ok(PollOutcome::Detached)
                }
            }
        }
        Err(err) => {
            error!("[POLL] Error fetching reviews (poll #{}): {}", seq, err);
            update_if_alive(state, "review poll failure", ViewState::apply_failure);
            Err(err)
        }
    }
}

/// Repeating poll owned by one mounted feed.
///
/// Starting it polls immediately and then every `period_ms`. Dropping it
/// stops the timer; requests already in flight still settle.
pub struct PollSchedule {
    interval: Option<Interval>,
}

impl PollSchedule {
    pub fn start(poller: Poller, period_ms: u32) -> Self {
        log!("[POLL] Polling reviews every {} ms", period_ms);
        poller.spawn_poll();
        let interval = Interval::new(period_ms, move || poller.spawn_poll());
        Self {
            interval: Some(interval),
        }
    }

    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }

    pub fn cancel(&mut self) {
        if let Some(interval) = self.interval.take() {
            drop(interval);
            log!("[POLL] Review polling stopped");
        }
    }
}

impl Drop for PollSchedule {
    fn drop(&mut self) {
        self.cancel();
    }
}
