//! Observable display state backed by a [`Fetch`] implementation
//!
//! The holder publishes [`DisplayState`] snapshots through a
//! `tokio::sync::watch` channel. All three fields change together in a single
//! send, so observers see either the state before a fetch or the state after
//! it, never a mix.
//!
//! Refreshes are not serialized: each one spawns its own fetch, and whichever
//! completes last decides the published items and error. `loading` stays set
//! until every refresh in flight has completed.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Weak,
};

use itemboard_core::error::FetchError;
use itemboard_core::state::DisplayState;
use tokio::{sync::watch, task::JoinHandle};

use crate::fetcher::Fetch;

/// Published when a refresh task ends without an outcome (panic or runtime shutdown)
pub const REFRESH_ABORTED: &str = "Refresh ended before the fetch completed";

pub struct ItemListHolder {
    shared: Arc<Shared>,
    fetcher: Arc<dyn Fetch>,
}

struct Shared {
    state: watch::Sender<DisplayState>,
    in_flight: AtomicUsize,
}

impl ItemListHolder {
    /// Create the holder and start the initial refresh.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(fetcher: Arc<dyn Fetch>) -> Self {
        let (state, _) = watch::channel(DisplayState::default());
        let holder = Self {
            shared: Arc::new(Shared {
                state,
                in_flight: AtomicUsize::new(0),
            }),
            fetcher,
        };
        holder.refresh();
        holder
    }

    /// Run fetch, transform and publish again.
    ///
    /// `loading` is set before this returns. The returned handle completes
    /// once the outcome has been published; dropping it does not cancel the
    /// refresh.
    pub fn refresh(&self) -> JoinHandle<()> {
        self.shared.state.send_modify(|state| {
            let in_flight = self.shared.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            log::debug!("refresh started ({in_flight} in flight)");
            state.loading = true;
        });

        let fetcher = Arc::clone(&self.fetcher);
        let pending = PendingRefresh {
            shared: Arc::downgrade(&self.shared),
            completed: false,
        };
        tokio::spawn(async move {
            let outcome = fetcher.fetch().await;
            pending.complete(outcome);
        })
    }

    /// Subscribe to state changes. Dropping the receiver unsubscribes.
    pub fn subscribe(&self) -> watch::Receiver<DisplayState> {
        self.shared.state.subscribe()
    }

    /// Current state
    pub fn snapshot(&self) -> DisplayState {
        self.shared.state.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.shared.state.borrow().loading
    }

    pub fn items(&self) -> Option<Vec<itemboard_core::record::Record>> {
        self.shared.state.borrow().items.clone()
    }

    pub fn error(&self) -> String {
        self.shared.state.borrow().error.clone()
    }
}

/// One refresh in flight
///
/// Every exit path of the refresh task publishes exactly once, so the
/// in-flight count always gets back to zero. If the task unwinds or is
/// dropped before `complete`, [`REFRESH_ABORTED`] is published instead.
struct PendingRefresh {
    shared: Weak<Shared>,
    completed: bool,
}

impl PendingRefresh {
    fn complete(mut self, outcome: Result<Vec<itemboard_core::record::Record>, FetchError>) {
        self.completed = true;
        match self.shared.upgrade() {
            Some(shared) => shared.publish(DisplayState::from_outcome(outcome)),
            None => log::debug!("holder dropped before the fetch completed"),
        }
    }
}

impl Drop for PendingRefresh {
    fn drop(&mut self) {
        if self.completed {
            return;
        }
        if let Some(shared) = self.shared.upgrade() {
            log::error!("refresh task ended without an outcome");
            shared.publish(DisplayState::from_outcome(Err(FetchError::transport(
                REFRESH_ABORTED,
            ))));
        }
    }
}

impl Shared {
    fn publish(&self, mut next: DisplayState) {
        self.state.send_modify(|state| {
            let remaining = self.in_flight.fetch_sub(1, Ordering::SeqCst) - 1;
            next.loading = remaining > 0;
            match next.items.as_ref() {
                Some(items) => log::info!("published {} items", items.len()),
                None => log::warn!("fetch failed: {}", next.error),
            }
            *state = next;
        });
    }
}
