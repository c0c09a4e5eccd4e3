//! The event loop: dequeue, transition, redraw.
//!
//! One iteration is: wait a bounded time for the next event, take the
//! state lock whatever the wait produced, apply the transition, request
//! a redraw while still holding the lock, release, and check the exit
//! flag. Timeouts are an expected idle outcome, not an error.

use crate::event::{Event, RedrawHandle};
use crate::state::AppState;
use crossbeam_channel::{Receiver, RecvTimeoutError};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

/// Drives the application state from the shared event queue.
#[derive(Debug)]
pub struct Controller {
    events: Receiver<Event>,
    state: Arc<Mutex<AppState>>,
    redraw: RedrawHandle,
    wait_timeout: Duration,
}

impl Controller {
    /// Build a controller over an event receiver, the shared state, and
    /// a redraw capability.
    pub const fn new(
        events: Receiver<Event>,
        state: Arc<Mutex<AppState>>,
        redraw: RedrawHandle,
        wait_timeout: Duration,
    ) -> Self {
        Self {
            events,
            state,
            redraw,
            wait_timeout,
        }
    }

    /// Loop until the back key is observed held.
    pub fn run(&self) {
        while self.step() {}
        tracing::debug!("event loop stopped");
    }

    /// One loop iteration. Returns `false` when the loop should stop.
    fn step(&self) -> bool {
        let outcome = self.events.recv_timeout(self.wait_timeout);

        // The lock is taken whatever the wait produced; the redraw
        // request below goes out while it is held.
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);

        match outcome {
            Ok(Event::Tick) => state.apply_tick(),
            Ok(Event::Input(event)) => state.apply_input(event),
            Err(RecvTimeoutError::Timeout) => {
                // event timeout? idle poll, nothing to apply
            }
            Err(RecvTimeoutError::Disconnected) => {
                tracing::warn!("all event producers are gone, stopping");
                self.redraw.request();
                return false;
            }
        }

        self.redraw.request();
        !state.exit_requested()
    }
}
