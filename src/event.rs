//! Event model and queue capabilities.
//!
//! These types define the protocol between the producers (input and
//! ticker threads) and the event loop, plus the channel-backed capability
//! objects that encode each producer's enqueue policy: key events block,
//! ticks drop, redraw requests coalesce.

use crossbeam_channel::Sender;

/// Keys tracked by the application.
///
/// This is the device's d-pad model, not a full keyboard: six keys,
/// everything else is discarded before it reaches the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKey {
    /// Center/confirm key.
    Confirm,
    /// Right arrow.
    Right,
    /// Left arrow.
    Left,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Back key; requests application exit.
    Back,
}

impl InputKey {
    /// Fixed display name for this key, shown as the status label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Confirm => "ok",
            Self::Right => "right",
            Self::Left => "left",
            Self::Up => "up",
            Self::Down => "down",
            Self::Back => "back",
        }
    }
}

/// Phase of a key transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputPhase {
    /// Key went down.
    Press,
    /// Key came up.
    Release,
    /// Key went down and up within the short-press window.
    ShortPress,
    /// Key was held past the long-press threshold.
    LongPress,
    /// Auto-repeat while held.
    Repeat,
}

impl InputPhase {
    /// Whether this phase leaves the key in a held state.
    ///
    /// Everything except `Release` counts as held.
    pub const fn is_pressed(self) -> bool {
        !matches!(self, Self::Release)
    }
}

/// A key event as consumed by the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    /// Which key changed phase.
    pub key: InputKey,
    /// The phase it changed to.
    pub phase: InputPhase,
}

/// An event drawn from the shared queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Periodic timer fired.
    Tick,
    /// A key changed phase.
    Input(InputEvent),
}

/// Commands sent to the render thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderCommand {
    /// Render the current scene and flush it.
    Redraw,
    /// Stop the render thread.
    Shutdown,
}

/// Submits key events to the event queue.
///
/// Submission blocks while the queue is full: a keypress is never
/// dropped, the producer waits for the loop to drain.
#[derive(Debug, Clone)]
pub struct InputSink {
    tx: Sender<Event>,
}

impl InputSink {
    /// Wrap a queue sender as an input capability.
    pub const fn new(tx: Sender<Event>) -> Self {
        Self { tx }
    }

    /// Enqueue a key event, waiting for space if the queue is full.
    pub fn submit(&self, event: InputEvent) {
        // send only fails once the consumer is gone, at which point the
        // event has nowhere to go anyway
        let _ = self.tx.send(Event::Input(event));
    }
}

/// Submits periodic ticks to the event queue.
///
/// Ticks are enqueued with a non-blocking attempt; a full queue discards
/// the tick instead of stacking stale ones behind pending work.
#[derive(Debug, Clone)]
pub struct TickSink {
    tx: Sender<Event>,
}

impl TickSink {
    /// Wrap a queue sender as a tick capability.
    pub const fn new(tx: Sender<Event>) -> Self {
        Self { tx }
    }

    /// Enqueue a tick if there is room; otherwise drop it.
    pub fn tick(&self) {
        let _ = self.tx.try_send(Event::Tick);
    }
}

/// Requests a redraw from the render thread.
///
/// Requests are non-blocking: one already queued covers any number of
/// further ones, since the scene reads live state at draw time.
#[derive(Debug, Clone)]
pub struct RedrawHandle {
    tx: Sender<RenderCommand>,
}

impl RedrawHandle {
    /// Wrap a render-channel sender as a redraw capability.
    pub const fn new(tx: Sender<RenderCommand>) -> Self {
        Self { tx }
    }

    /// Ask the render thread for a frame.
    pub fn request(&self) {
        let _ = self.tx.try_send(RenderCommand::Redraw);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_excess_ticks_dropped_without_error() {
        let (tx, rx) = bounded(8);
        let sink = TickSink::new(tx);

        for _ in 0..20 {
            sink.tick();
        }

        // Queue holds exactly its capacity; the rest vanished silently.
        assert_eq!(rx.len(), 8);
        for _ in 0..8 {
            assert_eq!(rx.recv_timeout(Duration::from_millis(10)), Ok(Event::Tick));
        }
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_input_submission_blocks_until_drained() {
        let (tx, rx) = bounded(2);
        let tick = TickSink::new(tx.clone());
        let sink = InputSink::new(tx);

        // Fill the queue so the next submit has no room.
        tick.tick();
        tick.tick();

        let submitted = Arc::new(AtomicBool::new(false));
        let submitted_clone = submitted.clone();
        let handle = thread::spawn(move || {
            sink.submit(InputEvent {
                key: InputKey::Confirm,
                phase: InputPhase::Press,
            });
            submitted_clone.store(true, Ordering::SeqCst);
        });

        // The producer must still be parked on the full queue.
        thread::sleep(Duration::from_millis(50));
        assert!(!submitted.load(Ordering::SeqCst));

        // Draining one slot unblocks it.
        assert_eq!(rx.recv_timeout(Duration::from_millis(10)), Ok(Event::Tick));
        handle.join().expect("producer thread panicked");
        assert!(submitted.load(Ordering::SeqCst));

        // The key event made it through intact.
        let drained: Vec<Event> = rx.try_iter().collect();
        assert!(drained.contains(&Event::Input(InputEvent {
            key: InputKey::Confirm,
            phase: InputPhase::Press,
        })));
    }

    #[test]
    fn test_redraw_requests_coalesce() {
        let (tx, rx) = bounded(1);
        let redraw = RedrawHandle::new(tx);

        redraw.request();
        redraw.request();
        redraw.request();

        assert_eq!(rx.try_recv(), Ok(RenderCommand::Redraw));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_phase_pressed_mapping() {
        assert!(InputPhase::Press.is_pressed());
        assert!(InputPhase::ShortPress.is_pressed());
        assert!(InputPhase::LongPress.is_pressed());
        assert!(InputPhase::Repeat.is_pressed());
        assert!(!InputPhase::Release.is_pressed());
    }

    #[test]
    fn test_key_labels() {
        assert_eq!(InputKey::Confirm.label(), "ok");
        assert_eq!(InputKey::Back.label(), "back");
        assert_eq!(InputKey::Up.label(), "up");
        assert_eq!(InputKey::Down.label(), "down");
        assert_eq!(InputKey::Left.label(), "left");
        assert_eq!(InputKey::Right.label(), "right");
    }
}
