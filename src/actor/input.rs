//! Input actor: dedicated thread for polling terminal key events.
//!
//! The thread polls crossterm with a short timeout so it can observe the
//! shutdown flag, converts what it reads into the d-pad event model, and
//! submits through the blocking sink. Key events are the one thing this
//! program refuses to drop: when the queue is full the submission waits.

use crate::event::{InputEvent, InputKey, InputPhase, InputSink};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Input actor that polls terminal events.
#[derive(Debug)]
pub struct InputActor {
    /// Handle to the input thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
}

impl InputActor {
    /// Spawn the input actor thread.
    ///
    /// `poll_timeout` bounds how long the thread waits for a terminal
    /// event before re-checking the shutdown flag.
    pub fn spawn(sink: InputSink, poll_timeout: Duration) -> io::Result<Self> {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        let handle = thread::Builder::new()
            .name("nudge-input".to_string())
            .spawn(move || {
                Self::run_loop(&sink, &shutdown_clone, poll_timeout);
            })?;

        Ok(Self {
            handle: Some(handle),
            shutdown,
        })
    }

    /// Signal the input thread to shutdown.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the input thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main input polling loop.
    fn run_loop(sink: &InputSink, shutdown: &Arc<AtomicBool>, poll_timeout: Duration) {
        loop {
            if shutdown.load(Ordering::Relaxed) {
                break;
            }

            // Poll for events with timeout
            match event::poll(poll_timeout) {
                Ok(true) => match event::read() {
                    Ok(event) => {
                        if let Some(input_event) = Self::convert_event(&event) {
                            sink.submit(input_event);
                        }
                    }
                    Err(e) => {
                        tracing::warn!("input read failed: {e}");
                    }
                },
                Ok(false) => {
                    // No event, continue loop (will check shutdown)
                }
                Err(e) => {
                    tracing::warn!("input poll failed: {e}");
                }
            }
        }
    }

    /// Convert a crossterm event to the d-pad model.
    ///
    /// Anything the device does not track comes back as `None`.
    fn convert_event(event: &Event) -> Option<InputEvent> {
        let Event::Key(key_event) = event else {
            return None;
        };

        let key = Self::convert_key_code(key_event.code)?;
        let phase = Self::convert_kind(key_event.kind);

        Some(InputEvent { key, phase })
    }

    /// Map the tracked keys; everything else is ignored.
    fn convert_key_code(code: KeyCode) -> Option<InputKey> {
        Some(match code {
            KeyCode::Enter => InputKey::Confirm,
            KeyCode::Right => InputKey::Right,
            KeyCode::Left => InputKey::Left,
            KeyCode::Up => InputKey::Up,
            KeyCode::Down => InputKey::Down,
            KeyCode::Esc => InputKey::Back,
            _ => return None,
        })
    }

    /// Map crossterm's event kinds onto the phase model.
    ///
    /// Terminals only report press/repeat/release; the short- and
    /// long-press phases exist for sources that distinguish them.
    const fn convert_kind(kind: KeyEventKind) -> InputPhase {
        match kind {
            KeyEventKind::Press => InputPhase::Press,
            KeyEventKind::Repeat => InputPhase::Repeat,
            KeyEventKind::Release => InputPhase::Release,
        }
    }
}

impl Drop for InputActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventState, KeyModifiers};

    fn key(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_tracked_keys_convert() {
        let cases = [
            (KeyCode::Enter, InputKey::Confirm),
            (KeyCode::Right, InputKey::Right),
            (KeyCode::Left, InputKey::Left),
            (KeyCode::Up, InputKey::Up),
            (KeyCode::Down, InputKey::Down),
            (KeyCode::Esc, InputKey::Back),
        ];
        for (code, expected) in cases {
            let converted = InputActor::convert_event(&key(code, KeyEventKind::Press))
                .expect("tracked key must convert");
            assert_eq!(converted.key, expected);
            assert_eq!(converted.phase, InputPhase::Press);
        }
    }

    #[test]
    fn test_kinds_map_to_phases() {
        let release = InputActor::convert_event(&key(KeyCode::Up, KeyEventKind::Release))
            .expect("tracked key must convert");
        assert_eq!(release.phase, InputPhase::Release);

        let repeat = InputActor::convert_event(&key(KeyCode::Up, KeyEventKind::Repeat))
            .expect("tracked key must convert");
        assert_eq!(repeat.phase, InputPhase::Repeat);
    }

    #[test]
    fn test_untracked_events_are_ignored() {
        assert!(InputActor::convert_event(&key(KeyCode::Char('q'), KeyEventKind::Press)).is_none());
        assert!(InputActor::convert_event(&key(KeyCode::Tab, KeyEventKind::Press)).is_none());
        assert!(InputActor::convert_event(&Event::Resize(80, 24)).is_none());
        assert!(InputActor::convert_event(&Event::FocusGained).is_none());
    }
}
