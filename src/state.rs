//! Shared application state and its transitions.
//!
//! One `AppState` instance lives behind a mutex for the whole program.
//! The controller mutates it under the lock, once per dequeued event;
//! the renderer's scene reads it under the same lock.

use crate::event::{InputEvent, InputKey};
use bitflags::bitflags;

bitflags! {
    /// The set of currently held keys.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct HeldKeys: u8 {
        /// Center/confirm key held.
        const CONFIRM = 1 << 0;
        /// Right held.
        const RIGHT = 1 << 1;
        /// Left held.
        const LEFT = 1 << 2;
        /// Up held.
        const UP = 1 << 3;
        /// Down held.
        const DOWN = 1 << 4;
        /// Back held; observed by the loop as the exit request.
        const BACK = 1 << 5;
    }
}

impl From<InputKey> for HeldKeys {
    fn from(key: InputKey) -> Self {
        match key {
            InputKey::Confirm => Self::CONFIRM,
            InputKey::Right => Self::RIGHT,
            InputKey::Left => Self::LEFT,
            InputKey::Up => Self::UP,
            InputKey::Down => Self::DOWN,
            InputKey::Back => Self::BACK,
        }
    }
}

/// Application state: held keys, label position, status label.
///
/// Coordinates are unclamped offsets from screen center; holding a
/// direction walks them one cell per tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    held: HeldKeys,
    x: i32,
    y: i32,
    label: &'static str,
}

impl AppState {
    /// Fresh state: nothing held, label at the origin, no status text.
    pub const fn new() -> Self {
        Self {
            held: HeldKeys::empty(),
            x: 0,
            y: 0,
            label: "",
        }
    }

    /// Horizontal offset from screen center.
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Vertical offset from screen center.
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Name of the last key that changed phase, or `""` before any input.
    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// Currently held keys.
    pub const fn held(&self) -> HeldKeys {
        self.held
    }

    /// Advance the position by one step per held direction.
    ///
    /// Opposite directions held together cancel out.
    pub fn apply_tick(&mut self) {
        self.x += i32::from(self.held.contains(HeldKeys::RIGHT))
            - i32::from(self.held.contains(HeldKeys::LEFT));
        self.y += i32::from(self.held.contains(HeldKeys::DOWN))
            - i32::from(self.held.contains(HeldKeys::UP));
    }

    /// Record a key transition and update the status label.
    pub fn apply_input(&mut self, event: InputEvent) {
        self.held
            .set(HeldKeys::from(event.key), event.phase.is_pressed());
        self.label = event.key.label();
    }

    /// Whether the back key has been observed held.
    pub const fn exit_requested(&self) -> bool {
        self.held.contains(HeldKeys::BACK)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
