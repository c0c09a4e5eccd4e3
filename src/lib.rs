//! # Nudge
//!
//! A tiny event-driven demo: a text label walks around the terminal
//! under d-pad style input (arrows move, Enter confirms, Esc exits).
//!
//! The whole program is one event loop fed by a bounded queue. Input and
//! a periodic tick arrive from dedicated threads with deliberately
//! different enqueue policies (keypresses block until there is room,
//! ticks are shed under load), and every loop iteration ends with a
//! coalesced redraw request to the render thread.
//!
//! ## Core Concepts
//!
//! - **Bounded event queue**: one capacity-8 channel feeds the loop
//! - **Shared state under a mutex**: the controller writes, the scene reads
//! - **Actor model**: isolated threads for input, ticking, and rendering
//!
//! ## Example
//!
//! ```rust,ignore
//! use nudge::{App, Config};
//!
//! let app = App::initialize(&Config::default())?;
//! app.run();      // blocks until Esc
//! app.shutdown();
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod app;
pub mod canvas;
pub mod controller;
pub mod error;
pub mod event;
pub mod state;
pub mod terminal;

// Re-exports for convenience
pub use actor::{InputActor, RendererActor, Scene, StateScene, TickerActor};
pub use app::{App, Config};
pub use canvas::Canvas;
pub use controller::Controller;
pub use error::{Error, EXIT_SETUP_FAILURE};
pub use event::{
    Event, InputEvent, InputKey, InputPhase, InputSink, RedrawHandle, RenderCommand, TickSink,
};
pub use state::{AppState, HeldKeys};
pub use terminal::TerminalSession;
