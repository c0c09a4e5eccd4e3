//! Actors: message-passing concurrency around the event loop.
//!
//! Three dedicated threads surround the controller, talking over
//! crossbeam channels:
//! - **Input actor**: polls terminal keys, submits them (blocking)
//! - **Ticker actor**: fires the periodic tick, submits it (lossy)
//! - **Renderer actor**: receives coalesced redraws, flushes frames
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   Event::Input (blocking)   ┌──────────────┐
//! │ Input Thread │ ──────────────────────────▶ │              │
//! └──────────────┘                             │  Controller  │
//! ┌──────────────┐   Event::Tick (lossy)       │   (loop)     │
//! │Ticker Thread │ ──────────────────────────▶ │              │
//! └──────────────┘                             └──────┬───────┘
//!                                                     │ Redraw
//!                                                     ▼
//!                                              ┌──────────────┐
//!                                              │Render Thread │
//!                                              └──────────────┘
//! ```

mod input;
mod renderer;
mod ticker;

pub use input::InputActor;
pub use renderer::{RendererActor, Scene, StateScene};
pub use ticker::TickerActor;
