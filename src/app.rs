//! Application wiring: construction, run, teardown.
//!
//! `App` owns everything with a lifetime: the terminal session, the
//! shared state, the event queue, and the three actor threads. The
//! construction order here is the dependency order; teardown walks it
//! backwards.

use crate::actor::{InputActor, RendererActor, StateScene, TickerActor};
use crate::controller::Controller;
use crate::error::Error;
use crate::event::{Event, InputSink, RedrawHandle, RenderCommand, TickSink};
use crate::state::AppState;
use crate::terminal::TerminalSession;
use crossbeam_channel::{bounded, Sender};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// How long the input thread waits for a terminal event before checking
/// its shutdown flag.
const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(10);

/// Redraw requests pending beyond this simply coalesce.
const RENDER_QUEUE_CAPACITY: usize = 16;

/// Fixed knobs of the demo. These are compiled-in defaults; there are no
/// CLI flags.
#[derive(Debug, Clone)]
pub struct Config {
    /// Event queue capacity, shared by ticks and key events.
    pub queue_capacity: usize,
    /// How long one loop iteration waits for an event.
    pub wait_timeout: Duration,
    /// Ticks per second: the tick interval is one second over this.
    pub timer_divisor: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            queue_capacity: 8,
            wait_timeout: Duration::from_millis(100),
            timer_divisor: 12,
        }
    }
}

impl Config {
    /// The periodic tick interval this configuration yields.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.timer_divisor
    }
}

/// The assembled application.
#[derive(Debug)]
pub struct App {
    controller: Controller,
    input: InputActor,
    ticker: TickerActor,
    renderer: RendererActor,
    render_tx: Sender<RenderCommand>,
    // Dropped last so every actor sees an intact terminal on the way out.
    _session: TerminalSession,
}

impl App {
    /// Set up the terminal, the queues, the shared state, and the actors.
    ///
    /// Any failure here is fatal; the caller logs it and exits with
    /// [`crate::EXIT_SETUP_FAILURE`].
    pub fn initialize(config: &Config) -> Result<Self, Error> {
        let session = TerminalSession::enter().map_err(Error::Terminal)?;

        let (event_tx, event_rx) = bounded::<Event>(config.queue_capacity);
        let (render_tx, render_rx) = bounded::<RenderCommand>(RENDER_QUEUE_CAPACITY);

        let state = Arc::new(Mutex::new(AppState::new()));
        let scene = StateScene::new(Arc::downgrade(&state));

        let renderer = RendererActor::spawn(render_rx, scene, session.width(), session.height())
            .map_err(|source| Error::Spawn {
                name: "render",
                source,
            })?;
        let input = InputActor::spawn(InputSink::new(event_tx.clone()), INPUT_POLL_TIMEOUT)
            .map_err(|source| Error::Spawn {
                name: "input",
                source,
            })?;
        let ticker = TickerActor::spawn(config.tick_interval(), TickSink::new(event_tx)).map_err(
            |source| Error::Spawn {
                name: "ticker",
                source,
            },
        )?;

        let controller = Controller::new(
            event_rx,
            state,
            RedrawHandle::new(render_tx.clone()),
            config.wait_timeout,
        );

        tracing::info!(
            queue_capacity = config.queue_capacity,
            tick_interval = ?config.tick_interval(),
            "initialized"
        );

        Ok(Self {
            controller,
            input,
            ticker,
            renderer,
            render_tx,
            _session: session,
        })
    }

    /// Run the event loop until the back key is pressed.
    pub fn run(&self) {
        self.controller.run();
    }

    /// Stop the actors, join their threads, and restore the terminal.
    pub fn shutdown(self) {
        self.ticker.join();
        // Dropping the controller disconnects the event queue, which
        // unparks an input thread stuck submitting into a full queue.
        drop(self.controller);
        self.input.join();
        let _ = self.render_tx.send(RenderCommand::Shutdown);
        self.renderer.join();
        tracing::info!("shut down");
        // _session drops here and restores the terminal.
    }
}
