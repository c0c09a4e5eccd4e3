//! Renderer actor: dedicated thread for drawing to the terminal.
//!
//! The thread owns the canvas and the output handle. Each `Redraw`
//! command clears the canvas, lets the injected [`Scene`] draw into it,
//! and flushes the whole frame in a single write. Redraw requests are
//! coalesced by the channel, so a slow terminal sees fewer frames, never
//! stale ones: the scene reads live state at draw time.

use crate::canvas::Canvas;
use crate::event::RenderCommand;
use crate::state::AppState;
use crossbeam_channel::Receiver;
use crossterm::{cursor, queue, style::Print};
use std::io::{self, Stdout, Write};
use std::sync::{Mutex, PoisonError, Weak};
use std::thread::{self, JoinHandle};

/// The draw-callback seam: something that can render itself to a canvas.
///
/// Injected into the renderer at construction; the renderer never knows
/// what it is drawing.
pub trait Scene: Send + 'static {
    /// Draw the current frame into the (already blanked) canvas.
    fn render(&self, canvas: &mut Canvas);
}

/// Scene that draws the shared state's label at its walked-to position.
#[derive(Debug)]
pub struct StateScene {
    state: Weak<Mutex<AppState>>,
}

impl StateScene {
    /// Create a scene observing the given state.
    ///
    /// The reference is weak: once the owning side is gone the scene
    /// silently stops drawing instead of keeping dead state alive.
    pub const fn new(state: Weak<Mutex<AppState>>) -> Self {
        Self { state }
    }
}

impl Scene for StateScene {
    fn render(&self, canvas: &mut Canvas) {
        // No-op once the owner has dropped the state.
        let Some(state) = self.state.upgrade() else {
            return;
        };
        let state = state.lock().unwrap_or_else(PoisonError::into_inner);
        if state.label().is_empty() {
            return;
        }
        canvas.draw_str_centered(
            canvas.center_x() + state.x(),
            canvas.center_y() + state.y(),
            state.label(),
        );
    }
}

/// Renderer actor that handles terminal output.
#[derive(Debug)]
pub struct RendererActor {
    /// Handle to the render thread.
    handle: Option<JoinHandle<()>>,
}

/// Internal renderer state.
struct Renderer<S: Scene> {
    canvas: Canvas,
    scene: S,
    /// Pre-allocated frame buffer, flushed in one write.
    output: Vec<u8>,
    /// Reused row string.
    row_text: String,
    stdout: Stdout,
}

impl<S: Scene> Renderer<S> {
    fn new(scene: S, width: u16, height: u16) -> Self {
        Self {
            canvas: Canvas::new(width, height),
            scene,
            output: Vec::with_capacity(usize::from(width) * usize::from(height) * 2),
            row_text: String::new(),
            stdout: io::stdout(),
        }
    }

    /// Perform a render cycle.
    ///
    /// Every row is rewritten in full, which also erases whatever the
    /// previous frame left behind.
    fn render(&mut self) -> io::Result<()> {
        self.canvas.clear();
        self.scene.render(&mut self.canvas);

        self.output.clear();
        for y in 0..self.canvas.height() {
            self.row_text.clear();
            self.row_text.extend(self.canvas.row(y));
            queue!(
                &mut self.output,
                cursor::MoveTo(0, y),
                Print(&self.row_text)
            )?;
        }

        self.stdout.write_all(&self.output)?;
        self.stdout.flush()
    }
}

impl RendererActor {
    /// Spawn the renderer thread drawing `scene` onto a width x height
    /// canvas.
    pub fn spawn<S: Scene>(
        receiver: Receiver<RenderCommand>,
        scene: S,
        width: u16,
        height: u16,
    ) -> io::Result<Self> {
        let handle = thread::Builder::new()
            .name("nudge-render".to_string())
            .spawn(move || {
                Self::run_loop(&receiver, scene, width, height);
            })?;

        Ok(Self {
            handle: Some(handle),
        })
    }

    /// Wait for the render thread to finish.
    ///
    /// Callers stop the thread by sending [`RenderCommand::Shutdown`] or
    /// dropping every sender.
    pub fn join(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main render loop.
    fn run_loop<S: Scene>(
        receiver: &Receiver<RenderCommand>,
        scene: S,
        width: u16,
        height: u16,
    ) {
        let mut renderer = Renderer::new(scene, width, height);

        while let Ok(command) = receiver.recv() {
            match command {
                RenderCommand::Redraw => {
                    if let Err(e) = renderer.render() {
                        // A broken terminal cannot be fixed from here;
                        // stop rendering and let the event loop finish
                        // blind.
                        tracing::error!("render failed: {e}");
                        break;
                    }
                }
                RenderCommand::Shutdown => break,
            }
        }
    }
}
