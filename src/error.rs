//! Setup error types.
//!
//! Every failure here is fatal by design: the binary logs it and exits
//! with the reserved status code. Nothing in the running loop produces
//! an `Error`; queue-full and unrecognized-key conditions are handled
//! by policy, not reported.

use thiserror::Error;

/// Exit status when startup fails.
pub const EXIT_SETUP_FAILURE: u8 = 255;

/// Fatal startup failures.
#[derive(Debug, Error)]
pub enum Error {
    /// The terminal session could not be established.
    #[error("terminal setup failed: {0}")]
    Terminal(#[source] std::io::Error),

    /// An actor thread could not be spawned.
    #[error("cannot spawn {name} thread: {source}")]
    Spawn {
        /// Which actor failed to start.
        name: &'static str,
        /// The underlying spawn failure.
        #[source]
        source: std::io::Error,
    },
}
