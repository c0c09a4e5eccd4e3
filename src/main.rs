//! Binary entry point.
//!
//! No CLI flags: the demo's knobs are compiled in. `RUST_LOG` controls
//! log output on stderr (off by default, as logs interleave badly with
//! a live alternate screen).

use nudge::{App, Config, EXIT_SETUP_FAILURE};
use std::process::ExitCode;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let app = match App::initialize(&Config::default()) {
        Ok(app) => app,
        Err(err) => {
            tracing::error!("cannot initialize: {err}");
            return ExitCode::from(EXIT_SETUP_FAILURE);
        }
    };

    app.run();
    app.shutdown();

    ExitCode::SUCCESS
}
