#![forbid(unsafe_code)]

//! termfolio binary entry point.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use termfolio::app::App;
use termfolio::cli;
use termfolio::runtime::{Program, ProgramConfig};

fn main() {
    let opts = cli::Opts::parse();
    init_logging();

    // Clock-derived seed unless pinned for a reproducible run.
    let seed = opts.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos())
            .unwrap_or(1)
    });

    let mut app = App::new(seed);
    app.jump_to(opts.start_section);

    let config = ProgramConfig {
        tick_interval: Duration::from_millis(opts.tick_ms.max(1)),
        mouse: opts.mouse,
        exit_after: (opts.exit_after_ms > 0)
            .then(|| Duration::from_millis(opts.exit_after_ms)),
    };
    if let Err(e) = Program::new(config).run(&mut app) {
        eprintln!("Runtime error: {e}");
        std::process::exit(1);
    }
}

/// Send traces to a file when `TERMFOLIO_LOG` names one.
///
/// Stdout belongs to the presenter, so logging is opt-in and never
/// writes to the terminal.
fn init_logging() {
    let Ok(path) = std::env::var("TERMFOLIO_LOG") else {
        return;
    };
    let Ok(file) = std::fs::File::create(&path) else {
        eprintln!("Could not open log file: {path}");
        return;
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(file)
        .with_ansi(false)
        .init();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "termfolio starting");
}
