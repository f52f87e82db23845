use std::{env, fs, io, sync::Arc};

use contracts_config as config;
use tracing::{Dispatch, Level, level_filters::LevelFilter};
use tracing_subscriber::{Registry, filter::Targets, fmt::writer::BoxMakeWriter, prelude::*};

const TRACE_FILE: &str = "contracts";

/// Installs the global subscriber. Human readable events go to stderr, filtered by `RUST_LOG`
/// (e.g. `RUST_LOG=contracts=debug`). When `trace_contracts` is set every checked clause is also
/// written as JSON to `<log_dir>/contracts`.
pub fn install() -> io::Result<()> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_filter(stderr_filter());

    let trace_layer = if config::trace_contracts() {
        let log_dir = config::log_dir();
        fs::create_dir_all(log_dir)?;
        let file = fs::File::create(log_dir.join(TRACE_FILE))?;
        let writer = BoxMakeWriter::new(Arc::new(file));
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .json()
            .with_filter(Targets::new().with_target("contracts", Level::DEBUG));
        Some(layer)
    } else {
        None
    };

    let dispatch = Dispatch::new(Registry::default().with(stderr_layer).with(trace_layer));
    dispatch.init();
    Ok(())
}

// Violations are reported by the binary itself, so the `contracts` target is silent by default.
fn stderr_filter() -> Targets {
    env::var("RUST_LOG")
        .ok()
        .and_then(|directives| directives.parse::<Targets>().ok())
        .unwrap_or_else(|| {
            Targets::new()
                .with_default(Level::WARN)
                .with_target("contracts", LevelFilter::OFF)
        })
}
