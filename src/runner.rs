// src/runner.rs

//! Drives the colorizer over every configured source in order.

use crate::colorizer::{ColorizeError, Colorizer};
use crate::config::Config;
use crate::source::SourceOpener;
use log::{debug, info};
use std::io::Write;

/// Outcome of a complete run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Every source was read to the end.
    Clean,
    /// Some sources could not be opened or read; the rest were processed.
    Degraded { failed: usize },
}

impl RunStatus {
    pub fn exit_code(self) -> u8 {
        match self {
            RunStatus::Clean => 0,
            RunStatus::Degraded { .. } => 1,
        }
    }
}

/// Colorizes `config.sources` one after another into `out`, then writes the
/// reset sequence.
///
/// A source that fails to open or read is reported on stderr and skipped.
/// Only a failure to write `out` aborts the run.
pub fn run<W: Write>(
    config: &Config,
    opener: &mut dyn SourceOpener,
    out: W,
) -> Result<RunStatus, ColorizeError> {
    let mut colorizer = Colorizer::new(out, config.settings(), config.start_color());
    let mut failed = 0;

    for source in &config.sources {
        let name = source.to_string();
        let result = opener
            .open(source)
            .map_err(|e| ColorizeError::Open {
                name: name.clone(),
                source: e,
            })
            .and_then(|mut input| colorizer.colorize(&mut input, &name));

        match result {
            Ok(()) => debug!("'{}' done, line color now {:?}", name, colorizer.line_color()),
            Err(e) if e.is_source_error() => {
                debug!("skipping source: {}", e);
                eprintln!("Error: {e}");
                failed += 1;
            }
            Err(e) => return Err(e),
        }
    }

    colorizer.finish()?;

    if failed == 0 {
        Ok(RunStatus::Clean)
    } else {
        info!("{} of {} sources failed", failed, config.sources.len());
        Ok(RunStatus::Degraded { failed })
    }
}
