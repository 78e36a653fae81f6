// src/config.rs

//! The validated configuration of a run.
//!
//! `Config` is built once from the parsed command line. Everything that can
//! be wrong with the user's input is caught here, before any output is
//! written; the colorizer itself never has to validate anything.

use crate::cli::Args;
use crate::color::{Bounds, ColorState, MAX_OFFSET};
use crate::colorizer::Settings;
use crate::encoder::ColorMode;
use crate::source::InputSource;
use anyhow::bail;
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub mode: ColorMode,
    pub bounds: Bounds,
    pub dx: u8,
    pub dy: u8,
    /// Pattern offset, 0 through `MAX_OFFSET`.
    pub offset: u8,
    pub strip_escapes: bool,
    pub sources: Vec<InputSource>,
}

impl Config {
    /// Builds the run configuration from command-line arguments.
    ///
    /// When neither bound is given, Mono and Ansi8 use the full 0-255 range
    /// instead of the usual default. A missing offset is drawn from `rng`.
    ///
    /// # Errors
    /// Fails if the lower bound ends up above the upper bound.
    pub fn from_args<R: Rng>(args: Args, rng: &mut R) -> anyhow::Result<Self> {
        let defaults = if args.colors.prefers_full_range() && args.min.is_none() && args.max.is_none()
        {
            Bounds::new(0, 255)
        } else {
            Bounds::default()
        };
        let bounds = Bounds::new(
            args.min.unwrap_or(defaults.low),
            args.max.unwrap_or(defaults.high),
        );
        if bounds.low > bounds.high {
            bail!(
                "bad MIN/MAX: minimum {} is greater than maximum {}",
                bounds.low,
                bounds.high
            );
        }

        let offset = match args.offset {
            Some(offset) => offset,
            None => {
                let offset = rng.gen_range(0..=MAX_OFFSET);
                debug!("no offset given, picked {}", offset);
                offset
            }
        };

        Ok(Config {
            mode: args.colors,
            bounds,
            dx: args.dx,
            dy: args.dy,
            offset,
            strip_escapes: args.strip_escapes,
            sources: InputSource::from_operands(args.files),
        })
    }

    pub fn settings(&self) -> Settings {
        Settings {
            mode: self.mode,
            bounds: self.bounds,
            dx: self.dx,
            dy: self.dy,
            strip_escapes: self.strip_escapes,
        }
    }

    /// The color the first line starts from.
    pub fn start_color(&self) -> ColorState {
        ColorState::primed(self.offset, self.bounds)
    }
}
