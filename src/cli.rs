// src/cli.rs

//! Command-line arguments.

use crate::color::MAX_OFFSET;
use crate::encoder::ColorMode;
use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_DX: u8 = 10;
pub const DEFAULT_DY: u8 = 30;

/// Concatenate files and print to standard output in rainbow colors.
#[derive(Debug, Parser)]
#[command(
    name = "rainbowcat",
    version,
    after_help = "With no FILE, or when FILE is -, read standard input."
)]
pub struct Args {
    /// Strip escape sequences from input.
    #[arg(short = 'e', long)]
    pub strip_escapes: bool,

    /// Colors to use: 1, 8, 256 or true.
    #[arg(
        short = 'c',
        long = "colors",
        value_name = "COLORS",
        default_value = "true",
        value_parser = ColorMode::from_str
    )]
    pub colors: ColorMode,

    /// Lower R/G/B limit (0-255). Default: 80, or 0 with -c 1 and -c 8.
    #[arg(short = 'a', long = "min", value_name = "MIN")]
    pub min: Option<u8>,

    /// Upper R/G/B limit (0-255). Default: 255.
    #[arg(short = 'b', long = "max", value_name = "MAX")]
    pub max: Option<u8>,

    /// Color advancement per character (0-255).
    #[arg(short = 'x', long = "dx", value_name = "DX", default_value_t = DEFAULT_DX)]
    pub dx: u8,

    /// Color advancement per line (0-255).
    #[arg(short = 'y', long = "dy", value_name = "DY", default_value_t = DEFAULT_DY)]
    pub dy: u8,

    /// Offset the pattern (0-100). Default: random.
    #[arg(
        short = 'o',
        long,
        value_name = "OFFSET",
        value_parser = clap::value_parser!(u8).range(0..=i64::from(MAX_OFFSET))
    )]
    pub offset: Option<u8>,

    /// Files to print.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}
