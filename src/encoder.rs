// src/encoder.rs

//! Turns a color into the SGR escape sequence for the selected color depth.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

/// Sequence written once all input is consumed. Returns every mode to the
/// terminal's default rendition.
pub const RESET_SEQUENCE: &[u8] = b"\x1b[0m";

// Constants for 256-color cube quantisation
const COLOR_CUBE_OFFSET: u16 = 16;
const COLOR_CUBE_DIVISOR: u8 = 45;

// Constants for the 8-color and monochrome thresholds
const ANSI8_BASE: u8 = 30;
const ANSI8_THRESHOLD: u8 = 127;
const MONO_THRESHOLD: u16 = 383;

/// Color depth of the generated escape sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ColorMode {
    /// Bold or normal, depending on brightness.
    Mono,
    /// The 8 basic foreground colors (30-37).
    Ansi8,
    /// The 6x6x6 cube of the xterm 256-color palette.
    Ansi256,
    /// 24-bit RGB.
    #[default]
    TrueColor,
}

impl ColorMode {
    /// Modes that cannot render intermediate channel values well; they get the
    /// full 0-255 range unless the user set the bounds explicitly.
    pub const fn prefers_full_range(self) -> bool {
        matches!(self, ColorMode::Mono | ColorMode::Ansi8)
    }
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(ColorMode::Mono),
            "8" => Ok(ColorMode::Ansi8),
            "256" | "2" => Ok(ColorMode::Ansi256),
            "true" | "t" => Ok(ColorMode::TrueColor),
            other => Err(format!(
                "invalid color depth '{other}' (expected 1, 8, 256 or true)"
            )),
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorMode::Mono => "1",
            ColorMode::Ansi8 => "8",
            ColorMode::Ansi256 => "256",
            ColorMode::TrueColor => "true",
        };
        f.write_str(name)
    }
}

bitflags! {
    /// Channels that are "on" for the 8-color palette. The bit layout matches
    /// the ANSI color numbering, so `30 + bits` is the SGR parameter.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Ansi8Bits: u8 {
        const RED = 0b001;
        const GREEN = 0b010;
        const BLUE = 0b100;
    }
}

impl Ansi8Bits {
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let mut bits = Ansi8Bits::empty();
        bits.set(Ansi8Bits::RED, r > ANSI8_THRESHOLD);
        bits.set(Ansi8Bits::GREEN, g > ANSI8_THRESHOLD);
        bits.set(Ansi8Bits::BLUE, b > ANSI8_THRESHOLD);
        bits
    }
}

/// Index into the 256-color cube: `16 + 36*r' + 6*g' + b'` where each level
/// is the channel divided by 45.
pub fn cube_index(r: u8, g: u8, b: u8) -> u8 {
    let level = |c: u8| u16::from(c / COLOR_CUBE_DIVISOR);
    let index = COLOR_CUBE_OFFSET + 36 * level(r) + 6 * level(g) + level(b);
    // levels are at most 5, so the index tops out at 231
    index as u8
}

/// SGR parameter for monochrome output: 1 (bold) for bright colors, else 0.
pub fn mono_attribute(r: u8, g: u8, b: u8) -> u8 {
    let sum = u16::from(r) + u16::from(g) + u16::from(b);
    u8::from(sum > MONO_THRESHOLD)
}

/// Writes the foreground escape sequence for `(r, g, b)` in `mode`.
pub fn write_color<W: Write + ?Sized>(
    out: &mut W,
    mode: ColorMode,
    (r, g, b): (u8, u8, u8),
) -> io::Result<()> {
    match mode {
        ColorMode::TrueColor => write!(out, "\x1b[38;2;{r};{g};{b}m"),
        ColorMode::Ansi256 => write!(out, "\x1b[38;5;{}m", cube_index(r, g, b)),
        ColorMode::Ansi8 => write!(
            out,
            "\x1b[{}m",
            ANSI8_BASE + Ansi8Bits::from_rgb(r, g, b).bits()
        ),
        ColorMode::Mono => write!(out, "\x1b[{}m", mono_attribute(r, g, b)),
    }
}
