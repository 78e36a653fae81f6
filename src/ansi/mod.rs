// src/ansi/mod.rs

//! Byte classification for the colorizer input.
//!
//! Two small state machines live here: the `EscapeFilter`, which spots ANSI
//! escape sequences already present in the input, and the UTF-8 classifier,
//! which decides whether a byte starts a new visible character.

mod filter;
mod utf8;

pub use filter::{ByteKind, EscapeFilter, FilterDecision, FilterState};
pub use utf8::ByteClass;
