// src/ansi/filter.rs

//! Recognises escape sequences embedded in the input so they can be passed
//! through (or stripped) without being colored.
//!
//! Only the CSI form `ESC [ ... final` is tracked across several bytes. Any
//! other byte after `ESC` is taken as a one-byte escape and ends the sequence.

use log::trace;

const ESC_BYTE: u8 = 0x1B;
const CSI_INTRODUCER: u8 = b'[';
const CSI_FINAL_RANGE: core::ops::RangeInclusive<u8> = 0x40..=0x7E;

/// Position of the filter within an escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterState {
    /// Not inside an escape sequence.
    #[default]
    Normal,
    /// The previous byte was `ESC`.
    AfterEsc,
    /// Inside `ESC [`, waiting for a final byte in 0x40..=0x7E.
    InCsi,
}

/// Whether a byte belongs to an escape sequence or to the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteKind {
    Escape,
    Text,
}

/// What to do with one input byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterDecision {
    pub kind: ByteKind,
    /// False only for escape bytes while stripping is enabled.
    pub emit: bool,
}

#[derive(Debug, Clone, Default)]
pub struct EscapeFilter {
    state: FilterState,
    strip: bool,
}

impl EscapeFilter {
    pub fn new(strip: bool) -> Self {
        EscapeFilter {
            state: FilterState::Normal,
            strip,
        }
    }

    pub fn state(&self) -> FilterState {
        self.state
    }

    pub fn feed(&mut self, byte: u8) -> FilterDecision {
        let (kind, next) = match self.state {
            FilterState::Normal if byte == ESC_BYTE => (ByteKind::Escape, FilterState::AfterEsc),
            FilterState::Normal => (ByteKind::Text, FilterState::Normal),
            FilterState::AfterEsc if byte == CSI_INTRODUCER => {
                (ByteKind::Escape, FilterState::InCsi)
            }
            FilterState::AfterEsc => (ByteKind::Escape, FilterState::Normal),
            FilterState::InCsi if CSI_FINAL_RANGE.contains(&byte) => {
                (ByteKind::Escape, FilterState::Normal)
            }
            FilterState::InCsi => (ByteKind::Escape, FilterState::InCsi),
        };

        if next != self.state {
            trace!("escape filter {:?} -> {:?} on {:#04X}", self.state, next, byte);
        }
        self.state = next;

        FilterDecision {
            kind,
            emit: kind == ByteKind::Text || !self.strip,
        }
    }
}
