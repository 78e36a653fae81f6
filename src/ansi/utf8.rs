// src/ansi/utf8.rs

//! Per-byte classification that decides whether a byte starts a new visible
//! character. No decoding happens: invalid sequences are classified by the
//! same bit rule and written through unchanged.

const NEWLINE: u8 = b'\n';
const TAB: u8 = b'\t';
const UTF8_CONT_MASK: u8 = 0b1100_0000;
const UTF8_CONT_TAG: u8 = 0b1000_0000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteClass {
    Newline,
    Tab,
    /// An ASCII byte or the first byte of a multi-byte character.
    AsciiOrLeading,
    /// A `10xxxxxx` trailing byte of a multi-byte character.
    Continuation,
}

impl ByteClass {
    #[inline]
    pub fn of(byte: u8) -> Self {
        match byte {
            NEWLINE => ByteClass::Newline,
            TAB => ByteClass::Tab,
            b if b & UTF8_CONT_MASK == UTF8_CONT_TAG => ByteClass::Continuation,
            _ => ByteClass::AsciiOrLeading,
        }
    }
}
