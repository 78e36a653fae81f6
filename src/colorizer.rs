// src/colorizer.rs

//! The byte-by-byte colorizing loop.
//!
//! Every input byte first goes through the `EscapeFilter`; escape bytes are
//! written (or dropped) untouched. The remaining bytes are classified:
//! characters get a color prefix and advance the character cursor, newlines
//! advance the line color and reset the character cursor to it, and UTF-8
//! continuation bytes are copied as they are.
//!
//! Two colors are tracked. The line color moves by `dy` once per newline and
//! carries over from one source to the next. The character color starts
//! each line (and each source) at the line color and moves by `dx` per
//! character cell.

use crate::ansi::{ByteClass, ByteKind, EscapeFilter};
use crate::color::{Bounds, ColorState};
use crate::encoder::{self, ColorMode, RESET_SEQUENCE};
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::io::{self, ErrorKind, Read, Write};
use thiserror::Error;

const READ_BUFFER_SIZE: usize = 4096;

/// Terminal tab stops are assumed every 8 columns.
pub const TAB_WIDTH: usize = 8;

/// Run-wide parameters of the colorizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub mode: ColorMode,
    pub bounds: Bounds,
    /// Color advancement per character cell.
    pub dx: u8,
    /// Color advancement per line.
    pub dy: u8,
    pub strip_escapes: bool,
}

#[derive(Debug, Error)]
pub enum ColorizeError {
    #[error("cannot open '{name}': {source}")]
    Open {
        name: String,
        #[source]
        source: io::Error,
    },
    #[error("cannot read '{name}': {source}")]
    Read {
        name: String,
        #[source]
        source: io::Error,
    },
    #[error("cannot write output: {0}")]
    Write(#[source] io::Error),
}

impl ColorizeError {
    /// Open and read failures only affect one source; a write failure ends
    /// the run.
    pub fn is_source_error(&self) -> bool {
        matches!(self, ColorizeError::Open { .. } | ColorizeError::Read { .. })
    }
}

/// State that lives for one source only.
#[derive(Debug, Clone)]
struct SourceCursor {
    color: ColorState,
    column: usize,
    filter: EscapeFilter,
}

impl SourceCursor {
    fn new(line_color: ColorState, strip_escapes: bool) -> Self {
        SourceCursor {
            color: line_color,
            column: 0,
            filter: EscapeFilter::new(strip_escapes),
        }
    }
}

pub struct Colorizer<W: Write> {
    out: W,
    settings: Settings,
    line_color: ColorState,
}

impl<W: Write> Colorizer<W> {
    pub fn new(out: W, settings: Settings, start: ColorState) -> Self {
        Colorizer {
            out,
            settings,
            line_color: start,
        }
    }

    /// The running line color. This is what the next source starts from.
    pub fn line_color(&self) -> ColorState {
        self.line_color
    }

    /// Colorizes one source to the end. `name` is only used for error
    /// reporting.
    ///
    /// Output is flushed after every chunk read, so interactive input shows
    /// up as it is typed. On a read error, whatever was written so far stays
    /// written and the line color keeps its current value.
    pub fn colorize<R: Read + ?Sized>(
        &mut self,
        input: &mut R,
        name: &str,
    ) -> Result<(), ColorizeError> {
        debug!("colorizing '{}' starting from {:?}", name, self.line_color);
        let mut cursor = SourceCursor::new(self.line_color, self.settings.strip_escapes);
        let mut buf = [0u8; READ_BUFFER_SIZE];

        loop {
            let count = match input.read(&mut buf) {
                Ok(0) => break,
                Ok(count) => count,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(source) => {
                    return Err(ColorizeError::Read {
                        name: name.to_owned(),
                        source,
                    })
                }
            };
            trace!("read {} bytes from '{}'", count, name);

            for &byte in &buf[..count] {
                self.process_byte(&mut cursor, byte)
                    .map_err(ColorizeError::Write)?;
            }
            self.out.flush().map_err(ColorizeError::Write)?;
        }

        debug!(
            "finished '{}': line color {:?}, column {}, escape state {:?}",
            name,
            self.line_color,
            cursor.column,
            cursor.filter.state()
        );
        Ok(())
    }

    /// Writes the reset sequence and hands back the sink.
    pub fn finish(mut self) -> Result<W, ColorizeError> {
        self.out
            .write_all(RESET_SEQUENCE)
            .and_then(|()| self.out.flush())
            .map_err(ColorizeError::Write)?;
        Ok(self.out)
    }

    fn process_byte(&mut self, cursor: &mut SourceCursor, byte: u8) -> io::Result<()> {
        let decision = cursor.filter.feed(byte);
        if decision.kind == ByteKind::Escape {
            if decision.emit {
                self.out.write_all(&[byte])?;
            }
            return Ok(());
        }

        match ByteClass::of(byte) {
            ByteClass::Newline => {
                self.out.write_all(&[byte])?;
                self.line_color = self
                    .line_color
                    .advanced(self.settings.dy, self.settings.bounds);
                cursor.color = self.line_color;
                cursor.column = 0;
            }
            ByteClass::Tab => {
                self.paint(cursor, byte)?;
                while cursor.column % TAB_WIDTH != 0 {
                    cursor.color = cursor.color.advanced(self.settings.dx, self.settings.bounds);
                    cursor.column += 1;
                }
            }
            ByteClass::AsciiOrLeading => self.paint(cursor, byte)?,
            ByteClass::Continuation => self.out.write_all(&[byte])?,
        }
        Ok(())
    }

    /// Advances the character color, then writes it followed by `byte`.
    fn paint(&mut self, cursor: &mut SourceCursor, byte: u8) -> io::Result<()> {
        cursor.color = cursor.color.advanced(self.settings.dx, self.settings.bounds);
        encoder::write_color(&mut self.out, self.settings.mode, cursor.color.rgb())?;
        self.out.write_all(&[byte])?;
        cursor.column += 1;
        Ok(())
    }
}
