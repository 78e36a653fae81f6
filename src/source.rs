// src/source.rs

//! Input sources named on the command line, and the seam that opens them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

/// Name that selects standard input.
const STDIN_NAME: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    pub fn from_path(path: PathBuf) -> Self {
        if path.as_os_str() == STDIN_NAME {
            InputSource::Stdin
        } else {
            InputSource::File(path)
        }
    }

    /// Maps command-line operands to sources. No operands means stdin.
    pub fn from_operands(operands: Vec<PathBuf>) -> Vec<Self> {
        if operands.is_empty() {
            return vec![InputSource::Stdin];
        }
        operands.into_iter().map(InputSource::from_path).collect()
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => f.write_str(STDIN_NAME),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Opens sources for reading. A trait so the run loop can be driven from
/// in-memory inputs in tests.
pub trait SourceOpener {
    fn open(&mut self, source: &InputSource) -> io::Result<Box<dyn Read>>;
}

/// Opens files from the filesystem and `-` as the process's stdin.
#[derive(Debug, Default)]
pub struct FsOpener;

impl SourceOpener for FsOpener {
    fn open(&mut self, source: &InputSource) -> io::Result<Box<dyn Read>> {
        match source {
            InputSource::Stdin => Ok(Box::new(io::stdin())),
            InputSource::File(path) => Ok(Box::new(File::open(path)?)),
        }
    }
}
