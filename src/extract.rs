// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use std::fmt::{Display, Formatter};
use std::io::{self, BufRead};
use std::num::NonZeroUsize;
use std::path::Path;

use log::{debug, log_enabled, Level};

use crate::error::Error;
use crate::{io as lwio, token};

/// The file read when no path is given.
pub const DEFAULT_INPUT: &str = "output.txt";

/// The word extracted when no position is given.
pub const DEFAULT_POSITION: NonZeroUsize = NonZeroUsize::new(6).unwrap();

/// The outcome of looking for a word in the last line of some input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// The word at the requested position.
    Found(String),

    /// The last line had fewer words than the requested position.
    LineTooShort { words: usize, position: NonZeroUsize },

    /// The input had no lines.
    EmptyFile,
}

impl Extraction {
    /// The extracted word, if there was one.
    pub fn word(&self) -> Option<&str> {
        match self {
            Self::Found(word) => Some(word),
            _ => None,
        }
    }
}

impl Display for Extraction {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Self::Found(word) => write!(f, "{word}"),
            Self::LineTooShort { words, position } => write!(
                f,
                "Last line has only {words} word{}; no word at position {position}.",
                if *words == 1 { "" } else { "s" }
            ),
            Self::EmptyFile => write!(f, "File is empty."),
        }
    }
}

fn from_last_line(last: Option<String>, position: NonZeroUsize) -> Extraction {
    let extraction = match last {
        None => Extraction::EmptyFile,
        Some(line) => {
            if log_enabled!(Level::Debug) {
                debug!("last line has {} word(s)", token::count_words(&line));
            }
            match token::nth_word(&line, position.get()) {
                Ok(word) => Extraction::Found(word.to_string()),
                Err(words) => Extraction::LineTooShort { words, position },
            }
        }
    };
    debug!("extraction: {extraction:?}");
    extraction
}

/// Reads `reader` to the end and returns the word at `position` of the last
/// line.
pub fn extract<R: BufRead>(reader: R, position: NonZeroUsize) -> io::Result<Extraction> {
    Ok(from_last_line(lwio::last_line(reader)?, position))
}

/// Like [extract], reading from the file at `path`.
pub fn extract_file(path: &Path, position: NonZeroUsize) -> Result<Extraction, Error> {
    Ok(from_last_line(lwio::read_last_line(path)?, position))
}
