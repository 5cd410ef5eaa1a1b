// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

//! Last Line Word Extractor
//!
//! This crate reads a text file line by line, keeps only the last line, and
//! picks a single whitespace-delimited word out of it. By default the file
//! is `output.txt` and the word is the sixth one.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use lastword::extract::{self, Extraction, DEFAULT_POSITION};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     match extract::extract_file(Path::new("output.txt"), DEFAULT_POSITION)? {
//!         Extraction::Found(word) => print!("{word}"),
//!         other => eprintln!("{other}"),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Any [BufRead](std::io::BufRead) works as input:
//!
//! ```rust
//! use std::io::Cursor;
//! use lastword::extract::{extract, Extraction, DEFAULT_POSITION};
//!
//! let input = Cursor::new("x1 x2 x3 x4 x5 x6 x7\nalpha beta gamma delta epsilon ZETA eta");
//! let found = extract(input, DEFAULT_POSITION).unwrap();
//! assert_eq!(Extraction::Found("ZETA".into()), found);
//! ```
//!
//! # Outcomes
//!
//! | Input                              | Result                            |
//! |------------------------------------|-----------------------------------|
//! | last line has `>= position` words  | [Extraction::Found]               |
//! | last line has fewer words          | [Extraction::LineTooShort]        |
//! | no lines at all                    | [Extraction::EmptyFile]           |
//! | file can't be opened               | [Error::Open]                     |
//! | file fails mid-read                | [Error::Read]                     |
//!
//! A trailing line terminator does not start a new line, so `"a\nb\n"` has
//! `b` as its last line. A trailing blank line (`"a\n\n"`) is an empty last
//! line.

pub mod error;
pub mod extract;
pub mod io;
pub mod token;

pub use error::Error;
pub use extract::Extraction;
