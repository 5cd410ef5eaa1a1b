// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

//! Whitespace tokenizing for a single line.
//!
//! A word is a maximal run of characters for which [char::is_whitespace] is
//! false. Words are never collected; callers step through them with [word]
//! and keep only what they need.
//!
//! ```rust
//! use lastword::token;
//!
//! assert_eq!(Ok("FOUND"), token::nth_word("a b c d e FOUND g", 6));
//! assert_eq!(Err(3), token::nth_word("a b c", 6));
//! ```

use log::trace;
use winnow::combinator::preceded;
use winnow::token::{take_till, take_while};
use winnow::ModalResult;
use winnow::Parser;

fn is_space(c: char) -> bool {
    c.is_whitespace()
}

/// Parse the next word, skipping any whitespace in front of it.
///
/// Backtracks when only whitespace (or nothing) remains.
pub fn word<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    preceded(take_while(0.., is_space), take_till(1.., is_space)).parse_next(input)
}

/// Returns the word at 1-indexed `position` of `line`.
///
/// Words before `position` are read and dropped. If the line runs out
/// first, the number of words it did have is returned as the error. A
/// `position` of zero is treated as "no word" and yields `Err(0)`.
pub fn nth_word(line: &str, position: usize) -> Result<&str, usize> {
    if position == 0 {
        return Err(0);
    }

    let mut input = line;
    for skipped in 0..position - 1 {
        match word.parse_next(&mut input) {
            Ok(w) => trace!("skipping word {}: {:?}", skipped + 1, w),
            Err(_) => return Err(skipped),
        }
    }

    word.parse_next(&mut input).map_err(|_| position - 1)
}

/// Count the words in `line`.
pub fn count_words(line: &str) -> usize {
    let mut input = line;
    let mut count = 0;
    while word.parse_next(&mut input).is_ok() {
        count += 1;
    }
    count
}
