// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::error::Error;

/// Opens `path` for buffered reading. The file is closed when the returned
/// reader is dropped.
pub fn open(path: &Path) -> Result<BufReader<File>, Error> {
    match File::open(path) {
        Ok(file) => {
            debug!("opened {}", path.display());
            Ok(BufReader::new(file))
        }
        Err(source) => {
            debug!("failed to open {}: {source}", path.display());
            Err(Error::Open {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

/// Reads `reader` to the end, keeping only the most recent line.
///
/// Returns `None` if there were no lines at all. The line terminator
/// (`\n` or `\r\n`) is stripped, and invalid UTF-8 is replaced rather than
/// rejected. Only one line is held in memory at a time.
pub fn last_line<R: BufRead>(mut reader: R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    let mut last: Option<String> = None;
    let mut lines = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        lines += 1;

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }

        let line = last.get_or_insert_with(String::new);
        line.clear();
        line.push_str(&String::from_utf8_lossy(&buf));
    }

    debug!("read {lines} line(s)");
    Ok(last)
}

/// Opens `path` and returns its last line. See [last_line].
pub fn read_last_line(path: &Path) -> Result<Option<String>, Error> {
    let reader = open(path)?;
    last_line(reader).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}
