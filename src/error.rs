// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failures while getting at the contents of the input file.
///
/// The display strings are the exact diagnostics printed by the `lastword`
/// binary. The underlying [io::Error] is kept as the source.
#[derive(Debug, Error)]
pub enum Error {
    /// The file could not be opened for reading (missing, permissions, a
    /// directory, ...).
    #[error("Couldn't open file.")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file was opened but reading it failed part way through.
    #[error("Couldn't read file.")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// The path that was being read when the error occurred.
    pub fn path(&self) -> &Path {
        match self {
            Self::Open { path, .. } | Self::Read { path, .. } => path,
        }
    }
}
