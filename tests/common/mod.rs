// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// A scratch working directory, optionally holding an `output.txt`.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    /// An empty directory with no `output.txt`.
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().expect("tempdir"),
        }
    }

    /// A directory whose `output.txt` holds `contents`.
    pub fn with_output(contents: &str) -> Self {
        let ws = Self::empty();
        ws.write("output.txt", contents);
        ws
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("write fixture");
        path
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
