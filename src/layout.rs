// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Output destinations for the generated files.

use crate::constants::{BIND_NAMED_CONF_LOCAL_PATH, BIND_ZONES_PATH, ZONE_FILE_EXTENSION};
use std::path::{Path, PathBuf};

/// Where the zone declaration and zone files are written.
///
/// `Default` is the standard Debian BIND9 layout, which is what the binary always
/// uses. Tests point both paths into a temporary directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    named_conf_path: PathBuf,
    zones_dir: PathBuf,
}

impl OutputLayout {
    #[must_use]
    pub fn new(named_conf_path: impl Into<PathBuf>, zones_dir: impl Into<PathBuf>) -> Self {
        Self {
            named_conf_path: named_conf_path.into(),
            zones_dir: zones_dir.into(),
        }
    }

    /// Path of the file receiving the zone declaration
    #[must_use]
    pub fn named_conf_path(&self) -> &Path {
        &self.named_conf_path
    }

    /// Directory holding the zone files
    #[must_use]
    pub fn zones_dir(&self) -> &Path {
        &self.zones_dir
    }

    /// Path of the zone file for `domain`: `<zones_dir>/<domain>.db`
    ///
    /// The extension is appended rather than set, so a domain with dots keeps them all.
    #[must_use]
    pub fn zone_file_path(&self, domain: &str) -> PathBuf {
        self.zones_dir.join(format!("{domain}.{ZONE_FILE_EXTENSION}"))
    }
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self::new(BIND_NAMED_CONF_LOCAL_PATH, BIND_ZONES_PATH)
    }
}
