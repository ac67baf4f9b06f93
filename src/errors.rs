// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Error types for bind9gen.
//!
//! This module provides specialized error types for:
//! - Missing command-line input
//! - Template parsing and substitution
//! - Filesystem writes (directories, files, permissions)
//!
//! Every one of them is fatal for the binary; the types exist so that the
//! library reports *what* failed and *where* without string matching.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning command-line input into a `ZoneRequest`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Domain or IP was empty after argument parsing
    #[error("Missing input parameters for Domain and IP (missing: {missing})")]
    MissingParameters {
        /// Comma-separated names of the empty parameters (e.g. "domain, ip")
        missing: String,
    },
}

/// Errors raised while rendering one of the embedded templates.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A `{{` opened a placeholder that is never closed
    ///
    /// This is a parse failure: the template itself is malformed.
    #[error("Unterminated placeholder in template '{template}' at byte offset {offset}")]
    UnterminatedPlaceholder {
        /// Name of the template being rendered
        template: String,
        /// Byte offset of the opening `{{`
        offset: usize,
    },

    /// A placeholder names a value the renderer cannot provide
    #[error("Unknown placeholder '{name}' in template '{template}'")]
    UnknownPlaceholder {
        /// Name of the template being rendered
        template: String,
        /// Placeholder name between the braces
        name: String,
    },
}

/// Errors raised while writing generated files to disk.
///
/// Each variant carries the path involved and the underlying I/O error.
#[derive(Error, Debug)]
pub enum WriteError {
    /// Failed to create a directory (or one of its parents)
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDirectory {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed to create, truncate or write a file
    #[error("Failed to write file {}: {source}", path.display())]
    WriteFile {
        /// File that could not be written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed to change a file's permissions
    #[error("Failed to set permissions {mode:o} on {}: {source}", path.display())]
    SetPermissions {
        /// File whose mode could not be changed
        path: PathBuf,
        /// Requested mode
        mode: u32,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Any failure of [`crate::writer::generate`].
#[derive(Error, Debug)]
pub enum GenerateError {
    /// Rendering a template failed
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Writing to disk failed
    #[error(transparent)]
    Write(#[from] WriteError),
}
