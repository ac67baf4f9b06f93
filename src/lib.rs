// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! # bind9gen - BIND9 zone generator
//!
//! Generates the two files BIND9 needs to serve a new primary zone:
//!
//! - a `zone "<domain>" { type master; ... };` stanza in `named.conf.local`
//! - a zone data file `<zones_dir>/<domain>.db` with SOA, NS, A, MX and CNAME records
//!
//! ## Modules
//!
//! - [`cli`] - Command-line arguments
//! - [`request`] - The validated domain/IP/TTL input
//! - [`layout`] - Output destinations
//! - [`template`] - Zone declaration and zone file rendering
//! - [`writer`] - Writing the rendered files to disk
//! - [`errors`] - Error types
//! - [`constants`] - Fixed paths, modes, defaults and messages
//!
//! ## Example
//!
//! ```rust,no_run
//! use bind9gen::{layout::OutputLayout, request::ZoneRequest, writer::generate};
//!
//! # fn example() -> anyhow::Result<()> {
//! let request = ZoneRequest::new("example.com", "10.0.0.5", Some(3600))?;
//! let files = generate(&request, &OutputLayout::default())?;
//! println!("wrote {}", files.zone_file.display());
//! # Ok(())
//! # }
//! ```
//!
//! The server is not reloaded; run `systemctl enable bind9` (or reload it) afterwards.

pub mod cli;
pub mod constants;
pub mod errors;
pub mod layout;
pub mod request;
pub mod template;
pub mod writer;

#[cfg(test)]
mod layout_tests;
#[cfg(test)]
mod template_tests;
