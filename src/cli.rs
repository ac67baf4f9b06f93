// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Command-line arguments.
//!
//! The tool has always been invoked with single-dash long flags
//! (`-domain=example.com -ip=10.0.0.5 -ttl=3600`). clap only understands the
//! double-dash form, so [`normalize_flags`] rewrites the known single-dash flags
//! before parsing. Both spellings are accepted.

use crate::constants::DEFAULT_ZONE_TTL_SECS;
use crate::errors::InputError;
use crate::request::ZoneRequest;
use clap::Parser;
use std::ffi::OsString;

/// Long flags that may be written with a single dash
const SINGLE_DASH_FLAGS: &[&str] = &["domain", "ip", "ttl"];

/// Generate a BIND9 zone declaration and zone file for one domain.
///
/// Writes the zone stanza to /etc/bind/named.conf.local and the zone data to
/// /etc/bind/zones/<domain>.db. Both files are overwritten on every run.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "bind9gen", version, about, long_about = None)]
pub struct Args {
    /// Domain name of the zone (e.g. mydomain.com)
    #[arg(long, default_value = "")]
    pub domain: String,

    /// IPv4 address of the name servers, the domain apex and ftp
    #[arg(long, default_value = "")]
    pub ip: String,

    /// Default TTL of the zone, in seconds (written verbatim, not range checked)
    #[arg(long, default_value_t = DEFAULT_ZONE_TTL_SECS, allow_negative_numbers = true)]
    pub ttl: i64,
}

impl Args {
    /// Parse `args` (program name first), accepting single-dash long flags.
    ///
    /// # Errors
    ///
    /// Returns the clap error for unknown flags, missing values or a TTL that is
    /// not a signed 64-bit integer. Help and version requests are also reported as
    /// clap errors, as usual.
    pub fn try_parse_normalized<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_flags(args))
    }

    /// Turn the parsed arguments into a validated request.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::MissingParameters`] if the domain or IP is empty.
    pub fn into_request(self) -> Result<ZoneRequest, InputError> {
        ZoneRequest::new(self.domain, self.ip, Some(self.ttl))
    }
}

/// Rewrite `-domain`, `-ip` and `-ttl` (with or without `=value`) to their
/// double-dash forms.
///
/// Other arguments, non UTF-8 arguments and everything after a bare `--` pass
/// through unchanged.
///
/// # Examples
///
/// ```
/// use bind9gen::cli::normalize_flags;
/// use std::ffi::OsString;
///
/// let args = normalize_flags(["bind9gen", "-domain=example.com", "-ip", "10.0.0.5"]);
/// let expected: Vec<OsString> = ["bind9gen", "--domain=example.com", "--ip", "10.0.0.5"]
///     .into_iter()
///     .map(OsString::from)
///     .collect();
/// assert_eq!(args, expected);
/// ```
pub fn normalize_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut after_terminator = false;

    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if after_terminator {
                return arg;
            }
            if arg == "--" {
                after_terminator = true;
                return arg;
            }
            match arg.to_str().and_then(single_dash_flag) {
                Some(rewritten) => OsString::from(rewritten),
                None => arg,
            }
        })
        .collect()
}

/// `-name` or `-name=value` for a known flag name, rewritten with two dashes
fn single_dash_flag(arg: &str) -> Option<String> {
    let rest = arg.strip_prefix('-')?;
    if rest.starts_with('-') {
        return None;
    }

    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    SINGLE_DASH_FLAGS
        .contains(&name)
        .then(|| format!("-{arg}"))
}
