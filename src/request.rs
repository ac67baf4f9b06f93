// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! The validated input of a single generation run.

use crate::constants::DEFAULT_ZONE_TTL_SECS;
use crate::errors::InputError;

/// Domain, IP and TTL for the one zone generated per run.
///
/// Fields are private: once built, a request cannot be changed. The domain and IP
/// are only checked for emptiness; their syntax is passed through verbatim.
///
/// # Examples
///
/// ```
/// use bind9gen::request::ZoneRequest;
///
/// let request = ZoneRequest::new("example.com", "10.0.0.5", None).unwrap();
/// assert_eq!(request.ttl(), 3600);
///
/// assert!(ZoneRequest::new("", "10.0.0.5", None).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneRequest {
    domain: String,
    ip: String,
    ttl: i64,
}

impl ZoneRequest {
    /// Build a request, falling back to [`DEFAULT_ZONE_TTL_SECS`] when `ttl` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::MissingParameters`] if the domain or the IP is empty.
    pub fn new(
        domain: impl Into<String>,
        ip: impl Into<String>,
        ttl: Option<i64>,
    ) -> Result<Self, InputError> {
        let domain = domain.into();
        let ip = ip.into();

        let missing: Vec<&str> = [("domain", domain.is_empty()), ("ip", ip.is_empty())]
            .into_iter()
            .filter_map(|(name, empty)| empty.then_some(name))
            .collect();

        if !missing.is_empty() {
            return Err(InputError::MissingParameters {
                missing: missing.join(", "),
            });
        }

        Ok(Self {
            domain,
            ip,
            ttl: ttl.unwrap_or(DEFAULT_ZONE_TTL_SECS),
        })
    }

    /// Zone name, e.g. `example.com`
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Address bound to the name servers, the apex and `ftp`
    #[must_use]
    pub fn ip(&self) -> &str {
        &self.ip
    }

    /// Default TTL in seconds
    #[must_use]
    pub fn ttl(&self) -> i64 {
        self.ttl
    }
}
