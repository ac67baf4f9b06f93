// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Global constants for bind9gen.
//!
//! Every fixed path, permission mode, default and user-facing message lives here.
//! Constants are organized by category for easy maintenance.

// ============================================================================
// BIND9 Filesystem Layout
// ============================================================================

/// Local configuration file that receives the zone declaration stanza
pub const BIND_NAMED_CONF_LOCAL_PATH: &str = "/etc/bind/named.conf.local";

/// Directory holding the generated zone data files
pub const BIND_ZONES_PATH: &str = "/etc/bind/zones";

/// Extension appended to the domain name to form the zone file name
pub const ZONE_FILE_EXTENSION: &str = "db";

// ============================================================================
// Permission Constants
// ============================================================================

/// Mode requested for the zones directory (umask still applies)
pub const ZONES_DIR_MODE: u32 = 0o777;

/// Mode set explicitly on the zone file after creation
pub const ZONE_FILE_MODE: u32 = 0o666;

// ============================================================================
// DNS Defaults
// ============================================================================

/// Default TTL for the zone's `$TTL` directive (1 hour)
pub const DEFAULT_ZONE_TTL_SECS: i64 = 3600;

// ============================================================================
// Template Placeholders
// ============================================================================

/// Placeholder replaced by the zone's domain name
pub const PLACEHOLDER_DOMAIN: &str = "DOMAIN";

/// Placeholder replaced by the IPv4 address of the zone's hosts
pub const PLACEHOLDER_IP: &str = "IP";

/// Placeholder replaced by the zone's default TTL
pub const PLACEHOLDER_TTL: &str = "TTL";

/// Placeholder replaced by the zones directory
pub const PLACEHOLDER_ZONES_DIR: &str = "ZONES_DIR";

// ============================================================================
// User-Facing Messages
// ============================================================================

/// Printed on every run once the arguments are parsed
pub const USAGE_EXAMPLE: &str =
    "Example of use: ./bind9gen -domain=mydomain.com -ip=192.168.1.1 -ttl=3600";

/// Printed after both files are written
pub const DONE_MESSAGE: &str = "Done.";

/// Reminder that the operator still has to enable the service
pub const ENABLE_SERVICE_HINT: &str = "Do not forget to run: systemctl enable bind9";
