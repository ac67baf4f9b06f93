// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Zone declaration and zone file rendering.
//!
//! Both templates are embedded at compile time from `templates/` and use
//! `{{NAME}}` placeholders:
//!
//! | Placeholder     | Value                                  |
//! |-----------------|----------------------------------------|
//! | `{{DOMAIN}}`    | the zone's domain name                 |
//! | `{{IP}}`        | the address of the zone's hosts        |
//! | `{{TTL}}`       | the zone's default TTL in seconds      |
//! | `{{ZONES_DIR}}` | the directory the zone file lives in   |
//!
//! Rendering is pure: nothing touches the filesystem, so a failure here never leaves
//! a half-written file behind.

use crate::constants::{PLACEHOLDER_DOMAIN, PLACEHOLDER_IP, PLACEHOLDER_TTL, PLACEHOLDER_ZONES_DIR};
use crate::errors::TemplateError;
use crate::layout::OutputLayout;
use crate::request::ZoneRequest;
use tracing::debug;

// Embed templates at compile time
pub const NAMED_CONF_LOCAL_TEMPLATE: &str = include_str!("../templates/named.conf.local.tmpl");
pub const ZONE_DB_TEMPLATE: &str = include_str!("../templates/zone.db.tmpl");

const NAMED_CONF_LOCAL_TEMPLATE_NAME: &str = "named.conf.local";
const ZONE_DB_TEMPLATE_NAME: &str = "zone.db";

const PLACEHOLDER_OPEN: &str = "{{";
const PLACEHOLDER_CLOSE: &str = "}}";

/// Substitute every `{{NAME}}` in `template` with `lookup(NAME)`.
///
/// Whitespace inside the braces is ignored, so `{{ DOMAIN }}` and `{{DOMAIN}}` are
/// equivalent. Text outside placeholders is copied unchanged.
///
/// # Arguments
///
/// * `name` - Template name, used only in error messages
/// * `template` - Template text
/// * `lookup` - Returns the value for a placeholder name, or `None` if unknown
///
/// # Errors
///
/// * [`TemplateError::UnterminatedPlaceholder`] if a `{{` has no matching `}}`
/// * [`TemplateError::UnknownPlaceholder`] if `lookup` returns `None`
///
/// # Examples
///
/// ```
/// use bind9gen::template::render;
///
/// let out = render("greeting", "hello {{WHO}}", |key| {
///     (key == "WHO").then(|| "world".to_string())
/// })
/// .unwrap();
/// assert_eq!(out, "hello world");
/// ```
pub fn render<F>(name: &str, template: &str, lookup: F) -> Result<String, TemplateError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;
    let mut offset = 0;

    while let Some(start) = rest.find(PLACEHOLDER_OPEN) {
        rendered.push_str(&rest[..start]);

        let body = &rest[start + PLACEHOLDER_OPEN.len()..];
        let end = body
            .find(PLACEHOLDER_CLOSE)
            .ok_or_else(|| TemplateError::UnterminatedPlaceholder {
                template: name.to_string(),
                offset: offset + start,
            })?;

        let key = body[..end].trim();
        let value = lookup(key).ok_or_else(|| TemplateError::UnknownPlaceholder {
            template: name.to_string(),
            name: key.to_string(),
        })?;
        rendered.push_str(&value);

        let consumed = start + PLACEHOLDER_OPEN.len() + end + PLACEHOLDER_CLOSE.len();
        rest = &rest[consumed..];
        offset += consumed;
    }

    rendered.push_str(rest);
    Ok(rendered)
}

/// The pair of templates a generation run renders.
///
/// `Default` is the embedded pair from `templates/`; the binary never uses anything
/// else. Other pairs exist so callers can exercise the error paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneTemplates<'a> {
    /// Zone declaration for `named.conf.local`
    pub declaration: &'a str,
    /// Zone data file
    pub zone_data: &'a str,
}

impl Default for ZoneTemplates<'static> {
    fn default() -> Self {
        Self {
            declaration: NAMED_CONF_LOCAL_TEMPLATE,
            zone_data: ZONE_DB_TEMPLATE,
        }
    }
}

impl ZoneTemplates<'_> {
    /// Render the `zone "<domain>" { type master; ... };` stanza for `named.conf.local`.
    ///
    /// The `file` clause points at [`OutputLayout::zone_file_path`] for the request's domain.
    ///
    /// # Errors
    ///
    /// Returns a [`TemplateError`] if the declaration template is malformed.
    pub fn render_declaration(
        &self,
        request: &ZoneRequest,
        layout: &OutputLayout,
    ) -> Result<String, TemplateError> {
        debug!(domain = request.domain(), "Rendering zone declaration");

        let zones_dir = layout.zones_dir().display().to_string();
        render(NAMED_CONF_LOCAL_TEMPLATE_NAME, self.declaration, |key| match key {
            PLACEHOLDER_DOMAIN => Some(request.domain().to_string()),
            PLACEHOLDER_ZONES_DIR => Some(zones_dir.clone()),
            _ => None,
        })
    }

    /// Render the zone data file: `$TTL`, SOA, NS, A, MX and CNAME records.
    ///
    /// # Errors
    ///
    /// Returns a [`TemplateError`] if the zone data template is malformed.
    pub fn render_zone_data(&self, request: &ZoneRequest) -> Result<String, TemplateError> {
        debug!(
            domain = request.domain(),
            ip = request.ip(),
            ttl = request.ttl(),
            "Rendering zone data"
        );

        render(ZONE_DB_TEMPLATE_NAME, self.zone_data, |key| match key {
            PLACEHOLDER_DOMAIN => Some(request.domain().to_string()),
            PLACEHOLDER_IP => Some(request.ip().to_string()),
            PLACEHOLDER_TTL => Some(request.ttl().to_string()),
            _ => None,
        })
    }
}

/// Render the embedded zone declaration. See [`ZoneTemplates::render_declaration`].
///
/// # Errors
///
/// Returns a [`TemplateError`] if the embedded template is malformed.
pub fn render_zone_declaration(
    request: &ZoneRequest,
    layout: &OutputLayout,
) -> Result<String, TemplateError> {
    ZoneTemplates::default().render_declaration(request, layout)
}

/// Render the embedded zone data. See [`ZoneTemplates::render_zone_data`].
///
/// # Errors
///
/// Returns a [`TemplateError`] if the embedded template is malformed.
pub fn render_zone_data(request: &ZoneRequest) -> Result<String, TemplateError> {
    ZoneTemplates::default().render_zone_data(request)
}
