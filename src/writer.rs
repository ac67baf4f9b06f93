// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Writing the generated configuration to disk.
//!
//! The steps run strictly in order and stop at the first failure:
//!
//! 1. Render the zone declaration and overwrite `named.conf.local`
//! 2. Create the zones directory (and its parents) if missing
//! 3. Render the zone data, create `<zones_dir>/<domain>.db`, set its mode, write it
//!
//! Nothing is rolled back. If step 3 fails, the file from step 1 stays on disk.

use crate::constants::{ZONES_DIR_MODE, ZONE_FILE_MODE};
use crate::errors::{GenerateError, WriteError};
use crate::layout::OutputLayout;
use crate::request::ZoneRequest;
use crate::template::ZoneTemplates;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Paths written by a successful [`generate`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFiles {
    /// File holding the zone declaration
    pub named_conf: PathBuf,
    /// Zone data file
    pub zone_file: PathBuf,
}

/// Generate the zone declaration and zone file for `request` under `layout`.
///
/// Both files are overwritten, never appended to.
///
/// # Errors
///
/// Returns [`GenerateError::Template`] if a template fails to render and
/// [`GenerateError::Write`] on any filesystem error. Files already written by an
/// earlier step are left in place.
pub fn generate(
    request: &ZoneRequest,
    layout: &OutputLayout,
) -> Result<GeneratedFiles, GenerateError> {
    generate_with_templates(request, layout, &ZoneTemplates::default())
}

/// [`generate`] with an explicit template pair.
///
/// Each file's text is rendered before the file is opened, so a template failure
/// leaves its destination untouched.
///
/// # Errors
///
/// Same as [`generate`].
pub fn generate_with_templates(
    request: &ZoneRequest,
    layout: &OutputLayout,
    templates: &ZoneTemplates<'_>,
) -> Result<GeneratedFiles, GenerateError> {
    info!(
        domain = request.domain(),
        ip = request.ip(),
        ttl = request.ttl(),
        "Generating BIND9 zone"
    );

    let declaration = templates.render_declaration(request, layout)?;
    write_named_conf(layout.named_conf_path(), &declaration)?;

    ensure_zones_dir(layout.zones_dir())?;

    let zone_file = layout.zone_file_path(request.domain());
    let zone_data = templates.render_zone_data(request)?;
    write_zone_file(&zone_file, &zone_data)?;

    Ok(GeneratedFiles {
        named_conf: layout.named_conf_path().to_path_buf(),
        zone_file,
    })
}

/// Overwrite `path` with the zone declaration.
///
/// # Errors
///
/// Returns [`WriteError::WriteFile`] if the file cannot be created or written.
pub fn write_named_conf(path: &Path, contents: &str) -> Result<(), WriteError> {
    info!("Writing zone declaration to {}", path.display());

    fs::write(path, contents).map_err(|source| WriteError::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Create `dir` and any missing parents.
///
/// On Unix newly created directories request [`ZONES_DIR_MODE`]; the process umask
/// still applies. Existing directories are left untouched.
///
/// # Errors
///
/// Returns [`WriteError::CreateDirectory`] if any component cannot be created.
pub fn ensure_zones_dir(dir: &Path) -> Result<(), WriteError> {
    debug!("Ensuring zones directory {} exists", dir.display());

    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(ZONES_DIR_MODE);
    }

    builder
        .create(dir)
        .map_err(|source| WriteError::CreateDirectory {
            path: dir.to_path_buf(),
            source,
        })
}

/// Create or truncate the zone file at `path`, set its mode, then write `contents`.
///
/// The mode is set explicitly after creation so the umask cannot narrow it.
///
/// # Errors
///
/// Returns [`WriteError::WriteFile`] if the file cannot be created or written and
/// [`WriteError::SetPermissions`] if its mode cannot be changed.
pub fn write_zone_file(path: &Path, contents: &str) -> Result<(), WriteError> {
    info!("Writing zone file to {}", path.display());

    let write_failed = |source| WriteError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(write_failed)?;
    set_zone_file_mode(&file, path)?;
    file.write_all(contents.as_bytes()).map_err(write_failed)?;
    file.flush().map_err(write_failed)
}

#[cfg(unix)]
fn set_zone_file_mode(file: &File, path: &Path) -> Result<(), WriteError> {
    use std::os::unix::fs::PermissionsExt;

    file.set_permissions(fs::Permissions::from_mode(ZONE_FILE_MODE))
        .map_err(|source| WriteError::SetPermissions {
            path: path.to_path_buf(),
            mode: ZONE_FILE_MODE,
            source,
        })
}

#[cfg(not(unix))]
fn set_zone_file_mode(_file: &File, path: &Path) -> Result<(), WriteError> {
    debug!(
        "Skipping mode {:o} on {}: not supported on this platform",
        ZONE_FILE_MODE,
        path.display()
    );
    Ok(())
}
