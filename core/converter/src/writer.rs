//! FILENAME: core/converter/src/writer.rs
//! PURPOSE: Write icon bytes next to the source, replacing any existing file.

use crate::ConvertError;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};

/// Mode requested for a freshly created icon; the process umask still applies.
#[cfg(unix)]
const NEW_FILE_MODE: u32 = 0o666;

/// Write `bytes` to `path` through a temporary sibling file.
///
/// The temporary file lives in the destination directory so the final rename
/// never crosses a filesystem. If anything fails before the rename, the
/// previous contents of `path` are left untouched and the temporary file is
/// removed when it is dropped.
///
/// An existing target keeps its permissions, and a symlink at `path` is
/// written through so the link itself survives.
pub fn write_output(path: &Path, bytes: &[u8]) -> Result<(), ConvertError> {
    let target = resolve_target(path)?;
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let existing = fs::metadata(&target).ok().map(|m| m.permissions());

    let mut tmp = create_temp(dir)?;
    if let Some(permissions) = existing {
        tmp.as_file().set_permissions(permissions)?;
    }
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(&target).map_err(|e| ConvertError::Io(e.error))?;

    log::debug!("wrote {} bytes to {}", bytes.len(), target.display());
    Ok(())
}

/// Follow a symlink at `path` to the file it points at.
fn resolve_target(path: &Path) -> Result<PathBuf, ConvertError> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => match fs::canonicalize(path) {
            Ok(real) => Ok(real),
            // Dangling link: create the file it names.
            Err(_) => {
                let link = fs::read_link(path)?;
                Ok(match path.parent() {
                    Some(parent) if link.is_relative() => parent.join(link),
                    _ => link,
                })
            }
        },
        _ => Ok(path.to_path_buf()),
    }
}

#[cfg(unix)]
fn create_temp(dir: &Path) -> Result<NamedTempFile, ConvertError> {
    use std::os::unix::fs::PermissionsExt;

    Ok(Builder::new()
        .permissions(fs::Permissions::from_mode(NEW_FILE_MODE))
        .tempfile_in(dir)?)
}

#[cfg(not(unix))]
fn create_temp(dir: &Path) -> Result<NamedTempFile, ConvertError> {
    Ok(Builder::new().tempfile_in(dir)?)
}
