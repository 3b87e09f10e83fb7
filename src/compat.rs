//! Small platform helpers used next to generated files.

use std::env;
use std::fs::File;
use std::path::{Path, PathBuf};

use path_clean::PathClean;
use tracing::trace;

use crate::Result;

/// Make `filename` absolute and fold away `.` and `..` components.
///
/// Relative names are resolved against `relative_to`, or against the current
/// directory when it is `None` (a relative `relative_to` is itself resolved
/// against the current directory). The filesystem is never consulted, so
/// symlinks are left alone and the path need not exist.
pub fn canonicalize_filename(
    filename: impl AsRef<Path>,
    relative_to: Option<&Path>,
) -> Result<PathBuf> {
    let filename = filename.as_ref();
    if filename.is_absolute() {
        return Ok(filename.clean());
    }

    let base = match relative_to {
        Some(base) if base.is_absolute() => base.to_path_buf(),
        Some(base) => env::current_dir()?.join(base),
        None => env::current_dir()?,
    };
    Ok(base.join(filename).clean())
}

/// Flush file data and metadata to stable storage.
pub fn fsync(file: &File) -> Result<()> {
    trace!("fsync");
    file.sync_all()?;
    Ok(())
}
