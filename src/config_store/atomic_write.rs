use std::{fs, io::Write, path::Path};

use tempfile::NamedTempFile;

use crate::{AiofarmError, Result};

/// Replaces `path` with `contents` without ever exposing a truncated file.
///
/// The bytes go to a temporary file in the same directory, which is then
/// renamed over the target. An existing target keeps its permissions. Missing
/// parent directories are created.
pub fn write_atomically(path: &Path, contents: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    fs::create_dir_all(parent).map_err(|e| AiofarmError::io(e, parent))?;

    let mut staged = NamedTempFile::new_in(parent).map_err(|e| AiofarmError::io(e, parent))?;
    staged
        .write_all(contents)
        .and_then(|()| staged.as_file().sync_all())
        .map_err(|e| AiofarmError::io(e, staged.path()))?;

    if let Ok(metadata) = fs::metadata(path) {
        staged
            .as_file()
            .set_permissions(metadata.permissions())
            .map_err(|e| AiofarmError::io(e, staged.path()))?;
    }

    staged
        .persist(path)
        .map_err(|e| AiofarmError::io(e.error, path))?;

    Ok(())
}
