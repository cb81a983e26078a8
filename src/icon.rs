use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{StencilError, StencilResult};
use crate::settings::StencilConfig;
use crate::stencil;

/// Reads `source`, builds the stencil and returns the encoded PNG bytes.
pub fn process_icon(source: &Path, cfg: &StencilConfig) -> StencilResult<Vec<u8>> {
    let bytes = std::fs::read(source).map_err(|e| StencilError::io(source, e))?;
    debug!(path = %source.display(), len = bytes.len(), "read source icon");
    stencil::generate(&bytes, cfg)
}

/// Writes `bytes` to `dest`, creating missing parent directories.
///
/// The data goes to a temporary file next to `dest` that is renamed into
/// place, so `dest` never holds a partial image.
pub fn write_icon(dest: &Path, bytes: &[u8]) -> StencilResult<()> {
    let parent = dest
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    std::fs::create_dir_all(parent).map_err(|e| StencilError::io(parent, e))?;

    let mut tmp = NamedTempFile::new_in(parent).map_err(|e| StencilError::io(parent, e))?;
    tmp.write_all(bytes)
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| StencilError::io(tmp.path(), e))?;
    tmp.persist(dest)
        .map_err(|e| StencilError::io(dest, e.error))?;
    Ok(())
}

/// Full file-to-file run. Nothing is written unless the pipeline succeeds.
pub fn generate_file(source: &Path, dest: &Path, cfg: &StencilConfig) -> StencilResult<Vec<u8>> {
    let bytes = process_icon(source, cfg)?;
    write_icon(dest, &bytes)?;
    Ok(bytes)
}

pub fn hash_bytes(bytes: &[u8]) -> String {
    blake3::hash(bytes).to_hex().to_string()
}

/// Hash of a file's contents, or `None` if it does not exist.
pub fn hash_file(path: &Path) -> StencilResult<Option<String>> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(Some(hash_bytes(&bytes))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(StencilError::io(path, e)),
    }
}
