use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

/// Writes `bytes` to a sibling temp file and renames it over `path`, creating parent
/// directories first. A failed write never leaves a partial artifact behind.
pub fn write_atomically(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let parent_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let mut temp_file = NamedTempFile::new_in(parent_dir)?;
    temp_file.write_all(bytes)?;
    temp_file.as_file().sync_all()?;
    temp_file.persist(path)?;

    info!(path = %path.display(), bytes = bytes.len(), "artifact written");
    Ok(())
}
