//! File output helpers.

use std::path::Path;

use crate::error::{Error, Result};

/// Write `content` to `path`, truncating any existing file.
///
/// Outputs carry decrypted parameter values, so on Unix the file is
/// created (or reset) to owner-only permissions. The write is not atomic.
///
/// # Errors
///
/// Returns `Error::WriteFile` with the path on any I/O failure.
pub fn write_private(path: &Path, content: &str) -> Result<()> {
    write_inner(path, content).map_err(|source| Error::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(unix)]
fn write_inner(path: &Path, content: &str) -> std::io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .mode(0o600)
        .open(path)?;
    file.write_all(content.as_bytes())?;
    file.flush()?;

    // Mode only applies on creation.
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn write_inner(path: &Path, content: &str) -> std::io::Result<()> {
    std::fs::write(path, content)
}

/// Read a whole file, naming the path on failure.
pub fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| Error::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}
