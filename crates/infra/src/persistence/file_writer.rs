// crates/infra/src/persistence/file_writer.rs
use std::{io::Write, path::Path};

use mc_multiplicity_shared_kernel::{InfraResult, InfrastructureError};
use tempfile::NamedTempFile;

/// Helper utilities for writing selection reports.
pub struct FileWriter;

impl FileWriter {
    /// Atomically write `data` to `path` via a temp file in the same directory.
    ///
    /// The temp file is removed whenever the write or the final rename fails.
    pub fn atomic_write<P: AsRef<Path>>(path: P, data: &[u8]) -> InfraResult<()> {
        let path = path.as_ref();
        Self::write_via_temp(path, data).map_err(|source| InfrastructureError::OutputError {
            message: format!("failed to write '{}'", path.display()),
            source: Some(Box::new(source)),
        })
    }

    fn write_via_temp(path: &Path, data: &[u8]) -> std::io::Result<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(parent)?;
        tmp.write_all(data)?;
        tmp.flush()?;
        let _ = tmp.as_file().sync_all();

        tmp.persist(path).map_err(|err| err.error)?;

        #[cfg(unix)]
        {
            if let Ok(dir) = std::fs::File::open(parent) {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }
}
