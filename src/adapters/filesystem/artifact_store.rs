use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ArtifactStore;

/// Writes artifacts to disk through a sibling temp file and a rename.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemArtifactStore;

impl FilesystemArtifactStore {
    fn staging_path(path: &Path) -> PathBuf {
        let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        path.with_file_name(format!(".{}.partial", name))
    }
}

impl ArtifactStore for FilesystemArtifactStore {
    fn prepare_dir(&self, dir: &Path) -> Result<(), AppError> {
        fs::create_dir_all(dir).map_err(|err| AppError::ArtifactWrite {
            path: dir.display().to_string(),
            reason: err.to_string(),
        })
    }

    fn write_text(&self, path: &Path, content: &str) -> Result<(), AppError> {
        let staging = Self::staging_path(path);
        let result = fs::File::create(&staging)
            .and_then(|mut file| {
                file.write_all(content.as_bytes())?;
                file.sync_all()
            })
            .and_then(|()| fs::rename(&staging, path));

        if let Err(err) = result {
            let _ = fs::remove_file(&staging);
            return Err(AppError::ArtifactWrite {
                path: path.display().to_string(),
                reason: err.to_string(),
            });
        }
        Ok(())
    }
}
