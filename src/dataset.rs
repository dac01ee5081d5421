//! Relocates a downloaded dataset's files into a working directory.

use log::info;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Dataset path '{0}' is not a directory")]
    NotADirectory(PathBuf),

    #[error("Failed to read dataset directory '{0}'")]
    ReadDir(PathBuf, #[source] std::io::Error),

    #[error("Failed to move '{from}' to '{to}'")]
    Move {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to resolve the destination directory")]
    Destination(#[source] std::io::Error),
}

/// Moves every entry of `source` into `destination`, returning the new
/// paths in the order the directory listing yielded them.
///
/// Existing files at the destination are overwritten, matching rename
/// semantics.
pub async fn relocate_files(
    source: &Path,
    destination: &Path,
) -> Result<Vec<PathBuf>, DatasetError> {
    let metadata = fs::metadata(source)
        .await
        .map_err(|e| DatasetError::ReadDir(source.to_path_buf(), e))?;
    if !metadata.is_dir() {
        return Err(DatasetError::NotADirectory(source.to_path_buf()));
    }

    let mut entries = fs::read_dir(source)
        .await
        .map_err(|e| DatasetError::ReadDir(source.to_path_buf(), e))?;

    let mut moved = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| DatasetError::ReadDir(source.to_path_buf(), e))?
    {
        let from = entry.path();
        let to = destination.join(entry.file_name());
        move_entry(&from, &to).await.map_err(|e| DatasetError::Move {
            from: from.clone(),
            to: to.clone(),
            source: e,
        })?;
        info!("Moved: {}", entry.file_name().to_string_lossy());
        moved.push(to);
    }
    Ok(moved)
}

async fn move_entry(from: &Path, to: &Path) -> Result<(), std::io::Error> {
    match fs::rename(from, to).await {
        Ok(()) => Ok(()),
        // Rename cannot cross filesystems; copy and remove instead.
        Err(_) => {
            fs::copy(from, to).await?;
            fs::remove_file(from).await
        }
    }
}
