//! ROS2 bag directory detection.

use std::fs;
use std::path::{Path, PathBuf};

/// Name of the sidecar file rosbag2 writes into every bag directory.
pub const METADATA_FILE_NAME: &str = "metadata.yaml";

/// Data file extensions written by the mcap and sqlite3 storage plugins.
const DATA_EXTENSIONS: &[&str] = &["mcap", "db3"];

/// True when `path` names a rosbag2 recording directory: a directory
/// holding a `metadata.yaml` sidecar plus at least one `.mcap` or
/// `.db3` data file.
///
/// Detection is best-effort; any filesystem error yields false rather
/// than an error.
pub fn is_bag_directory(path: &Path) -> bool {
    if !path.is_dir() || !path.join(METADATA_FILE_NAME).is_file() {
        return false;
    }

    let Ok(entries) = fs::read_dir(path) else {
        return false;
    };

    entries.flatten().any(|entry| {
        entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| DATA_EXTENSIONS.contains(&ext))
    })
}

/// The sidecar path inside `path`, if `path` is a bag directory.
pub fn metadata_path(path: &Path) -> Option<PathBuf> {
    is_bag_directory(path).then(|| path.join(METADATA_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs::File;

    use anyhow::Result;
    use tempfile::TempDir;

    #[test]
    fn test_detects_mcap_and_db3_bags() -> Result<()> {
        for data_file in ["recording_0.mcap", "recording_0.db3"] {
            let dir = TempDir::new()?;
            File::create(dir.path().join(METADATA_FILE_NAME))?;
            File::create(dir.path().join(data_file))?;

            assert!(is_bag_directory(dir.path()));
            assert_eq!(
                metadata_path(dir.path()),
                Some(dir.path().join(METADATA_FILE_NAME))
            );
        }

        Ok(())
    }

    #[test]
    fn test_rejects_directory_without_sidecar() -> Result<()> {
        let dir = TempDir::new()?;
        File::create(dir.path().join("recording_0.mcap"))?;

        assert!(!is_bag_directory(dir.path()));
        assert_eq!(metadata_path(dir.path()), None);

        Ok(())
    }

    #[test]
    fn test_rejects_sidecar_without_data_files() -> Result<()> {
        let dir = TempDir::new()?;
        File::create(dir.path().join(METADATA_FILE_NAME))?;
        File::create(dir.path().join("notes.txt"))?;

        assert!(!is_bag_directory(dir.path()));

        Ok(())
    }

    #[test]
    fn test_rejects_plain_file_and_missing_path() -> Result<()> {
        let dir = TempDir::new()?;
        let file = dir.path().join("recording_0.mcap");
        File::create(&file)?;

        assert!(!is_bag_directory(&file));
        assert!(!is_bag_directory(&dir.path().join("does-not-exist")));

        Ok(())
    }
}
