use std::fs::{self, File};
use std::path::Path;

/// Maximum size accepted for small host metadata files (64 KiB)
pub const MAX_METADATA_FILE_SIZE: u64 = 64 * 1024;

/// Checks that a path names an existing regular file that can be opened
/// for reading.
///
/// Symbolic links are followed, so a link to a regular file is accepted.
///
/// # Errors
/// Returns a description of the failure if the path does not exist, is not
/// a regular file, or cannot be opened
pub fn validate_readable_file(path: &Path) -> std::result::Result<(), String> {
    let metadata = fs::metadata(path).map_err(|e| e.to_string())?;

    if !metadata.is_file() {
        return Err(format!("{} is not a regular file", path.display()));
    }

    File::open(path).map_err(|e| e.to_string())?;

    Ok(())
}

/// Validates file size is within acceptable limits
///
/// # Arguments
/// * `file_size` - The size of the file in bytes
/// * `path` - The path to the file (for error messages)
/// * `max_size` - Maximum allowed size in bytes
pub fn validate_file_size(
    file_size: u64,
    path: &Path,
    max_size: u64,
) -> std::result::Result<(), String> {
    if file_size > max_size {
        return Err(format!(
            "{} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_validate_readable_file_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("focal.manifest");
        fs::write(&file_path, "bash\t5.0-6ubuntu1\n").unwrap();

        assert!(validate_readable_file(&file_path).is_ok());
    }

    #[test]
    fn test_validate_readable_file_nonexistent() {
        let path = PathBuf::from("/nonexistent/focal.manifest");
        assert!(validate_readable_file(&path).is_err());
    }

    #[test]
    fn test_validate_readable_file_is_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = validate_readable_file(temp_dir.path());
        assert!(result.unwrap_err().contains("not a regular file"));
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_readable_file_follows_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("target.manifest");
        let link = temp_dir.path().join("link.manifest");
        fs::write(&target, "bash\t5.0\n").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        assert!(validate_readable_file(&link).is_ok());
    }

    #[test]
    fn test_validate_file_size_within_limit() {
        let path = PathBuf::from("/etc/lsb-release");
        assert!(validate_file_size(105, &path, MAX_METADATA_FILE_SIZE).is_ok());
    }

    #[test]
    fn test_validate_file_size_exceeds_limit() {
        let path = PathBuf::from("/etc/lsb-release");
        let result = validate_file_size(MAX_METADATA_FILE_SIZE + 1, &path, MAX_METADATA_FILE_SIZE);
        assert!(result.unwrap_err().contains("too large"));
    }
}
