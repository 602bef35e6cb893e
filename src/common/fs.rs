use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::error::PipelineError;

/// Create the directory if it doesn’t exist; error if a non-directory exists there.
pub(crate) fn ensure_dir_exists(path: &Path) -> Result<()> {
    if path.exists() {
        if !path.is_dir() {
            anyhow::bail!("Path exists but is not a directory: {}", path.display());
        }
    } else {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {}", path.display()))?;
    }
    Ok(())
}

/// Create the parent directory of an output file.
pub(crate) fn ensure_parent_exists(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_dir_exists(parent),
        _ => Ok(()),
    }
}

/// Error with the remedial step unless the input file exists.
pub(crate) fn require_file_exists(path: &Path, remedy: &'static str) -> Result<()> {
    if !path.is_file() {
        return Err(PipelineError::missing_input(path, remedy).into());
    }
    Ok(())
}

/// Size of a file in KiB.
pub(crate) fn file_size_kb(path: &Path) -> Result<f64> {
    let meta = fs::metadata(path)
        .with_context(|| format!("Failed to stat {}", path.display()))?;
    Ok(meta.len() as f64 / 1024.0)
}

/// Copy `from` to `to`, creating the destination directory.
pub(crate) fn copy_file(from: &Path, to: &Path) -> Result<()> {
    ensure_parent_exists(to)?;
    fs::copy(from, to)
        .with_context(|| format!("Failed to copy {} to {}", from.display(), to.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_typed() {
        let dir = tempfile::tempdir().unwrap();
        let err = require_file_exists(&dir.path().join("absent.geojson"), "setup.sh").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PipelineError>(),
            Some(PipelineError::MissingInputFile { remedy: "setup.sh", .. })
        ));
    }

    #[test]
    fn copy_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let from = dir.path().join("a.json");
        fs::write(&from, b"[]").unwrap();
        let to = dir.path().join("web/static/a.json");
        copy_file(&from, &to).unwrap();
        assert_eq!(fs::read(&to).unwrap(), b"[]");
        assert!(ensure_dir_exists(&from).is_err());
    }
}
