//! Environment variable utilities for debench
//!
//! This module provides utilities for handling environment variables,
//! particularly the DEBENCH_DIR variable that points to the project root
//! where generated records are written.

use crate::constants::{DATA_GENERATED, DE_TIMING, DEBENCH_DIR, RECORDS};
use std::env;
use std::path::{Path, PathBuf};

/// Error type for environment variable issues
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    #[error(
        "DEBENCH_DIR environment variable is not set. Please set it to the debench project root directory (e.g., export DEBENCH_DIR=/path/to/debench)"
    )]
    DebenchDirNotSet,

    #[error("DEBENCH_DIR points to a non-existent directory: {0}")]
    DebenchDirNotFound(PathBuf),

    #[error("Failed to create directory {0}: {1}")]
    DirectoryCreationFailed(PathBuf, std::io::Error),
}

fn debench_dir_from(value: Option<String>) -> Result<PathBuf, EnvError> {
    let path = PathBuf::from(value.ok_or(EnvError::DebenchDirNotSet)?);
    if !path.exists() {
        return Err(EnvError::DebenchDirNotFound(path));
    }
    Ok(path)
}

fn ensure_dir(path: PathBuf) -> Result<PathBuf, EnvError> {
    if !path.exists() {
        std::fs::create_dir_all(&path)
            .map_err(|e| EnvError::DirectoryCreationFailed(path.clone(), e))?;
    }
    Ok(path)
}

/// Get the DEBENCH_DIR environment variable and validate it exists
///
/// # Errors
///
/// Returns an error if:
/// - DEBENCH_DIR is not set
/// - DEBENCH_DIR points to a non-existent directory
///
/// # Example
///
/// ```no_run
/// use debench_env::env_utils::get_debench_dir;
///
/// let root = get_debench_dir()?;
/// println!("debench directory: {}", root.display());
/// # Ok::<(), debench_env::env_utils::EnvError>(())
/// ```
pub fn get_debench_dir() -> Result<PathBuf, EnvError> {
    debench_dir_from(env::var(DEBENCH_DIR).ok())
}

/// Get the path to the data_generated directory below `root`, creating it if necessary
pub fn data_generated_dir_in(root: &Path) -> Result<PathBuf, EnvError> {
    ensure_dir(root.join(DATA_GENERATED))
}

/// Get the path to the records directory below `root`, creating it if necessary
pub fn records_dir_in(root: &Path) -> Result<PathBuf, EnvError> {
    ensure_dir(data_generated_dir_in(root)?.join(RECORDS))
}

/// Get the path to the records subdirectory within data_generated
///
/// This is a convenience function for the common case of writing
/// run records and summaries.
///
/// ```no_run
/// use debench_env::env_utils::get_records_dir;
///
/// let records_dir = get_records_dir()?;
/// println!("Records directory: {}", records_dir.display());
/// # Ok::<(), debench_env::env_utils::EnvError>(())
/// ```
pub fn get_records_dir() -> Result<PathBuf, EnvError> {
    records_dir_in(&get_debench_dir()?)
}

/// Whether per-phase timing of DE runs was requested through DEBENCH_DE_TIMING
pub fn timing_enabled() -> bool {
    env::var(DE_TIMING).map(|v| v != "0").unwrap_or(false)
}
