//! File system checks for the trail map input.
//!
//! Validation failures are logged through the parent `app` module's
//! verbose macros before being surfaced as `AppError`, so the run log
//! records why an input was rejected.

use std::path::Path;

// Use super:: for macros defined in app/mod.rs
use super::error::AppError;
use super::verbose_eprintln;

/// Validates that the trail map path exists and points to a regular file.
///
/// # Arguments
/// * `trail_file_path` - Path to the trail map file.
/// * `quiet_mode` - A boolean indicating whether to suppress verbose logging.
///
/// # Errors
/// Returns `AppError::General` if the path is invalid (not found or not a
/// file).
pub fn validate_trail_file(trail_file_path: &Path, quiet_mode: bool) -> Result<(), AppError> {
    if !trail_file_path.exists() {
        let error_msg = format!("File not found: {}", trail_file_path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::General(error_msg));
    }
    if !trail_file_path.is_file() {
        let error_msg = format!("Path is not a file: {}", trail_file_path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::General(error_msg));
    }
    Ok(())
}
