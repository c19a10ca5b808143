//! Input validation for pagefmt
//!
//! This module provides centralized validation for values that reach the
//! filesystem or come from user configuration.

use crate::core::error::{Error, Result};

/// Maximum file name length in bytes on common filesystems (ext4, APFS, NTFS)
const MAX_FILE_NAME_LEN: usize = 255;

/// Largest icon size accepted from configuration
pub const MAX_ICON_SIZE: u32 = 512;

/// Largest byte precision accepted from configuration
pub const MAX_BYTE_PRECISION: i32 = 20;

/// Validates a file name used when saving an asset.
///
/// Rules:
/// - Not empty, max 255 bytes
/// - Cannot be "." or ".."
/// - No path separators (`/`, `\`) so the file stays in the target directory
/// - No control characters
///
/// # Examples
///
/// ```
/// use pagefmt::validators::validate_file_name;
///
/// assert!(validate_file_name("diagram.svg").is_ok());
/// assert!(validate_file_name("../diagram.svg").is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::Validation`] if the name violates any rule.
pub fn validate_file_name(name: &str) -> Result<&str> {
    if name.is_empty() {
        return Err(Error::validation("file name", "cannot be empty"));
    }

    if name.len() > MAX_FILE_NAME_LEN {
        return Err(Error::validation(
            "file name",
            format!("too long (max {MAX_FILE_NAME_LEN} bytes)"),
        ));
    }

    if name == "." || name == ".." {
        return Err(Error::validation("file name", "invalid name"));
    }

    if name.contains(['/', '\\']) {
        return Err(Error::validation(
            "file name",
            "must not contain path separators",
        ));
    }

    if name.chars().any(char::is_control) {
        return Err(Error::validation(
            "file name",
            "contains control characters",
        ));
    }

    Ok(name)
}

/// Validates an icon size in pixels.
///
/// # Errors
///
/// Returns `Err` if size is 0 or larger than [`MAX_ICON_SIZE`].
pub fn validate_icon_size(size: u32) -> Result<u32> {
    if size == 0 || size > MAX_ICON_SIZE {
        Err(Error::validation(
            "icon size",
            format!("must be between 1 and {MAX_ICON_SIZE}"),
        ))
    } else {
        Ok(size)
    }
}

/// Validates a configured byte precision.
///
/// Negative values are accepted; the formatter treats them as zero.
///
/// # Errors
///
/// Returns `Err` if precision exceeds [`MAX_BYTE_PRECISION`].
pub fn validate_byte_precision(precision: i32) -> Result<i32> {
    if precision > MAX_BYTE_PRECISION {
        Err(Error::validation(
            "byte precision",
            format!("must be at most {MAX_BYTE_PRECISION}"),
        ))
    } else {
        Ok(precision)
    }
}
