//! Path helpers for the MediMate data directory.
//!
//! All durable state (accounts, current user, history, feedback) lives as
//! JSON files under a single root. The root can be overridden with
//! `$MEDIMATE_DATA_DIR`, which is also how tests isolate themselves.

use std::path::PathBuf;

/// Get the data root directory.
///
/// Priority:
/// 1. $MEDIMATE_DATA_DIR (explicit override)
/// 2. platform data dir, e.g. ~/.local/share/medimate
/// 3. ./medimate-data (fallback when no home directory is known)
pub fn data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("MEDIMATE_DATA_DIR") {
        return PathBuf::from(dir);
    }
    match dirs::data_dir() {
        Some(base) => base.join("medimate"),
        None => PathBuf::from("medimate-data"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test because both cases touch the same process-wide env var.
    #[test]
    fn test_data_dir_resolution() {
        std::env::set_var("MEDIMATE_DATA_DIR", "/tmp/medimate-test");
        assert_eq!(data_dir(), PathBuf::from("/tmp/medimate-test"));

        std::env::remove_var("MEDIMATE_DATA_DIR");
        assert!(!data_dir().as_os_str().is_empty());
    }
}
