//! Data-directory resolution.

use std::path::PathBuf;

/// Resolve the Wayfarer data directory.
///
/// `WAYFARER_DATA_DIR` wins when set; otherwise `~/.wayfarer`, falling back
/// to a relative `.wayfarer` when no home directory can be determined.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("WAYFARER_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".wayfarer");
    }

    PathBuf::from(".wayfarer")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_data_dir_from_env() {
        // SAFETY: This test is single-threaded and restores the env var immediately.
        unsafe {
            std::env::set_var("WAYFARER_DATA_DIR", "/tmp/test-wayfarer");
        }
        let dir = resolve_data_dir();
        assert_eq!(dir, PathBuf::from("/tmp/test-wayfarer"));
        unsafe {
            std::env::remove_var("WAYFARER_DATA_DIR");
        }
    }
}
