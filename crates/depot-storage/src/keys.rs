//! Shared key generation for storage backends.
//!
//! The folder hierarchy is a naming convention over a flat key namespace, not
//! a stored entity. Every backend derives keys through these functions so the
//! prefix layout stays identical regardless of where objects land.

use std::path::Path;
use uuid::Uuid;

/// Generate a unique key for a top-level upload: `{uuid}-{original_name}`.
///
/// The random prefix makes collisions between concurrent uploads of the same
/// filename practically impossible; no coordination is performed.
pub fn upload_key(original_name: &str) -> String {
    format!("{}-{}", Uuid::new_v4(), original_name)
}

/// Canonical folder prefix: strips any trailing separators from `folder_name`
/// and appends exactly one. Idempotent on its own output.
pub fn folder_key(folder_name: &str) -> String {
    format!("{}/", folder_name.trim_end_matches('/'))
}

/// Generate a unique key for an upload into a folder:
/// `{folder_name}/{uuid}{.ext}`.
///
/// Unlike [`upload_key`], the original base filename is discarded and only
/// its extension survives.
pub fn folder_upload_key(folder_name: &str, original_name: &str) -> String {
    let prefix = folder_key(folder_name);
    match Path::new(original_name).extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}{}.{}", prefix, Uuid::new_v4(), ext),
        None => format!("{}{}", prefix, Uuid::new_v4()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_key_keeps_full_original_name() {
        let key = upload_key("report final.txt");
        assert!(key.ends_with("-report final.txt"));
        // 36 hyphenated UUID chars plus the separator
        assert_eq!(key.len(), 36 + 1 + "report final.txt".len());
    }

    #[test]
    fn upload_keys_are_unique() {
        assert_ne!(upload_key("a.txt"), upload_key("a.txt"));
    }

    #[test]
    fn folder_key_is_idempotent() {
        for name in ["reports", "reports/", "reports///"] {
            let once = folder_key(name);
            assert_eq!(once, "reports/");
            assert_eq!(folder_key(&once), once);
        }
    }

    #[test]
    fn folder_upload_key_discards_base_name() {
        let key = folder_upload_key("reports/", "summer vacation.png");
        assert!(key.starts_with("reports/"));
        assert!(key.ends_with(".png"));
        assert!(!key.contains("vacation"));
    }

    #[test]
    fn folder_upload_key_without_extension() {
        let key = folder_upload_key("reports", "README");
        assert!(key.starts_with("reports/"));
        assert!(!key.ends_with('/'));
        assert!(!key.contains('.'));
    }
}
