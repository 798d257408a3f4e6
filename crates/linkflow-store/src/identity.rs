//! Registry of social-login identifiers this deployment has seen.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use tracing::warn;

/// Persisted uid → first-seen timestamp (RFC 3339) map.
///
/// Backs the `isNewUser` flag in the auth response: a uid is "new" exactly
/// once, on the first login that records it.
pub struct IdentityRegistry {
    identities_file: PathBuf,
    seen: RwLock<BTreeMap<String, String>>,
}

impl IdentityRegistry {
    pub fn open(identities_file: &Path) -> Self {
        let seen = match std::fs::read_to_string(identities_file) {
            Ok(data) => serde_json::from_str(&data).unwrap_or_default(),
            Err(_) => BTreeMap::new(),
        };

        Self {
            identities_file: identities_file.to_path_buf(),
            seen: RwLock::new(seen),
        }
    }

    /// Record a login for `uid`. Returns `true` when the uid was not
    /// previously known.
    pub fn record(&self, uid: &str) -> bool {
        let mut seen = self.seen.write();
        if seen.contains_key(uid) {
            return false;
        }
        seen.insert(uid.to_string(), chrono::Utc::now().to_rfc3339());
        drop(seen);
        self.save();
        true
    }

    /// Whether `uid` has logged in before.
    pub fn is_known(&self, uid: &str) -> bool {
        self.seen.read().contains_key(uid)
    }

    fn save(&self) {
        let seen = self.seen.read();
        match serde_json::to_string_pretty(&*seen) {
            Ok(data) => {
                if let Err(e) = std::fs::write(&self.identities_file, data) {
                    warn!(error = %e, "failed to persist identity registry");
                }
            }
            Err(e) => warn!(error = %e, "failed to serialize identity registry"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_record_is_new_second_is_not() {
        let dir = tempfile::tempdir().unwrap();
        let registry = IdentityRegistry::open(&dir.path().join("identities.json"));

        assert!(registry.record("kakao_12345"));
        assert!(!registry.record("kakao_12345"));
        assert!(registry.is_known("kakao_12345"));
        assert!(!registry.is_known("naver_9999"));
    }

    #[test]
    fn registry_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("identities.json");

        IdentityRegistry::open(&path).record("naver_777");

        let reopened = IdentityRegistry::open(&path);
        assert!(reopened.is_known("naver_777"));
        assert!(!reopened.record("naver_777"));
    }
}
