//! Whole-collection roster persistence.

use std::path::{Path, PathBuf};

use linkflow_core::{Error, Member, Result};
use linkflow_ingest::parse_roster;
use parking_lot::RwLock;
use tracing::{info, warn};

/// Roster shipped with the binary, used when no stored roster exists.
const DEFAULT_ROSTER_CSV: &str = include_str!("../assets/default_roster.csv");

/// File-backed member roster.
///
/// The collection is cached in memory behind a lock; reads never touch disk
/// after construction, and every write rewrites the full JSON document.
pub struct RosterStore {
    roster_file: PathBuf,
    members: RwLock<Vec<Member>>,
}

impl RosterStore {
    /// Open the store, loading the roster file or falling back to the
    /// bundled default dataset.
    pub fn open(roster_file: &Path) -> Self {
        let members = match std::fs::read_to_string(roster_file) {
            Ok(data) => match serde_json::from_str::<Vec<Member>>(&data) {
                Ok(members) => {
                    info!(count = members.len(), "roster loaded from disk");
                    members
                }
                Err(e) => {
                    warn!(error = %e, "roster file unreadable, using bundled dataset");
                    Self::default_members()
                }
            },
            Err(_) => {
                info!("no roster file, using bundled dataset");
                Self::default_members()
            }
        };

        Self {
            roster_file: roster_file.to_path_buf(),
            members: RwLock::new(members),
        }
    }

    fn default_members() -> Vec<Member> {
        parse_roster(DEFAULT_ROSTER_CSV).members
    }

    /// Snapshot of the current roster.
    pub fn list(&self) -> Vec<Member> {
        self.members.read().clone()
    }

    /// Number of members currently stored.
    pub fn count(&self) -> usize {
        self.members.read().len()
    }

    /// Overwrite the whole collection. No partial update exists on purpose.
    pub fn replace_all(&self, members: Vec<Member>) -> Result<usize> {
        let count = members.len();
        self.persist(&members)?;
        *self.members.write() = members;
        info!(count, "roster replaced");
        Ok(count)
    }

    /// Reset the store to the bundled default dataset.
    pub fn reseed(&self) -> Result<usize> {
        self.replace_all(Self::default_members())
    }

    // Write-to-temp then rename, so a crash mid-write never leaves a
    // truncated roster behind.
    fn persist(&self, members: &[Member]) -> Result<()> {
        let data = serde_json::to_string_pretty(members)?;
        let tmp = self.roster_file.with_extension("json.tmp");
        std::fs::write(&tmp, data)
            .map_err(|e| Error::Storage(format!("write roster: {e}")))?;
        std::fs::rename(&tmp, &self.roster_file)
            .map_err(|e| Error::Storage(format!("commit roster: {e}")))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_bundled_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let store = RosterStore::open(&dir.path().join("members.json"));
        let members = store.list();
        assert!(!members.is_empty());
        // Bundled rows are fully formed: ids, tags, placeholder photos.
        assert_eq!(members[0].id, "member_1");
        assert!(members[0].photo_url.is_some());
    }

    #[test]
    fn corrupt_file_falls_back_to_bundled_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("members.json");
        std::fs::write(&path, "not json at all").unwrap();
        let store = RosterStore::open(&path);
        assert!(store.count() > 0);
    }

    #[test]
    fn replace_all_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("members.json");

        let store = RosterStore::open(&path);
        let mut members = store.list();
        members.truncate(2);
        let count = store.replace_all(members.clone()).unwrap();
        assert_eq!(count, 2);

        // A fresh store reads back exactly what was written.
        let reopened = RosterStore::open(&path);
        assert_eq!(reopened.list(), members);
    }

    #[test]
    fn persist_failure_surfaces_as_storage_error() {
        // Roster file inside a directory that does not exist: the temp-file
        // write fails and the in-memory roster stays untouched.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("members.json");

        let store = RosterStore::open(&path);
        let before = store.count();
        let err = store.replace_all(Vec::new()).unwrap_err();
        assert!(matches!(err, Error::Storage(_)));
        assert_eq!(store.count(), before);
    }

    #[test]
    fn reseed_restores_the_default_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("members.json");

        let store = RosterStore::open(&path);
        store.replace_all(Vec::new()).unwrap();
        assert_eq!(store.count(), 0);

        let count = store.reseed().unwrap();
        assert!(count > 0);
        assert_eq!(store.count(), count);
    }
}
