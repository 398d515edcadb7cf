use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use bakeshop::catalog::{CakeBase, Decoration, Filling, Frosting};
use bakeshop::{PlayerProgress, ProgressStore, SnapshotError};

/// Keeps the save file as pretty-printed JSON, creating the data
/// directory on first write.
pub(crate) struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ProgressStore for JsonFileStore {
    fn load(&self) -> Result<Option<PlayerProgress>, SnapshotError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&self.path)?;
        let progress =
            serde_json::from_str(&raw).map_err(|err| SnapshotError::Malformed(err.to_string()))?;
        Ok(Some(progress))
    }

    fn save(&self, progress: &PlayerProgress) -> Result<(), SnapshotError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let raw = serde_json::to_string_pretty(progress)
            .map_err(|err| SnapshotError::Malformed(err.to_string()))?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// Holds progress for the life of the process, so demo runs never touch
/// the player's real save file.
#[derive(Default, Clone)]
pub(crate) struct InMemoryStore {
    slot: Arc<Mutex<Option<PlayerProgress>>>,
}

impl ProgressStore for InMemoryStore {
    fn load(&self) -> Result<Option<PlayerProgress>, SnapshotError> {
        let guard = self.slot.lock().expect("progress mutex poisoned");
        Ok(guard.clone())
    }

    fn save(&self, progress: &PlayerProgress) -> Result<(), SnapshotError> {
        let mut guard = self.slot.lock().expect("progress mutex poisoned");
        *guard = Some(progress.clone());
        Ok(())
    }
}

pub(crate) fn parse_base(raw: &str) -> Result<CakeBase, String> {
    raw.parse::<CakeBase>().map_err(|err| err.to_string())
}

pub(crate) fn parse_filling(raw: &str) -> Result<Filling, String> {
    raw.parse::<Filling>().map_err(|err| err.to_string())
}

pub(crate) fn parse_frosting(raw: &str) -> Result<Frosting, String> {
    raw.parse::<Frosting>().map_err(|err| err.to_string())
}

pub(crate) fn parse_decoration(raw: &str) -> Result<Decoration, String> {
    raw.parse::<Decoration>().map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_round_trips_a_snapshot() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = JsonFileStore::new(dir.path().join("saves").join("cake-shop.json"));

        assert!(store.load().expect("empty load").is_none());

        let mut progress = PlayerProgress::starter();
        progress.experience = 210;
        progress.coins = 260;
        progress.recompute_level();
        store.save(&progress).expect("save");

        let restored = store.load().expect("load").expect("snapshot present");
        assert_eq!(restored, progress);
    }

    #[test]
    fn garbage_on_disk_reads_as_malformed() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("cake-shop.json");
        fs::write(&path, "{ not json").expect("write garbage");
        let store = JsonFileStore::new(path);

        assert!(matches!(store.load(), Err(SnapshotError::Malformed(_))));
    }

    #[test]
    fn memory_store_shares_state_between_clones() {
        let store = InMemoryStore::default();
        let handle = store.clone();

        store.save(&PlayerProgress::starter()).expect("save");
        let restored = handle.load().expect("load").expect("snapshot present");
        assert_eq!(restored, PlayerProgress::starter());
    }

    #[test]
    fn ingredient_parsers_speak_the_catalog_ids() {
        assert_eq!(parse_base("redVelvet"), Ok(CakeBase::RedVelvet));
        assert_eq!(parse_filling("chocolateGanache"), Ok(Filling::ChocolateGanache));
        assert_eq!(parse_frosting("whippedCream"), Ok(Frosting::WhippedCream));
        assert_eq!(parse_decoration("freshFruit"), Ok(Decoration::FreshFruit));
        assert!(parse_base("angelFood").is_err());
    }
}
