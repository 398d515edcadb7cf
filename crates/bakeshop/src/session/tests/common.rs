use std::cell::RefCell;

use crate::catalog::{CakeBase, Filling, Frosting};
use crate::progression::PlayerProgress;
use crate::roster::Roster;
use crate::session::BakerySession;
use crate::store::{ProgressStore, SnapshotError};

/// An in-memory store that remembers every snapshot it was handed, so
/// tests can check what got persisted and when.
pub(super) struct MemoryStore {
    seed: Option<PlayerProgress>,
    snapshots: RefCell<Vec<PlayerProgress>>,
}

impl MemoryStore {
    pub(super) fn empty() -> Self {
        Self {
            seed: None,
            snapshots: RefCell::new(Vec::new()),
        }
    }

    pub(super) fn seeded(progress: PlayerProgress) -> Self {
        Self {
            seed: Some(progress),
            snapshots: RefCell::new(Vec::new()),
        }
    }

    pub(super) fn save_count(&self) -> usize {
        self.snapshots.borrow().len()
    }

    pub(super) fn last_saved(&self) -> Option<PlayerProgress> {
        self.snapshots.borrow().last().cloned()
    }
}

impl ProgressStore for MemoryStore {
    fn load(&self) -> Result<Option<PlayerProgress>, SnapshotError> {
        Ok(self.seed.clone())
    }

    fn save(&self, progress: &PlayerProgress) -> Result<(), SnapshotError> {
        self.snapshots.borrow_mut().push(progress.clone());
        Ok(())
    }
}

/// Loads fine but refuses every save, standing in for a dead disk.
pub(super) struct FailingStore;

impl ProgressStore for FailingStore {
    fn load(&self) -> Result<Option<PlayerProgress>, SnapshotError> {
        Ok(None)
    }

    fn save(&self, _progress: &PlayerProgress) -> Result<(), SnapshotError> {
        Err(SnapshotError::Unavailable(String::from(
            "snapshot disk offline",
        )))
    }
}

pub(super) fn fresh_session() -> BakerySession<MemoryStore> {
    BakerySession::new(Roster::standard(), MemoryStore::empty())
        .expect("memory store load cannot fail")
}

pub(super) fn session_with(progress: PlayerProgress) -> BakerySession<MemoryStore> {
    BakerySession::new(Roster::standard(), MemoryStore::seeded(progress))
        .expect("memory store load cannot fail")
}

pub(super) fn session_at(experience: u64) -> BakerySession<MemoryStore> {
    let mut progress = PlayerProgress::starter();
    progress.experience = experience;
    progress.recompute_level();
    session_with(progress)
}

/// Chocolate, ganache, buttercream frosting. Everything in it starts
/// unlocked, and for James (all richness) it scores 3.75.
pub(super) fn build_starter_cake<S: ProgressStore>(session: &mut BakerySession<S>) {
    session
        .choose_base(CakeBase::Chocolate)
        .expect("chocolate starts unlocked");
    session
        .add_filling(Filling::ChocolateGanache)
        .expect("ganache starts unlocked");
    session
        .choose_frosting(Frosting::Buttercream)
        .expect("buttercream starts unlocked");
    session.name_cake("Midnight Slice");
    session.price_cake(25);
}
