use crate::progression::PlayerProgress;

/// Where player progress snapshots live between visits. The session
/// writes through this seam before committing a serving, so a backend
/// that fails here vetoes the whole serving.
pub trait ProgressStore {
    /// Reads the last saved snapshot. `Ok(None)` means a fresh player.
    fn load(&self) -> Result<Option<PlayerProgress>, SnapshotError>;

    /// Replaces the saved snapshot with `progress`.
    fn save(&self, progress: &PlayerProgress) -> Result<(), SnapshotError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("failed to read or write snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot is malformed: {0}")]
    Malformed(String),

    #[error("snapshot backend unavailable: {0}")]
    Unavailable(String),
}
