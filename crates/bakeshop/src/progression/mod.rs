//! Player progression. A pure reducer folds each serving outcome into
//! the save-file state, recomputing level from lifetime XP and firing
//! every unlock rule the new total has crossed.

pub mod level;
mod unlocks;

use serde::{Deserialize, Serialize};

use crate::catalog::IngredientRef;
use crate::scoring::ServiceOutcome;

pub use unlocks::{standard_unlock_rules, UnlockRule, UnlockSchedule, UnlockedIngredients};

/// Everything about a player the bakery persists between visits.
///
/// `level` is derived from `experience` and stored alongside it so a
/// snapshot reads naturally. [`PlayerProgress::recompute_level`] squares
/// the two up after loading a snapshot from elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProgress {
    pub level: u32,
    pub experience: u64,
    pub coins: u64,
    pub cakes_served: u32,
    pub unlocked: UnlockedIngredients,
}

impl PlayerProgress {
    /// A brand-new player: level 1, no XP, 100 coins, starter pantry.
    pub fn starter() -> Self {
        Self {
            level: 1,
            experience: 0,
            coins: 100,
            cakes_served: 0,
            unlocked: UnlockedIngredients::starter(),
        }
    }

    /// Re-derives `level` from `experience`, overriding whatever the
    /// snapshot claimed.
    pub fn recompute_level(&mut self) {
        self.level = level::level_for_experience(self.experience);
    }
}

impl Default for PlayerProgress {
    fn default() -> Self {
        Self::starter()
    }
}

/// An unlock that fired while folding in an outcome, ready to show to
/// the player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnlockAnnouncement {
    pub ingredient: IngredientRef,
    pub message: String,
}

/// The result of folding one serving into the player's progress.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressUpdate {
    pub progress: PlayerProgress,
    pub previous_level: u32,
    pub unlocked: Vec<UnlockAnnouncement>,
}

impl ProgressUpdate {
    pub fn leveled_up(&self) -> bool {
        self.progress.level > self.previous_level
    }
}

/// Folds serving outcomes into player progress against a fixed unlock
/// schedule. Holds no player state itself, so one engine can serve any
/// number of sessions.
#[derive(Debug, Clone, Default)]
pub struct ProgressionEngine {
    schedule: UnlockSchedule,
}

impl ProgressionEngine {
    pub fn new(schedule: UnlockSchedule) -> Self {
        Self { schedule }
    }

    pub fn schedule(&self) -> &UnlockSchedule {
        &self.schedule
    }

    /// Returns the next progress state without touching the input. XP,
    /// coins, and the serving tally only ever grow; every rule whose
    /// threshold the new XP total covers is granted, however the
    /// serving itself was rated.
    pub fn apply_outcome(
        &self,
        progress: &PlayerProgress,
        outcome: &ServiceOutcome,
    ) -> ProgressUpdate {
        let mut next = progress.clone();
        next.experience = next.experience.saturating_add(outcome.experience_awarded);
        next.coins = next.coins.saturating_add(outcome.coins_earned);
        next.cakes_served = next.cakes_served.saturating_add(1);
        next.level = level::level_for_experience(next.experience);

        let mut unlocked = Vec::new();
        for rule in self.schedule.rules() {
            if rule.experience_threshold > next.experience {
                break;
            }
            if next.unlocked.insert(rule.ingredient) {
                unlocked.push(UnlockAnnouncement {
                    ingredient: rule.ingredient,
                    message: rule.announcement.clone(),
                });
            }
        }

        ProgressUpdate {
            previous_level: progress.level,
            progress: next,
            unlocked,
        }
    }
}
