use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cake::CakeComposition;
use crate::catalog::IngredientKind;
use crate::customer::CustomerId;
use crate::progression::UnlockAnnouncement;
use crate::scoring::{RatingTier, ServiceOutcome};

/// A finished cake as it went out the door.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CakeRecord {
    pub id: String,
    pub composition: CakeComposition,
    pub created_at: DateTime<Utc>,
}

/// One line of the feedback log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackEntry {
    pub customer: CustomerId,
    pub customer_name: String,
    pub tier: RatingTier,
    /// The reaction as delivered, unlock news included.
    pub message: String,
    pub recorded_at: DateTime<Utc>,
}

/// Everything a caller needs to narrate one serving: the scored
/// outcome plus the progression that followed from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServeReceipt {
    pub cake_id: String,
    pub cake_name: String,
    pub customer_name: String,
    pub outcome: ServiceOutcome,
    pub previous_level: u32,
    pub level: u32,
    pub coins_balance: u64,
    pub announcements: Vec<UnlockAnnouncement>,
}

impl ServeReceipt {
    pub fn leveled_up(&self) -> bool {
        self.level > self.previous_level
    }
}

/// A read-only view of where the player stands, with the XP curve
/// already worked out.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    pub level: u32,
    pub experience: u64,
    pub experience_into_level: u64,
    pub experience_to_next: u64,
    pub coins: u64,
    pub cakes_served: u32,
    pub catalog_progress: Vec<CategoryProgressEntry>,
}

/// How much of one ingredient slot the player has opened up.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryProgressEntry {
    pub kind: IngredientKind,
    pub kind_label: &'static str,
    pub unlocked: usize,
    pub total: usize,
}
