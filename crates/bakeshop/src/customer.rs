use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::TasteAxis;
use crate::scoring::RatingTier;

/// Lowest taste weight a customer can hold on an axis.
pub const MIN_TASTE_WEIGHT: u8 = 1;
/// Highest taste weight a customer can hold on an axis.
pub const MAX_TASTE_WEIGHT: u8 = 10;

/// Identifier wrapper for roster customers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct CustomerId(pub u32);

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How strongly a customer cares about each taste axis, weights in
/// [`MIN_TASTE_WEIGHT`]..=[`MAX_TASTE_WEIGHT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TastePreferences {
    pub sweetness: u8,
    pub fruitiness: u8,
    pub richness: u8,
    pub creativity: u8,
}

impl TastePreferences {
    pub fn weight_for(&self, axis: TasteAxis) -> u8 {
        match axis {
            TasteAxis::Sweetness => self.sweetness,
            TasteAxis::Fruitiness => self.fruitiness,
            TasteAxis::Richness => self.richness,
            TasteAxis::Creativity => self.creativity,
        }
    }
}

/// One canned phrase per rating tier; feedback is looked up, never generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionSet {
    pub love: String,
    pub like: String,
    pub neutral: String,
    pub dislike: String,
}

impl ReactionSet {
    pub fn phrase_for(&self, tier: RatingTier) -> &str {
        match tier {
            RatingTier::Love => &self.love,
            RatingTier::Like => &self.like,
            RatingTier::Neutral => &self.neutral,
            RatingTier::Dislike => &self.dislike,
        }
    }
}

/// A customer the bakery can serve: identity, tastes, and reactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub id: CustomerId,
    pub name: String,
    pub tastes: TastePreferences,
    pub reactions: ReactionSet,
}
