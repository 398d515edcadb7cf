use serde::{Deserialize, Serialize};

/// How well a served cake landed with the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingTier {
    Love,
    Like,
    Neutral,
    Dislike,
}

impl RatingTier {
    pub const fn ordered() -> [RatingTier; 4] {
        [
            RatingTier::Love,
            RatingTier::Like,
            RatingTier::Neutral,
            RatingTier::Dislike,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            RatingTier::Love => "love",
            RatingTier::Like => "like",
            RatingTier::Neutral => "neutral",
            RatingTier::Dislike => "dislike",
        }
    }

    /// Classify a clamped satisfaction score. Bounds are inclusive on the
    /// low side, so a score sitting exactly on a threshold takes the
    /// higher tier.
    pub fn for_satisfaction(satisfaction: f32) -> RatingTier {
        if satisfaction >= 8.0 {
            RatingTier::Love
        } else if satisfaction >= 6.0 {
            RatingTier::Like
        } else if satisfaction >= 4.0 {
            RatingTier::Neutral
        } else {
            RatingTier::Dislike
        }
    }

    /// Experience the bakery earns for a serve in this tier.
    pub const fn experience_reward(self) -> u64 {
        match self {
            RatingTier::Love => 40,
            RatingTier::Like => 25,
            RatingTier::Neutral => 15,
            RatingTier::Dislike => 5,
        }
    }
}
