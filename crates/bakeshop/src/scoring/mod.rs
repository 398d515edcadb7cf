mod config;
mod rules;
mod tiers;

pub use config::ScoringConfig;
pub use tiers::RatingTier;

use serde::{Deserialize, Serialize};

use crate::cake::{CakeComposition, IncompleteCake};
use crate::catalog::{IngredientRef, TasteAxis};
use crate::customer::{CustomerId, CustomerProfile};

/// Satisfaction scores are clamped into `0.0..=MAX_SATISFACTION`.
pub const MAX_SATISFACTION: f32 = 10.0;

/// Stateless judge that matches a finished cake against a customer's
/// tastes. Same cake, same customer, same outcome, every time.
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Score a cake for one customer.
    ///
    /// Fails with [`IncompleteCake`] before anything else happens if a
    /// required slot is still empty; a failed serve has no tier, no
    /// feedback, and no rewards.
    pub fn score(
        &self,
        cake: &CakeComposition,
        customer: &CustomerProfile,
    ) -> Result<ServiceOutcome, IncompleteCake> {
        cake.ensure_completable()?;

        let (contributions, raw_total) = rules::taste_contributions(cake, &customer.tastes);
        let satisfaction = raw_total.clamp(0.0, MAX_SATISFACTION);
        let tier = RatingTier::for_satisfaction(satisfaction);

        let coins_earned = if cake.price() > 0 {
            u64::from(cake.price())
        } else {
            self.config.flat_serving_fee
        };

        Ok(ServiceOutcome {
            customer: customer.id,
            satisfaction,
            tier,
            feedback: customer.reactions.phrase_for(tier).to_string(),
            contributions,
            experience_awarded: tier.experience_reward(),
            coins_earned,
        })
    }
}

/// Discrete taste contribution to a serve, allowing transparent audits of
/// how a score came together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlavorContribution {
    pub ingredient: IngredientRef,
    pub axis: TasteAxis,
    pub points: f32,
}

/// Scoring output describing the rating and everything it earned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceOutcome {
    pub customer: CustomerId,
    pub satisfaction: f32,
    pub tier: RatingTier,
    pub feedback: String,
    /// Sorted strongest match first.
    pub contributions: Vec<FlavorContribution>,
    pub experience_awarded: u64,
    pub coins_earned: u64,
}

impl ServiceOutcome {
    /// The single ingredient-and-axis pairing that pleased (or bored)
    /// the customer most.
    pub fn top_contribution(&self) -> Option<&FlavorContribution> {
        self.contributions.first()
    }

    pub fn summary(&self) -> String {
        format!("{} ({:.2}/10)", self.tier.label(), self.satisfaction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cake::CakeRequirement;
    use crate::catalog::{CakeBase, Decoration, Filling, Frosting};
    use crate::roster::Roster;

    fn customer(id: u32) -> CustomerProfile {
        Roster::standard()
            .get(CustomerId(id))
            .expect("standard customer")
            .clone()
    }

    fn chocolate_cake() -> CakeComposition {
        let mut cake = CakeComposition::new();
        cake.set_base(CakeBase::Chocolate);
        cake.add_filling(Filling::ChocolateGanache).expect("filling");
        cake.set_frosting(Frosting::Buttercream);
        cake.set_name("Cocoa Ledger");
        cake
    }

    #[test]
    fn richness_lover_dislikes_a_thin_chocolate_cake() {
        // James weighs richness 9 and sweetness 4: the cake only reaches
        // 9*0.2 + 9*0.15 + 4*0.15 = 3.75, which lands below neutral.
        let engine = ScoringEngine::default();
        let james = customer(2);

        let outcome = engine.score(&chocolate_cake(), &james).expect("scored");

        assert!((outcome.satisfaction - 3.75).abs() < 1e-5);
        assert_eq!(outcome.tier, RatingTier::Dislike);
        assert_eq!(outcome.experience_awarded, 5);
        assert_eq!(outcome.feedback, james.reactions.dislike);
    }

    #[test]
    fn stacked_favorites_reach_the_love_tier() {
        let engine = ScoringEngine::default();
        let sophia = customer(3);

        let mut cake = CakeComposition::new();
        cake.set_base(CakeBase::Lemon);
        cake.add_filling(Filling::FruitPreserves).expect("filling");
        cake.set_frosting(Frosting::Fondant);
        cake.add_decoration(Decoration::FreshFruit).expect("fruit");
        cake.add_decoration(Decoration::EdibleFlowers)
            .expect("flowers");
        cake.add_decoration(Decoration::FondantShapes)
            .expect("shapes");
        cake.set_name("Orchard Showpiece");

        let outcome = engine.score(&cake, &sophia).expect("scored");

        assert_eq!(outcome.tier, RatingTier::Love);
        assert_eq!(outcome.experience_awarded, 40);
        assert_eq!(outcome.feedback, sophia.reactions.love);
    }

    #[test]
    fn satisfaction_never_leaves_the_scale() {
        let engine = ScoringEngine::default();
        let sophia = customer(3);

        // Pile on everything Sophia likes; the raw total exceeds 10.
        let mut cake = CakeComposition::new();
        cake.set_base(CakeBase::Lemon);
        cake.add_filling(Filling::FruitPreserves).expect("preserves");
        cake.add_filling(Filling::Custard).expect("custard");
        cake.add_filling(Filling::CreamCheese).expect("cream cheese");
        cake.set_frosting(Frosting::Fondant);
        for decoration in Decoration::ordered() {
            cake.add_decoration(decoration).expect("decoration");
        }
        cake.set_name("Everything Tower");

        let outcome = engine.score(&cake, &sophia).expect("scored");
        assert!(outcome.satisfaction <= MAX_SATISFACTION);
        assert_eq!(outcome.satisfaction, MAX_SATISFACTION);
    }

    #[test]
    fn scoring_is_deterministic() {
        let engine = ScoringEngine::default();
        let emily = customer(1);
        let cake = chocolate_cake();

        let first = engine.score(&cake, &emily).expect("scored");
        let second = engine.score(&cake, &emily).expect("scored");
        assert_eq!(first, second);
    }

    #[test]
    fn contributions_are_sorted_strongest_first() {
        let engine = ScoringEngine::default();
        let james = customer(2);

        let outcome = engine.score(&chocolate_cake(), &james).expect("scored");

        let points: Vec<f32> = outcome
            .contributions
            .iter()
            .map(|contribution| contribution.points)
            .collect();
        let mut sorted = points.clone();
        sorted.sort_by(|a, b| b.total_cmp(a));
        assert_eq!(points, sorted);

        let top = outcome.top_contribution().expect("has contributions");
        assert_eq!(top.ingredient, IngredientRef::Base(CakeBase::Chocolate));
        assert_eq!(top.axis, TasteAxis::Richness);
    }

    #[test]
    fn incomplete_cakes_are_refused() {
        let engine = ScoringEngine::default();
        let emily = customer(1);

        let mut cake = CakeComposition::new();
        cake.set_base(CakeBase::Vanilla);

        let err = engine.score(&cake, &emily).unwrap_err();
        assert_eq!(
            err.missing,
            vec![CakeRequirement::Frosting, CakeRequirement::Name]
        );
    }

    #[test]
    fn priced_cakes_earn_their_price_and_unpriced_earn_the_fee() {
        let engine = ScoringEngine::default();
        let emily = customer(1);

        let mut cake = chocolate_cake();
        cake.set_price(23);
        let outcome = engine.score(&cake, &emily).expect("scored");
        assert_eq!(outcome.coins_earned, 23);

        let unpriced = chocolate_cake();
        let outcome = engine.score(&unpriced, &emily).expect("scored");
        assert_eq!(outcome.coins_earned, 10);
    }
}
