use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog::{CakeBase, Decoration, Filling, Frosting, IngredientKind, IngredientRef};

/// One row of the unlock schedule. The rule fires once the player's
/// lifetime XP reaches the threshold, no matter how the serving that
/// crossed it was rated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnlockRule {
    pub experience_threshold: u64,
    pub ingredient: IngredientRef,
    pub announcement: String,
}

impl UnlockRule {
    pub fn new(
        experience_threshold: u64,
        ingredient: IngredientRef,
        announcement: impl Into<String>,
    ) -> Self {
        Self {
            experience_threshold,
            ingredient,
            announcement: announcement.into(),
        }
    }
}

/// The full unlock table, kept sorted by threshold so a progression pass
/// can stop at the first rule the player has not yet earned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnlockSchedule {
    rules: Vec<UnlockRule>,
}

impl UnlockSchedule {
    pub fn new(mut rules: Vec<UnlockRule>) -> Self {
        rules.sort_by_key(|rule| rule.experience_threshold);
        Self { rules }
    }

    /// The stock bakery schedule: a new ingredient every 50 XP from 100
    /// through 550.
    pub fn standard() -> Self {
        Self::new(standard_unlock_rules())
    }

    pub fn rules(&self) -> &[UnlockRule] {
        &self.rules
    }
}

impl Default for UnlockSchedule {
    fn default() -> Self {
        Self::standard()
    }
}

pub fn standard_unlock_rules() -> Vec<UnlockRule> {
    vec![
        UnlockRule::new(
            100,
            IngredientRef::Base(CakeBase::RedVelvet),
            "You've unlocked Red Velvet cake base!",
        ),
        UnlockRule::new(
            150,
            IngredientRef::Filling(Filling::CreamCheese),
            "You've unlocked Cream Cheese filling!",
        ),
        UnlockRule::new(
            200,
            IngredientRef::Decoration(Decoration::ChocolateShavings),
            "You've unlocked Chocolate Shavings decoration!",
        ),
        UnlockRule::new(
            250,
            IngredientRef::Frosting(Frosting::Fondant),
            "You've unlocked Fondant frosting!",
        ),
        UnlockRule::new(
            300,
            IngredientRef::Base(CakeBase::Lemon),
            "You've unlocked Lemon cake base!",
        ),
        UnlockRule::new(
            350,
            IngredientRef::Filling(Filling::Custard),
            "You've unlocked Custard filling!",
        ),
        UnlockRule::new(
            400,
            IngredientRef::Decoration(Decoration::EdibleFlowers),
            "You've unlocked Edible Flowers decoration!",
        ),
        UnlockRule::new(
            450,
            IngredientRef::Frosting(Frosting::CreamCheese),
            "You've unlocked Cream Cheese frosting!",
        ),
        UnlockRule::new(
            500,
            IngredientRef::Base(CakeBase::Marble),
            "You've unlocked Marble cake base!",
        ),
        UnlockRule::new(
            550,
            IngredientRef::Decoration(Decoration::FondantShapes),
            "You've unlocked Fondant Shapes decoration!",
        ),
    ]
}

/// Which catalog entries the player may bake with, grouped by slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnlockedIngredients {
    pub bases: BTreeSet<CakeBase>,
    pub fillings: BTreeSet<Filling>,
    pub frostings: BTreeSet<Frosting>,
    pub decorations: BTreeSet<Decoration>,
}

impl UnlockedIngredients {
    /// The day-one pantry a fresh player starts with.
    pub fn starter() -> Self {
        Self {
            bases: BTreeSet::from([CakeBase::Vanilla, CakeBase::Chocolate]),
            fillings: BTreeSet::from([
                Filling::Buttercream,
                Filling::ChocolateGanache,
                Filling::FruitPreserves,
            ]),
            frostings: BTreeSet::from([Frosting::Buttercream, Frosting::WhippedCream]),
            decorations: BTreeSet::from([Decoration::Sprinkles, Decoration::FreshFruit]),
        }
    }

    pub fn contains(&self, ingredient: IngredientRef) -> bool {
        match ingredient {
            IngredientRef::Base(base) => self.bases.contains(&base),
            IngredientRef::Filling(filling) => self.fillings.contains(&filling),
            IngredientRef::Frosting(frosting) => self.frostings.contains(&frosting),
            IngredientRef::Decoration(decoration) => self.decorations.contains(&decoration),
        }
    }

    /// Adds the ingredient to its slot. Returns false when it was
    /// already unlocked, which lets a progression pass skip rules that
    /// have fired before.
    pub fn insert(&mut self, ingredient: IngredientRef) -> bool {
        match ingredient {
            IngredientRef::Base(base) => self.bases.insert(base),
            IngredientRef::Filling(filling) => self.fillings.insert(filling),
            IngredientRef::Frosting(frosting) => self.frostings.insert(frosting),
            IngredientRef::Decoration(decoration) => self.decorations.insert(decoration),
        }
    }

    pub fn count_for(&self, kind: IngredientKind) -> usize {
        match kind {
            IngredientKind::Base => self.bases.len(),
            IngredientKind::Filling => self.fillings.len(),
            IngredientKind::Frosting => self.frostings.len(),
            IngredientKind::Decoration => self.decorations.len(),
        }
    }
}

impl Default for UnlockedIngredients {
    fn default() -> Self {
        Self::starter()
    }
}
