//! The fixed ingredient catalog shared by the cake builder, the scoring
//! engine, and the unlock schedule.
//!
//! Every ingredient is a sealed enum variant, so a cake can never name an
//! ingredient the bakery does not sell. The string identifiers used on the
//! wire (and in roster or snapshot files) are the camelCase ids exposed by
//! [`CakeBase::id`] and friends.

mod flavor;
mod pricing;

pub use flavor::{FlavorNote, TasteAxis};
pub use pricing::suggested_price;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The sponge everything else is built on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum CakeBase {
    Vanilla,
    Chocolate,
    RedVelvet,
    Lemon,
    Marble,
}

impl CakeBase {
    pub const fn ordered() -> [CakeBase; 5] {
        [
            CakeBase::Vanilla,
            CakeBase::Chocolate,
            CakeBase::RedVelvet,
            CakeBase::Lemon,
            CakeBase::Marble,
        ]
    }

    pub const fn id(self) -> &'static str {
        match self {
            CakeBase::Vanilla => "vanilla",
            CakeBase::Chocolate => "chocolate",
            CakeBase::RedVelvet => "redVelvet",
            CakeBase::Lemon => "lemon",
            CakeBase::Marble => "marble",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            CakeBase::Vanilla => "Vanilla",
            CakeBase::Chocolate => "Chocolate",
            CakeBase::RedVelvet => "Red Velvet",
            CakeBase::Lemon => "Lemon",
            CakeBase::Marble => "Marble",
        }
    }
}

/// Layered between the sponge and the frosting, up to three per cake.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Filling {
    Buttercream,
    ChocolateGanache,
    FruitPreserves,
    CreamCheese,
    Custard,
}

impl Filling {
    pub const fn ordered() -> [Filling; 5] {
        [
            Filling::Buttercream,
            Filling::ChocolateGanache,
            Filling::FruitPreserves,
            Filling::CreamCheese,
            Filling::Custard,
        ]
    }

    pub const fn id(self) -> &'static str {
        match self {
            Filling::Buttercream => "buttercream",
            Filling::ChocolateGanache => "chocolateGanache",
            Filling::FruitPreserves => "fruitPreserves",
            Filling::CreamCheese => "creamCheese",
            Filling::Custard => "custard",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Filling::Buttercream => "Buttercream",
            Filling::ChocolateGanache => "Chocolate Ganache",
            Filling::FruitPreserves => "Fruit Preserves",
            Filling::CreamCheese => "Cream Cheese",
            Filling::Custard => "Custard",
        }
    }
}

/// The outer finish, exactly one per cake.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Frosting {
    Buttercream,
    Fondant,
    WhippedCream,
    CreamCheese,
}

impl Frosting {
    pub const fn ordered() -> [Frosting; 4] {
        [
            Frosting::Buttercream,
            Frosting::Fondant,
            Frosting::WhippedCream,
            Frosting::CreamCheese,
        ]
    }

    pub const fn id(self) -> &'static str {
        match self {
            Frosting::Buttercream => "buttercream",
            Frosting::Fondant => "fondant",
            Frosting::WhippedCream => "whippedCream",
            Frosting::CreamCheese => "creamCheese",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Frosting::Buttercream => "Buttercream",
            Frosting::Fondant => "Fondant",
            Frosting::WhippedCream => "Whipped Cream",
            Frosting::CreamCheese => "Cream Cheese",
        }
    }
}

/// Optional flourishes on top, any number, no duplicates.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Decoration {
    Sprinkles,
    FreshFruit,
    ChocolateShavings,
    EdibleFlowers,
    FondantShapes,
}

impl Decoration {
    pub const fn ordered() -> [Decoration; 5] {
        [
            Decoration::Sprinkles,
            Decoration::FreshFruit,
            Decoration::ChocolateShavings,
            Decoration::EdibleFlowers,
            Decoration::FondantShapes,
        ]
    }

    pub const fn id(self) -> &'static str {
        match self {
            Decoration::Sprinkles => "sprinkles",
            Decoration::FreshFruit => "freshFruit",
            Decoration::ChocolateShavings => "chocolateShavings",
            Decoration::EdibleFlowers => "edibleFlowers",
            Decoration::FondantShapes => "fondantShapes",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Decoration::Sprinkles => "Sprinkles",
            Decoration::FreshFruit => "Fresh Fruit",
            Decoration::ChocolateShavings => "Chocolate Shavings",
            Decoration::EdibleFlowers => "Edible Flowers",
            Decoration::FondantShapes => "Fondant Shapes",
        }
    }
}

/// The four slots a cake is assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IngredientKind {
    Base,
    Filling,
    Frosting,
    Decoration,
}

impl IngredientKind {
    pub const fn ordered() -> [IngredientKind; 4] {
        [
            IngredientKind::Base,
            IngredientKind::Filling,
            IngredientKind::Frosting,
            IngredientKind::Decoration,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            IngredientKind::Base => "base",
            IngredientKind::Filling => "filling",
            IngredientKind::Frosting => "frosting",
            IngredientKind::Decoration => "decoration",
        }
    }

    /// How many catalog entries the slot offers in total.
    pub const fn catalog_size(self) -> usize {
        match self {
            IngredientKind::Base => CakeBase::ordered().len(),
            IngredientKind::Filling => Filling::ordered().len(),
            IngredientKind::Frosting => Frosting::ordered().len(),
            IngredientKind::Decoration => Decoration::ordered().len(),
        }
    }
}

/// Names any catalog entry uniformly, e.g. in unlock rules and audit trails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IngredientRef {
    Base(CakeBase),
    Filling(Filling),
    Frosting(Frosting),
    Decoration(Decoration),
}

impl IngredientRef {
    pub const fn kind(self) -> IngredientKind {
        match self {
            IngredientRef::Base(_) => IngredientKind::Base,
            IngredientRef::Filling(_) => IngredientKind::Filling,
            IngredientRef::Frosting(_) => IngredientKind::Frosting,
            IngredientRef::Decoration(_) => IngredientKind::Decoration,
        }
    }

    pub const fn id(self) -> &'static str {
        match self {
            IngredientRef::Base(base) => base.id(),
            IngredientRef::Filling(filling) => filling.id(),
            IngredientRef::Frosting(frosting) => frosting.id(),
            IngredientRef::Decoration(decoration) => decoration.id(),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            IngredientRef::Base(base) => base.label(),
            IngredientRef::Filling(filling) => filling.label(),
            IngredientRef::Frosting(frosting) => frosting.label(),
            IngredientRef::Decoration(decoration) => decoration.label(),
        }
    }
}

impl fmt::Display for IngredientRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.kind().label())
    }
}

/// Raised when a string does not name any entry in the catalog slot.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {} '{value}'", .kind.label())]
pub struct UnknownIngredient {
    pub kind: IngredientKind,
    pub value: String,
}

fn lookup<T: Copy>(
    kind: IngredientKind,
    variants: &[T],
    id_of: fn(T) -> &'static str,
    value: &str,
) -> Result<T, UnknownIngredient> {
    let trimmed = value.trim();
    variants
        .iter()
        .copied()
        .find(|variant| id_of(*variant).eq_ignore_ascii_case(trimmed))
        .ok_or_else(|| UnknownIngredient {
            kind,
            value: trimmed.to_string(),
        })
}

impl FromStr for CakeBase {
    type Err = UnknownIngredient;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        lookup(IngredientKind::Base, &Self::ordered(), Self::id, value)
    }
}

impl FromStr for Filling {
    type Err = UnknownIngredient;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        lookup(IngredientKind::Filling, &Self::ordered(), Self::id, value)
    }
}

impl FromStr for Frosting {
    type Err = UnknownIngredient;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        lookup(IngredientKind::Frosting, &Self::ordered(), Self::id, value)
    }
}

impl FromStr for Decoration {
    type Err = UnknownIngredient;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        lookup(IngredientKind::Decoration, &Self::ordered(), Self::id, value)
    }
}
