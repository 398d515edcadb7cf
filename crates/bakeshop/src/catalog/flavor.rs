use serde::{Deserialize, Serialize};

use super::{CakeBase, Decoration, Filling, Frosting};

/// The taste dimensions customers weigh when judging a cake.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum TasteAxis {
    Sweetness,
    Fruitiness,
    Richness,
    Creativity,
}

impl TasteAxis {
    pub const fn ordered() -> [TasteAxis; 4] {
        [
            TasteAxis::Sweetness,
            TasteAxis::Fruitiness,
            TasteAxis::Richness,
            TasteAxis::Creativity,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            TasteAxis::Sweetness => "sweetness",
            TasteAxis::Fruitiness => "fruitiness",
            TasteAxis::Richness => "richness",
            TasteAxis::Creativity => "creativity",
        }
    }
}

/// A fixed taste contribution an ingredient brings to any cake it is on.
///
/// The weight is the catalog coefficient; it gets multiplied by the
/// customer's preference for the axis during scoring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlavorNote {
    pub axis: TasteAxis,
    pub weight: f32,
}

impl CakeBase {
    pub fn flavor_notes(self) -> &'static [FlavorNote] {
        match self {
            CakeBase::Vanilla => &[FlavorNote {
                axis: TasteAxis::Sweetness,
                weight: 0.15,
            }],
            CakeBase::Chocolate => &[FlavorNote {
                axis: TasteAxis::Richness,
                weight: 0.2,
            }],
            CakeBase::RedVelvet => &[
                FlavorNote {
                    axis: TasteAxis::Richness,
                    weight: 0.1,
                },
                FlavorNote {
                    axis: TasteAxis::Sweetness,
                    weight: 0.1,
                },
            ],
            CakeBase::Lemon => &[FlavorNote {
                axis: TasteAxis::Fruitiness,
                weight: 0.2,
            }],
            CakeBase::Marble => &[FlavorNote {
                axis: TasteAxis::Creativity,
                weight: 0.2,
            }],
        }
    }
}

impl Filling {
    pub fn flavor_notes(self) -> &'static [FlavorNote] {
        match self {
            Filling::Buttercream => &[FlavorNote {
                axis: TasteAxis::Sweetness,
                weight: 0.1,
            }],
            Filling::ChocolateGanache => &[FlavorNote {
                axis: TasteAxis::Richness,
                weight: 0.15,
            }],
            Filling::FruitPreserves => &[FlavorNote {
                axis: TasteAxis::Fruitiness,
                weight: 0.2,
            }],
            Filling::CreamCheese => &[
                FlavorNote {
                    axis: TasteAxis::Richness,
                    weight: 0.1,
                },
                FlavorNote {
                    axis: TasteAxis::Sweetness,
                    weight: 0.05,
                },
            ],
            Filling::Custard => &[FlavorNote {
                axis: TasteAxis::Creativity,
                weight: 0.1,
            }],
        }
    }
}

impl Frosting {
    pub fn flavor_notes(self) -> &'static [FlavorNote] {
        match self {
            Frosting::Buttercream => &[FlavorNote {
                axis: TasteAxis::Sweetness,
                weight: 0.15,
            }],
            Frosting::Fondant => &[FlavorNote {
                axis: TasteAxis::Creativity,
                weight: 0.2,
            }],
            Frosting::WhippedCream => &[
                FlavorNote {
                    axis: TasteAxis::Sweetness,
                    weight: 0.05,
                },
                FlavorNote {
                    axis: TasteAxis::Creativity,
                    weight: 0.05,
                },
            ],
            Frosting::CreamCheese => &[
                FlavorNote {
                    axis: TasteAxis::Richness,
                    weight: 0.1,
                },
                FlavorNote {
                    axis: TasteAxis::Sweetness,
                    weight: 0.05,
                },
            ],
        }
    }
}

impl Decoration {
    pub fn flavor_notes(self) -> &'static [FlavorNote] {
        match self {
            Decoration::Sprinkles => &[FlavorNote {
                axis: TasteAxis::Creativity,
                weight: 0.05,
            }],
            Decoration::FreshFruit => &[FlavorNote {
                axis: TasteAxis::Fruitiness,
                weight: 0.15,
            }],
            Decoration::ChocolateShavings => &[FlavorNote {
                axis: TasteAxis::Richness,
                weight: 0.1,
            }],
            Decoration::EdibleFlowers => &[FlavorNote {
                axis: TasteAxis::Creativity,
                weight: 0.2,
            }],
            Decoration::FondantShapes => &[FlavorNote {
                axis: TasteAxis::Creativity,
                weight: 0.15,
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_ingredient_carries_at_least_one_note() {
        for base in CakeBase::ordered() {
            assert!(!base.flavor_notes().is_empty(), "{} has no notes", base.id());
        }
        for filling in Filling::ordered() {
            assert!(!filling.flavor_notes().is_empty());
        }
        for frosting in Frosting::ordered() {
            assert!(!frosting.flavor_notes().is_empty());
        }
        for decoration in Decoration::ordered() {
            assert!(!decoration.flavor_notes().is_empty());
        }
    }

    #[test]
    fn red_velvet_splits_richness_and_sweetness() {
        let notes = CakeBase::RedVelvet.flavor_notes();
        assert_eq!(notes.len(), 2);
        assert!(notes
            .iter()
            .any(|note| note.axis == TasteAxis::Richness && note.weight == 0.1));
        assert!(notes
            .iter()
            .any(|note| note.axis == TasteAxis::Sweetness && note.weight == 0.1));
    }
}
