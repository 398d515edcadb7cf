use super::{CakeBase, Decoration, Filling, Frosting};

impl CakeBase {
    pub const fn price(self) -> u32 {
        match self {
            CakeBase::Vanilla => 10,
            CakeBase::Chocolate => 12,
            CakeBase::RedVelvet => 15,
            CakeBase::Lemon => 13,
            CakeBase::Marble => 14,
        }
    }
}

impl Filling {
    pub const fn price(self) -> u32 {
        match self {
            Filling::Buttercream => 3,
            Filling::ChocolateGanache => 5,
            Filling::FruitPreserves => 4,
            Filling::CreamCheese => 4,
            Filling::Custard => 5,
        }
    }
}

impl Frosting {
    pub const fn price(self) -> u32 {
        match self {
            Frosting::Buttercream => 6,
            Frosting::Fondant => 8,
            Frosting::WhippedCream => 5,
            Frosting::CreamCheese => 7,
        }
    }
}

impl Decoration {
    pub const fn price(self) -> u32 {
        match self {
            Decoration::Sprinkles => 2,
            Decoration::FreshFruit => 4,
            Decoration::ChocolateShavings => 3,
            Decoration::EdibleFlowers => 6,
            Decoration::FondantShapes => 5,
        }
    }
}

/// Sum of list prices for the chosen parts; unset slots cost nothing.
pub fn suggested_price(
    base: Option<CakeBase>,
    fillings: &[Filling],
    frosting: Option<Frosting>,
    decorations: &[Decoration],
) -> u32 {
    let mut total = 0;
    if let Some(base) = base {
        total += base.price();
    }
    for filling in fillings {
        total += filling.price();
    }
    if let Some(frosting) = frosting {
        total += frosting.price();
    }
    for decoration in decorations {
        total += decoration.price();
    }
    total
}
