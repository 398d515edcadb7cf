//! The customer roster: the built-in regulars, CSV import for custom
//! casts, and the random walk-in pick used between serves.

mod import;

pub use import::RosterImportError;

use rand::Rng;

use crate::customer::{CustomerId, CustomerProfile, ReactionSet, TastePreferences};

/// The customers a session can serve. Selection never mutates the roster;
/// per-customer state (like the last rating) lives with the session.
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    customers: Vec<CustomerProfile>,
}

impl Roster {
    /// The three regulars every new bakery opens with.
    pub fn standard() -> Self {
        Self {
            customers: standard_customers(),
        }
    }

    pub fn new(customers: Vec<CustomerProfile>) -> Self {
        Self { customers }
    }

    pub fn get(&self, id: CustomerId) -> Option<&CustomerProfile> {
        self.customers.iter().find(|customer| customer.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&CustomerProfile> {
        let wanted = name.trim();
        self.customers
            .iter()
            .find(|customer| customer.name.eq_ignore_ascii_case(wanted))
    }

    /// Pick who walks through the door next. The generator is injected so
    /// callers control reproducibility; `None` only on an empty roster.
    pub fn walk_in<R: Rng>(&self, rng: &mut R) -> Option<&CustomerProfile> {
        if self.customers.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.customers.len());
        self.customers.get(index)
    }

    pub fn customers(&self) -> &[CustomerProfile] {
        &self.customers
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}

fn standard_customers() -> Vec<CustomerProfile> {
    vec![
        CustomerProfile {
            id: CustomerId(1),
            name: "Emily".to_string(),
            tastes: TastePreferences {
                sweetness: 7,
                fruitiness: 8,
                richness: 4,
                creativity: 6,
            },
            reactions: ReactionSet {
                love: "This is absolutely divine! The flavors are perfect together!"
                    .to_string(),
                like: "Mmm, this is quite tasty! I'm enjoying it.".to_string(),
                neutral: "It's alright, not bad but not amazing either.".to_string(),
                dislike: "Hmm, I don't think these flavors work well together.".to_string(),
            },
        },
        CustomerProfile {
            id: CustomerId(2),
            name: "James".to_string(),
            tastes: TastePreferences {
                sweetness: 4,
                fruitiness: 3,
                richness: 9,
                creativity: 5,
            },
            reactions: ReactionSet {
                love: "Wow! This is a masterpiece of flavor! Rich and delicious!".to_string(),
                like: "Very nice! I'm enjoying the richness of this cake.".to_string(),
                neutral: "It's decent, but could use more depth of flavor.".to_string(),
                dislike: "Too sweet for my taste. I prefer something richer.".to_string(),
            },
        },
        CustomerProfile {
            id: CustomerId(3),
            name: "Sophia".to_string(),
            tastes: TastePreferences {
                sweetness: 6,
                fruitiness: 9,
                richness: 5,
                creativity: 8,
            },
            reactions: ReactionSet {
                love: "The fruit flavors in this are incredible! So refreshing!".to_string(),
                like: "I'm really enjoying the fruity notes in this cake!".to_string(),
                neutral: "It's fine, but I was hoping for more fruit flavor.".to_string(),
                dislike: "I don't taste much fruitiness here. That's disappointing."
                    .to_string(),
            },
        },
    ]
}
