use serde::{Deserialize, Serialize};

use crate::catalog::{suggested_price, CakeBase, Decoration, Filling, Frosting};

/// A cake holds at most this many fillings.
pub const MAX_FILLINGS: usize = 3;

/// A cake as it sits on the bench: slots fill in one at a time, and the
/// same value doubles as the immutable record of a cake that was served.
///
/// Fields stay private so the layer rules cannot be bypassed; everything
/// is reachable through the accessors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CakeComposition {
    base: Option<CakeBase>,
    fillings: Vec<Filling>,
    frosting: Option<Frosting>,
    decorations: Vec<Decoration>,
    name: String,
    price: u32,
}

impl CakeComposition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base(&self) -> Option<CakeBase> {
        self.base
    }

    pub fn fillings(&self) -> &[Filling] {
        &self.fillings
    }

    pub fn frosting(&self) -> Option<Frosting> {
        self.frosting
    }

    pub fn decorations(&self) -> &[Decoration] {
        &self.decorations
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> u32 {
        self.price
    }

    pub fn set_base(&mut self, base: CakeBase) {
        self.base = Some(base);
    }

    /// Layer in a filling. The same filling cannot appear twice and the
    /// cake holds at most [`MAX_FILLINGS`].
    pub fn add_filling(&mut self, filling: Filling) -> Result<(), DraftError> {
        if self.fillings.contains(&filling) {
            return Err(DraftError::DuplicateFilling(filling));
        }
        if self.fillings.len() >= MAX_FILLINGS {
            return Err(DraftError::FillingLimitReached);
        }
        self.fillings.push(filling);
        Ok(())
    }

    /// Take a filling back out. Returns whether it was present.
    pub fn remove_filling(&mut self, filling: Filling) -> bool {
        match self.fillings.iter().position(|layered| *layered == filling) {
            Some(index) => {
                self.fillings.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn set_frosting(&mut self, frosting: Frosting) {
        self.frosting = Some(frosting);
    }

    /// Place a decoration. Duplicates are rejected; there is no count limit.
    pub fn add_decoration(&mut self, decoration: Decoration) -> Result<(), DraftError> {
        if self.decorations.contains(&decoration) {
            return Err(DraftError::DuplicateDecoration(decoration));
        }
        self.decorations.push(decoration);
        Ok(())
    }

    /// Take a decoration back off. Returns whether it was present.
    pub fn remove_decoration(&mut self, decoration: Decoration) -> bool {
        match self
            .decorations
            .iter()
            .position(|placed| *placed == decoration)
        {
            Some(index) => {
                self.decorations.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_price(&mut self, price: u32) {
        self.price = price;
    }

    /// Sum of list prices for the current parts.
    pub fn suggested_price(&self) -> u32 {
        suggested_price(self.base, &self.fillings, self.frosting, &self.decorations)
    }

    /// Price the cake at its suggested total.
    pub fn apply_suggested_price(&mut self) {
        self.price = self.suggested_price();
    }

    /// Clear the bench for a new draft.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// A cake can be served once it has a base, a frosting, and a name.
    /// Fillings and decorations are optional.
    pub fn ensure_completable(&self) -> Result<(), IncompleteCake> {
        let mut missing = Vec::new();
        if self.base.is_none() {
            missing.push(CakeRequirement::Base);
        }
        if self.frosting.is_none() {
            missing.push(CakeRequirement::Frosting);
        }
        if self.name.trim().is_empty() {
            missing.push(CakeRequirement::Name);
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(IncompleteCake { missing })
        }
    }

    pub fn is_completable(&self) -> bool {
        self.ensure_completable().is_ok()
    }
}

/// Why an ingredient could not be added to the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("a cake holds at most {MAX_FILLINGS} fillings")]
    FillingLimitReached,
    #[error("{} is already layered in", .0.label())]
    DuplicateFilling(Filling),
    #[error("{} is already on the cake", .0.label())]
    DuplicateDecoration(Decoration),
}

/// Raised when a draft heads for the counter before every required slot
/// is set; lists everything that is still missing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cake is not ready to serve: missing {}", requirement_list(.missing))]
pub struct IncompleteCake {
    pub missing: Vec<CakeRequirement>,
}

/// The slots a cake must fill before it can be served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CakeRequirement {
    Base,
    Frosting,
    Name,
}

impl CakeRequirement {
    pub const fn label(self) -> &'static str {
        match self {
            CakeRequirement::Base => "a base",
            CakeRequirement::Frosting => "a frosting",
            CakeRequirement::Name => "a name",
        }
    }
}

fn requirement_list(missing: &[CakeRequirement]) -> String {
    missing
        .iter()
        .map(|requirement| requirement.label())
        .collect::<Vec<_>>()
        .join(", ")
}
