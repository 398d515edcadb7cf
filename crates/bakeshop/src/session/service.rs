use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use rand::Rng;
use tracing::{debug, info};

use crate::cake::{CakeComposition, DraftError, IncompleteCake};
use crate::catalog::{CakeBase, Decoration, Filling, Frosting, IngredientKind, IngredientRef};
use crate::customer::CustomerId;
use crate::progression::{level, PlayerProgress, ProgressionEngine};
use crate::roster::Roster;
use crate::scoring::{RatingTier, ScoringEngine};
use crate::store::{ProgressStore, SnapshotError};

use super::records::{
    CakeRecord, CategoryProgressEntry, FeedbackEntry, ProgressSummary, ServeReceipt,
};

static CAKE_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_cake_id() -> String {
    let id = CAKE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("cake-{id:06}")
}

/// One open shift at the bakery. The session owns the draft cake, the
/// player's progress, and the day's paper trail, and keeps all three
/// consistent: a serving either fully commits (scored, paid, persisted,
/// logged) or leaves every piece untouched.
pub struct BakerySession<S> {
    roster: Roster,
    scoring: ScoringEngine,
    progression: ProgressionEngine,
    store: S,
    progress: PlayerProgress,
    draft: CakeComposition,
    creations: Vec<CakeRecord>,
    feedback_log: Vec<FeedbackEntry>,
    last_satisfaction: BTreeMap<CustomerId, RatingTier>,
}

impl<S: ProgressStore> BakerySession<S> {
    /// Opens a session with the stock engines, resuming from whatever
    /// snapshot the store holds.
    pub fn new(roster: Roster, store: S) -> Result<Self, SnapshotError> {
        Self::with_engines(
            roster,
            ScoringEngine::default(),
            ProgressionEngine::default(),
            store,
        )
    }

    pub fn with_engines(
        roster: Roster,
        scoring: ScoringEngine,
        progression: ProgressionEngine,
        store: S,
    ) -> Result<Self, SnapshotError> {
        let mut progress = store.load()?.unwrap_or_else(PlayerProgress::starter);
        // Trust the XP total over whatever level the snapshot recorded.
        progress.recompute_level();

        Ok(Self {
            roster,
            scoring,
            progression,
            store,
            progress,
            draft: CakeComposition::new(),
            creations: Vec::new(),
            feedback_log: Vec::new(),
            last_satisfaction: BTreeMap::new(),
        })
    }

    pub fn choose_base(&mut self, base: CakeBase) -> Result<(), SelectionError> {
        self.ensure_unlocked(IngredientRef::Base(base))?;
        self.draft.set_base(base);
        Ok(())
    }

    pub fn add_filling(&mut self, filling: Filling) -> Result<(), SelectionError> {
        self.ensure_unlocked(IngredientRef::Filling(filling))?;
        self.draft.add_filling(filling)?;
        Ok(())
    }

    pub fn remove_filling(&mut self, filling: Filling) -> bool {
        self.draft.remove_filling(filling)
    }

    pub fn choose_frosting(&mut self, frosting: Frosting) -> Result<(), SelectionError> {
        self.ensure_unlocked(IngredientRef::Frosting(frosting))?;
        self.draft.set_frosting(frosting);
        Ok(())
    }

    pub fn add_decoration(&mut self, decoration: Decoration) -> Result<(), SelectionError> {
        self.ensure_unlocked(IngredientRef::Decoration(decoration))?;
        self.draft.add_decoration(decoration)?;
        Ok(())
    }

    pub fn remove_decoration(&mut self, decoration: Decoration) -> bool {
        self.draft.remove_decoration(decoration)
    }

    pub fn name_cake(&mut self, name: impl Into<String>) {
        self.draft.set_name(name);
    }

    pub fn price_cake(&mut self, price: u32) {
        self.draft.set_price(price);
    }

    /// Prices the draft from the catalog and reports the figure.
    pub fn apply_suggested_price(&mut self) -> u32 {
        self.draft.apply_suggested_price();
        self.draft.price()
    }

    pub fn start_over(&mut self) {
        self.draft.reset();
    }

    /// Serves the draft cake to the given customer. On success the
    /// progress snapshot has already been saved, the draft is cleared,
    /// and the receipt tells the whole story. On any error the session
    /// is exactly as it was, draft included.
    pub fn serve(&mut self, customer_id: CustomerId) -> Result<ServeReceipt, ServeError> {
        let customer = self
            .roster
            .get(customer_id)
            .ok_or(ServeError::UnknownCustomer(customer_id))?;

        let outcome = self.scoring.score(&self.draft, customer)?;
        let update = self.progression.apply_outcome(&self.progress, &outcome);

        // Persist before committing anything in memory, so a dead store
        // cannot leave the session ahead of the snapshot.
        self.store.save(&update.progress)?;

        let record = CakeRecord {
            id: next_cake_id(),
            composition: self.draft.clone(),
            created_at: Utc::now(),
        };
        let receipt = ServeReceipt {
            cake_id: record.id.clone(),
            cake_name: record.composition.name().to_string(),
            customer_name: customer.name.clone(),
            outcome: outcome.clone(),
            previous_level: update.previous_level,
            level: update.progress.level,
            coins_balance: update.progress.coins,
            announcements: update.unlocked.clone(),
        };

        info!(
            cake = %receipt.cake_id,
            customer = %receipt.customer_name,
            tier = outcome.tier.label(),
            satisfaction = f64::from(outcome.satisfaction),
            "cake served"
        );
        if update.leveled_up() {
            info!(level = update.progress.level, "leveled up");
        }
        for announcement in &update.unlocked {
            info!(ingredient = %announcement.ingredient, "ingredient unlocked");
        }

        // The log keeps the line the player actually saw: the reaction
        // plus any unlock news delivered with it.
        let mut message = outcome.feedback.clone();
        for announcement in &update.unlocked {
            message.push(' ');
            message.push_str(&announcement.message);
        }
        self.feedback_log.push(FeedbackEntry {
            customer: customer_id,
            customer_name: receipt.customer_name.clone(),
            tier: outcome.tier,
            message,
            recorded_at: record.created_at,
        });
        self.last_satisfaction.insert(customer_id, outcome.tier);
        self.creations.push(record);
        self.progress = update.progress;
        self.draft.reset();

        Ok(receipt)
    }

    /// Serves whoever wanders in, drawn uniformly from the roster.
    pub fn serve_walk_in<R: Rng>(&mut self, rng: &mut R) -> Result<ServeReceipt, ServeError> {
        let customer_id = self
            .roster
            .walk_in(rng)
            .map(|customer| customer.id)
            .ok_or(ServeError::EmptyRoster)?;
        self.serve(customer_id)
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn progress(&self) -> &PlayerProgress {
        &self.progress
    }

    pub fn draft(&self) -> &CakeComposition {
        &self.draft
    }

    pub fn creations(&self) -> &[CakeRecord] {
        &self.creations
    }

    pub fn feedback_log(&self) -> &[FeedbackEntry] {
        &self.feedback_log
    }

    /// The tier this customer gave their most recent cake, if they have
    /// been served this session.
    pub fn last_satisfaction(&self, customer: CustomerId) -> Option<RatingTier> {
        self.last_satisfaction.get(&customer).copied()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn progress_summary(&self) -> ProgressSummary {
        let catalog_progress = IngredientKind::ordered()
            .iter()
            .map(|&kind| CategoryProgressEntry {
                kind,
                kind_label: kind.label(),
                unlocked: self.progress.unlocked.count_for(kind),
                total: kind.catalog_size(),
            })
            .collect();

        ProgressSummary {
            level: self.progress.level,
            experience: self.progress.experience,
            experience_into_level: level::experience_into_level(self.progress.experience),
            experience_to_next: level::experience_to_next(self.progress.experience),
            coins: self.progress.coins,
            cakes_served: self.progress.cakes_served,
            catalog_progress,
        }
    }

    fn ensure_unlocked(&self, ingredient: IngredientRef) -> Result<(), SelectionError> {
        if self.progress.unlocked.contains(ingredient) {
            Ok(())
        } else {
            debug!(%ingredient, "selection rejected, ingredient is locked");
            Err(SelectionError::Locked(ingredient))
        }
    }
}

/// Why an ingredient could not join the draft.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("{0} is still locked")]
    Locked(IngredientRef),

    #[error(transparent)]
    Draft(#[from] DraftError),
}

/// Why a serving did not happen.
#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("no customer with id {0} is in today's roster")]
    UnknownCustomer(CustomerId),

    #[error("the roster is empty, so nobody can walk in")]
    EmptyRoster,

    #[error(transparent)]
    Incomplete(#[from] IncompleteCake),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}
