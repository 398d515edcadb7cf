//! Engines behind a small virtual bakery.
//!
//! The crate is split along the seams a front-end would consume: the
//! ingredient [`catalog`], the [`cake`] draft builder, the customer
//! [`roster`], the [`scoring`] engine that turns a finished cake into a
//! rated outcome, the [`progression`] reducer that folds outcomes into
//! durable player state, and a [`session`] facade that owns the mutable
//! state for one player and keeps it in sync with a snapshot store.

pub mod cake;
pub mod catalog;
pub mod customer;
pub mod progression;
pub mod roster;
pub mod scoring;
pub mod session;
mod store;

pub use cake::{CakeComposition, DraftError, IncompleteCake};
pub use customer::{CustomerId, CustomerProfile};
pub use progression::{PlayerProgress, ProgressUpdate, ProgressionEngine, UnlockSchedule};
pub use roster::Roster;
pub use scoring::{RatingTier, ScoringConfig, ScoringEngine, ServiceOutcome};
pub use session::{BakerySession, SelectionError, ServeError, ServeReceipt};
pub use store::{ProgressStore, SnapshotError};
