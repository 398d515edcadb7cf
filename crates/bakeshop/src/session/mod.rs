//! The interactive bakery loop: draft a cake from unlocked ingredients,
//! serve it, and let the scoring and progression engines settle the
//! outcome while the session keeps the save file and the day's records
//! in step.

mod records;
mod service;

#[cfg(test)]
mod tests;

pub use records::{CakeRecord, CategoryProgressEntry, FeedbackEntry, ProgressSummary, ServeReceipt};
pub use service::{BakerySession, SelectionError, ServeError};
