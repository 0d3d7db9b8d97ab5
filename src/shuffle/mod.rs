//! Repeat-free shuffling.
//!
//! [`ShuffleBag`] holds the not-yet-queued tracks of one playlist for the
//! current shuffle cycle. The reconciler (an `impl` block on
//! [`Account`](crate::account::Account)) decides once per poll whether a track
//! should be queued and draws it from the bag.

mod bag;
mod reconciler;

pub use bag::{BagError, BagState, ShuffleBag};
pub use reconciler::{Outcome, ReconcileError};
