//! In-memory application state with topic-based change notification.

pub mod collection;
pub mod observer;
pub mod store;

pub use observer::{Observers, SubscriptionId, Topic};
pub use store::{DEFAULT_TACTIC_YEAR, StateStore};
