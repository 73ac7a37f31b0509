//! Task state owned by the controller.
//!
//! # Responsibility
//! - Hold the pending and completed task lists for one session.
//! - Enforce text normalization before anything is stored.
//!
//! # Invariants
//! - An item moves from pending to completed exactly once per completion.
//! - No item is present in both lists at the same time; a text is stored
//!   at most once across the whole model.

pub mod todo;
