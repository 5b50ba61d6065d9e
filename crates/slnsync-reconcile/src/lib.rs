//! Reconciliation controller for slnsync.
//!
//! Walks the differences between a legacy (`A`) and an XML (`B`) solution
//! model, asks a [`DecisionSource`] what to do with each one, and applies the
//! answer to both models in place.
//!
//! # Key Types
//!
//! - [`Action`] -- what the user asked for: add, remove, or skip
//! - [`Outcome`] -- terminal state of one difference
//! - [`DecisionSource`] -- where actions come from (terminal, script, ...)
//! - [`ReconcileReport`] -- every difference with its outcome
//!
//! # Rules
//!
//! 1. Differences are visited platforms, build types, then items.
//! 2. Exactly one decision per difference; no undo.
//! 3. Anything that is not add or remove is a skip. Input never aborts a run.

pub mod action;
pub mod decision;
pub mod reconciler;

pub use action::{Action, Outcome};
pub use decision::{DecisionSource, ScriptedDecisions};
pub use reconciler::{reconcile, ReconcileReport, Resolution};
