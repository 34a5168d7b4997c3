#![warn(missing_docs)]
//! Models and ports for reconciling time-bounded price records.
//!
//! A [`models::Price`] is a single pricing fact: an amount that is active for a
//! (product, slot, department) group during a validity span. Prices imported
//! from an external feed must be folded into the prices already known, such
//! that within any group at most one price is active at any instant. The
//! [`ports::Reconciler`] trait describes that operation; `price-reconciler`
//! provides the implementation.

/// Core domain models for price reconciliation.
///
/// This module contains the value types the reconciler operates on: the price
/// record itself, its validity span and the interval relations between spans,
/// and the small newtypes (amounts, timestamps, identifiers) a price is built from.
///
/// The models are plain values with no persistence or I/O concerns; records are
/// never mutated in place, new records are derived from old ones instead.
pub mod models;

/// Interface traits for price reconciliation.
///
/// This module contains the contract between callers holding price collections
/// and the engine that merges them, without specifying the merge implementation.
pub mod ports;
