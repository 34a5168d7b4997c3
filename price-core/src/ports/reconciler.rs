use crate::models::PriceList;

/// The ways in which a merge request can be rejected.
///
/// A merge either runs to completion or fails before doing any work; there is
/// no partial failure.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MergeError {
    /// Both collections were empty or absent, so there is nothing to merge and
    /// no prior state to return. This is a caller bug, not a transient condition.
    #[error("invalid argument: missing valid data for merge")]
    InvalidArgument,
}

/// Interface for engines that fold newly imported prices into known prices.
///
/// An implementation takes the prices already resident (`existing`) and the
/// prices delivered by an import feed (`incoming`) and produces the full,
/// updated collection in which, for every (product, slot, department) group,
/// at most one price is active at any instant.
///
/// `None` stands for an absent collection and is accepted wherever an empty
/// one is. Incoming prices are applied in iteration order, each against the
/// result of the ones before it.
pub trait Reconciler {
    /// Error type for rejected merges
    type Error: std::error::Error;

    /// Merge `incoming` into `existing`.
    ///
    /// # Returns
    ///
    /// - `incoming` unchanged if `existing` is empty or absent
    /// - `existing` unchanged if `incoming` is empty or absent
    /// - otherwise, the reconciled union of both
    ///
    /// # Errors
    ///
    /// Fails if both collections are empty or absent.
    fn merge(
        &self,
        existing: Option<PriceList>,
        incoming: Option<PriceList>,
    ) -> Result<PriceList, Self::Error>;
}
