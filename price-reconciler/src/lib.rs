/**
 * The merge engine: grouping, classification, and the per-relation split rules.
 */
mod merge;
pub use merge::{IntervalReconciler, merge};

/**
 * How an incoming price relates to the members of its group.
 */
mod classify;
pub use classify::Classification;

/**
 * Checks that a price collection satisfies the non-overlap invariant.
 */
mod audit;
pub use audit::{Overlap, find_overlaps};

// We use non-std collections here for their ordering semantics and performance
pub(crate) type Map<K, V> = indexmap::IndexMap<K, V, rustc_hash::FxBuildHasher>;
