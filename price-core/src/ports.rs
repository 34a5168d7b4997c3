mod reconciler;

pub use reconciler::{MergeError, Reconciler};
