use price_core::{
    models::PriceList,
    ports::{MergeError, Reconciler as _},
};
use price_reconciler::IntervalReconciler;
use serde::Deserialize;
use tracing::{Level, event};

/// The input of the `merge` subcommand.
///
/// Either side may be omitted or `null`, which counts as absent.
#[derive(Debug, Default, Deserialize)]
pub struct MergeDocument {
    /// Prices already known
    #[serde(default)]
    pub existing: Option<PriceList>,
    /// Prices delivered by the import feed, in feed order
    #[serde(default)]
    pub incoming: Option<PriceList>,
}

impl MergeDocument {
    /// Reconcile the two sides, optionally sorting the result by group and span
    pub fn merge(self, sort: bool) -> Result<PriceList, MergeError> {
        let mut merged = IntervalReconciler.merge(self.existing, self.incoming)?;
        if sort {
            merged.sort_by_cached_key(|price| (price.group_key(), price.begin(), price.end()));
        }
        event!(Level::INFO, prices = merged.len(), "merged prices");
        Ok(merged)
    }
}
