use crate::{Classification, Map};
use price_core::{
    models::{GroupKey, Price, PriceList, Span},
    ports::{MergeError, Reconciler},
};
use tracing::{Level, event};

/// The reconciler behind the [`Reconciler`] port.
///
/// It holds no state; every call is a pure function of its two inputs.
#[derive(Clone, Copy, Debug, Default)]
pub struct IntervalReconciler;

impl Reconciler for IntervalReconciler {
    type Error = MergeError;

    fn merge(
        &self,
        existing: Option<PriceList>,
        incoming: Option<PriceList>,
    ) -> Result<PriceList, Self::Error> {
        merge(existing, incoming)
    }
}

/// Merge newly imported prices into the prices already known.
///
/// Prices are grouped by (product, slot, department). Each incoming price is
/// then resolved against the current members of its group, in the order the
/// feed delivered them:
///
/// - a member whose span contains the incoming span is absorbed when the
///   amounts match, and otherwise split around the incoming span;
/// - a member the incoming span overlaps at one edge is absorbed when the
///   amounts match, and otherwise cut back to the part outside the incoming span;
/// - a member covered by the incoming span is dropped;
/// - a disjoint member is carried over unchanged.
///
/// The incoming price, widened by any absorbed members, always joins the group.
///
/// Groups appear in the output in the order they were first seen.
///
/// # Errors
///
/// Returns [`MergeError::InvalidArgument`] if both collections are empty or absent.
pub fn merge(
    existing: Option<PriceList>,
    incoming: Option<PriceList>,
) -> Result<PriceList, MergeError> {
    let existing = existing.filter(|prices| !prices.is_empty());
    let incoming = incoming.filter(|prices| !prices.is_empty());

    let (existing, incoming) = match (existing, incoming) {
        (None, None) => return Err(MergeError::InvalidArgument),
        (None, Some(incoming)) => return Ok(incoming),
        (Some(existing), None) => return Ok(existing),
        (Some(existing), Some(incoming)) => (existing, incoming),
    };

    event!(
        Level::DEBUG,
        existing = existing.len(),
        incoming = incoming.len(),
        "merging prices"
    );

    let mut groups: Map<GroupKey, Vec<Price>> = Map::default();
    for price in existing {
        groups.entry(price.group_key()).or_default().push(price);
    }

    for price in incoming {
        let key = price.group_key();
        let members = groups.entry(key).or_default();
        let group = std::mem::take(members);
        *members = resolve(group, price);
    }

    Ok(groups.into_values().flatten().collect())
}

/// Produce the new members of a group once `incoming` has been applied to it.
fn resolve(group: Vec<Price>, incoming: Price) -> Vec<Price> {
    if group.is_empty() {
        return vec![incoming];
    }

    // Relations are judged against the span as delivered. The rules below
    // update `span` as members are absorbed, and split boundaries follow it.
    let original = incoming.span();
    let mut span = original;
    let classification = Classification::of(original, &group);

    event!(
        Level::TRACE,
        group = %incoming.group_key(),
        span = %original,
        disjoint = classification.disjoint.len(),
        superseded = classification.superseded,
        "resolving incoming price"
    );

    if classification.is_ambiguous() {
        event!(
            Level::WARN,
            group = %incoming.group_key(),
            surplus = classification.surplus,
            "group has overlapping prices; using the first candidate for each relation"
        );
    }

    let mut members = Vec::with_capacity(group.len() + 2);

    if let Some(existing) = classification.inside {
        if existing.amount() == incoming.amount() {
            span = existing.span();
        } else {
            members.push(existing.derive_with_span(Span::new(existing.begin(), span.begin)));
            members.push(existing.derive_with_span(Span::new(span.end, existing.end())));
        }
    }

    if let Some(existing) = classification.overlaps_left {
        if existing.amount() == incoming.amount() {
            span.end = existing.end();
        } else {
            members.push(existing.derive_with_span(Span::new(span.end, existing.end())));
        }
    }

    if let Some(existing) = classification.overlaps_right {
        if existing.amount() == incoming.amount() {
            span.begin = existing.begin();
        } else {
            members.push(existing.derive_with_span(Span::new(existing.begin(), span.begin)));
        }
    }

    members.extend(classification.disjoint.into_iter().cloned());
    members.push(incoming.with_span(span));
    members
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(begin: &str, end: &str, amount: i64) -> Price {
        Price::new(
            "price_1",
            1,
            1,
            begin.parse().unwrap(),
            end.parse().unwrap(),
            amount,
        )
    }

    #[test]
    fn test_resolve_into_empty_group() {
        let incoming = price("01.10.2019 21:00:00", "10.10.2019 21:00:00", 100);
        assert_eq!(resolve(Vec::new(), incoming.clone()), vec![incoming]);
    }

    #[test]
    fn test_resolve_orders_splits_then_disjoint_then_incoming() {
        let group = vec![
            price("01.10.2019 00:00:00", "31.10.2019 23:59:59", 50),
            price("01.11.2019 00:00:00", "30.11.2019 23:59:59", 55),
        ];
        let incoming = price("10.10.2019 00:00:00", "20.10.2019 23:59:59", 60);

        assert_eq!(
            resolve(group, incoming),
            vec![
                price("01.10.2019 00:00:00", "10.10.2019 00:00:00", 50),
                price("20.10.2019 23:59:59", "31.10.2019 23:59:59", 50),
                price("01.11.2019 00:00:00", "30.11.2019 23:59:59", 55),
                price("10.10.2019 00:00:00", "20.10.2019 23:59:59", 60),
            ]
        );
    }

    #[test]
    fn test_widened_incoming_keeps_identity() {
        let stored = price("01.10.2019 00:00:00", "31.10.2019 23:59:59", 50);
        let group = vec![stored.clone().with_id(1u64)];
        let incoming = price("10.10.2019 00:00:00", "20.10.2019 23:59:59", 50).with_id(2u64);

        let members = resolve(group, incoming);
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].id().map(u64::from), Some(2));
        assert_eq!(members[0], stored);
    }
}
