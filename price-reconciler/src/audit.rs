use crate::Map;
use price_core::models::{GroupKey, Price, Relation};

/// A pair of prices in the same group whose spans overlap.
///
/// Positions refer to the audited slice, with `first < second`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Overlap {
    /// The group both prices belong to
    pub group: GroupKey,
    /// Position of the earlier price
    pub first: usize,
    /// Position of the later price
    pub second: usize,
    /// How the earlier price's span relates to the later one's
    pub relation: Relation,
}

/// Report every pair of same-group prices active at a common instant.
///
/// A collection produced exclusively through the reconciler yields nothing
/// here. Spans that merely touch at a boundary are not reported. Results are
/// ordered by the first appearance of their group, then by position.
pub fn find_overlaps(prices: &[Price]) -> Vec<Overlap> {
    let mut groups: Map<GroupKey, Vec<usize>> = Map::default();
    for (position, price) in prices.iter().enumerate() {
        groups.entry(price.group_key()).or_default().push(position);
    }

    let mut overlaps = Vec::new();
    for (group, positions) in groups {
        for (i, &first) in positions.iter().enumerate() {
            let a = prices[first].span();
            for &second in &positions[i + 1..] {
                let b = prices[second].span();
                if !a.is_disjoint_from(&b) {
                    overlaps.push(Overlap {
                        group: group.clone(),
                        first,
                        second,
                        relation: a.relation_to(&b),
                    });
                }
            }
        }
    }
    overlaps
}
