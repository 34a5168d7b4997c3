use price_core::models::{Price, Span};

/// The members of a group, sorted by how they relate to an incoming price's span.
///
/// Every member is tested against every relation independently. For a group
/// that satisfies the non-overlap invariant, at most one member can contain the
/// incoming span, at most one can be overlapped on its left edge and at most one
/// on its right edge. When the invariant is already broken, more candidates can
/// show up; the first one in group order wins and the rest are only counted in
/// [`Classification::surplus`]. Such members drop out of the merged group.
#[derive(Debug, Default)]
pub struct Classification<'a> {
    /// The member whose span contains the incoming span
    pub inside: Option<&'a Price>,
    /// The member the incoming span starts before and ends inside of
    pub overlaps_left: Option<&'a Price>,
    /// The member the incoming span starts inside of and ends after
    pub overlaps_right: Option<&'a Price>,
    /// Members sharing at most a boundary instant with the incoming span, in group order
    pub disjoint: Vec<&'a Price>,
    /// Candidates ignored because an earlier member already matched the same relation
    pub surplus: usize,
    /// Members entirely covered by the incoming span
    pub superseded: usize,
}

impl<'a> Classification<'a> {
    /// Classify every member of `group` against `span`
    pub fn of(span: Span, group: &'a [Price]) -> Self {
        let mut classification = Self::default();

        for member in group {
            let other = member.span();
            let mut matched = false;

            if span.is_inside_of(&other) {
                matched = true;
                classification.surplus += claim(&mut classification.inside, member);
            }
            if span.overlaps_left(&other) {
                matched = true;
                classification.surplus += claim(&mut classification.overlaps_left, member);
            }
            if span.overlaps_right(&other) {
                matched = true;
                classification.surplus += claim(&mut classification.overlaps_right, member);
            }
            if span.is_disjoint_from(&other) {
                matched = true;
                classification.disjoint.push(member);
            }

            if !matched {
                classification.superseded += 1;
            }
        }

        classification
    }

    /// Whether the group broke the non-overlap invariant
    pub fn is_ambiguous(&self) -> bool {
        self.surplus > 0
    }
}

// Returns the number of candidates ignored (0 or 1)
fn claim<'a>(slot: &mut Option<&'a Price>, member: &'a Price) -> usize {
    if slot.is_some() {
        1
    } else {
        *slot = Some(member);
        0
    }
}
