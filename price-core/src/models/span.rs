use super::DateTime;
use std::fmt;

/// The validity span of a price.
///
/// Spans are compared with a specific boundary convention: two spans that only
/// share a single instant (`a.end == b.begin` or `a.begin == b.end`) are
/// disjoint, not overlapping. Containment, on the other hand, is inclusive at
/// both ends. `begin <= end` is assumed and never checked.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// The first instant of the span
    pub begin: DateTime,
    /// The last instant of the span
    pub end: DateTime,
}

/// How one span sits relative to another.
///
/// The variants are named from the point of view of `self` in
/// [`Span::relation_to`]: `a.relation_to(&b) == Relation::OverlapsLeft` means
/// `a` hangs off the left edge of `b`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Relation {
    /// Both spans have the same bounds
    Equal,
    /// `self` lies within `other`, possibly sharing one bound
    Inside,
    /// `self` starts before `other` and ends inside it
    OverlapsLeft,
    /// `self` starts inside `other` and ends after it
    OverlapsRight,
    /// The spans share at most one instant
    Disjoint,
    /// `self` spans all of `other` and more
    Covers,
}

impl Span {
    /// Create a span from its bounds
    pub fn new(begin: DateTime, end: DateTime) -> Self {
        Self { begin, end }
    }

    /// Whether `self` lies within `other` (bounds inclusive)
    pub fn is_inside_of(&self, other: &Span) -> bool {
        self.begin >= other.begin && self.end <= other.end
    }

    /// Whether `self` starts strictly before `other` and ends strictly inside it
    pub fn overlaps_left(&self, other: &Span) -> bool {
        self.begin < other.begin && self.end > other.begin && self.end < other.end
    }

    /// Whether `self` starts strictly inside `other` and ends strictly after it
    pub fn overlaps_right(&self, other: &Span) -> bool {
        self.begin > other.begin && self.begin < other.end && self.end > other.end
    }

    /// Whether the spans share no more than a boundary instant
    pub fn is_disjoint_from(&self, other: &Span) -> bool {
        self.begin >= other.end || self.end <= other.begin
    }

    /// Classify `self` against `other`.
    ///
    /// The predicates above are not mutually exclusive for degenerate
    /// (zero-length) spans, so this resolves them in a fixed precedence:
    /// equal, inside, overlaps-left, overlaps-right, disjoint. Anything left
    /// over is [`Relation::Covers`].
    pub fn relation_to(&self, other: &Span) -> Relation {
        if self == other {
            Relation::Equal
        } else if self.is_inside_of(other) {
            Relation::Inside
        } else if self.overlaps_left(other) {
            Relation::OverlapsLeft
        } else if self.overlaps_right(other) {
            Relation::OverlapsRight
        } else if self.is_disjoint_from(other) {
            Relation::Disjoint
        } else {
            Relation::Covers
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.begin, self.end)
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Equal => "equal",
            Self::Inside => "inside",
            Self::OverlapsLeft => "overlaps-left",
            Self::OverlapsRight => "overlaps-right",
            Self::Disjoint => "disjoint",
            Self::Covers => "covers",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(begin: &str, end: &str) -> Span {
        Span::new(begin.parse().unwrap(), end.parse().unwrap())
    }

    #[test]
    fn test_touching_spans_are_disjoint() {
        let a = span("01.10.2019 00:00:00", "10.10.2019 00:00:00");
        let b = span("10.10.2019 00:00:00", "20.10.2019 00:00:00");
        assert!(a.is_disjoint_from(&b));
        assert!(b.is_disjoint_from(&a));
        assert_eq!(a.relation_to(&b), Relation::Disjoint);
        assert_eq!(b.relation_to(&a), Relation::Disjoint);
    }

    #[test]
    fn test_inside_is_inclusive() {
        let outer = span("01.10.2019 00:00:00", "31.10.2019 23:59:59");
        let shared_begin = span("01.10.2019 00:00:00", "10.10.2019 00:00:00");
        let shared_end = span("10.10.2019 00:00:00", "31.10.2019 23:59:59");
        assert!(shared_begin.is_inside_of(&outer));
        assert!(shared_end.is_inside_of(&outer));
        assert!(outer.is_inside_of(&outer));
        assert_eq!(outer.relation_to(&outer), Relation::Equal);
        assert_eq!(shared_end.relation_to(&outer), Relation::Inside);
    }

    #[test]
    fn test_left_and_right_overlaps() {
        let early = span("01.10.2019 00:00:00", "10.10.2019 23:59:59");
        let late = span("05.10.2019 00:00:00", "15.10.2019 23:59:59");
        assert!(early.overlaps_left(&late));
        assert!(!early.overlaps_right(&late));
        assert!(late.overlaps_right(&early));
        assert!(!late.overlaps_left(&early));
        assert_eq!(early.relation_to(&late), Relation::OverlapsLeft);
        assert_eq!(late.relation_to(&early), Relation::OverlapsRight);
    }

    #[test]
    fn test_covers() {
        let wide = span("15.10.2019 00:00:00", "25.10.2019 23:59:59");
        let narrow = span("15.10.2019 00:00:00", "20.10.2019 00:00:00");
        assert!(!wide.is_inside_of(&narrow));
        assert!(!wide.overlaps_left(&narrow));
        assert!(!wide.overlaps_right(&narrow));
        assert!(!wide.is_disjoint_from(&narrow));
        assert_eq!(wide.relation_to(&narrow), Relation::Covers);
        assert_eq!(narrow.relation_to(&wide), Relation::Inside);
    }

    #[test]
    fn test_zero_length_at_boundary_is_both_inside_and_disjoint() {
        let point = span("10.10.2019 00:00:00", "10.10.2019 00:00:00");
        let other = span("10.10.2019 00:00:00", "20.10.2019 00:00:00");
        assert!(point.is_inside_of(&other));
        assert!(point.is_disjoint_from(&other));
        assert_eq!(point.relation_to(&other), Relation::Inside);
    }
}
