use super::{Amount, DateTime, GroupKey, PriceId, ProductCode, Span};
use std::hash::{Hash, Hasher};

/// A price is a single pricing fact.
///
/// Each product may carry several prices at once, distinguished by slot and
/// department: slot 1 is the regular sale price, higher slots hold prices that
/// apply when some discount condition fires. Every price is active only during
/// its validity span, and within a [`GroupKey`] only one price may be active at
/// any instant.
///
/// Prices are values. Equality and hashing cover every field except the
/// optional persistent [`PriceId`], and nothing here mutates a record in place:
/// splitting or widening a span yields a new `Price`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Price {
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    id: Option<PriceId>,
    product_code: ProductCode,
    slot: u32,
    department: u32,
    begin: DateTime,
    end: DateTime,
    amount: Amount,
}

impl Price {
    /// Create a price from its raw fields.
    ///
    /// Construction never fails; callers are responsible for `begin <= end`.
    pub fn new(
        product_code: impl Into<ProductCode>,
        slot: u32,
        department: u32,
        begin: DateTime,
        end: DateTime,
        amount: impl Into<Amount>,
    ) -> Self {
        Self {
            id: None,
            product_code: product_code.into(),
            slot,
            department,
            begin,
            end,
            amount: amount.into(),
        }
    }

    /// Attach a persistent identity to the price
    pub fn with_id(self, id: impl Into<PriceId>) -> Self {
        Self {
            id: Some(id.into()),
            ..self
        }
    }

    /// Derive a new record in the same group with the same amount, but a different span.
    ///
    /// The derived record is a new fact and so carries no identity.
    pub fn derive_with_span(&self, span: Span) -> Self {
        Self {
            id: None,
            product_code: self.product_code.clone(),
            slot: self.slot,
            department: self.department,
            begin: span.begin,
            end: span.end,
            amount: self.amount,
        }
    }

    /// The same record, with its span replaced. Identity is kept.
    pub fn with_span(self, span: Span) -> Self {
        Self {
            begin: span.begin,
            end: span.end,
            ..self
        }
    }

    /// The persistent identity, if the record has been stored
    pub fn id(&self) -> Option<PriceId> {
        self.id
    }

    /// The priced product
    pub fn product_code(&self) -> &ProductCode {
        &self.product_code
    }

    /// The price slot
    pub fn slot(&self) -> u32 {
        self.slot
    }

    /// The department the price is scoped to
    pub fn department(&self) -> u32 {
        self.department
    }

    /// The start of the validity span
    pub fn begin(&self) -> DateTime {
        self.begin
    }

    /// The end of the validity span
    pub fn end(&self) -> DateTime {
        self.end
    }

    /// The currency value
    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// The validity span
    pub fn span(&self) -> Span {
        Span::new(self.begin, self.end)
    }

    /// The group this price competes in
    pub fn group_key(&self) -> GroupKey {
        GroupKey {
            product_code: self.product_code.clone(),
            slot: self.slot,
            department: self.department,
        }
    }
}

impl PartialEq for Price {
    fn eq(&self, other: &Self) -> bool {
        self.product_code == other.product_code
            && self.slot == other.slot
            && self.department == other.department
            && self.begin == other.begin
            && self.end == other.end
            && self.amount == other.amount
    }
}

impl Eq for Price {}

impl Hash for Price {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.product_code.hash(state);
        self.slot.hash(state);
        self.department.hash(state);
        self.begin.hash(state);
        self.end.hash(state);
        self.amount.hash(state);
    }
}
