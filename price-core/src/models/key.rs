use std::fmt;

/// The code identifying a priced product
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ProductCode(String);

impl ProductCode {
    /// View the code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ProductCode {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ProductCode {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl fmt::Display for ProductCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The persistent identity of a stored price record.
///
/// Identity is opaque to reconciliation: it never participates in equality,
/// grouping, or the merge rules.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[repr(transparent)]
pub struct PriceId(u64);

impl From<u64> for PriceId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<PriceId> for u64 {
    fn from(value: PriceId) -> Self {
        value.0
    }
}

impl fmt::Display for PriceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The (product, slot, department) triple whose prices compete for being active.
///
/// Within one group, at most one price may be active at any instant. Prices in
/// different groups never influence each other.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupKey {
    /// The priced product
    pub product_code: ProductCode,
    /// The price slot; slot 1 is the regular sale price, higher slots are conditional prices
    pub slot: u32,
    /// The department the price is scoped to
    pub department: u32,
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.product_code, self.slot, self.department)
    }
}
