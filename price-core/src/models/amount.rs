use std::fmt;

/// A currency value in minor units (e.g. cents or kopecks).
///
/// Amounts are compared exactly; there is no floating point anywhere in the
/// representation, so two prices are "the same price" only if their minor-unit
/// values are identical.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[repr(transparent)]
pub struct Amount(i64);

impl Amount {
    /// Create an amount from a number of minor units
    pub const fn new(minor_units: i64) -> Self {
        Self(minor_units)
    }

    /// The number of minor units
    pub const fn minor_units(self) -> i64 {
        self.0
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Amount> for i64 {
    fn from(value: Amount) -> Self {
        value.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
