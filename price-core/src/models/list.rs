use super::Price;

/// An ordered collection of prices.
///
/// The order of a price collection is meaningful: incoming prices are merged
/// one after another, each against the result of the previous ones, so a
/// reordered feed can produce a different outcome. We therefore only ever
/// store prices in insertion order. The `Vec` is an implementation detail,
/// wrapped in a newtype so it can be swapped out without breaking semver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct PriceList(Vec<Price>);

impl PriceList {
    /// Unwrap into the underlying vector
    pub fn into_inner(self) -> Vec<Price> {
        self.0
    }
}

impl std::ops::Deref for PriceList {
    type Target = Vec<Price>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::ops::DerefMut for PriceList {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl IntoIterator for PriceList {
    type Item = Price;
    type IntoIter = std::vec::IntoIter<Price>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PriceList {
    type Item = &'a Price;
    type IntoIter = std::slice::Iter<'a, Price>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<Price> for PriceList {
    fn from_iter<I: IntoIterator<Item = Price>>(iter: I) -> Self {
        Self(Vec::from_iter(iter))
    }
}

impl From<Vec<Price>> for PriceList {
    fn from(value: Vec<Price>) -> Self {
        Self(value)
    }
}
