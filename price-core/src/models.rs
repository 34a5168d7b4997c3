mod amount;
pub use amount::Amount;

mod datetime;
pub use datetime::{DateTime, DateTimeParseError};

mod key;
pub use key::{GroupKey, PriceId, ProductCode};

mod list;
pub use list::PriceList;

mod price;
pub use price::Price;

mod span;
pub use span::{Relation, Span};
