//! Timestamps bounding a price's validity span.
//!
//! [`DateTime`] wraps `time::PrimitiveDateTime` and always represents UTC. The
//! import feed delivers timestamps as `dd.mm.yyyy hh:mm:ss`, while everything
//! this crate writes out uses RFC 3339; both forms are accepted when parsing.

use std::{fmt, str::FromStr};
use time::{
    OffsetDateTime, PrimitiveDateTime, UtcOffset, format_description::well_known::Rfc3339,
    macros::format_description,
};

/// A UTC timestamp with subsecond precision.
///
/// Timestamps are totally ordered, which is all the reconciler needs from them:
/// it never normalizes time zones or does calendar arithmetic.
///
/// # Examples
///
/// ```
/// # use price_core::models::DateTime;
/// let feed: DateTime = "05.10.2019 00:00:00".parse().unwrap();
/// let rfc: DateTime = "2019-10-05T00:00:00Z".parse().unwrap();
/// assert_eq!(feed, rfc);
/// assert_eq!(feed.to_string(), "2019-10-05T00:00:00Z");
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "DateTimeDto", into = "DateTimeDto")
)]
pub struct DateTime(PrimitiveDateTime);

/// The ways in which a timestamp string may fail to parse.
#[derive(Debug, thiserror::Error)]
pub enum DateTimeParseError {
    /// The input matched neither RFC 3339 nor the import feed's `dd.mm.yyyy hh:mm:ss` form
    #[error("unrecognized timestamp {0:?}, expected RFC 3339 or dd.mm.yyyy hh:mm:ss")]
    Unrecognized(String),
}

impl DateTime {
    /// Parse a timestamp in the import feed's `dd.mm.yyyy hh:mm:ss` form, taken as UTC
    pub fn parse_feed(value: &str) -> Result<Self, DateTimeParseError> {
        PrimitiveDateTime::parse(
            value,
            format_description!("[day].[month].[year] [hour]:[minute]:[second]"),
        )
        .map(Self)
        .map_err(|_| DateTimeParseError::Unrecognized(value.to_owned()))
    }

    /// Parse an RFC 3339 timestamp, converting it to UTC
    pub fn parse_rfc3339(value: &str) -> Result<Self, DateTimeParseError> {
        OffsetDateTime::parse(value, &Rfc3339)
            .map(Self::from)
            .map_err(|_| DateTimeParseError::Unrecognized(value.to_owned()))
    }
}

impl FromStr for DateTime {
    type Err = DateTimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_rfc3339(s).or_else(|_| Self::parse_feed(s))
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0.assume_utc().format(&Rfc3339).map_err(|_| fmt::Error)?;
        f.write_str(&value)
    }
}

impl From<PrimitiveDateTime> for DateTime {
    fn from(value: PrimitiveDateTime) -> Self {
        Self(value)
    }
}

impl From<OffsetDateTime> for DateTime {
    fn from(value: OffsetDateTime) -> Self {
        let utc = value.to_offset(UtcOffset::UTC);
        Self(PrimitiveDateTime::new(utc.date(), utc.time()))
    }
}

impl From<DateTime> for OffsetDateTime {
    fn from(value: DateTime) -> Self {
        value.0.assume_utc()
    }
}

// This is a helper type that ensures (de)serialization happens with respect to RFC3339

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct DateTimeDto(#[serde(with = "time::serde::rfc3339")] OffsetDateTime);

#[cfg(feature = "serde")]
impl From<DateTimeDto> for DateTime {
    fn from(value: DateTimeDto) -> Self {
        value.0.into()
    }
}

#[cfg(feature = "serde")]
impl From<DateTime> for DateTimeDto {
    fn from(value: DateTime) -> Self {
        Self(value.into())
    }
}
