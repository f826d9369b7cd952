//! Platform identifiers.
//!
//! Every cached entity carries a [`Snowflake`]: a `u64` the platform renders
//! as 17 to 20 decimal digits. Queries and mentions carry the textual form;
//! [`Snowflake::parse_id`] accepts exactly that shape and nothing else.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ResolverError;

/// Fewest digits in the textual form of a live identifier.
pub const MIN_ID_DIGITS: usize = 17;
/// Most digits in the textual form of a live identifier.
pub const MAX_ID_DIGITS: usize = 20;

/// Numeric identifier of a platform entity.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Snowflake(u64);

impl Snowflake {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    /// Parse the query form of an identifier: 17 to 20 ASCII digits.
    ///
    /// Returns `None` for any other shape. A 20-digit string above `u64::MAX`
    /// has the right shape but cannot name a live entity, so it is `None` too.
    ///
    /// ```
    /// use resolver::Snowflake;
    ///
    /// assert_eq!(
    ///     Snowflake::parse_id("123456789012345678"),
    ///     Some(Snowflake::new(123456789012345678))
    /// );
    /// assert_eq!(Snowflake::parse_id("1234"), None);
    /// assert_eq!(Snowflake::parse_id("99999999999999999999"), None);
    /// ```
    pub fn parse_id(text: &str) -> Option<Self> {
        if !has_id_shape(text) {
            return None;
        }
        text.parse::<u64>().ok().map(Self)
    }
}

/// True when `text` is 17 to 20 ASCII digits.
pub(crate) fn has_id_shape(text: &str) -> bool {
    (MIN_ID_DIGITS..=MAX_ID_DIGITS).contains(&text.len())
        && text.bytes().all(|b| b.is_ascii_digit())
}

impl From<u64> for Snowflake {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl From<Snowflake> for u64 {
    fn from(id: Snowflake) -> Self {
        id.0
    }
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lenient parsing for identifiers coming from a client library: any
/// non-empty run of ASCII digits that fits in a `u64`.
impl FromStr for Snowflake {
    type Err = ResolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ResolverError::InvalidSnowflake(format!(
                "{s:?} is not a decimal identifier"
            )));
        }
        s.parse::<u64>()
            .map(Self)
            .map_err(|err| ResolverError::InvalidSnowflake(format!("{s:?}: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_bounds() {
        assert!(Snowflake::parse_id(&"1".repeat(16)).is_none());
        assert!(Snowflake::parse_id(&"1".repeat(17)).is_some());
        assert!(Snowflake::parse_id(&"1".repeat(20)).is_some());
        assert!(Snowflake::parse_id(&"1".repeat(21)).is_none());
    }

    #[test]
    fn parse_id_rejects_non_ascii_digits() {
        // Arabic-Indic digits are Unicode digits but not identifiers.
        let query = "\u{0661}".repeat(18);
        assert!(Snowflake::parse_id(&query).is_none());
        assert!(Snowflake::parse_id(" 123456789012345678").is_none());
        assert!(Snowflake::parse_id("+123456789012345678").is_none());
    }

    #[test]
    fn parse_id_overflow_is_none() {
        assert_eq!(
            Snowflake::parse_id("18446744073709551615"),
            Some(Snowflake::new(u64::MAX))
        );
        assert!(Snowflake::parse_id("18446744073709551616").is_none());
    }

    #[test]
    fn from_str_accepts_short_ids() {
        let id: Snowflake = "42".parse().expect("short ids parse");
        assert_eq!(id.get(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn from_str_rejects_garbage() {
        let err = "12ab".parse::<Snowflake>().expect_err("not digits");
        assert!(matches!(err, ResolverError::InvalidSnowflake(_)));
        assert!("".parse::<Snowflake>().is_err());
        assert!("99999999999999999999".parse::<Snowflake>().is_err());
    }

    #[test]
    fn serde_is_transparent() {
        let id = Snowflake::new(123456789012345678);
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "123456789012345678");
        let back: Snowflake = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, id);
    }
}
