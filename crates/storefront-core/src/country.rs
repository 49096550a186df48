//! Country code segment.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// A lowercase two-letter country code (e.g. `us`, `dk`).
///
/// Every locale-scoped storefront URL starts with one of these as its first
/// path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode(pub(crate) String);

impl CountryCode {
    /// Parse a country code, normalizing to lowercase.
    ///
    /// Surrounding whitespace is ignored. Anything other than exactly two
    /// ASCII letters is rejected.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let code = raw.trim();
        if code.len() != 2 || !code.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(CoreError::InvalidCountryCode(raw.to_string()));
        }
        Ok(Self(code.to_ascii_lowercase()))
    }

    /// Get the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CountryCode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CountryCode {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.0
    }
}

impl AsRef<str> for CountryCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lowercases() {
        let code = CountryCode::parse("DK").unwrap();
        assert_eq!(code.as_str(), "dk");
        assert_eq!(code.to_string(), "dk");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(CountryCode::parse(" us ").unwrap().as_str(), "us");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        for raw in ["", "u", "usa", "u1", "--", "dé"] {
            assert_eq!(
                CountryCode::parse(raw),
                Err(CoreError::InvalidCountryCode(raw.to_string())),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_serde_as_plain_string() {
        let code: CountryCode = serde_json::from_str("\"GB\"").unwrap();
        assert_eq!(code.as_str(), "gb");
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"gb\"");
    }

    #[test]
    fn test_serde_rejects_invalid() {
        assert!(serde_json::from_str::<CountryCode>("\"united states\"").is_err());
    }
}
