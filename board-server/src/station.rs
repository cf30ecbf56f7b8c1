//! Station code types.

use std::fmt;

/// Error returned when parsing an invalid CRS code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid CRS code: {reason}")]
pub struct InvalidCrs {
    reason: &'static str,
}

/// A valid 3-letter CRS (Computer Reservation System) station code.
///
/// CRS codes are always 3 uppercase ASCII letters. This type guarantees
/// that any `Crs` value is valid by construction, so the configuration
/// layer can substitute codes into request URLs without further checks.
///
/// # Examples
///
/// ```
/// use board_server::station::Crs;
///
/// let pad = Crs::parse("PAD").unwrap();
/// assert_eq!(pad.as_str(), "PAD");
///
/// // Lowercase is rejected by the strict parser...
/// assert!(Crs::parse("pad").is_err());
///
/// // ...but accepted by the normalizing one.
/// assert_eq!(Crs::parse_normalized("pad").unwrap().as_str(), "PAD");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Crs([u8; 3]);

impl Crs {
    /// Parse a CRS code from a string.
    ///
    /// The input must be exactly 3 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidCrs> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidCrs {
                reason: "must be exactly 3 characters",
            });
        }

        for &b in bytes {
            if !b.is_ascii_uppercase() {
                return Err(InvalidCrs {
                    reason: "must be uppercase ASCII letters A-Z",
                });
            }
        }

        Ok(Crs([bytes[0], bytes[1], bytes[2]]))
    }

    /// Parse a CRS code leniently: trims whitespace and uppercases first.
    ///
    /// Useful for configuration and environment input where users type
    /// "pad" or " kgx ".
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidCrs> {
        Self::parse(&s.trim().to_ascii_uppercase())
    }

    /// Returns the CRS code as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store valid ASCII uppercase letters
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Crs({})", self.as_str())
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn valid_crs_string() -> impl Strategy<Value = String> {
        proptest::string::string_regex("[A-Z]{3}").unwrap()
    }

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in valid_crs_string()) {
            let crs = Crs::parse(&s).unwrap();
            prop_assert_eq!(crs.as_str(), s.as_str());
        }

        /// Lowercase input normalizes to its uppercase form
        #[test]
        fn normalized_uppercases(s in "[a-z]{3}") {
            let crs = Crs::parse_normalized(&s).unwrap();
            let upper = s.to_ascii_uppercase();
            prop_assert_eq!(crs.as_str(), upper.as_str());
        }

        /// Wrong-length strings are always rejected
        #[test]
        fn wrong_length_rejected(s in "[A-Z]{0,2}|[A-Z]{4,10}") {
            prop_assert!(Crs::parse(&s).is_err());
        }
    }
}
