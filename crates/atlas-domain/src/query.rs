//! Query module - validated user input for a country lookup

use std::fmt;

/// Reasons raw input is rejected before any network activity
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Input was empty or contained only whitespace
    EmptyInput,

    /// Input parsed entirely as a number (e.g. "123", "-4.5")
    NumericInput,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Please enter a country name"),
            Self::NumericInput => {
                write!(f, "Please enter a valid country name, not a number")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validated user input - trimmed, non-empty, not parseable as a number
///
/// Construction is the validation gate: a `CountryQuery` can only exist if
/// the raw text passed it, so the resolver never sees bad input.
///
/// # Examples
///
/// ```
/// use atlas_domain::{CountryQuery, ValidationError};
///
/// let query = CountryQuery::parse("  France ").unwrap();
/// assert_eq!(query.as_str(), "France");
///
/// assert_eq!(CountryQuery::parse("   "), Err(ValidationError::EmptyInput));
/// assert_eq!(CountryQuery::parse("42"), Err(ValidationError::NumericInput));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CountryQuery(String);

impl CountryQuery {
    /// Validate raw user input into a query
    ///
    /// Trims leading/trailing whitespace, then rejects empty input and
    /// input that parses fully as a signed integer or float.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyInput`] or
    /// [`ValidationError::NumericInput`].
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::EmptyInput);
        }

        // f64 parsing covers integers, floats, and optional signs
        if trimmed.parse::<f64>().is_ok() {
            return Err(ValidationError::NumericInput);
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Get the query text as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: whitespace-only input always fails with EmptyInput
        #[test]
        fn test_whitespace_only_is_empty_input(ws in "[ \\t\\n\\r]*") {
            prop_assert_eq!(
                CountryQuery::parse(&ws),
                Err(ValidationError::EmptyInput)
            );
        }

        /// Property: any finite number formatted as text fails with NumericInput
        #[test]
        fn test_numbers_are_rejected(n in -1.0e9f64..1.0e9f64) {
            let text = format!("{}", n);
            prop_assert_eq!(
                CountryQuery::parse(&text),
                Err(ValidationError::NumericInput)
            );
        }

        /// Property: accepted input is exactly the trimmed original
        #[test]
        fn test_accepted_input_is_trimmed(s in "[a-zA-Z][a-zA-Z ]{0,30}[a-zA-Z]") {
            let padded = format!("  {}\t", s);
            if let Ok(query) = CountryQuery::parse(&padded) {
                prop_assert_eq!(query.as_str(), s.trim());
            }
        }
    }
}
