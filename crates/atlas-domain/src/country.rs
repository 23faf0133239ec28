//! Country module - the canonical country profile and its neighbor keys

use std::fmt;

/// Short identifier referencing a neighboring country (ISO alpha-3 in
/// practice, e.g. "FRA")
///
/// The code is treated as an opaque string and used only as a lookup key;
/// no normalization or structural validation is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BorderCode(String);

impl BorderCode {
    /// Create a new BorderCode
    ///
    /// # Examples
    ///
    /// ```
    /// use atlas_domain::BorderCode;
    ///
    /// let code = BorderCode::new("BEL");
    /// assert_eq!(code.as_str(), "BEL");
    /// ```
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BorderCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for BorderCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// Canonical profile of a country
///
/// Immutable once constructed; owned solely by the lookup invocation that
/// fetched it and discarded when the next lookup begins. The `capital` and
/// `borders` fields may legitimately be empty - the remote service omits
/// them for countries without a capital or without land neighbors.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryRecord {
    /// Common name (e.g. "France")
    pub name: String,

    /// Capital cities; empty when the service reports none
    pub capital: Vec<String>,

    /// Population count
    pub population: u64,

    /// Geographic region (e.g. "Europe")
    pub region: String,

    /// URL of the country's flag image (SVG)
    pub flag_url: String,

    /// Codes of bordering countries; empty for islands and when absent
    pub borders: Vec<BorderCode>,
}

impl CountryRecord {
    /// The first capital city, if any
    ///
    /// Most countries have exactly one; the display layer shows this one.
    pub fn primary_capital(&self) -> Option<&str> {
        self.capital.first().map(String::as_str)
    }

    /// Whether this country has any land neighbors to look up
    pub fn has_borders(&self) -> bool {
        !self.borders.is_empty()
    }
}
