//! Active locale used to qualify keys of localized fields

use crate::{SelectorError, SelectorResult};
use std::fmt;
use std::str::FromStr;

const DEFAULT_LOCALE: &str = "en";

/// Locale identifier such as `en`, `de` or `pt-BR`
///
/// Passed explicitly to each selector; there is no process-wide setting.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale(String);

impl Locale {
    /// Create a locale, validating its characters
    pub fn new(code: impl Into<String>) -> SelectorResult<Self> {
        let code = code.into();
        if Self::is_valid(&code) {
            Ok(Self(code))
        } else {
            Err(SelectorError::InvalidLocale(code))
        }
    }

    /// Check if `code` can be used as a key suffix
    pub fn is_valid(code: &str) -> bool {
        !code.is_empty()
            && code
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    }

    /// Get the locale code
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Qualify a field name with this locale (`description` -> `description.de`)
    pub fn qualify(&self, field: &str) -> String {
        format!("{}.{}", field, self.0)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self(DEFAULT_LOCALE.to_string())
    }
}

impl FromStr for Locale {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Locale {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
