use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

use crate::validation::ValidationError;

fn decimal_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^-?[0-9]+(\.[0-9]+)?$").expect("invalid regex"))
}

/// Unix timestamp at which a request was signed.
///
/// Keeps the exact decimal text it was created from, so a received
/// `Versia-Signed-At` value (which may carry a fractional part, e.g.
/// `1718131234.567`) is reproduced byte for byte in the canonical string.
/// Timestamps created locally are whole seconds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SignedAt {
    text: String,
    secs: i64,
}

impl SignedAt {
    /// Creates a timestamp from whole seconds since the Unix epoch.
    pub fn from_secs(secs: i64) -> Self {
        Self {
            text: secs.to_string(),
            secs,
        }
    }

    /// Parses a decimal seconds value: optional `-`, digits, optional
    /// fraction. The text is kept verbatim.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        if !decimal_pattern().is_match(value) {
            return Err(ValidationError::PatternMismatch {
                field: "signed_at",
                value: value.to_string(),
            });
        }
        let whole = value.split('.').next().unwrap_or(value);
        let secs = whole
            .parse::<i64>()
            .map_err(|_| ValidationError::OutOfBounds {
                field: "signed_at",
                value: value.to_string(),
            })?;
        Ok(Self {
            text: value.to_string(),
            secs,
        })
    }

    /// Whole seconds since the Unix epoch; any fraction is truncated toward zero.
    pub fn as_secs(&self) -> i64 {
        self.secs
    }

    /// Decimal text as signed and sent.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl From<i64> for SignedAt {
    fn from(secs: i64) -> Self {
        Self::from_secs(secs)
    }
}

impl TryFrom<String> for SignedAt {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SignedAt> for String {
    fn from(signed_at: SignedAt) -> Self {
        signed_at.text
    }
}

impl fmt::Display for SignedAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
