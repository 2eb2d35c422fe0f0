//! JSON share documents
//!
//! ```json
//! {
//!   "keys": { "n": 4, "k": 3 },
//!   "1": { "base": "10", "value": "4" },
//!   "2": { "base": 2, "value": "111" }
//! }
//! ```
//!
//! Every top-level key other than `keys` is a share identifier. Numbers may be
//! written either as JSON numbers or as strings.

use std::fmt;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde::de::{self, Deserializer, MapAccess, Visitor};

use crate::domain::{RecoveryConfig, ShareCount, Threshold};

/// A JSON number or a string holding one
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Numeral {
    Number(u64),
    Text(String),
}

impl Numeral {
    /// The numeral as text, the form the share decoder consumes
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }

    fn to_usize(&self, field: &str) -> Result<usize> {
        match self {
            Self::Number(n) => usize::try_from(*n).with_context(|| format!("{field} is too large")),
            Self::Text(s) => s
                .trim()
                .parse()
                .with_context(|| format!("{field} {s:?} is not a non-negative integer")),
        }
    }
}

/// The threshold descriptor: `n` shares exist, `k` are required
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Keys {
    pub n: Numeral,
    pub k: Numeral,
}

/// One undecoded share entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawShare {
    pub base: Numeral,
    pub value: String,
}

/// A parsed share document
///
/// Share entries keep document order and repeated identifiers, so a key given
/// twice reaches the decoder as two shares with the same x.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareDocument {
    pub keys: Keys,
    pub shares: Vec<(String, RawShare)>,
}

const KEYS_FIELD: &str = "keys";

struct ShareDocumentVisitor;

impl<'de> Visitor<'de> for ShareDocumentVisitor {
    type Value = ShareDocument;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a share document object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut keys = None;
        let mut shares = Vec::new();

        while let Some(key) = map.next_key::<String>()? {
            if key == KEYS_FIELD {
                if keys.is_some() {
                    return Err(de::Error::duplicate_field(KEYS_FIELD));
                }
                keys = Some(map.next_value::<Keys>()?);
            } else {
                let share = map.next_value::<RawShare>()?;
                shares.push((key, share));
            }
        }

        let keys = keys.ok_or_else(|| de::Error::missing_field(KEYS_FIELD))?;
        Ok(ShareDocument { keys, shares })
    }
}

impl<'de> Deserialize<'de> for ShareDocument {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ShareDocumentVisitor)
    }
}

impl ShareDocument {
    /// Parses a document from JSON text
    ///
    /// # Errors
    /// Returns an error if the text is not JSON, `keys` is missing or repeated, or a
    /// share entry is not a `{ "base", "value" }` object
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Failed to parse share document")
    }

    /// Validates the threshold descriptor
    ///
    /// # Errors
    /// Returns an error if `k < 2` or `n < 1`
    pub fn config(&self) -> Result<RecoveryConfig> {
        let k = self.keys.k.to_usize("keys.k")?;
        let n = self.keys.n.to_usize("keys.n")?;
        Ok(RecoveryConfig::new(Threshold::new(k)?, ShareCount::new(n)?))
    }

    /// Iterates over `(id, base, value)` triples in document order
    pub fn triples(&self) -> impl Iterator<Item = (&str, String, &str)> {
        self.shares
            .iter()
            .map(|(id, share)| (id.as_str(), share.base.to_text(), share.value.as_str()))
    }
}
