// Tolerant scalar types
//
// The controller encodes the same field as a number on one firmware and a
// string on the next, and spells booleans a dozen different ways. These
// wrappers keep the canonical value next to the text the controller sent.
// Both decode through `serde_json::Value`, so they behave the same inside
// `#[serde(flatten)]` structs and when decoding from an in-memory value.

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Tokens that decode to `true`, compared case-insensitively. Anything else is `false`.
const TRUTHY: &[&str] = &[
    "1", "true", "yes", "t", "armed", "active", "enabled", "ready", "up", "ok",
];

// ── FlexInt ─────────────────────────────────────────────────────────

/// A numeric field that may arrive as a JSON number, a JSON string or null.
#[derive(Debug, Clone, PartialEq)]
pub struct FlexInt {
    /// Canonical value. Zero when the text does not parse.
    pub val: f64,
    /// Text as sent by the controller, or the number rendered in shortest form.
    pub txt: String,
}

impl FlexInt {
    /// Build from a number, rendering the text in shortest round-trip form.
    pub fn new(val: f64) -> Self {
        Self {
            val,
            txt: val.to_string(),
        }
    }

    /// Build from controller text. Unparseable text yields a zero value.
    pub fn from_text(txt: impl Into<String>) -> Self {
        let txt = txt.into();
        let val = txt.parse().unwrap_or(0.0);
        Self { val, txt }
    }

    /// Decode a single JSON value.
    ///
    /// Objects, arrays and booleans are rejected; the error names the value.
    pub fn from_value(value: &Value) -> Result<Self, String> {
        match value {
            Value::Number(n) => Ok(Self::new(n.as_f64().unwrap_or_default())),
            Value::String(s) => Ok(Self::from_text(s.as_str())),
            Value::Null => Ok(Self::default()),
            other => Err(format!("cannot unmarshal to FlexInt: {other}")),
        }
    }
}

impl Default for FlexInt {
    fn default() -> Self {
        Self {
            val: 0.0,
            txt: "0".into(),
        }
    }
}

impl From<f64> for FlexInt {
    fn from(val: f64) -> Self {
        Self::new(val)
    }
}

impl fmt::Display for FlexInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.txt)
    }
}

impl<'de> Deserialize<'de> for FlexInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value).map_err(D::Error::custom)
    }
}

impl Serialize for FlexInt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.val)
    }
}

// ── FlexBool ────────────────────────────────────────────────────────

/// A boolean field the controller spells as `1`, `"yes"`, `"Armed"`, `"up"`...
///
/// Decoding never fails: unknown spellings are kept as text and read as `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlexBool {
    pub val: bool,
    /// Original token with one layer of surrounding quotes removed.
    pub txt: String,
}

impl FlexBool {
    /// Interpret a token against the truthy vocabulary.
    pub fn from_text(txt: impl Into<String>) -> Self {
        let txt = txt.into();
        let val = TRUTHY.iter().any(|token| token.eq_ignore_ascii_case(&txt));
        Self { val, txt }
    }

    /// Decode a single JSON value. Strings contribute their unescaped
    /// contents. Numbers contribute their source text exactly as sent, and
    /// every other kind contributes its compact JSON text.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(s) => Self::from_text(s.as_str()),
            other => Self::from_text(strip_quotes(&other.to_string())),
        }
    }
}

impl From<bool> for FlexBool {
    fn from(val: bool) -> Self {
        Self {
            val,
            txt: val.to_string(),
        }
    }
}

impl fmt::Display for FlexBool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.txt)
    }
}

impl<'de> Deserialize<'de> for FlexBool {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

impl Serialize for FlexBool {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(self.val)
    }
}

/// Remove one leading and one trailing `"`, if present.
fn strip_quotes(raw: &str) -> &str {
    let raw = raw.strip_prefix('"').unwrap_or(raw);
    raw.strip_suffix('"').unwrap_or(raw)
}
