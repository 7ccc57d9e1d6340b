//! Scalar values and their canonical encodings.

use std::fmt::{self, Write};

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Number;

/// Terminal datum of a value graph.
///
/// The timestamp variant is a distinguished temporal scalar: it always
/// classifies as a scalar, never as a keyed map.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(Number),
    Text(String),
    Timestamp(DateTime<Utc>),
}

impl Scalar {
    pub fn is_timestamp(&self) -> bool {
        matches!(self, Scalar::Timestamp(_))
    }

    /// Canonical JSON literal for this scalar.
    ///
    /// Booleans and numbers render as their standard literals, text as a
    /// double-quoted escaped string, timestamps as a quoted ISO-8601 instant
    /// (millisecond precision, UTC, `Z` suffix), and `Null` as `null`. The
    /// output is byte-identical to what `serde_json` produces for the same
    /// primitive.
    pub fn to_json_literal(&self) -> String {
        match self {
            Scalar::Null => "null".to_string(),
            Scalar::Bool(b) => b.to_string(),
            Scalar::Number(n) => n.to_string(),
            Scalar::Text(s) => json_quote(s),
            Scalar::Timestamp(ts) => json_quote(&iso_instant(ts)),
        }
    }

    /// Plain textual form with no quoting.
    ///
    /// Two scalars whose plain forms coincide (the number `5` and the text
    /// `"5"`) are indistinguishable here; the digest contract depends on
    /// that.
    pub fn to_plain(&self) -> String {
        match self {
            Scalar::Null => "null".to_string(),
            Scalar::Bool(b) => b.to_string(),
            Scalar::Number(n) => n.to_string(),
            Scalar::Text(s) => s.clone(),
            Scalar::Timestamp(ts) => iso_instant(ts),
        }
    }
}

/// ISO-8601 instant with millisecond precision, UTC, `Z` suffix.
pub fn iso_instant(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Double-quote and escape `s` with standard JSON escaping.
pub fn json_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                write!(out, "\\u{:04x}", c as u32).unwrap();
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Rendering strategy carried by an encoded scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Canonical JSON literal: `null`, `true`, `4711`, `"quoted"`.
    Json,
    /// Raw textual form with no quoting; the digest collector's view.
    Plain,
}

/// A scalar paired with the strategy used to render it.
///
/// Immutable once constructed; owned by the value event that carries it.
/// [`EncodedScalar::as_value`] exposes the unencoded scalar for consumers
/// that need the underlying value, and the `Display` impl renders the
/// encoded textual form.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedScalar {
    scalar: Scalar,
    encoding: Encoding,
}

impl EncodedScalar {
    /// Pair a scalar with the canonical JSON literal strategy.
    pub fn json(scalar: Scalar) -> Self {
        Self {
            scalar,
            encoding: Encoding::Json,
        }
    }

    /// Pair a scalar with the raw/plain strategy.
    pub fn plain(scalar: Scalar) -> Self {
        Self {
            scalar,
            encoding: Encoding::Plain,
        }
    }

    /// The unencoded scalar behind this value.
    pub fn as_value(&self) -> &Scalar {
        &self.scalar
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }
}

impl fmt::Display for EncodedScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self.encoding {
            Encoding::Json => self.scalar.to_json_literal(),
            Encoding::Plain => self.scalar.to_plain(),
        };
        f.write_str(&text)
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::Number(Number::from(v))
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Number(Number::from(v))
    }
}

impl From<u64> for Scalar {
    fn from(v: u64) -> Self {
        Scalar::Number(Number::from(v))
    }
}

impl From<f64> for Scalar {
    /// Non-finite floats have no JSON literal and become `Null`, matching
    /// what a standard JSON serializer does with them.
    fn from(v: f64) -> Self {
        Number::from_f64(v).map_or(Scalar::Null, Scalar::Number)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::Text(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::Text(v)
    }
}

impl From<DateTime<Utc>> for Scalar {
    fn from(v: DateTime<Utc>) -> Self {
        Scalar::Timestamp(v)
    }
}
