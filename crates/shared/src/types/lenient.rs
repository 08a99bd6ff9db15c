//! Permissive deserialization for monetary amounts.
//!
//! Amounts that are missing, null, or not numeric deserialize to zero instead
//! of rejecting the whole record. Structural problems (missing ids, unknown
//! currencies) are still rejected by the surrounding types.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserializes an amount, coercing anything unusable to zero.
///
/// Use together with `#[serde(default)]` so that an absent field also
/// becomes zero.
pub fn amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().map_or(Decimal::ZERO, coerce))
}

/// Coerces a JSON value into an amount, zero when it is not a number.
#[must_use]
pub fn coerce(value: &Value) -> Decimal {
    match value {
        Value::Number(n) => parse(&n.to_string()),
        Value::String(s) => parse(s),
        _ => Decimal::ZERO,
    }
}

/// Parses textual amounts, accepting scientific notation and a comma as the
/// decimal separator.
#[must_use]
pub fn parse(text: &str) -> Decimal {
    let cleaned = text.trim().replace(',', ".");
    if cleaned.is_empty() {
        return Decimal::ZERO;
    }
    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .unwrap_or(Decimal::ZERO)
}
