//! The value transformer and the shipped transformation functions.

use rust_decimal::Decimal;
use serde_json::Value;

use super::attribute::AttrValue;
use super::value_map::ValueRule;

/// Apply a transformation rule to a value.
///
/// - No rule: the value passes through unchanged (its untranslated JSON form).
/// - [`ValueRule::Transform`]: the function's result.
/// - [`ValueRule::Enumerated`]: the table entry for a symbolic token.
///   A token with no entry — or a non-symbolic value — produces `None`,
///   the "no value" outcome. This is not an error; the mapper writes it as
///   JSON `null`, which keeps it distinguishable from an empty string.
/// - [`ValueRule::Nested`] applied to a scalar also produces `None`; nested
///   rules only carry meaning when the mapper descends into a composite.
pub fn transform(value: &AttrValue, rule: Option<&ValueRule>) -> Option<Value> {
    match rule {
        None => Some(value.to_wire()),
        Some(ValueRule::Transform(f)) => Some(f(value)),
        Some(ValueRule::Enumerated(table)) => match value {
            AttrValue::Sym(token) => table
                .get(token.as_str())
                .map(|wire| Value::String((*wire).to_string())),
            _ => None,
        },
        Some(ValueRule::Nested(_)) => None,
    }
}

/// Format a date as `YYYY-MM-DD`. Non-date values pass through unchanged.
pub fn date_ymd(value: &AttrValue) -> Value {
    match value {
        AttrValue::Date(d) => Value::String(d.format("%Y-%m-%d").to_string()),
        other => other.to_wire(),
    }
}

/// Remove every space character, e.g. a bank account number entered in
/// grouped form. Non-string values pass through unchanged.
pub fn strip_spaces(value: &AttrValue) -> Value {
    match value {
        AttrValue::Str(s) => Value::String(s.replace(' ', "")),
        other => other.to_wire(),
    }
}

/// Rescale a percentage-like number to a decimal-fraction string:
/// `23` → `"0.23"`, `7` → `"0.07"`, `22.5` → `"0.225"`.
/// Exact decimal arithmetic; non-numeric values pass through unchanged.
pub fn percent_as_fraction(value: &AttrValue) -> Value {
    let rate = match value {
        AttrValue::Int(i) => Decimal::from(*i),
        AttrValue::Decimal(d) => *d,
        other => return other.to_wire(),
    };
    Value::String((rate / Decimal::ONE_HUNDRED).normalize().to_string())
}
