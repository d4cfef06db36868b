//! Numeric token helpers shared by filters and the extra-input parser.

use crate::data::Value;
use crate::errors::PipelineError;
use crate::types::CategoryId;

/// Coerce a price cell to a float, stripping `,` thousands separators from
/// text cells (`"1,500,232"` becomes `1500232.0`).
pub fn normalize_price(value: &Value, column: &str) -> Result<f64, PipelineError> {
    if let Some(v) = value.as_f64() {
        return Ok(v);
    }
    if let Value::Str(raw) = value {
        let stripped: String = raw.chars().filter(|ch| *ch != ',').collect();
        if let Ok(v) = stripped.trim().parse::<f64>() {
            return Ok(v);
        }
    }
    Err(PipelineError::NonNumericValue {
        column: column.to_string(),
        value: value.to_string(),
    })
}

/// Parse an all-digit token into an identifier. Signs, decimal points, and
/// inner whitespace all disqualify the token.
pub fn parse_digits(token: &str) -> Option<i64> {
    if token.is_empty() || !token.chars().all(|ch| ch.is_ascii_digit()) {
        return None;
    }
    token.parse::<i64>().ok()
}

/// Parse a raw category token: surrounding whitespace is tolerated, the rest
/// must be digits.
pub fn parse_category_token(token: &str) -> Option<CategoryId> {
    parse_digits(token.trim())
}
