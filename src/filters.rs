//! Criteria filters: price range, category allowlist, cluster equality, and
//! stock exclusion. Every filter is a stable sub-selection that returns a new
//! [`RecordSet`] and reports degraded outcomes as soft diagnostics.

use std::collections::HashSet;

use tracing::debug;

use crate::constants::messages::{NO_VALID_CATEGORIES, STOCK_COLUMN_MISSING};
use crate::data::{Diagnostics, RecordSet, Value};
use crate::errors::PipelineError;
use crate::schema::ColumnKey;
use crate::types::{CategoryId, ClusterName, RawToken};
use crate::utils::{normalize_price, parse_category_token};

fn fmt_bound(bound: Option<f64>) -> String {
    bound.map(|v| v.to_string()).unwrap_or_default()
}

/// Price-range filter.
///
/// The price column is normalized first (thousands separators stripped, text
/// coerced to floats); a non-numeric cell aborts the stage. Bounds apply per
/// the fixed decision table: one-sided bounds are open on the other side,
/// equal bounds keep exact matches only, and reversed bounds are swapped
/// before filtering. An empty outcome is reported but not fatal.
pub fn filter_by_price(
    set: &RecordSet,
    mut min: Option<f64>,
    mut max: Option<f64>,
    diags: &mut Diagnostics,
) -> Result<RecordSet, PipelineError> {
    let column = set
        .schema()
        .physical(ColumnKey::Price)
        .ok_or_else(|| PipelineError::UnknownColumn {
            column: ColumnKey::Price.as_str().to_string(),
        })?;

    // Rewrite the price column so later stages see numeric cells.
    let mut normalized = Vec::with_capacity(set.len());
    for record in set.records() {
        let raw = record.get(ColumnKey::Price).unwrap_or(&Value::Missing);
        let price = normalize_price(raw, column)?;
        normalized.push(record.with_value(ColumnKey::Price, Value::Float(price)));
    }
    let normalized = set.from_stage(normalized);

    let price_of = |record: &crate::data::Record| -> f64 {
        record
            .get(ColumnKey::Price)
            .and_then(Value::as_f64)
            .unwrap_or(f64::NAN)
    };

    let filtered = match (min, max) {
        (None, None) => normalized.clone(),
        (Some(lo), None) => normalized.filter(|r| price_of(r) >= lo),
        (None, Some(hi)) => normalized.filter(|r| price_of(r) <= hi),
        (Some(lo), Some(hi)) if lo == hi => normalized.filter(|r| price_of(r) == lo),
        (Some(lo), Some(hi)) => {
            let (lo, hi) = if lo > hi { (hi, lo) } else { (lo, hi) };
            min = Some(lo);
            max = Some(hi);
            normalized.filter(|r| {
                let p = price_of(r);
                p >= lo && p <= hi
            })
        }
    };

    if filtered.is_empty() {
        diags.push(format!(
            "No values for price points min: {}, max: {}.",
            fmt_bound(min),
            fmt_bound(max)
        ));
    }
    debug!(
        rows_in = set.len(),
        rows_out = filtered.len(),
        "price filter applied"
    );
    Ok(filtered)
}

/// Category allowlist filter (Source-B).
///
/// A token is valid iff it is an integer occurring among the set's category
/// values. Invalid tokens are reported in one diagnostic; when no token is
/// valid the set is left unmodified rather than cleared.
pub fn filter_by_categories(
    set: &RecordSet,
    tokens: &[RawToken],
    diags: &mut Diagnostics,
) -> Result<RecordSet, PipelineError> {
    let present: HashSet<CategoryId> = set
        .column_values(ColumnKey::CategoryId)?
        .iter()
        .filter_map(Value::as_i64)
        .collect();

    let mut valid: Vec<CategoryId> = Vec::new();
    let mut invalid: Vec<String> = Vec::new();
    for token in tokens {
        let trimmed = token.trim();
        match parse_category_token(trimmed) {
            Some(id) if present.contains(&id) => {
                if !valid.contains(&id) {
                    valid.push(id);
                }
            }
            _ => invalid.push(trimmed.to_string()),
        }
    }

    if !invalid.is_empty() {
        diags.push(format!("Invalid categories: {invalid:?}."));
    }
    if valid.is_empty() {
        diags.push(NO_VALID_CATEGORIES);
        return Ok(set.clone());
    }

    let allow: HashSet<CategoryId> = valid.into_iter().collect();
    let filtered = set.filter(|record| {
        record
            .get(ColumnKey::CategoryId)
            .and_then(Value::as_i64)
            .is_some_and(|id| allow.contains(&id))
    });
    debug!(
        rows_in = set.len(),
        rows_out = filtered.len(),
        "category filter applied"
    );
    Ok(filtered)
}

/// Distinct cluster labels present in `set`, in first-seen order. Callers
/// use this to offer cluster choices before building criteria.
pub fn clusters(set: &RecordSet) -> Result<Vec<ClusterName>, PipelineError> {
    let values = set.column_values(ColumnKey::Cluster)?;
    let mut seen = Vec::new();
    for value in values {
        if let Value::Str(label) = value {
            if !seen.contains(&label) {
                seen.push(label);
            }
        }
    }
    Ok(seen)
}

/// Cluster equality filter (Source-B). An unknown cluster leaves the set
/// unmodified; other criteria may still yield the rows the caller wants.
pub fn filter_by_cluster(set: &RecordSet, cluster: &ClusterName, diags: &mut Diagnostics) -> RecordSet {
    let Ok(values) = set.column_values(ColumnKey::Cluster) else {
        diags.push("Cluster column not found.");
        diags.push(format!("Cluster: {cluster} not found in source"));
        return set.clone();
    };

    let requested = Value::Str(cluster.clone());
    if !values.iter().any(|value| *value == requested) {
        diags.push(format!("Cluster: {cluster} not found in source"));
        return set.clone();
    }

    let filtered = set.filter(|record| record.get(ColumnKey::Cluster) == Some(&requested));
    debug!(
        rows_in = set.len(),
        rows_out = filtered.len(),
        cluster = %cluster,
        "cluster filter applied"
    );
    filtered
}

/// Stock-exclusion filter (Source-A): drop rows whose stock is exactly zero.
/// A missing stock column is reported and leaves the set unmodified.
pub fn remove_out_of_stock(set: &RecordSet, diags: &mut Diagnostics) -> RecordSet {
    if !set.schema().declares(ColumnKey::Stock) {
        diags.push(STOCK_COLUMN_MISSING);
        return set.clone();
    }
    let filtered = set.filter(|record| record.get(ColumnKey::Stock) != Some(&Value::Int(0)));
    debug!(
        rows_in = set.len(),
        rows_out = filtered.len(),
        "stock filter applied"
    );
    filtered
}
