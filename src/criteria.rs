use serde::{Deserialize, Serialize};

use crate::constants::pipeline::DEFAULT_SIZE_MAX;
use crate::extra::ExtraInput;
use crate::schema::ColumnKey;
use crate::types::{ClusterName, RawToken};

/// Local:offshore block cadence for the ratio interleave.
///
/// Both sides are non-negative; at least one must be positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ratio {
    /// Consecutive local records per block.
    pub local: u32,
    /// Consecutive offshore records per block.
    pub offshore: u32,
}

/// All generation options for one pipeline run. Every field is optional
/// unless noted; `Default` produces a pass-through run capped at 5000 rows.
#[derive(Clone, Debug)]
pub struct Criteria {
    /// Minimum collection size; shortfall is reported, never padded.
    pub size_min: Option<usize>,
    /// Maximum collection size; the head of the final order survives.
    pub size_max: usize,
    /// Manual (seller, product) pairs prepended with priority.
    pub extra_input: Option<ExtraInput>,
    /// Raw category tokens to allowlist (Source-B only).
    pub categories: Option<Vec<RawToken>>,
    /// Exact cluster label to keep (Source-B only).
    pub cluster: Option<ClusterName>,
    /// Lower price bound, inclusive.
    pub price_min: Option<f64>,
    /// Upper price bound, inclusive.
    pub price_max: Option<f64>,
    /// Primary descending sort key.
    pub sort_first: Option<ColumnKey>,
    /// Secondary descending sort key.
    pub sort_next: Option<ColumnKey>,
    /// Local:offshore interleave cadence; absent skips the shuffle stage.
    pub ratio: Option<Ratio>,
    /// Drop rows with zero stock (Source-A only).
    pub exclude_out_of_stock: bool,
}

impl Default for Criteria {
    fn default() -> Self {
        Self {
            size_min: None,
            size_max: DEFAULT_SIZE_MAX,
            extra_input: None,
            categories: None,
            cluster: None,
            price_min: None,
            price_max: None,
            sort_first: None,
            sort_next: None,
            ratio: None,
            exclude_out_of_stock: false,
        }
    }
}

/// Clamp a raw user size override to the hard cap.
pub fn clamp_size_max(user_size: usize) -> usize {
    user_size.min(DEFAULT_SIZE_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_criteria_is_pass_through() {
        let criteria = Criteria::default();
        assert_eq!(criteria.size_max, DEFAULT_SIZE_MAX);
        assert!(criteria.ratio.is_none());
        assert!(!criteria.exclude_out_of_stock);
    }

    #[test]
    fn size_override_is_clamped() {
        assert_eq!(clamp_size_max(300), 300);
        assert_eq!(clamp_size_max(99_999), DEFAULT_SIZE_MAX);
    }
}
