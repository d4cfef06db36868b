use crate::data::RecordSet;
use crate::errors::PipelineError;
use crate::schema::ColumnKey;

/// Local/offshore composition of a record set.
#[derive(Clone, Debug, PartialEq)]
pub struct PartitionBalance {
    /// Total records inspected.
    pub total: usize,
    /// Records matching the local sentinel.
    pub local: usize,
    /// Records matching the offshore sentinel.
    pub offshore: usize,
    /// Records matching neither sentinel. These rows are silently excluded
    /// by the interleave, so a non-zero count flags potential data loss.
    pub unclassified: usize,
    /// Local share of the total (0 when the set is empty).
    pub local_share: f64,
    /// Offshore share of the total (0 when the set is empty).
    pub offshore_share: f64,
}

/// Count local, offshore, and unclassified rows of `set`.
pub fn partition_balance(set: &RecordSet) -> Result<PartitionBalance, PipelineError> {
    let local_sentinel = set.schema().local_sentinel();
    let offshore_sentinel = set.schema().offshore_sentinel();
    let values = set.column_values(ColumnKey::SellerType)?;

    let mut local = 0;
    let mut offshore = 0;
    let mut unclassified = 0;
    for value in &values {
        if *value == local_sentinel {
            local += 1;
        } else if *value == offshore_sentinel {
            offshore += 1;
        } else {
            unclassified += 1;
        }
    }

    let total = values.len();
    let share = |count: usize| {
        if total == 0 {
            0.0
        } else {
            count as f64 / total as f64
        }
    };
    Ok(PartitionBalance {
        total,
        local,
        offshore,
        unclassified,
        local_share: share(local),
        offshore_share: share(offshore),
    })
}
