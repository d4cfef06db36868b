//! Ratio interleave of the local and offshore partitions.

use tracing::debug;

use crate::constants::messages::NOT_SHUFFLING;
use crate::criteria::Ratio;
use crate::data::{Diagnostics, Record, RecordSet};
use crate::errors::PipelineError;
use crate::schema::ColumnKey;

/// Reorder `set` into a repeating block cadence of up to `ratio.local`
/// consecutive local records followed by up to `ratio.offshore` consecutive
/// offshore records.
///
/// A zero ratio side drops the opposite partition entirely and returns the
/// remaining partition in its original order. When both sides are positive
/// but the set only holds one partition, no reordering happens and a
/// diagnostic is recorded. Records whose seller-type value matches neither
/// sentinel belong to neither partition and are excluded from interleave
/// output.
pub fn shuffle_by_ratio(
    set: &RecordSet,
    ratio: Ratio,
    diags: &mut Diagnostics,
) -> Result<RecordSet, PipelineError> {
    if ratio.local == 0 && ratio.offshore == 0 {
        return Err(PipelineError::Criteria(
            "ratio must have at least one non-zero side".to_string(),
        ));
    }

    let local = set.schema().local_sentinel();
    let offshore = set.schema().offshore_sentinel();

    if ratio.local == 0 {
        return Ok(set.filter(|record| record.get(ColumnKey::SellerType) == Some(&offshore)));
    }
    if ratio.offshore == 0 {
        return Ok(set.filter(|record| record.get(ColumnKey::SellerType) == Some(&local)));
    }

    let mut locals: Vec<Record> = Vec::new();
    let mut offshores: Vec<Record> = Vec::new();
    for record in set.records() {
        let seller_type = record.get(ColumnKey::SellerType);
        if seller_type == Some(&local) {
            locals.push(record.clone());
        } else if seller_type == Some(&offshore) {
            offshores.push(record.clone());
        }
    }

    if locals.is_empty() || offshores.is_empty() {
        diags.push(NOT_SHUFFLING);
        return Ok(set.clone());
    }

    debug!(
        locals = locals.len(),
        offshores = offshores.len(),
        ratio_local = ratio.local,
        ratio_offshore = ratio.offshore,
        "interleaving partitions"
    );

    let total = locals.len() + offshores.len();
    let mut interleaved: Vec<Record> = Vec::with_capacity(total);
    let mut li = 0;
    let mut oi = 0;
    while interleaved.len() < total {
        for _ in 0..ratio.local {
            if li < locals.len() {
                interleaved.push(locals[li].clone());
                li += 1;
            }
        }
        for _ in 0..ratio.offshore {
            if oi < offshores.len() {
                interleaved.push(offshores[oi].clone());
                oi += 1;
            }
        }
    }

    Ok(set.from_stage(interleaved))
}
