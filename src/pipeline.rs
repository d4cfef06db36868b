//! Fixed-order generation pipeline shared by both schema variants.
//!
//! The variants differ only in the type-specific filter slot: Source-A runs
//! the stock-exclusion filter, Source-B runs the category allowlist and, when
//! requested, the cluster filter. Every run clones the immutable original
//! into a working copy; the caller discards that copy on failure and
//! re-derives a fresh one for the next attempt.

use tracing::debug;

use crate::constants::messages::GENERATION_FAILED;
use crate::criteria::Criteria;
use crate::data::{Diagnostics, RecordSet};
use crate::errors::PipelineError;
use crate::extra::merge_extra_input;
use crate::filters::{filter_by_categories, filter_by_cluster, filter_by_price, remove_out_of_stock};
use crate::schema::{SchemaMapping, SourceKind};
use crate::shuffle::shuffle_by_ratio;
use crate::sort::sort_descending;

/// Schema-specific capabilities the pipeline is parameterized by: the column
/// mapping and the type-specific filter slot.
pub trait SourceProfile {
    /// Column mapping of the source variant.
    fn schema(&self) -> SchemaMapping;

    /// Run the variant's filter slot (stage 3 of the fixed order).
    fn apply_type_filter(
        &self,
        set: &RecordSet,
        criteria: &Criteria,
        diags: &mut Diagnostics,
    ) -> Result<RecordSet, PipelineError>;
}

/// Stock-based Source-A tables: the filter slot is stock exclusion.
pub struct SourceAProfile;

impl SourceProfile for SourceAProfile {
    fn schema(&self) -> SchemaMapping {
        SchemaMapping::source_a()
    }

    fn apply_type_filter(
        &self,
        set: &RecordSet,
        criteria: &Criteria,
        diags: &mut Diagnostics,
    ) -> Result<RecordSet, PipelineError> {
        if criteria.exclude_out_of_stock {
            Ok(remove_out_of_stock(set, diags))
        } else {
            Ok(set.clone())
        }
    }
}

/// Category/cluster Source-B tables: the filter slot is the category
/// allowlist followed by the cluster filter when one is requested.
pub struct SourceBProfile;

impl SourceProfile for SourceBProfile {
    fn schema(&self) -> SchemaMapping {
        SchemaMapping::source_b()
    }

    fn apply_type_filter(
        &self,
        set: &RecordSet,
        criteria: &Criteria,
        diags: &mut Diagnostics,
    ) -> Result<RecordSet, PipelineError> {
        let mut working = match &criteria.categories {
            Some(tokens) => filter_by_categories(set, tokens, diags)?,
            None => set.clone(),
        };
        if let Some(cluster) = &criteria.cluster {
            working = filter_by_cluster(&working, cluster, diags);
        }
        Ok(working)
    }
}

/// Orchestrates the fixed stage order and aggregates diagnostics.
pub struct Pipeline {
    profile: Box<dyn SourceProfile>,
}

impl Pipeline {
    /// Build a pipeline around a source profile.
    pub fn new(profile: Box<dyn SourceProfile>) -> Self {
        Self { profile }
    }

    /// Convenience constructor for one of the two fixed variants.
    pub fn for_kind(kind: SourceKind) -> Self {
        match kind {
            SourceKind::SourceA => Self::new(Box::new(SourceAProfile)),
            SourceKind::SourceB => Self::new(Box::new(SourceBProfile)),
        }
    }

    /// Schema of the profile this pipeline runs.
    pub fn schema(&self) -> SchemaMapping {
        self.profile.schema()
    }

    /// Run the fixed stage sequence on a working clone of `original`.
    ///
    /// Soft diagnostics accumulate in `diags` on both the success and the
    /// failure path. A stage error aborts the run as
    /// [`PipelineError::StageFailure`]; a zero-row completion is the distinct
    /// [`PipelineError::EmptyResult`]. The original set is never mutated.
    pub fn run(
        &self,
        original: &RecordSet,
        criteria: &Criteria,
        diags: &mut Diagnostics,
    ) -> Result<RecordSet, PipelineError> {
        let size_max = criteria.size_max;
        let extra = criteria.extra_input.as_ref();
        let pending_extra = extra.map(|input| input.len()).unwrap_or(0);

        let mut working = original.clone();
        debug!(rows = working.len(), "pipeline run started");

        let filtered = self.profile.apply_type_filter(&working, criteria, diags);
        working = stage(diags, "type_filter", filtered)?;

        if criteria.price_min.is_some() || criteria.price_max.is_some() {
            let priced = filter_by_price(&working, criteria.price_min, criteria.price_max, diags);
            working = stage(diags, "price_filter", priced)?;
        }

        working = sort_descending(&working, criteria.sort_first, criteria.sort_next, diags);

        if let Some(ratio) = criteria.ratio {
            let shuffled = shuffle_by_ratio(&working, ratio, diags);
            working = stage(diags, "shuffle", shuffled)?;
        }

        // Merging after sort and shuffle is contract: extra rows are always
        // prepended, so explicit sort/ratio order only holds for the
        // main-table segment below them.
        if let Some(input) = extra {
            working = merge_extra_input(&working, input);
        }

        if let Some(size_min) = criteria.size_min {
            let total = working.total_size(pending_extra);
            if total < size_min {
                diags.push(format!(
                    "Min size {size_min} not reached. Instead got {total}."
                ));
            }
        }

        if working.total_size(pending_extra) > size_max {
            working = working.truncate(size_max);
        }

        debug!(rows = working.len(), "pipeline run finished");
        if working.is_empty() {
            return Err(PipelineError::EmptyResult);
        }
        Ok(working)
    }
}

/// Convert a stage error into the pipeline-level terminal outcome and record
/// the generation-failed diagnostic.
fn stage<T>(
    diags: &mut Diagnostics,
    name: &'static str,
    result: Result<T, PipelineError>,
) -> Result<T, PipelineError> {
    result.map_err(|err| {
        diags.push(GENERATION_FAILED);
        PipelineError::StageFailure {
            stage: name,
            reason: err.to_string(),
        }
    })
}
