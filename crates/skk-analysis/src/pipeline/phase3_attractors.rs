//! Phase 3: chunks with at least two occurrences become attractor clusters.

use std::collections::{BTreeMap, BTreeSet};

use skk_core::constants::{
    HYPERFOCUS_WARNING, INTERPRETATION_SEPARATOR, MIN_OCCURRENCES_PER_CLUSTER,
};
use skk_core::errors::PipelineError;
use skk_core::types::{AttractorCluster, MarkerOccurrence, StructureId, Tier};
use tracing::{debug, warn};

use super::context::{AnalysisContext, RunStage};

pub fn form_attractors(
    ctx: &mut AnalysisContext<'_>,
    hyperfocus_threshold: f64,
) -> Result<(), PipelineError> {
    ctx.advance(RunStage::Clustering)?;

    let mut by_chunk: BTreeMap<usize, Vec<&MarkerOccurrence>> = BTreeMap::new();
    for occurrence in &ctx.collections().occurrences {
        by_chunk
            .entry(occurrence.chunk_index)
            .or_default()
            .push(occurrence);
    }

    // (chunk, member ids, score, merged interpretation)
    let candidates: Vec<(usize, Vec<StructureId>, u32, String)> = by_chunk
        .into_iter()
        .filter(|(_, members)| members.len() >= MIN_OCCURRENCES_PER_CLUSTER)
        .map(|(chunk_index, members)| {
            let score = members.iter().map(|o| o.count).sum();
            let ids = members.iter().map(|o| o.id.clone()).collect();
            (chunk_index, ids, score, merge_interpretations(&members))
        })
        .collect();

    for (chunk_index, occurrence_ids, aggregate_score, interpretation) in candidates {
        let runaway = f64::from(aggregate_score) >= hyperfocus_threshold;
        let cluster = AttractorCluster {
            id: ctx.next_id(Tier::Attractor, chunk_index),
            chunk_index,
            occurrence_ids,
            aggregate_score,
            runaway,
            interpretation,
            warning: runaway.then(|| HYPERFOCUS_WARNING.to_string()),
            timestamp: ctx.now(),
        };
        if runaway {
            warn!(structure_id = %cluster.id, score = aggregate_score, "runaway attractor");
        }
        debug!(structure_id = %cluster.id, chunk_index, score = aggregate_score, "attractor formed");
        ctx.collections_mut().clusters.push(cluster);
    }
    Ok(())
}

/// Distinct member interpretations, sorted, joined with ` | `.
fn merge_interpretations(members: &[&MarkerOccurrence]) -> String {
    members
        .iter()
        .map(|o| o.interpretation.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect::<Vec<_>>()
        .join(INTERPRETATION_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::test_support::{detected, fixed_clock};

    #[test]
    fn single_occurrence_chunks_never_cluster() {
        let clock = fixed_clock();
        let mut ctx = detected(&clock, &[(0, 9, "a"), (1, 4, "b"), (2, 1, "c")]);
        form_attractors(&mut ctx, 8.0).unwrap();
        assert!(ctx.collections().clusters.is_empty());
    }

    #[test]
    fn score_is_sum_of_member_counts() {
        let clock = fixed_clock();
        let mut ctx = detected(&clock, &[(0, 3, "a"), (0, 2, "b"), (1, 1, "c")]);
        form_attractors(&mut ctx, 8.0).unwrap();

        let clusters = &ctx.collections().clusters;
        assert_eq!(clusters.len(), 1);
        let cluster = &clusters[0];
        assert_eq!(cluster.chunk_index, 0);
        assert_eq!(cluster.aggregate_score, 5);
        assert_eq!(cluster.occurrence_ids.len(), 2);
        assert!(!cluster.runaway);
        assert!(cluster.warning.is_none());
    }

    #[test]
    fn runaway_at_threshold_inclusive() {
        let clock = fixed_clock();
        let mut ctx = detected(&clock, &[(0, 4, "a"), (0, 4, "b"), (3, 4, "a"), (3, 3, "b")]);
        form_attractors(&mut ctx, 8.0).unwrap();

        let clusters = &ctx.collections().clusters;
        assert_eq!(clusters.len(), 2);
        assert!(clusters[0].runaway);
        assert_eq!(clusters[0].warning.as_deref(), Some(HYPERFOCUS_WARNING));
        assert!(!clusters[1].runaway);
    }

    #[test]
    fn interpretations_are_deduplicated_and_sorted() {
        let clock = fixed_clock();
        let mut ctx = detected(&clock, &[(0, 1, "zeta"), (0, 1, "alpha"), (0, 1, "zeta")]);
        form_attractors(&mut ctx, 8.0).unwrap();
        assert_eq!(ctx.collections().clusters[0].interpretation, "alpha | zeta");
    }
}
