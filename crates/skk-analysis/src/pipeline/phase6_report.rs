//! Phase 6: counts, warnings, and the narrative, assembled into the report.
//!
//! Building is a pure function of the collections and the run timestamp and stamp,
//! so rebuilding over the same collections is byte-identical.

use std::fmt::Write;

use chrono::{DateTime, Utc};
use skk_core::errors::PipelineError;
use skk_core::types::{AnalysisReport, TierCollections};

use super::context::{AnalysisContext, RunStage};

pub fn build_report(ctx: &mut AnalysisContext<'_>) -> Result<AnalysisReport, PipelineError> {
    ctx.advance(RunStage::Reporting)?;
    let report = assemble_report(ctx.collections(), ctx.started_at(), ctx.stamp());
    ctx.advance(RunStage::Done)?;
    Ok(report)
}

/// Assemble a report over finished collections.
pub fn assemble_report(
    collections: &TierCollections,
    timestamp: DateTime<Utc>,
    stamp: &str,
) -> AnalysisReport {
    AnalysisReport {
        timestamp,
        stamp: stamp.to_string(),
        counts: collections.counts(),
        warnings: collections.warnings(),
        structures: collections.clone(),
        narrative: narrative(collections, timestamp),
    }
}

/// One paragraph per non-empty tier, Tier-1 first, each opening with its count.
pub fn narrative(collections: &TierCollections, timestamp: DateTime<Utc>) -> String {
    let counts = collections.counts();
    let warnings = collections.warnings();
    let mut out = String::new();

    let _ = write!(out, "SKK-Analyse vom {}\n\n", timestamp.format("%d.%m.%Y %H:%M"));

    if counts.occurrences > 0 {
        let _ = write!(
            out,
            "{} Flügel entstanden - Ahnungen und Gefühle, die noch keine Form gefunden haben.\n\n",
            counts.occurrences
        );
    }
    if counts.clusters > 0 {
        let _ = writeln!(
            out,
            "{} Strudel gebildet - Bedeutungen verdichten sich zu Anziehungspunkten.",
            counts.clusters
        );
        if warnings.runaway_clusters > 0 {
            let _ = writeln!(
                out,
                "⚠️ WARNUNG: {} Hyperfokus-Strudel erkannt!",
                warnings.runaway_clusters
            );
        }
        out.push('\n');
    }
    if counts.anchors > 0 {
        let _ = writeln!(
            out,
            "{} Knoten verfestigt - Strukturen geben Halt, können aber auch einschränken.",
            counts.anchors
        );
        if warnings.rigid_anchors > 0 {
            let _ = writeln!(
                out,
                "⚠️ WARNUNG: {} rigide Knoten erkannt!",
                warnings.rigid_anchors
            );
        }
        out.push('\n');
    }
    if counts.syntheses > 0 {
        let _ = write!(
            out,
            "{} Kristalle erschaffen - Aha-Momente bringen Licht in vorher dunkle Bereiche!\n\n",
            counts.syntheses
        );
    }
    out
}
