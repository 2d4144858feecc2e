//! Property tests for the tier invariants.

use std::collections::BTreeMap;

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use skk_analysis::pipeline::phase4_anchors::rigidity_for;
use skk_analysis::pipeline::phase6_report::assemble_report;
use skk_analysis::{split_into_chunks, SkkAnalyzer};
use skk_core::config::SkkConfig;
use skk_core::types::FixedClock;

const VOCABULARY: &[&str] = &[
    "ahnung", "Gefühl", "spüre", "entsteht", "drang", "Sehnsucht", "wort", "stein", "himmel",
    "fluss", "ahnungslos",
];

fn analyzer(chunk_size: usize, hyperfocus: f64, rigidity_warning: f64) -> SkkAnalyzer {
    let config = SkkConfig::from_toml(&format!(
        "[performance]\nchunk_size = {chunk_size}\n\n[thresholds]\nhyperfocus_threshold = {hyperfocus:?}\nrigidity_warning = {rigidity_warning:?}\n"
    ))
    .unwrap();
    let clock = FixedClock::new(Utc.with_ymd_and_hms(2025, 2, 1, 12, 0, 0).unwrap());
    SkkAnalyzer::new(&config).unwrap().with_clock(Box::new(clock))
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCABULARY), 0..200).prop_map(|w| w.join(" "))
}

proptest! {
    #[test]
    fn prop_cluster_iff_two_occurrences(
        text in text_strategy(),
        chunk_size in 1usize..40,
    ) {
        let report = analyzer(chunk_size, 8.0, 0.8).analyze_text(&text).unwrap();

        let mut per_chunk: BTreeMap<usize, (usize, u32)> = BTreeMap::new();
        for o in &report.structures.occurrences {
            let entry = per_chunk.entry(o.chunk_index).or_default();
            entry.0 += 1;
            entry.1 += o.count;
        }
        let expected: Vec<(usize, u32)> = per_chunk
            .into_iter()
            .filter(|(_, (n, _))| *n >= 2)
            .map(|(chunk, (_, score))| (chunk, score))
            .collect();
        let actual: Vec<(usize, u32)> = report
            .structures
            .clusters
            .iter()
            .map(|c| (c.chunk_index, c.aggregate_score))
            .collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_occurrences_stay_inside_chunks(
        text in text_strategy(),
        chunk_size in 1usize..40,
    ) {
        let chunk_count = split_into_chunks(&text, chunk_size).unwrap().len();
        let report = analyzer(chunk_size, 8.0, 0.8).analyze_text(&text).unwrap();
        for o in &report.structures.occurrences {
            prop_assert!(o.chunk_index < chunk_count);
            prop_assert_eq!(o.count as usize, o.matches.len());
            prop_assert!(o.count >= 1);
        }
    }

    #[test]
    fn prop_warning_flags_match_thresholds(
        text in text_strategy(),
        chunk_size in 2usize..40,
        hyperfocus in 1.0f64..20.0,
        rigidity_warning in 0.0f64..=1.0,
    ) {
        let report = analyzer(chunk_size, hyperfocus, rigidity_warning)
            .analyze_text(&text)
            .unwrap();
        for c in &report.structures.clusters {
            prop_assert_eq!(c.runaway, f64::from(c.aggregate_score) >= hyperfocus);
        }
        for a in &report.structures.anchors {
            prop_assert_eq!(a.rigid, a.rigidity >= rigidity_warning);
            prop_assert_eq!(a.rigidity + a.flexibility, 1.0);
        }
    }

    #[test]
    fn prop_anchor_iff_score_above_five(
        text in text_strategy(),
        chunk_size in 2usize..60,
    ) {
        let report = analyzer(chunk_size, 8.0, 0.8).analyze_text(&text).unwrap();
        let qualifying: Vec<_> = report
            .structures
            .clusters
            .iter()
            .filter(|c| c.aggregate_score > 5)
            .collect();
        prop_assert_eq!(qualifying.len(), report.structures.anchors.len());
        for (cluster, anchor) in qualifying.iter().zip(&report.structures.anchors) {
            prop_assert_eq!(&anchor.cluster_id, &cluster.id);
            prop_assert_eq!(anchor.rigidity, rigidity_for(cluster.aggregate_score));
        }
    }

    #[test]
    fn prop_synthesis_iff_two_anchors(
        text in text_strategy(),
        chunk_size in 2usize..30,
    ) {
        let report = analyzer(chunk_size, 8.0, 0.8).analyze_text(&text).unwrap();
        let anchors = &report.structures.anchors;
        let syntheses = &report.structures.syntheses;
        if anchors.len() >= 2 {
            prop_assert_eq!(syntheses.len(), 1);
            let start = anchors.len().saturating_sub(3);
            let expected: Vec<_> = anchors[start..].iter().map(|a| a.id.clone()).collect();
            prop_assert_eq!(&syntheses[0].anchor_ids, &expected);
        } else {
            prop_assert!(syntheses.is_empty());
        }
    }

    #[test]
    fn prop_report_rebuild_is_identical(
        text in text_strategy(),
        chunk_size in 1usize..30,
    ) {
        let report = analyzer(chunk_size, 8.0, 0.8).analyze_text(&text).unwrap();
        let rebuilt = assemble_report(&report.structures, report.timestamp, &report.stamp);
        prop_assert_eq!(&rebuilt.narrative, &report.narrative);
        prop_assert_eq!(rebuilt.counts, report.counts);
        prop_assert_eq!(rebuilt.warnings, report.warnings);
    }
}
