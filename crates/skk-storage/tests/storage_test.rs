//! Tests for report persistence.

use chrono::{TimeZone, Utc};
use skk_analysis::SkkAnalyzer;
use skk_core::config::SkkConfig;
use skk_core::errors::StorageError;
use skk_core::types::{AnalysisReport, FixedClock};
use skk_storage::ReportStore;

fn analyzer() -> SkkAnalyzer {
    let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 6, 30, 23, 59, 58).unwrap());
    let config = SkkConfig::from_toml("[performance]\nchunk_size = 10\n").unwrap();
    SkkAnalyzer::new(&config).unwrap().with_clock(Box::new(clock))
}

const BATCH_TEXTS: [&str; 3] = [
    "ahnung ahnung gefühl gefühl",
    "drang drang sehnsucht sehnsucht",
    "spüre spüre entsteht entsteht",
];

fn report() -> AnalysisReport {
    let analyzer = analyzer();
    let chunk = "ahnung ahnung ahnung ahnung gefühl gefühl gefühl wort wort wort";
    analyzer.analyze_text(&format!("{chunk} {chunk}")).unwrap()
}

#[test]
fn test_writes_report_and_every_structure() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = ReportStore::new(dir.path(), "skk");
    let report = report();

    let persisted = store.persist(&report).unwrap();

    assert_eq!(
        persisted.report_path,
        dir.path().join("analysen").join("skk_report_20240630_235958.yaml")
    );
    assert!(persisted.report_path.is_file());
    assert!(persisted.backups.is_empty());

    // 4 occurrences, 2 clusters, 2 anchors, 1 synthesis.
    assert_eq!(persisted.structure_paths.len(), 9);
    for path in &persisted.structure_paths {
        assert!(path.is_file(), "{}", path.display());
    }
    for tier_dir in ["flügel", "strudel", "knoten", "kristalle"] {
        assert!(dir.path().join(tier_dir).is_dir(), "{tier_dir}");
    }

    let first = &report.structures.occurrences[0];
    let expected = dir
        .path()
        .join("flügel")
        .join(format!("{}.yaml", first.id));
    assert!(expected.is_file());
}

#[test]
fn test_report_file_roundtrips() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = ReportStore::new(dir.path(), "skk");
    let report = report();
    let persisted = store.persist(&report).unwrap();

    let text = std::fs::read_to_string(&persisted.report_path).unwrap();
    assert!(text.contains("kristalle:"));
    let back: AnalysisReport = serde_yaml::from_str(&text).unwrap();
    assert_eq!(back.counts, report.counts);
    assert_eq!(back.narrative, report.narrative);
}

#[test]
fn test_second_write_keeps_a_backup() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = ReportStore::new(dir.path(), "skk");
    let report = report();

    store.persist(&report).unwrap();
    let second = store.persist(&report).unwrap();

    assert_eq!(second.backups.len(), 1 + second.structure_paths.len());
    let report_backup = dir
        .path()
        .join("analysen")
        .join("skk_report_20240630_235958.yaml.bak");
    assert!(report_backup.is_file());
    assert!(second.report_path.is_file());
}

#[test]
fn test_unwritable_root_is_a_storage_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();

    let store = ReportStore::new(&blocker, "skk");
    let err = store.persist(&report()).unwrap_err();
    assert!(matches!(err, StorageError::CreateDir { .. }));
}

#[test]
fn test_same_second_batch_keeps_every_report() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = ReportStore::new(dir.path(), "skk");
    let analyzer = analyzer();

    let mut written = Vec::new();
    for text in BATCH_TEXTS {
        let report = analyzer.analyze_text(text).unwrap();
        let persisted = store.persist(&report).unwrap();
        assert!(persisted.backups.is_empty());
        written.push((report, persisted));
    }

    let on_disk = std::fs::read_dir(dir.path().join("analysen")).unwrap().count();
    assert_eq!(on_disk, 3);

    for (report, persisted) in &written {
        let text = std::fs::read_to_string(&persisted.report_path).unwrap();
        let back: AnalysisReport = serde_yaml::from_str(&text).unwrap();
        assert_eq!(&back, report);

        let occurrence = &report.structures.occurrences[0];
        let path = dir
            .path()
            .join("flügel")
            .join(format!("{}.yaml", occurrence.id));
        let stored = std::fs::read_to_string(path).unwrap();
        assert!(stored.contains(&occurrence.marker), "{stored}");
    }
}

#[test]
fn test_colliding_runs_survive_as_rotated_backups() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = ReportStore::new(dir.path(), "skk");

    // Separate analyzers restart their run counter, so all three collide.
    let reports: Vec<AnalysisReport> = BATCH_TEXTS
        .iter()
        .map(|text| analyzer().analyze_text(text).unwrap())
        .collect();
    for report in &reports {
        store.persist(report).unwrap();
    }

    let analysen = dir.path().join("analysen");
    let current = analysen.join("skk_report_20240630_235958.yaml");
    let kept = [
        analysen.join("skk_report_20240630_235958.yaml.bak"),
        analysen.join("skk_report_20240630_235958.yaml.bak.1"),
        current,
    ];
    for (path, report) in kept.iter().zip(&reports) {
        let back: AnalysisReport =
            serde_yaml::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(&back, report, "{}", path.display());
    }
}
