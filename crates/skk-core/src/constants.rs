//! Fixed tuning constants and default values.
//!
//! The cutoffs here are not configurable. The `DEFAULT_*` values are the
//! fallbacks used by the `effective_*` accessors on the config structs.

/// Default chunk size in words.
pub const DEFAULT_CHUNK_SIZE: usize = 50;

/// Default aggregate score at which a cluster is flagged as runaway.
pub const DEFAULT_HYPERFOCUS_THRESHOLD: f64 = 8.0;

/// Default rigidity at which an anchor is flagged as too rigid.
pub const DEFAULT_RIGIDITY_WARNING: f64 = 0.8;

/// Default clarity copied into every synthesis event.
pub const DEFAULT_CLARITY_THRESHOLD: f64 = 0.9;

/// Minimum occurrences in one chunk before a cluster forms.
pub const MIN_OCCURRENCES_PER_CLUSTER: usize = 2;

/// A cluster crystallizes only when its score is strictly above this.
pub const ANCHOR_SCORE_CUTOFF: u32 = 5;

/// Divisor turning an aggregate score into a rigidity in [0, 1].
pub const RIGIDITY_SCALE: f64 = 10.0;

/// Minimum anchors before a synthesis forms.
pub const MIN_ANCHORS_FOR_SYNTHESIS: usize = 2;

/// Most recent anchors merged into one synthesis.
pub const MAX_ANCHORS_PER_SYNTHESIS: usize = 3;

/// Characters of each anchor text quoted in the synthesis text.
pub const SYNTHESIS_PREVIEW_CHARS: usize = 30;

/// Characters of chunk text kept as occurrence context.
pub const CONTEXT_PREVIEW_CHARS: usize = 200;

/// Separator between member interpretations of a cluster.
pub const INTERPRETATION_SEPARATOR: &str = " | ";

/// Separator between anchor texts in a synthesis integration text.
pub const INTEGRATION_SEPARATOR: &str = " → ";

/// Interpretation used when neither the marker nor the built-in table has one.
pub const FALLBACK_INTERPRETATION: &str = "Unbenannte Regung im Zwischenraum";

/// Warning attached to runaway clusters.
pub const HYPERFOCUS_WARNING: &str = "HYPERFOKUS: Strudel verschlingt andere Bedeutungen!";

/// Warning attached to rigid anchors.
pub const RIGIDITY_WARNING_TEXT: &str = "Zu starre Struktur - kann Perspektive einschränken!";

/// Fixed meaning carried by every synthesis event.
pub const SYNTHESIS_MEANING: &str = "Integration disparater Bedeutungsfelder";

/// Default prefix of report file names.
pub const DEFAULT_REPORT_PREFIX: &str = "skk";

/// Directory (under the output root) that receives report files.
pub const REPORT_DIR: &str = "analysen";

/// Suffix appended to a file that is about to be replaced.
pub const BACKUP_SUFFIX: &str = "bak";

/// Default batch-mode input patterns.
pub const DEFAULT_BATCH_PATTERNS: &[&str] = &["*.txt", "*.log"];

/// Project config file looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "skk.toml";

/// Built-in marker families: (id, interpretation). Each id doubles as its only form.
pub const BUILTIN_MARKERS: &[(&str, &str)] = &[
    ("ahnung", "Vorbewusste Wahrnehmung erwacht"),
    ("gefühl", "Emotionale Resonanz entsteht"),
    ("spüre", "Körperliche Intuition meldet sich"),
    ("entsteh", "Werdender Prozess nimmt Form an"),
    ("drang", "Innerer Impuls drängt zur Manifestation"),
    ("sehnsucht", "Transzendentes Verlangen nach Ganzheit"),
];

/// Look up the built-in interpretation for a marker id.
pub fn builtin_interpretation(marker_id: &str) -> Option<&'static str> {
    BUILTIN_MARKERS
        .iter()
        .find(|(id, _)| *id == marker_id)
        .map(|(_, interpretation)| *interpretation)
}
