//! Provenance sidecars: `<artifact>.provenance.json` next to every point table
//! or feature file the CLI writes.
//!
//! A sidecar names the build and command that produced the artifact, the size
//! of the stroke table involved, and the constants feature values depend on, so
//! two feature files can be compared without rerunning anything.

use anyhow::{Context, Result};
use inkgeom::stroke::FEATURE_NAMES;
use inkgeom::tol::{CURVINESS_ANGLE_LIMIT, EPS, LINE_CONFIDENCE_THRESHOLD};
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::io::StrokeRecord;

/// Size of a stroke table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TableSummary {
    pub strokes: usize,
    pub points: usize,
    pub timed_points: usize,
}

impl TableSummary {
    pub fn of(strokes: &[StrokeRecord]) -> Self {
        let mut summary = TableSummary {
            strokes: strokes.len(),
            ..TableSummary::default()
        };
        for s in strokes {
            summary.points += s.points.len();
            summary.timed_points += s.points.iter().filter(|p| p.time.is_some()).count();
        }
        summary
    }
}

#[derive(Debug, Serialize)]
struct Tolerances {
    eps: f64,
    line_confidence_threshold: f64,
    curviness_angle_limit: f64,
}

/// Contents of one sidecar; fill with the builder methods, then `write`.
#[derive(Debug, Serialize)]
pub struct Sidecar {
    code_rev: Option<String>,
    inkgeom_version: &'static str,
    command: &'static str,
    tag: Option<String>,
    params: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    table: Option<TableSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    feature_names: Option<Vec<&'static str>>,
    tolerances: Tolerances,
    artifact: String,
}

impl Sidecar {
    pub fn new(command: &'static str, params: Value) -> Self {
        Self {
            code_rev: code_rev(),
            inkgeom_version: inkgeom::VERSION,
            command,
            tag: None,
            params,
            table: None,
            feature_names: None,
            tolerances: Tolerances {
                eps: EPS,
                line_confidence_threshold: LINE_CONFIDENCE_THRESHOLD,
                curviness_angle_limit: CURVINESS_ANGLE_LIMIT,
            },
            artifact: String::new(),
        }
    }

    pub fn tag(mut self, tag: Option<String>) -> Self {
        self.tag = tag;
        self
    }

    pub fn table(mut self, summary: TableSummary) -> Self {
        self.table = Some(summary);
        self
    }

    /// Record the column order of the feature vectors in the artifact.
    pub fn with_features(mut self) -> Self {
        self.feature_names = Some(FEATURE_NAMES.to_vec());
        self
    }

    /// Write the sidecar next to `artifact` and return its path.
    pub fn write(mut self, artifact: &Path) -> Result<PathBuf> {
        self.artifact = artifact.to_string_lossy().into_owned();
        let path = sidecar_path(artifact);
        std::fs::write(&path, serde_json::to_vec_pretty(&self)?)
            .with_context(|| format!("writing {}", path.display()))?;
        tracing::debug!(sidecar = %path.display(), "provenance");
        Ok(path)
    }
}

/// `strokes.csv` → `strokes.provenance.json`.
fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// Commit of the running build: `INKGEOM_GIT_REV` when set, else `git rev-parse`.
pub fn code_rev() -> Option<String> {
    if let Ok(rev) = std::env::var("INKGEOM_GIT_REV") {
        if !rev.is_empty() {
            return Some(rev);
        }
    }
    let out = Command::new("git")
        .args(["rev-parse", "--short=12", "HEAD"])
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    let rev = String::from_utf8(out.stdout).ok()?;
    let rev = rev.trim();
    (!rev.is_empty()).then(|| rev.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkgeom::Point;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_next_to_artifact() {
        assert_eq!(
            sidecar_path(Path::new("/tmp/out/strokes.csv")),
            Path::new("/tmp/out/strokes.provenance.json")
        );
        assert_eq!(
            sidecar_path(Path::new("features")),
            Path::new("features.provenance.json")
        );
    }

    #[test]
    fn summary_counts_strokes_and_timed_points() {
        let strokes = vec![
            StrokeRecord {
                id: 0,
                points: vec![Point::with_time(0.0, 0.0, 0), Point::new(1.0, 0.0)],
            },
            StrokeRecord {
                id: 4,
                points: vec![Point::with_time(2.0, 2.0, 5)],
            },
        ];
        assert_eq!(
            TableSummary::of(&strokes),
            TableSummary {
                strokes: 2,
                points: 3,
                timed_points: 2
            }
        );
        assert_eq!(TableSummary::of(&[]), TableSummary::default());
    }

    #[test]
    fn feature_sidecar_records_table_and_constants() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("features.json");
        std::fs::write(&artifact, "[]").unwrap();
        let summary = TableSummary {
            strokes: 3,
            points: 30,
            timed_points: 30,
        };
        let path = Sidecar::new("features", json!({"resample": 20}))
            .tag(Some("run-7".into()))
            .table(summary)
            .with_features()
            .write(&artifact)
            .unwrap();
        let parsed: Value = serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["command"], "features");
        assert_eq!(parsed["tag"], "run-7");
        assert_eq!(parsed["params"]["resample"], 20);
        assert_eq!(parsed["table"]["points"], 30);
        assert_eq!(parsed["feature_names"].as_array().unwrap().len(), FEATURE_NAMES.len());
        assert_eq!(parsed["tolerances"]["eps"], EPS);
        assert_eq!(parsed["inkgeom_version"], inkgeom::VERSION);
        assert_eq!(parsed["artifact"], artifact.to_string_lossy().as_ref());
    }

    #[test]
    fn optional_sections_are_omitted() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("strokes.csv");
        let path = Sidecar::new("synth", json!({})).write(&artifact).unwrap();
        let parsed: Value = serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap();
        assert!(parsed.get("table").is_none());
        assert!(parsed.get("feature_names").is_none());
        assert_eq!(parsed["tag"], Value::Null);
    }
}
