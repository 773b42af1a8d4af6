use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use inkgeom::stroke::{resample, stroke_features, FeatureVector};
use inkgeom::synth::{draw_batch, ReplayToken, StrokeKind, SynthCfg};
use serde::Serialize;
use serde_json::{json, Map, Value};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

use io::{read_strokes, write_strokes, StrokeRecord};
use provenance::{code_rev, Sidecar, TableSummary};

#[derive(Parser)]
#[command(name = "inkgeom")]
#[command(about = "Stroke feature extraction and synthetic ink")]
struct Cmd {
    /// Optional run tag; propagated to logs and provenance sidecars
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute one feature vector per stroke of a point table (.csv or .parquet)
    Features {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Resample each stroke first, spacing = bounding-box diagonal / N
        #[arg(long)]
        resample: Option<i32>,
    },
    /// Write seeded synthetic strokes as a point table
    Synth {
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 16)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// line | corner | arc | zigzag
        #[arg(long, default_value = "line")]
        kind: String,
        #[arg(long, default_value_t = 32)]
        points: usize,
        #[arg(long, default_value_t = 0.5)]
        jitter: f64,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Features {
            input,
            out,
            resample,
        } => features(&input, &out, resample, cmd.tag),
        Action::Synth {
            out,
            count,
            seed,
            kind,
            points,
            jitter,
        } => synth(&out, count, seed, &kind, points, jitter, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

/// Output row of the `features` command.
#[derive(Debug, Serialize)]
struct StrokeFeatures {
    stroke: i64,
    points: usize,
    resampled_points: Option<usize>,
    is_line: bool,
    /// Name → value; undefined features serialize as `null`.
    features: Map<String, Value>,
}

fn feature_map(f: &FeatureVector) -> Map<String, Value> {
    f.named()
        .map(|(name, v)| {
            let value = if v.is_finite() { json!(v) } else { Value::Null };
            (name.to_string(), value)
        })
        .collect()
}

/// Features of one stroke; a failed resample falls back to the raw points.
fn extract(record: &StrokeRecord, resample_threshold: Option<i32>) -> StrokeFeatures {
    let resampled = resample_threshold.and_then(|t| match resample(&record.points, t) {
        Ok(pts) => Some(pts),
        Err(err) => {
            tracing::warn!(stroke = record.id, %err, "resample_failed");
            None
        }
    });
    let pts = resampled.as_deref().unwrap_or(&record.points);
    let f = stroke_features(pts);
    let undefined: Vec<&str> = f
        .named()
        .filter(|(_, v)| v.is_nan())
        .map(|(name, _)| name)
        .collect();
    if !undefined.is_empty() {
        tracing::warn!(stroke = record.id, ?undefined, "undefined_features");
    }
    StrokeFeatures {
        stroke: record.id,
        points: record.points.len(),
        resampled_points: resampled.as_ref().map(Vec::len),
        is_line: f.is_line(),
        features: feature_map(&f),
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

fn features(
    input: &Path,
    out: &Path,
    resample_threshold: Option<i32>,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), resample = ?resample_threshold, tag = ?tag, "features");
    if let Some(t) = resample_threshold {
        if t <= 0 {
            bail!("--resample must be positive, got {}", t);
        }
    }
    let strokes = read_strokes(input)?;
    tracing::info!(strokes = strokes.len(), "input_strokes");
    let rows: Vec<StrokeFeatures> = strokes
        .iter()
        .map(|s| extract(s, resample_threshold))
        .collect();
    let lines = rows.iter().filter(|r| r.is_line).count();
    tracing::info!(strokes = rows.len(), lines, "features_done");

    ensure_parent(out)?;
    std::fs::write(out, serde_json::to_vec_pretty(&rows)?)
        .with_context(|| format!("writing {}", out.display()))?;
    Sidecar::new(
        "features",
        json!({
            "input": input.to_string_lossy(),
            "resample": resample_threshold,
            "lines": lines
        }),
    )
    .tag(tag)
    .table(TableSummary::of(&strokes))
    .with_features()
    .write(out)?;
    Ok(())
}

fn synth(
    out: &Path,
    count: usize,
    seed: u64,
    kind: &str,
    points: usize,
    jitter: f64,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(out = %out.display(), count, seed, kind, points, jitter, tag = ?tag, "synth");
    let Some(kind) = StrokeKind::from_name(kind) else {
        bail!("unknown stroke kind `{}` (line | corner | arc | zigzag)", kind);
    };
    let cfg = SynthCfg {
        kind,
        point_count: points,
        jitter,
        ..SynthCfg::default()
    };
    let strokes: Vec<StrokeRecord> = draw_batch(cfg, ReplayToken::new(seed, 0), count)
        .into_iter()
        .enumerate()
        .map(|(k, points)| StrokeRecord {
            id: k as i64,
            points,
        })
        .collect();
    write_strokes(out, &strokes)?;
    Sidecar::new(
        "synth",
        json!({
            "kind": kind.name(),
            "seed": seed,
            "jitter": jitter
        }),
    )
    .tag(tag)
    .table(TableSummary::of(&strokes))
    .write(out)?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = json!({
        "code_rev": code_rev(),
        "inkgeom_version": inkgeom::VERSION,
        "tag": tag,
        "features": inkgeom::stroke::FEATURE_NAMES,
        "eps": inkgeom::tol::EPS
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
