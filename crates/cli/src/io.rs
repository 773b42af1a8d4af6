//! Point tables on disk: one row per sample, columns `stroke, x, y[, t]`.
//!
//! CSV and Parquet are both read through polars' lazy scanners; rows are grouped
//! into strokes by id, keeping row order inside each stroke.

use anyhow::{bail, Context, Result};
use inkgeom::Point;
use polars::prelude::*;
use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

/// One stroke as stored in a point table.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeRecord {
    pub id: i64,
    pub points: Vec<Point>,
}

/// Point-table encoding, chosen by file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TableFormat {
    Csv,
    Parquet,
}

impl TableFormat {
    fn of(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("csv") => Ok(TableFormat::Csv),
            Some("parquet") => Ok(TableFormat::Parquet),
            other => bail!("unsupported point table {:?} (expected .csv or .parquet)", other),
        }
    }
}

fn scan(path: &Path) -> Result<LazyFrame> {
    Ok(match TableFormat::of(path)? {
        TableFormat::Csv => LazyCsvReader::new(path)
            .with_infer_schema_length(Some(100))
            .finish()?,
        TableFormat::Parquet => LazyFrame::scan_parquet(path, ScanArgsParquet::default())?,
    })
}

fn f64_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let cast = df
        .column(name)
        .with_context(|| format!("missing column `{}`", name))?
        .cast(&DataType::Float64)?;
    let values = cast.f64()?;
    values
        .into_iter()
        .enumerate()
        .map(|(row, v)| v.with_context(|| format!("null `{}` at row {}", name, row)))
        .collect()
}

fn i64_column(df: &DataFrame, name: &str) -> Result<Vec<Option<i64>>> {
    let cast = df
        .column(name)
        .with_context(|| format!("missing column `{}`", name))?
        .cast(&DataType::Int64)?;
    Ok(cast.i64()?.into_iter().collect())
}

/// Read a point table and group it into strokes ordered by id.
pub fn read_strokes(path: &Path) -> Result<Vec<StrokeRecord>> {
    let df = scan(path)?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    let ids = i64_column(&df, "stroke")?;
    let xs = f64_column(&df, "x")?;
    let ys = f64_column(&df, "y")?;
    let ts = if df.column("t").is_ok() {
        i64_column(&df, "t")?
    } else {
        vec![None; df.height()]
    };
    tracing::debug!(rows = df.height(), has_time = ts.iter().any(Option::is_some), "point_table");

    let mut grouped: BTreeMap<i64, Vec<Point>> = BTreeMap::new();
    for (row, id) in ids.into_iter().enumerate() {
        let id = id.with_context(|| format!("null `stroke` at row {}", row))?;
        grouped.entry(id).or_default().push(Point {
            xy: inkgeom::Vec2::new(xs[row], ys[row]),
            time: ts[row],
        });
    }
    Ok(grouped
        .into_iter()
        .map(|(id, points)| StrokeRecord { id, points })
        .collect())
}

/// Write strokes as a point table (format chosen by extension).
pub fn write_strokes(path: &Path, strokes: &[StrokeRecord]) -> Result<()> {
    let format = TableFormat::of(path)?;
    let n: usize = strokes.iter().map(|s| s.points.len()).sum();
    let mut ids = Vec::with_capacity(n);
    let mut xs = Vec::with_capacity(n);
    let mut ys = Vec::with_capacity(n);
    let mut ts = Vec::with_capacity(n);
    for s in strokes {
        for p in &s.points {
            ids.push(s.id);
            xs.push(p.x());
            ys.push(p.y());
            ts.push(p.time);
        }
    }
    let mut df = df!(
        "stroke" => ids,
        "x" => xs,
        "y" => ys,
        "t" => ts
    )?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    match format {
        TableFormat::Csv => {
            CsvWriter::new(&mut file).finish(&mut df)?;
        }
        TableFormat::Parquet => {
            ParquetWriter::new(&mut file).finish(&mut df)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkgeom::synth::{draw_batch, ReplayToken, SynthCfg};
    use tempfile::tempdir;

    fn sample() -> Vec<StrokeRecord> {
        draw_batch(SynthCfg::default(), ReplayToken::new(5, 0), 3)
            .into_iter()
            .enumerate()
            .map(|(k, points)| StrokeRecord {
                id: k as i64,
                points,
            })
            .collect()
    }

    fn assert_same(a: &[StrokeRecord], b: &[StrokeRecord]) {
        assert_eq!(a.len(), b.len());
        for (sa, sb) in a.iter().zip(b) {
            assert_eq!(sa.id, sb.id);
            assert_eq!(sa.points.len(), sb.points.len());
            for (p, q) in sa.points.iter().zip(&sb.points) {
                assert!((p.xy - q.xy).norm() < 1e-6);
                assert_eq!(p.time, q.time);
            }
        }
    }

    #[test]
    fn csv_table_groups_by_stroke() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("strokes.csv");
        let strokes = sample();
        write_strokes(&path, &strokes).unwrap();
        assert_same(&strokes, &read_strokes(&path).unwrap());
    }

    #[test]
    fn parquet_table_groups_by_stroke() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("strokes.parquet");
        let strokes = sample();
        write_strokes(&path, &strokes).unwrap();
        assert_same(&strokes, &read_strokes(&path).unwrap());
    }

    #[test]
    fn untimed_csv_and_interleaved_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("hand.csv");
        std::fs::write(&path, "stroke,x,y\n2,0,0\n1,5,5\n2,3,4\n1,6,5\n").unwrap();
        let strokes = read_strokes(&path).unwrap();
        assert_eq!(strokes.len(), 2);
        assert_eq!(strokes[0].id, 1);
        assert_eq!(strokes[1].points, vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0)]);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        assert!(read_strokes(Path::new("strokes.txt")).is_err());
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/strokes.txt");
        assert!(write_strokes(&path, &sample()).is_err());
        assert!(!path.exists());
        assert!(!dir.path().join("nested").exists());
    }
}
