//! Solve driver: polygon ring, then one shortest-path query per line.
//!
//! Input
//! - One vertex per line until a line repeats the first vertex (ring closure).
//! - Then one query per line: `x1 y1 x2 y2`. Blank lines are skipped.
//!
//! Output
//! - `text`: `Case #n: x y -> x y -> ...` or `Case #n: <error>`.
//! - `json`: one object per line, `{"case":n,"path":[[x,y],...]}` or
//!   `{"case":n,"error":"..."}`.
//! - A rejected polygon writes its error as the only line and stops.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use hullpath::{ConvexPolygon, Point};
use serde::Serialize;

use crate::input::{format_point, parse_query, parse_vertex};
use crate::provenance::{write_sidecar, Payload};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Text,
    Json,
}

/// Counts reported in logs and the provenance sidecar.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Summary {
    pub vertices: usize,
    pub cases: usize,
    pub failures: usize,
    pub rejected: Option<String>,
}

#[derive(Serialize)]
struct CaseRow<'a> {
    case: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<Vec<[f64; 2]>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

/// Run the driver over `reader`, writing one line per query to `out`.
pub fn solve<R: BufRead, W: Write>(reader: R, out: &mut W, format: Format) -> Result<Summary> {
    let mut ring: Vec<Point> = Vec::new();
    let mut polygon: Option<ConvexPolygon> = None;
    let mut summary = Summary::default();

    for (i, line) in reader.lines().enumerate() {
        let lineno = i + 1;
        let line = line.with_context(|| format!("reading line {lineno}"))?;
        if line.trim().is_empty() {
            continue;
        }

        if let Some(poly) = polygon.as_ref() {
            summary.cases += 1;
            let case = summary.cases;
            let outcome = parse_query(&line)
                .and_then(|(p1, p2)| poly.shortest_path(p1, p2).map_err(anyhow::Error::from));
            match outcome {
                Ok(path) => write_path(out, format, case, &path)?,
                Err(e) => {
                    summary.failures += 1;
                    let msg = e.to_string();
                    tracing::warn!(case, line = lineno, error = %msg, "query_failed");
                    write_error(out, format, Some(case), &msg)?;
                }
            }
            continue;
        }

        let p = parse_vertex(&line).with_context(|| format!("line {lineno}: polygon vertex"))?;
        if ring.first() != Some(&p) {
            ring.push(p);
            continue;
        }
        match ConvexPolygon::new(std::mem::take(&mut ring)) {
            Ok(poly) => {
                tracing::info!(
                    vertices = poly.vertex_count(),
                    orientation = ?poly.orientation(),
                    "polygon"
                );
                summary.vertices = poly.vertex_count();
                polygon = Some(poly);
            }
            Err(e) => {
                let msg = e.to_string();
                tracing::warn!(line = lineno, error = %msg, "polygon_rejected");
                write_error(out, format, None, &msg)?;
                summary.rejected = Some(msg);
                return Ok(summary);
            }
        }
    }

    if polygon.is_none() {
        bail!(
            "input ended before the polygon ring closed ({} vertices read)",
            ring.len()
        );
    }
    Ok(summary)
}

/// File wrapper around `solve`: creates the output directory, writes the
/// result file and its provenance sidecar.
pub fn solve_file(input: &Path, out: &Path, format: Format) -> Result<Summary> {
    tracing::info!(input = %input.display(), out = %out.display(), ?format, "solve");
    let reader = BufReader::new(
        File::open(input).with_context(|| format!("opening {}", input.display()))?,
    );
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let mut writer = BufWriter::new(
        File::create(out).with_context(|| format!("creating {}", out.display()))?,
    );
    let summary = solve(reader, &mut writer, format)?;
    writer
        .flush()
        .with_context(|| format!("writing {}", out.display()))?;
    tracing::info!(
        vertices = summary.vertices,
        cases = summary.cases,
        failures = summary.failures,
        rejected = summary.rejected.is_some(),
        "solved"
    );

    let params = serde_json::json!({
        "input": input.to_string_lossy(),
        "format": format,
        "summary": summary,
    });
    write_sidecar(out, Payload::new(params))?;
    Ok(summary)
}

fn write_path<W: Write>(out: &mut W, format: Format, case: usize, path: &[Point]) -> Result<()> {
    match format {
        Format::Text => {
            let joined: Vec<String> = path.iter().map(format_point).collect();
            writeln!(out, "Case #{case}: {}", joined.join(" -> "))?;
        }
        Format::Json => {
            let row = CaseRow {
                case,
                path: Some(path.iter().map(|p| [p.x, p.y]).collect()),
                error: None,
            };
            writeln!(out, "{}", serde_json::to_string(&row)?)?;
        }
    }
    Ok(())
}

fn write_error<W: Write>(out: &mut W, format: Format, case: Option<usize>, msg: &str) -> Result<()> {
    match (format, case) {
        (Format::Text, Some(case)) => writeln!(out, "Case #{case}: {msg}")?,
        (Format::Text, None) => writeln!(out, "{msg}")?,
        (Format::Json, Some(case)) => {
            let row = CaseRow {
                case,
                path: None,
                error: Some(msg),
            };
            writeln!(out, "{}", serde_json::to_string(&row)?)?;
        }
        (Format::Json, None) => writeln!(out, "{}", serde_json::json!({ "error": msg }))?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    const SQUARE: &str = "0 0\n2 0\n2 2\n0 2\n0 0\n";

    fn run(input: &str, format: Format) -> (Result<Summary>, String) {
        let mut out = Vec::new();
        let res = solve(Cursor::new(input), &mut out, format);
        (res, String::from_utf8(out).unwrap())
    }

    #[test]
    fn text_cases_numbered_and_errors_inline() {
        let input = format!("{SQUARE}-1 1 3 1\n\n1 1 5 5\n-1 0 3 0\n1 2 3\n");
        let (res, out) = run(&input, Format::Text);
        let summary = res.unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Case #1: -1 1 -> 0 0 -> 2 0 -> 3 1",
                "Case #2: the first point is inside the polygon",
                "Case #3: -1 0 -> 3 0",
                "Case #4: expected an even number of coordinates, got 3",
            ]
        );
        assert_eq!(
            summary,
            Summary {
                vertices: 4,
                cases: 4,
                failures: 2,
                rejected: None
            }
        );
    }

    #[test]
    fn rejected_polygon_stops_processing() {
        let input = "0 0\n2 0\n1 1\n2 2\n0 2\n0 0\n-1 1 3 1\n";
        let (res, out) = run(input, Format::Text);
        let summary = res.unwrap();
        assert!(summary.rejected.is_some());
        assert_eq!(summary.cases, 0);
        assert_eq!(out.lines().count(), 1);
        assert!(out.starts_with("the points do not form a convex polygon"));
    }

    #[test]
    fn unclosed_ring_is_an_error() {
        let (res, out) = run("0 0\n2 0\n2 2\n", Format::Text);
        assert!(res.is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn json_rows_parse() {
        let input = format!("{SQUARE}-1 1 3 1\n5 5 1 1\n");
        let (res, out) = run(&input, Format::Json);
        res.unwrap();
        let rows: Vec<serde_json::Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["case"], 1);
        assert_eq!(rows[0]["path"].as_array().unwrap().len(), 4);
        assert_eq!(rows[0]["path"][1], serde_json::json!([0.0, 0.0]));
        assert_eq!(rows[1]["error"], "the second point is inside the polygon");
        assert!(rows[1].get("path").is_none());
    }

    #[test]
    fn solve_file_writes_output_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.txt");
        fs::write(&input, format!("{SQUARE}-1 1 3 1\n")).unwrap();
        let out = dir.path().join("nested/output.txt");
        let summary = solve_file(&input, &out, Format::Text).unwrap();
        assert_eq!(summary.cases, 1);
        assert_eq!(
            fs::read_to_string(&out).unwrap(),
            "Case #1: -1 1 -> 0 0 -> 2 0 -> 3 1\n"
        );
        let sidecar = dir.path().join("nested/output.provenance.json");
        let doc: serde_json::Value = serde_json::from_slice(&fs::read(sidecar).unwrap()).unwrap();
        assert_eq!(doc["params"]["summary"]["cases"], 1);
        assert_eq!(doc["params"]["format"], "text");
    }
}
