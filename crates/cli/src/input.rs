//! Line-oriented coordinate parsing for the solve driver.

use anyhow::{bail, Result};
use hullpath::Point;

/// Parse whitespace-separated coordinates into points (`x y x y ...`).
pub fn parse_points(line: &str) -> Result<Vec<Point>> {
    let mut coords = Vec::new();
    for tok in line.split_whitespace() {
        let v: f64 = match tok.parse() {
            Ok(v) => v,
            Err(_) => bail!("invalid coordinate {tok:?}"),
        };
        if !v.is_finite() {
            bail!("coordinate {tok:?} is not finite");
        }
        coords.push(v);
    }
    if coords.len() % 2 != 0 {
        bail!("expected an even number of coordinates, got {}", coords.len());
    }
    Ok(coords.chunks(2).map(|c| Point::new(c[0], c[1])).collect())
}

/// A ring vertex line: exactly one point.
pub fn parse_vertex(line: &str) -> Result<Point> {
    match parse_points(line)?[..] {
        [p] => Ok(p),
        ref other => bail!("expected one vertex per line, got {} points", other.len()),
    }
}

/// A query line: exactly two points.
pub fn parse_query(line: &str) -> Result<(Point, Point)> {
    match parse_points(line)?[..] {
        [p1, p2] => Ok((p1, p2)),
        ref other => bail!("expected two points, got {}", other.len()),
    }
}

/// `x y`, using the shortest float form (`2` rather than `2.0`).
pub fn format_point(p: &Point) -> String {
    format!("{} {}", p.x, p.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pairs_and_ignores_extra_whitespace() {
        let pts = parse_points("  -1 1.5\t3   1e1 ").unwrap();
        assert_eq!(pts, vec![Point::new(-1.0, 1.5), Point::new(3.0, 10.0)]);
        assert!(parse_points("").unwrap().is_empty());
    }

    #[test]
    fn rejects_odd_and_bad_tokens() {
        let err = parse_points("1 2 3").unwrap_err();
        assert_eq!(err.to_string(), "expected an even number of coordinates, got 3");
        assert!(parse_points("1 x").is_err());
        assert!(parse_points("1 inf").is_err());
    }

    #[test]
    fn vertex_and_query_arity() {
        assert_eq!(parse_vertex("0 2").unwrap(), Point::new(0.0, 2.0));
        assert!(parse_vertex("0 2 3 4").is_err());
        let (a, b) = parse_query("-1 1 3 1").unwrap();
        assert_eq!((a, b), (Point::new(-1.0, 1.0), Point::new(3.0, 1.0)));
        assert_eq!(parse_query("1 1").unwrap_err().to_string(), "expected two points, got 1");
    }

    #[test]
    fn formats_without_trailing_zero() {
        assert_eq!(format_point(&Point::new(2.0, -0.5)), "2 -0.5");
    }
}
