//! Point files.
//!
//! One point per line, in any of the forms `(x, y)`, `x y` or `x,y`.
//! Blank lines and lines starting with `#` are skipped. Files are written
//! in the `(x, y)` form with shortest round-trip float formatting, so a
//! saved file loads back to bit-identical coordinates.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use thiserror::Error as ThisError;

use crate::error::Error;
use crate::graph::{Graph, Point};

pub use crate::graph::random_points;

/// Failure to read, parse or write a point file.
#[derive(Debug, ThisError)]
pub enum PointsError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("line {line}: cannot parse '{content}' as a point")]
    Parse { line: usize, content: String },

    #[error(transparent)]
    Graph(#[from] Error),
}

/// Parses the contents of a point file.
///
/// # Examples
///
/// ```
/// use u_tsp::points::parse_points;
///
/// let points = parse_points("# depot\n(0, 0)\n1 0.5\n2,1\n").unwrap();
/// assert_eq!(points.len(), 3);
/// assert_eq!(points[1].y, 0.5);
/// ```
pub fn parse_points(text: &str) -> Result<Vec<Point>, PointsError> {
    let mut points = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let point = parse_line(line).ok_or_else(|| PointsError::Parse {
            line: index + 1,
            content: line.to_string(),
        })?;
        points.push(point);
    }
    Ok(points)
}

fn parse_line(line: &str) -> Option<Point> {
    let cleaned: String = line
        .chars()
        .filter(|&c| c != '(' && c != ')')
        .map(|c| if c == ',' { ' ' } else { c })
        .collect();

    let mut tokens = cleaned.split_whitespace();
    let x = tokens.next()?.parse::<f64>().ok()?;
    let y = tokens.next()?.parse::<f64>().ok()?;
    if tokens.next().is_some() {
        return None;
    }
    Some(Point::new(x, y))
}

/// Reads a point file.
pub fn load_points(path: impl AsRef<Path>) -> Result<Vec<Point>, PointsError> {
    let text = fs::read_to_string(path)?;
    parse_points(&text)
}

/// Reads a point file and builds a graph from it.
pub fn load_graph(path: impl AsRef<Path>) -> Result<Graph, PointsError> {
    let points = load_points(path)?;
    Ok(Graph::new(points)?)
}

/// Writes `points` to `path`, one `(x, y)` line each.
pub fn save_points(path: impl AsRef<Path>, points: &[Point]) -> Result<(), PointsError> {
    let mut writer = BufWriter::new(fs::File::create(path)?);
    for p in points {
        writeln!(writer, "({}, {})", p.x, p.y)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_forms() {
        let points = parse_points("(0.25, 0.5)\n0.75 1\n-1,2e-3\n").unwrap();
        assert_eq!(
            points,
            vec![
                Point::new(0.25, 0.5),
                Point::new(0.75, 1.0),
                Point::new(-1.0, 0.002),
            ]
        );
    }

    #[test]
    fn test_parse_skips_blank_and_comments() {
        let points = parse_points("\n# header\n   \n(1, 2)\n  # indented comment\n").unwrap();
        assert_eq!(points, vec![Point::new(1.0, 2.0)]);
    }

    #[test]
    fn test_parse_error_reports_line() {
        let err = parse_points("(0, 0)\n\n(1, x)\n").unwrap_err();
        match err {
            PointsError::Parse { line, content } => {
                assert_eq!(line, 3);
                assert_eq!(content, "(1, x)");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_wrong_arity() {
        assert!(parse_points("1\n").is_err());
        assert!(parse_points("1 2 3\n").is_err());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("points.txt");
        let points = random_points(25, 9);

        save_points(&path, &points).unwrap();
        let loaded = load_points(&path).unwrap();
        assert_eq!(loaded, points);

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.lines().all(|l| l.starts_with('(') && l.ends_with(')')));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_points(dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, PointsError::Io(_)));
    }

    #[test]
    fn test_load_graph_rejects_single_point() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("one.txt");
        fs::write(&path, "(0.5, 0.5)\n").unwrap();

        let err = load_graph(&path).unwrap_err();
        assert!(matches!(err, PointsError::Graph(Error::InvalidInput(_))));
    }

    #[test]
    fn test_load_graph() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("square.txt");
        fs::write(&path, "(0, 0)\n(1, 0)\n(1, 1)\n(0, 1)\n").unwrap();

        let graph = load_graph(&path).unwrap();
        assert_eq!(graph.size(), 4);
        assert!((graph.distance(0, 2) - 2f64.sqrt()).abs() < 1e-12);
    }
}
