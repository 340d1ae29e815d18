//! Plain-text graph loader.
//!
//! ## Format
//!
//! - The first record declares `node_count edge_count`
//! - Every following record is one edge `u v` (1-indexed)
//! - Blank lines and lines starting with `#` are ignored
//!
//! ```text
//! # 4-cycle
//! 4 4
//! 1 2
//! 2 3
//! 3 4
//! 4 1
//! ```
//!
//! The declared edge count is advisory: a mismatch with the number of edge
//! records is logged, not rejected.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use super::Graph;
use crate::error::{CutwidthError, Result};

/// Reads a graph from a file.
///
/// ```no_run
/// use u_cutwidth::graph::loader::load_graph;
///
/// let graph = load_graph("graphs/cycle.txt")?;
/// println!("{} nodes, {} edges", graph.node_count(), graph.edge_count());
/// # Ok::<(), u_cutwidth::CutwidthError>(())
/// ```
pub fn load_graph<P: AsRef<Path>>(path: P) -> Result<Graph> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let graph = parse_graph(BufReader::new(file))?;
    log::info!(
        "loaded graph from '{}': {} nodes, {} edges",
        path.display(),
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Parses a graph from any buffered reader.
pub fn parse_graph<R: BufRead>(reader: R) -> Result<Graph> {
    let mut graph: Option<Graph> = None;
    let mut edge_records = 0usize;
    let mut lines_read = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        lines_read = line_no;
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (a, b) = parse_pair(line, line_no)?;

        match graph.as_mut() {
            None => {
                if a == 0 {
                    return Err(CutwidthError::parse(
                        line_no,
                        "header declares 0 nodes; node count must be at least 1",
                    ));
                }
                let g = Graph::try_new(a, b).map_err(|e| {
                    CutwidthError::parse(line_no, format!("cannot allocate {a} nodes: {e}"))
                })?;
                graph = Some(g);
            }
            Some(g) => {
                g.add_edge(a, b).map_err(|e| CutwidthError::parse(line_no, e.to_string()))?;
                edge_records += 1;
            }
        }
    }

    let graph = graph.ok_or_else(|| {
        CutwidthError::parse(lines_read, "missing header line 'node_count edge_count'")
    })?;

    if edge_records != graph.declared_edge_count() {
        log::warn!(
            "graph declared {} edges but {} edge records were read",
            graph.declared_edge_count(),
            edge_records
        );
    }

    Ok(graph)
}

fn parse_pair(line: &str, line_no: usize) -> Result<(usize, usize)> {
    let mut fields = line.split_whitespace();
    let (Some(a), Some(b)) = (fields.next(), fields.next()) else {
        return Err(CutwidthError::parse(
            line_no,
            format!("expected two integers, got '{line}'"),
        ));
    };

    let parse = |s: &str| {
        s.parse::<usize>().map_err(|_| {
            CutwidthError::parse(line_no, format!("'{s}' is not a non-negative integer"))
        })
    };
    let pair = (parse(a)?, parse(b)?);

    if fields.next().is_some() {
        log::debug!("ignoring extra fields at line {line_no}: '{line}'");
    }

    Ok(pair)
}

impl FromStr for Graph {
    type Err = CutwidthError;

    fn from_str(s: &str) -> Result<Self> {
        parse_graph(s.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_cycle() {
        let g: Graph = "4 4\n1 2\n2 3\n3 4\n4 1\n".parse().unwrap();
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.declared_edge_count(), 4);
        assert_eq!(g.edge_count(), 4);
        assert_eq!(g.neighbors(1), &[2, 4]);
    }

    #[test]
    fn test_parse_skips_blank_and_comments() {
        let text = "\
# header follows
3 2

1 2
# middle
2 3
";
        let g: Graph = text.parse().unwrap();
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.neighbors(2), &[1, 3]);
    }

    #[test]
    fn test_declared_count_is_advisory() {
        let g: Graph = "3 10\n1 2\n".parse().unwrap();
        assert_eq!(g.declared_edge_count(), 10);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_extra_fields_ignored() {
        let g: Graph = "2 1 extra\n1 2 7\n".parse().unwrap();
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_zero_nodes_rejected() {
        let err = "0 0\n".parse::<Graph>().unwrap_err();
        assert!(matches!(err, CutwidthError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_missing_header() {
        let err = "\n# nothing\n".parse::<Graph>().unwrap_err();
        match err {
            CutwidthError::Parse { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("missing header"));
            }
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_huge_node_count_rejected() {
        let err = "18446744073709551615 0\n".parse::<Graph>().unwrap_err();
        match err {
            CutwidthError::Parse { line, message } => {
                assert_eq!(line, 1);
                assert!(message.contains("cannot allocate"), "got: {message}");
            }
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_out_of_range_edge_reports_line() {
        let err = "3 1\n\n1 4\n".parse::<Graph>().unwrap_err();
        match err {
            CutwidthError::Parse { line, message } => {
                assert_eq!(line, 3);
                assert!(message.contains("out of range"), "got: {message}");
            }
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_edge() {
        let err = "3 1\n1\n".parse::<Graph>().unwrap_err();
        assert!(matches!(err, CutwidthError::Parse { line: 2, .. }));

        let err = "3 1\n1 x\n".parse::<Graph>().unwrap_err();
        assert!(matches!(err, CutwidthError::Parse { line: 2, .. }));

        let err = "3 1\n-1 2\n".parse::<Graph>().unwrap_err();
        assert!(matches!(err, CutwidthError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().expect("failed to create temp file");
        file.write_all(b"3 3\n1 2\n2 3\n1 3\n")
            .expect("failed to write temp file");
        file.flush().expect("failed to flush temp file");

        let g = load_graph(file.path()).unwrap();
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.max_degree(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_graph("/nonexistent/graph.txt").unwrap_err();
        assert!(matches!(err, CutwidthError::Io(_)));
    }
}
