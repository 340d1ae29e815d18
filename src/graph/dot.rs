//! Graphviz DOT export.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::Graph;
use crate::error::Result;

/// Writes `graph` as an undirected DOT graph, one `u -- v;` line per edge.
pub fn write_dot<W: Write>(graph: &Graph, mut out: W) -> io::Result<()> {
    writeln!(out, "graph G {{")?;
    for (u, v) in graph.edges() {
        writeln!(out, "    {u} -- {v};")?;
    }
    writeln!(out, "}}")
}

/// Renders `graph` as a DOT string.
pub fn to_dot(graph: &Graph) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_dot(graph, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Writes `graph` as DOT to `path`, creating or truncating the file.
pub fn save_dot<P: AsRef<Path>>(graph: &Graph, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut out = BufWriter::new(File::create(path)?);
    write_dot(graph, &mut out)?;
    out.flush()?;
    log::info!("DOT file written: {}", path.display());
    Ok(())
}
