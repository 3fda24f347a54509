// src/loader.rs
//! TSV loading for the page and link tables.
//!
//! Page file: one `<id>\t<name>` record per line, ids dense and ascending
//! from 0, checked per record; a gap or repeat aborts the load. Link file:
//! one `<from_id>\t<to_id>` record per line; order defines out-link order.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{RankError, Result};
use crate::graph::Graph;

/// Reads the page table into a fresh arena.
///
/// # Errors
/// `MalformedRecord` on a bad line, `MalformedNodeSequence` when a record's
/// id is not the next dense index, `Io` on read failure.
pub fn load_nodes(path: &Path) -> Result<Graph> {
    let mut graph = Graph::new();
    for (line_no, line) in read_lines(path)?.enumerate() {
        let line_no = line_no + 1;
        let line = map_io(line, path)?;
        let Some((id_field, name)) = split_record(&line, path, line_no)? else {
            continue;
        };
        let id = parse_field(id_field, "id", path, line_no)?;
        if id != graph.len() {
            return Err(RankError::MalformedNodeSequence {
                path: path.to_path_buf(),
                line: line_no,
                expected: graph.len(),
                found: id,
            });
        }
        graph.push_node(name);
    }
    Ok(graph)
}

/// Reads the link table, appending out-links onto the already-loaded arena.
///
/// # Errors
/// `UnknownNodeId` when either endpoint is outside the arena, plus the same
/// record/IO errors as [`load_nodes`].
pub fn load_edges(path: &Path, graph: &mut Graph) -> Result<()> {
    for (line_no, line) in read_lines(path)?.enumerate() {
        let line_no = line_no + 1;
        let line = map_io(line, path)?;
        let Some((from_field, to_field)) = split_record(&line, path, line_no)? else {
            continue;
        };
        let from = parse_field(from_field, "from_id", path, line_no)?;
        let to = parse_field(to_field, "to_id", path, line_no)?;
        for id in [from, to] {
            if id >= graph.len() {
                return Err(RankError::UnknownNodeId {
                    path: path.to_path_buf(),
                    line: line_no,
                    id,
                    node_count: graph.len(),
                });
            }
        }
        graph.push_edge(from, to);
    }
    Ok(())
}

/// Loads both tables into a ready-to-rank graph.
///
/// # Errors
/// See [`load_nodes`] and [`load_edges`].
pub fn load_graph(nodes_path: &Path, edges_path: &Path) -> Result<Graph> {
    let mut graph = load_nodes(nodes_path)?;
    load_edges(edges_path, &mut graph)?;
    Ok(graph)
}

fn read_lines(path: &Path) -> Result<std::io::Lines<BufReader<File>>> {
    let file = File::open(path).map_err(|source| RankError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    Ok(BufReader::new(file).lines())
}

fn map_io(line: std::io::Result<String>, path: &Path) -> Result<String> {
    line.map_err(|source| RankError::Io {
        source,
        path: path.to_path_buf(),
    })
}

/// Splits a record on its single tab. A blank line yields `Ok(None)` so a
/// trailing newline doesn't fail the load; a non-blank line without a tab is
/// a malformed record.
fn split_record<'a>(line: &'a str, path: &Path, line_no: usize) -> Result<Option<(&'a str, &'a str)>> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.is_empty() {
        return Ok(None);
    }
    match line.split_once('\t') {
        Some(fields) => Ok(Some(fields)),
        None => Err(RankError::MalformedRecord {
            path: path.to_path_buf(),
            line: line_no,
            reason: "expected two tab-separated fields".to_string(),
        }),
    }
}

fn parse_field(field: &str, what: &str, path: &Path, line_no: usize) -> Result<usize> {
    field.parse().map_err(|_| RankError::MalformedRecord {
        path: path.to_path_buf(),
        line: line_no,
        reason: format!("{what} is not an integer: {field:?}"),
    })
}
