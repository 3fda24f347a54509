// tests/cli_rank.rs
//! End-to-end pipeline tests through the CLI layer.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use linkrank_core::cli::{self, Cli, Format};
use tempfile::TempDir;

fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1b\[[0-9;]*m").unwrap();
    re.replace_all(s, "").to_string()
}

fn write_tables(temp: &TempDir, pages: &str, links: &str) -> Result<(PathBuf, PathBuf)> {
    let pages_path = temp.path().join("pages.txt");
    let links_path = temp.path().join("links.txt");
    fs::write(&pages_path, pages)?;
    fs::write(&links_path, links)?;
    Ok((pages_path, links_path))
}

fn cli_for(pages: PathBuf, links: PathBuf) -> Cli {
    Cli {
        pages: Some(pages),
        links: Some(links),
        iterations: Some(10),
        top: Some(10),
        ..Cli::default()
    }
}

#[test]
fn test_three_cycle_end_to_end() -> Result<()> {
    let temp = TempDir::new()?;
    let (pages, links) = write_tables(&temp, "0\tA\n1\tB\n2\tC\n", "0\t1\n1\t2\n2\t0\n")?;

    let output = cli::execute(&cli_for(pages, links))?;
    let clean = strip_ansi(&output);

    // Symmetric cycle: all three end at exactly 1.0.
    assert_eq!(clean.lines().count(), 3);
    for name in ["A", "B", "C"] {
        assert!(clean.contains(name), "missing {name} in: {clean}");
    }
    for line in clean.lines() {
        assert!(line.contains("1.000000"), "unexpected weight in: {line}");
    }
    Ok(())
}

#[test]
fn test_top_k_limits_output() -> Result<()> {
    let temp = TempDir::new()?;
    let (pages, links) = write_tables(
        &temp,
        "0\tA\n1\tB\n2\tC\n3\tD\n",
        "0\t1\n2\t1\n3\t1\n1\t0\n",
    )?;

    let mut cli = cli_for(pages, links);
    cli.top = Some(2);
    let output = cli::execute(&cli)?;
    let clean = strip_ansi(&output);

    assert_eq!(clean.lines().count(), 2);
    assert!(clean.lines().next().unwrap().contains('B'), "B is the hub");
    Ok(())
}

#[test]
fn test_json_format() -> Result<()> {
    let temp = TempDir::new()?;
    let (pages, links) = write_tables(&temp, "0\tA\n1\tB\n", "0\t1\n1\t0\n")?;

    let mut cli = cli_for(pages, links);
    cli.format = Format::Json;
    let output = cli::execute(&cli)?;

    let parsed: serde_json::Value = serde_json::from_str(&output)?;
    assert_eq!(parsed.as_array().map(Vec::len), Some(2));
    Ok(())
}

#[test]
fn test_query_reports_single_page() -> Result<()> {
    let temp = TempDir::new()?;
    let (pages, links) = write_tables(&temp, "0\tA\n1\tB\n2\tC\n", "0\t1\n1\t2\n2\t0\n")?;

    let mut cli = cli_for(pages, links);
    cli.query = Some("B".to_string());
    let output = cli::execute(&cli)?;

    assert_eq!(output, "B\t1.000000\n");
    Ok(())
}

#[test]
fn test_query_unknown_name_fails() -> Result<()> {
    let temp = TempDir::new()?;
    let (pages, links) = write_tables(&temp, "0\tA\n", "")?;

    let mut cli = cli_for(pages, links);
    cli.query = Some("Nope".to_string());
    let err = cli::execute(&cli).unwrap_err();
    assert!(err.to_string().contains("Nope"));
    Ok(())
}

#[test]
fn test_gap_in_node_ids_aborts_before_ranking() -> Result<()> {
    let temp = TempDir::new()?;
    let (pages, links) = write_tables(&temp, "0\tA\n1\tB\n3\tD\n", "0\t1\n")?;

    let err = cli::execute(&cli_for(pages, links)).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("out of sequence"), "got: {msg}");
    assert!(msg.contains("pages.txt"), "should name the file: {msg}");
    Ok(())
}

#[test]
fn test_missing_links_file_is_an_error() -> Result<()> {
    let temp = TempDir::new()?;
    let pages = temp.path().join("pages.txt");
    fs::write(&pages, "0\tA\n")?;

    let cli = cli_for(pages, temp.path().join("no-such-links.txt"));
    assert!(cli::execute(&cli).is_err());
    Ok(())
}
