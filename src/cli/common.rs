//! Common utilities shared across CLI commands.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::svg::Document;

/// Read and parse an SVG file.
pub fn read_document(path: &Path) -> Result<Document> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    Document::parse(&bytes).with_context(|| format!("failed to parse {}", path.display()))
}

/// Serialize `doc` to `path`.
pub fn write_document(doc: &Document, path: &Path) -> Result<()> {
    fs::write(path, doc.to_bytes()).with_context(|| format!("failed to write {}", path.display()))
}

/// Where a rewriting command writes its result: `-o` or the input itself.
pub fn output_path(input: &Path, output: Option<&PathBuf>) -> PathBuf {
    output.cloned().unwrap_or_else(|| input.to_path_buf())
}

/// Print `value` as pretty JSON to stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value).context("failed to serialize JSON")?;
    writeln!(stdout)?;
    Ok(())
}

/// `1 color`, `3 colors`
pub fn plural_count(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_output_path_defaults_to_input() {
        let input = Path::new("in.svg");
        assert_eq!(output_path(input, None), PathBuf::from("in.svg"));
        let out = PathBuf::from("out.svg");
        assert_eq!(output_path(input, Some(&out)), out);
    }

    #[test]
    fn test_read_write_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.svg");
        fs::write(&path, "<svg><g/></svg>").unwrap();

        let doc = read_document(&path).unwrap();
        let copy = dir.path().join("b.svg");
        write_document(&doc, &copy).unwrap();
        assert_eq!(fs::read_to_string(copy).unwrap(), "<svg><g/></svg>");
    }

    #[test]
    fn test_read_document_errors_name_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.svg");
        fs::write(&path, "<svg>").unwrap();
        let err = read_document(&path).unwrap_err();
        assert!(err.to_string().contains("broken.svg"));

        let missing = read_document(&dir.path().join("missing.svg")).unwrap_err();
        assert!(missing.to_string().contains("failed to read"));
    }

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(1, "color"), "1 color");
        assert_eq!(plural_count(0, "color"), "0 colors");
    }
}
