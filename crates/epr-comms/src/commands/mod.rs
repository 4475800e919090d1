//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::Utf8Path;

use epr_comms_core::markdown;

pub mod complexity;
pub mod concepts;
pub mod info;
pub mod keywords;
pub mod report;
pub mod schema;
pub mod translation;

/// Path that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Read a file and validate its size against the configured limit.
///
/// `-` reads standard input, stopping one byte past the limit so oversized
/// input is rejected without buffering all of it.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    if path.as_str() == STDIN_PATH {
        return read_stdin(max_bytes);
    }

    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    std::fs::read_to_string(path.as_std_path()).with_context(|| format!("failed to read {path}"))
}

fn read_stdin(max_bytes: Option<usize>) -> anyhow::Result<String> {
    let mut content = String::new();
    std::io::stdin()
        .lock()
        .take(stdin_read_limit(max_bytes))
        .read_to_string(&mut content)
        .context("failed to read standard input")?;

    if let Some(max) = max_bytes
        && content.len() > max
    {
        anyhow::bail!("input too large: standard input exceeds {max} bytes");
    }
    Ok(content)
}

/// Bytes to read from stdin: one past the limit, so overflow is detectable.
fn stdin_read_limit(max_bytes: Option<usize>) -> u64 {
    max_bytes.map_or(u64::MAX, |max| (max as u64).saturating_add(1))
}

/// Read an input document as analyzable prose.
///
/// Markdown files (`.md`) are reduced to their prose first.
pub fn read_document(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    let content = read_input_file(path, max_bytes)?;
    if path.extension() == Some("md") {
        Ok(markdown::strip_to_prose(&content))
    } else {
        Ok(content)
    }
}
