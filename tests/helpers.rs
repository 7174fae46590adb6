// Shared test helpers for building resolver-event CSV files.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Builds a resolver-event row with `query` in column 17.
#[allow(dead_code)] // Used by other test files
pub fn event_row(query: &str) -> String {
    let mut fields: Vec<String> = vec![
        "2024-01-01T00:00:00Z".to_string(),
        "resolve".to_string(),
    ];
    fields.extend((2..17).map(|i| format!("col{i}")));
    // The query list contains commas, so it is quoted
    fields.push(format!("\"{query}\""));
    fields.push("NOERROR".to_string());
    fields.join(",")
}

/// Writes rows to `events.csv` inside `dir` and returns its path.
#[allow(dead_code)] // Used by other test files
pub fn write_events(dir: &TempDir, rows: &[String]) -> PathBuf {
    let path = dir.path().join("events.csv");
    let mut content = rows.join("\n");
    if !content.is_empty() {
        content.push('\n');
    }
    fs::write(&path, content).expect("Failed to write events file");
    path
}
