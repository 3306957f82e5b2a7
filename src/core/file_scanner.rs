use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use tracing::warn;
use walkdir::WalkDir;

/// Result of scanning a directory for note tables.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Matching files, sorted.
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
}

fn compile(patterns: &[String], kind: &str) -> Vec<Pattern> {
    patterns
        .iter()
        .filter_map(|p| match Pattern::new(p) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                warn!("Invalid {kind} pattern '{p}': {e}");
                None
            }
        })
        .collect()
}

/// Walk `base_dir` and collect files whose path relative to it matches one
/// of `includes` and none of `ignores`.
pub fn scan_files(base_dir: &Path, includes: &[String], ignores: &[String]) -> ScanResult {
    let include_patterns = compile(includes, "include");
    let ignore_patterns = compile(ignores, "ignore");
    let options = MatchOptions {
        require_literal_separator: false,
        ..MatchOptions::new()
    };

    let mut result = ScanResult::default();
    for entry in WalkDir::new(base_dir).follow_links(false) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                result.skipped_count += 1;
                warn!("Cannot access path: {e}");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(base_dir).unwrap_or(path);
        let matches_any =
            |patterns: &[Pattern]| patterns.iter().any(|p| p.matches_path_with(relative, options));

        if matches_any(&ignore_patterns) {
            continue;
        }
        if matches_any(&include_patterns) {
            result.files.push(path.to_path_buf());
        }
    }

    result.files.sort();
    result
}
