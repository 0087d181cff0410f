pub mod constants;
pub mod models;
pub use models::EvaluationResult;

use constants::{COMMENT_LINE_PREFIX, EXPECTED_LINE_PREFIX, TEST_FILES_DIRECTORY};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Asset keys listed on `EXPECTED:` lines, in file order.
pub fn get_expected_asset_keys(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            line.trim()
                .strip_prefix(EXPECTED_LINE_PREFIX)
                .map(|expected| expected.trim().to_string())
        })
        .filter(|expected| !expected.is_empty())
        .collect()
}

/// Document text with `EXPECTED:` and `COMMENT:` lines removed.
pub fn get_document_text(content: &str) -> String {
    content
        .lines()
        .filter(|line| {
            let line = line.trim_start();
            !line.starts_with(EXPECTED_LINE_PREFIX) && !line.starts_with(COMMENT_LINE_PREFIX)
        })
        .collect::<Vec<&str>>()
        .join("\n")
}

/// Paths of every `.txt` document under `tests/test_files`, sorted by name.
pub fn get_test_file_paths() -> Vec<PathBuf> {
    let entries = fs::read_dir(TEST_FILES_DIRECTORY.as_path())
        .unwrap_or_else(|e| panic!("Failed to read {:?}: {}", *TEST_FILES_DIRECTORY, e));

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.is_file() && path.extension().map_or(false, |ext| ext == "txt"))
        .collect();

    paths.sort();
    paths
}

/// Runs `extract_asset_keys` over a test document and compares the result with its
/// `EXPECTED:` lines. Order matters.
pub fn run_test_for_file<F>(
    test_file_path: &Path,
    use_assertions: bool,
    extract_asset_keys: F,
) -> EvaluationResult
where
    F: Fn(&str) -> Vec<String>,
{
    let content = fs::read_to_string(test_file_path)
        .unwrap_or_else(|e| panic!("Failed to read {:?}: {}", test_file_path, e));

    let expected = get_expected_asset_keys(&content);
    let results = extract_asset_keys(&get_document_text(&content));

    debug!("{:?}: expected {:?}, got {:?}", test_file_path, expected, results);

    let evaluation_result = EvaluationResult::new(&expected, &results);

    if use_assertions {
        assert!(
            evaluation_result.is_exact_match(),
            "{:?} - Expected: {:?}, but got: {:?} (missing: {:?}, unexpected: {:?})",
            test_file_path,
            evaluation_result.expected,
            evaluation_result.results,
            evaluation_result.false_negatives,
            evaluation_result.false_positives
        );
    }

    evaluation_result
}
