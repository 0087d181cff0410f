use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

pub static TEST_FILES_DIRECTORY: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files"));

pub const EXPECTED_LINE_PREFIX: &str = "EXPECTED:";
pub const COMMENT_LINE_PREFIX: &str = "COMMENT:";
