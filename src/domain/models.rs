use std::path::PathBuf;

pub const DEFAULT_ROOT_DIR: &str = "./patterns";
pub const DEFAULT_OUTPUT_FILE: &str = "patterns.txt";
/// Comma separated, in the same form the `--ext` flag accepts.
pub const DEFAULT_EXTENSION_LIST: &str = ".mcl,.lif,.rle,.l";

/// What the scanner does when a single entry of the walk cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WalkErrorPolicy {
    /// Stop the run and return the error.
    #[default]
    Abort,
    /// Log a warning, count the entry as skipped and keep walking.
    Skip,
}

#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub root_dir: PathBuf,
    pub output_file: PathBuf,
    pub extensions: Vec<String>,
    pub sort_entries: bool,
    pub on_error: WalkErrorPolicy,
}

impl ScanConfig {
    pub fn new(root_dir: PathBuf, output_file: PathBuf, extensions: &[&str]) -> Self {
        Self {
            root_dir,
            output_file,
            extensions: normalize_extensions(extensions.iter().copied()),
            sort_entries: false,
            on_error: WalkErrorPolicy::Abort,
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        let extensions: Vec<&str> = DEFAULT_EXTENSION_LIST.split(',').collect();
        Self::new(
            PathBuf::from(DEFAULT_ROOT_DIR),
            PathBuf::from(DEFAULT_OUTPUT_FILE),
            &extensions,
        )
    }
}

/// Trims and lowercases every extension, dropping empty ones.
pub fn normalize_extensions<'a, I>(extensions: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    extensions
        .into_iter()
        .map(str::trim)
        .filter(|ext| !ext.is_empty())
        .map(str::to_lowercase)
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub scanned: usize,
    pub listed: usize,
    pub skipped: usize,
}
