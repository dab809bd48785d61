use crate::core::extension_filter::parse_extension_list;
use crate::domain::models::{
    DEFAULT_EXTENSION_LIST, DEFAULT_OUTPUT_FILE, DEFAULT_ROOT_DIR, ScanConfig, ScanSummary,
    WalkErrorPolicy,
};
use crate::infra::file_system::{scan_manifest, validate_root};
use crate::infra::logger::{print_summary, setup_logger};
use crate::infra::output::create_writer;
use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pattern-manifest")]
#[command(about = "List pattern files under a directory into a manifest", long_about = None)]
pub struct Cli {
    /// Directory to scan
    #[arg(long, default_value = DEFAULT_ROOT_DIR)]
    pub root: PathBuf,

    /// Manifest file to create or overwrite
    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Comma separated, case-insensitive filename suffixes
    #[arg(long, default_value = DEFAULT_EXTENSION_LIST)]
    pub ext: String,

    /// Sort siblings by name for a stable manifest
    #[arg(long)]
    pub sort: bool,

    /// Skip unreadable entries instead of aborting
    #[arg(long)]
    pub skip_errors: bool,

    /// Print the manifest to stdout instead of writing the output file
    #[arg(long)]
    pub stdout: bool,

    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn to_config(&self) -> ScanConfig {
        ScanConfig {
            root_dir: self.root.clone(),
            output_file: self.output.clone(),
            extensions: parse_extension_list(&self.ext),
            sort_entries: self.sort,
            on_error: if self.skip_errors {
                WalkErrorPolicy::Skip
            } else {
                WalkErrorPolicy::Abort
            },
        }
    }
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logger(cli.verbose)?;

    info!("Starting manifest generation");
    debug!(
        "Command parameters: root={}, output={}, ext={}, sort={}, skip_errors={}, stdout={}",
        cli.root.display(),
        cli.output.display(),
        cli.ext,
        cli.sort,
        cli.skip_errors,
        cli.stdout
    );

    let config = cli.to_config();
    let summary = generate_manifest(&config, cli.stdout)?;

    if !cli.stdout {
        print_summary(&summary, &config.output_file)?;
    }
    Ok(())
}

pub fn generate_manifest(config: &ScanConfig, to_stdout: bool) -> anyhow::Result<ScanSummary> {
    validate_root(&config.root_dir)?;

    let mut writer = create_writer(&config.output_file, to_stdout)?;
    let summary = scan_manifest(config, writer.as_mut())?;
    writer.finish()?;

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["pattern-manifest"]).unwrap();
        let config = cli.to_config();

        assert_eq!(config.root_dir, PathBuf::from("./patterns"));
        assert_eq!(config.output_file, PathBuf::from("patterns.txt"));
        assert_eq!(config.extensions, vec![".mcl", ".lif", ".rle", ".l"]);
        assert_eq!(config.on_error, WalkErrorPolicy::Abort);
        assert!(!cli.stdout);
    }

    #[test]
    fn test_cli_defaults_match_scan_config_defaults() {
        let config = Cli::try_parse_from(["pattern-manifest"]).unwrap().to_config();
        let defaults = ScanConfig::default();

        assert_eq!(config.root_dir, defaults.root_dir);
        assert_eq!(config.output_file, defaults.output_file);
        assert_eq!(config.extensions, defaults.extensions);
        assert_eq!(config.sort_entries, defaults.sort_entries);
        assert_eq!(config.on_error, defaults.on_error);
    }

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "pattern-manifest",
            "--root",
            "./life",
            "--output",
            "life.txt",
            "--ext",
            ".RLE, .cells",
            "--sort",
            "--skip-errors",
            "-vv",
        ])
        .unwrap();

        let config = cli.to_config();
        assert_eq!(config.root_dir, PathBuf::from("./life"));
        assert_eq!(config.output_file, PathBuf::from("life.txt"));
        assert_eq!(config.extensions, vec![".rle", ".cells"]);
        assert!(config.sort_entries);
        assert_eq!(config.on_error, WalkErrorPolicy::Skip);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_generate_manifest_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("patterns");
        fs::create_dir_all(root.join("sub")).unwrap();
        fs::write(root.join("a.mcl"), "").unwrap();
        fs::write(root.join("b.txt"), "").unwrap();
        fs::write(root.join("sub").join("c.LIF"), "").unwrap();

        let output = temp_dir.path().join("patterns.txt");
        fs::write(&output, "stale.rle\n").unwrap();

        let config = ScanConfig::new(root, output.clone(), &[".mcl", ".lif"]);
        let summary = generate_manifest(&config, false).unwrap();

        assert_eq!(summary.listed, 2);
        let content = fs::read_to_string(&output).unwrap();
        let mut lines: Vec<&str> = content.lines().collect();
        lines.sort();
        assert_eq!(lines, vec!["a.mcl", "sub/c.LIF"]);
        assert!(content.ends_with('\n'));
    }

    #[test]
    fn test_generate_manifest_empty_root() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("patterns");
        fs::create_dir(&root).unwrap();
        let output = temp_dir.path().join("patterns.txt");

        generate_manifest(&ScanConfig::new(root, output.clone(), &[".mcl"]), false).unwrap();

        assert!(output.exists());
        assert_eq!(fs::read_to_string(&output).unwrap(), "");
    }

    #[test]
    fn test_generate_manifest_missing_root_creates_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("patterns.txt");
        let config = ScanConfig::new(temp_dir.path().join("patterns"), output.clone(), &[".mcl"]);

        assert!(generate_manifest(&config, false).is_err());
        assert!(!output.exists());
    }

    #[test]
    fn test_generate_manifest_unwritable_output() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("patterns");
        fs::create_dir(&root).unwrap();
        let output = temp_dir.path().join("no-such-dir").join("patterns.txt");

        assert!(generate_manifest(&ScanConfig::new(root, output, &[".mcl"]), false).is_err());
    }
}
