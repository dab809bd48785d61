use crate::core::extension_filter::matches_extension;
use crate::core::manifest::manifest_entry;
use crate::domain::models::{ScanConfig, ScanSummary, WalkErrorPolicy};
use crate::infra::output::ManifestWriter;
use anyhow::{Context, bail};
use log::{debug, info, warn};
use std::fs;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

pub fn validate_root(root: &Path) -> anyhow::Result<()> {
    let metadata = fs::metadata(root)
        .with_context(|| format!("Root directory {} is not accessible", root.display()))?;

    if !metadata.is_dir() {
        bail!("Root {} is not a directory", root.display());
    }

    Ok(())
}

// Symlinks are not followed; a link to a directory counts as a directory.
fn is_directory(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir())
}

/// Walks `config.root_dir` and writes one manifest line per matching file.
///
/// Entries are emitted in walk order (depth first, pre-order). Siblings are
/// sorted by name only when `sort_entries` is set.
pub fn scan_manifest(
    config: &ScanConfig,
    writer: &mut dyn ManifestWriter,
) -> anyhow::Result<ScanSummary> {
    let root = config.root_dir.as_path();
    info!("Scanning for pattern files in: {}", root.display());
    debug!("Extensions: {:?}", config.extensions);
    debug!("Walk error policy: {:?}", config.on_error);

    if config.extensions.is_empty() {
        warn!("Extension list is empty, no files will be listed");
    }

    let mut walker = WalkDir::new(root).min_depth(1);
    if config.sort_entries {
        walker = walker.sort_by_file_name();
    }

    let mut summary = ScanSummary::default();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if config.on_error == WalkErrorPolicy::Skip => {
                warn!("Skipping unreadable entry: {}", err);
                summary.skipped += 1;
                continue;
            }
            Err(err) => {
                return Err(err).with_context(|| format!("Failed to walk {}", root.display()));
            }
        };

        summary.scanned += 1;

        if is_directory(&entry) {
            continue;
        }

        if !matches_extension(&entry.file_name().to_string_lossy(), &config.extensions) {
            continue;
        }

        let line = match manifest_entry(entry.path(), root) {
            Ok(line) => line,
            Err(err) if config.on_error == WalkErrorPolicy::Skip => {
                warn!("Skipping entry: {:#}", err);
                summary.skipped += 1;
                continue;
            }
            Err(err) => return Err(err),
        };
        debug!("Found matching file: {}", line);
        writer.write_entry(&line)?;
        summary.listed += 1;
    }

    info!(
        "Scanned {} entries, listed {} files, skipped {}",
        summary.scanned, summary.listed, summary.skipped
    );
    Ok(summary)
}
