use anyhow::Context;
use std::path::Path;

/// Root-relative path of `path` with every backslash turned into `/`.
///
/// Fails on names that are not valid UTF-8; a lossy line would not resolve
/// back to the file.
pub fn manifest_entry(path: &Path, root: &Path) -> anyhow::Result<String> {
    let relative = path.strip_prefix(root).with_context(|| {
        format!(
            "{} is not located under {}",
            path.display(),
            root.display()
        )
    })?;

    let relative = relative
        .to_str()
        .with_context(|| format!("{} is not a valid UTF-8 path", path.display()))?;

    Ok(normalize_separators(relative))
}

fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}
