use crate::domain::models::normalize_extensions;
use log::debug;

/// Plain suffix test on the lowercased file name.
///
/// Not a path-extension parser: `.l` matches `x.l` and any other name whose
/// last characters are `.l`, while `weird.mcl.bak` does not match `.mcl`.
/// Extensions are expected to be lowercase already.
pub fn matches_extension(file_name: &str, extensions: &[String]) -> bool {
    let lowered = file_name.to_lowercase();
    extensions.iter().any(|ext| lowered.ends_with(ext.as_str()))
}

pub fn parse_extension_list(raw: &str) -> Vec<String> {
    let extensions = normalize_extensions(raw.split(','));
    debug!("Parsed extension list {:?} from {:?}", extensions, raw);
    extensions
}
