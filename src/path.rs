use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::ConvertError;

pub const SPRITE_SUFFIX: &str = ".sprite";
pub const XML_SUFFIX: &str = ".xml";

/// Derives the output path for `sprite_file`.
///
/// The last `SPRITE_SUFFIX.len()` characters are cut off whether or not they
/// actually spell `.sprite`, then `.xml` is appended. Paths shorter than
/// that become just `.xml`.
pub fn xml_path_for(sprite_file: &Path) -> Result<PathBuf, ConvertError> {
    let path = sprite_file
        .to_str()
        .ok_or_else(|| ConvertError::NonUtf8Path(sprite_file.to_path_buf()))?;

    if !path.ends_with(SPRITE_SUFFIX) {
        warn!(
            "{:?} does not end in {}, output name will be truncated blindly",
            sprite_file, SPRITE_SUFFIX
        );
    }

    let cut = path
        .char_indices()
        .rev()
        .nth(SPRITE_SUFFIX.chars().count() - 1)
        .map_or(0, |(i, _)| i);

    Ok(PathBuf::from(format!("{}{}", &path[..cut], XML_SUFFIX)))
}
