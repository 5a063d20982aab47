use super::{LoadError, LoadedDocument};
use crate::analysis::{is_blank, BOM};
use std::path::Path;

/// Reads a UTF-8 text file, dropping a leading byte order mark. Files
/// holding only whitespace are refused here so the caller never hands
/// blank text to the analyzer.
pub fn load(path: &str) -> Result<LoadedDocument, LoadError> {
    let path = Path::new(path);

    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let mut content = std::fs::read_to_string(path)?;
    if content.starts_with(BOM) {
        content.remove(0);
    }

    if is_blank(&content) {
        return Err(LoadError::EmptyFile(path.to_path_buf()));
    }

    Ok(LoadedDocument {
        text: content,
        source: format!("text:{}", path.display()),
    })
}
