use super::{LoadError, LoadedDocument};
use crate::analysis::is_blank;
use arboard::Clipboard;

/// Reads the current clipboard text for the `@@` command.
pub fn load() -> Result<LoadedDocument, LoadError> {
    let mut clipboard = Clipboard::new().map_err(|e| LoadError::Clipboard(e.to_string()))?;
    let text = clipboard
        .get_text()
        .map_err(|e| LoadError::Clipboard(e.to_string()))?;

    if is_blank(&text) {
        return Err(LoadError::Clipboard("Clipboard is empty".to_string()));
    }

    Ok(LoadedDocument {
        text,
        source: "clipboard".to_string(),
    })
}
