use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("PDF parse error: {0}")]
    PdfParse(String),

    #[error("EPUB parse error: {0}")]
    EpubParse(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("File is empty: {0}")]
    EmptyFile(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Raw text pulled from a file or the clipboard, ready for analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDocument {
    pub text: String,
    pub source: String,
}

pub mod clipboard;
pub mod epub;
pub mod pdf;
pub mod text;

/// Loads a document, choosing the reader by file extension.
///
/// `.pdf` and `.epub` go through their parsers; anything else is read as
/// UTF-8 text.
pub fn load_path(path: &str) -> Result<LoadedDocument, LoadError> {
    let extension = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    let document = match extension.as_deref() {
        Some("pdf") => pdf::load(path)?,
        Some("epub") => epub::load(path)?,
        _ => text::load(path)?,
    };

    info!(source = %document.source, bytes = document.text.len(), "loaded document");
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_path_dispatches_plain_text() {
        let mut file = tempfile::Builder::new().suffix(".md").tempfile().unwrap();
        file.write_all(b"# Title\nSome text").unwrap();

        let doc = load_path(file.path().to_str().unwrap()).unwrap();
        assert_eq!(doc.text, "# Title\nSome text");
        assert!(doc.source.starts_with("text:"));
    }

    #[test]
    fn test_load_path_missing_pdf() {
        let result = load_path("/nonexistent/path/report.PDF");
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_load_path_missing_epub() {
        let result = load_path("/nonexistent/path/book.epub");
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }
}
