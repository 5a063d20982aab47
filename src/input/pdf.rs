use super::{LoadError, LoadedDocument};
use crate::analysis::is_blank;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Load text from PDF file using pdf-extract crate.
///
/// Backs the `@file.pdf` command. Extraction happens in memory so the
/// error carries the parser's message rather than a partial read.
pub fn load(path: &str) -> Result<LoadedDocument, LoadError> {
    let path = Path::new(path);

    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let mut file = File::open(path).map_err(|e| LoadError::PdfParse(e.to_string()))?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)
        .map_err(|e| LoadError::PdfParse(e.to_string()))?;

    let text =
        pdf_extract::extract_text_from_mem(&buffer).map_err(|e| LoadError::PdfParse(e.to_string()))?;

    if is_blank(&text) {
        return Err(LoadError::PdfParse(
            "No extractable text content found in PDF".to_string(),
        ));
    }

    Ok(LoadedDocument {
        text,
        source: format!("pdf:{}", path.display()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_load_nonexistent_file() {
        let result = load("/nonexistent/path/document.pdf");
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_pdf_parse_error_message() {
        let err = LoadError::PdfParse("Invalid PDF structure".to_string());
        assert_eq!(err.to_string(), "PDF parse error: Invalid PDF structure");
    }
}
