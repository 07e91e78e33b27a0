//! Client-side acceptance checks for uploaded PDFs.

use serde::{Deserialize, Serialize};

pub const PDF_MIME_TYPE: &str = "application/pdf";
const PDF_EXTENSION: &str = ".pdf";

/// File metadata as reported by the browser before the bytes are read.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileCandidate {
    pub mime_type: String,
    pub name: String,
    pub size: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRejection {
    Empty,
    NotPdf,
}

impl std::fmt::Display for FileRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "File Rejected: the selected file is empty"),
            Self::NotPdf => write!(f, "File Rejected: Please add .pdf file type"),
        }
    }
}

impl std::error::Error for FileRejection {}

pub fn check_pdf(file: &FileCandidate) -> Result<(), FileRejection> {
    if file.size == 0 {
        return Err(FileRejection::Empty);
    }
    if file.mime_type == PDF_MIME_TYPE {
        return Ok(());
    }
    // An explicit non-PDF type wins over a `.pdf` name.
    if file.mime_type.is_empty() && has_pdf_extension(&file.name) {
        return Ok(());
    }
    Err(FileRejection::NotPdf)
}

pub fn is_valid_pdf(file: &FileCandidate) -> bool {
    check_pdf(file).is_ok()
}

fn has_pdf_extension(name: &str) -> bool {
    name.len() > PDF_EXTENSION.len()
        && name
            .get(name.len() - PDF_EXTENSION.len()..)
            .is_some_and(|ext| ext.eq_ignore_ascii_case(PDF_EXTENSION))
}

/// Cheap check run before asking the API whether a link serves a PDF.
pub fn looks_like_pdf_url(url: &str) -> bool {
    let url = url.trim();
    let lower = url.to_ascii_lowercase();
    (lower.starts_with("http://") || lower.starts_with("https://")) && has_pdf_extension(&lower)
}

/// A PDF file ready to be sent to the parsing API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedPdf {
    pub file_name: String,
    pub mime_type: String,
    #[serde(with = "serde_bytes")]
    pub bytes: Vec<u8>,
}

impl UploadedPdf {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        let mime_type = mime_type.into();
        // The API rejects anything not declared as a PDF, and the name check already passed.
        let mime_type = if mime_type.is_empty() { PDF_MIME_TYPE.to_string() } else { mime_type };
        Self { file_name: file_name.into(), mime_type, bytes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(mime_type: &str, name: &str, size: u64) -> FileCandidate {
        FileCandidate { mime_type: mime_type.to_string(), name: name.to_string(), size }
    }

    #[test]
    fn accepts_pdf_mime_type() {
        assert!(is_valid_pdf(&candidate("application/pdf", "", 10)));
    }

    #[test]
    fn falls_back_to_extension_when_mime_type_is_missing() {
        assert!(is_valid_pdf(&candidate("", "x.PDF", 10)));
        assert!(is_valid_pdf(&candidate("", "paper.pdf", 10)));
        assert!(!is_valid_pdf(&candidate("", "paper.txt", 10)));
        assert!(!is_valid_pdf(&candidate("", "pdf", 10)));
        assert!(!is_valid_pdf(&candidate("", ".pdf", 10)));
    }

    #[test]
    fn explicit_non_pdf_mime_type_wins_over_name() {
        assert_eq!(check_pdf(&candidate("text/plain", "x.pdf", 10)), Err(FileRejection::NotPdf));
    }

    #[test]
    fn rejects_empty_files() {
        assert_eq!(check_pdf(&candidate("application/pdf", "x.pdf", 0)), Err(FileRejection::Empty));
    }

    #[test]
    fn url_precheck() {
        assert!(looks_like_pdf_url("https://arxiv.org/pdf/1234.5678.pdf"));
        assert!(looks_like_pdf_url("  http://example.com/A.PDF "));
        assert!(!looks_like_pdf_url("https://example.com/paper"));
        assert!(!looks_like_pdf_url("ftp://example.com/paper.pdf"));
    }

    #[test]
    fn uploaded_pdf_defaults_mime_type() {
        let file = UploadedPdf::new("a.pdf", "", vec![1, 2, 3]);
        assert_eq!(file.mime_type, PDF_MIME_TYPE);
    }
}
