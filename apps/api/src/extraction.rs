//! Text extraction for uploaded resume documents.

use docx_rs::{DocumentChild, ParagraphChild, RunChild};
use tracing::warn;

use crate::errors::AppError;

/// Document formats the upload endpoint accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Classifies a filename by extension, case-insensitive.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let (_, ext) = filename.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }
}

/// Extracts the plain-text content of an uploaded document.
///
/// An unrecognized extension yields empty text rather than an error; the
/// upload handler rejects such files before extraction runs. A corrupt or
/// unreadable document is a request-fatal extraction error — no partial
/// recovery is attempted.
pub fn extract_text(filename: &str, data: &[u8]) -> Result<String, AppError> {
    match DocumentKind::from_filename(filename) {
        Some(DocumentKind::Pdf) => extract_pdf(data),
        Some(DocumentKind::Docx) => extract_docx(data),
        None => Ok(String::new()),
    }
}

/// Page-by-page PDF extraction, concatenated in page order. A page that
/// yields no extractable text contributes nothing.
fn extract_pdf(data: &[u8]) -> Result<String, AppError> {
    let doc = lopdf::Document::load_mem(data)
        .map_err(|e| AppError::Extraction(format!("Failed to read PDF: {e}")))?;

    let mut text = String::new();
    for page_number in doc.get_pages().keys() {
        match doc.extract_text(&[*page_number]) {
            Ok(page_text) => text.push_str(&page_text),
            Err(e) => warn!("No text extracted from PDF page {page_number}: {e}"),
        }
    }
    Ok(text)
}

/// Full DOCX text in one pass: paragraphs → runs → text nodes, one line per
/// paragraph.
fn extract_docx(data: &[u8]) -> Result<String, AppError> {
    let docx = docx_rs::read_docx(data)
        .map_err(|e| AppError::Extraction(format!("Failed to read DOCX: {e}")))?;

    let mut text = String::new();
    for child in docx.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            for child in paragraph.children {
                if let ParagraphChild::Run(run) = child {
                    for child in run.children {
                        if let RunChild::Text(t) = child {
                            text.push_str(&t.text);
                        }
                    }
                }
            }
            text.push('\n');
        }
    }
    Ok(text)
}

/// Sanitizes an uploaded filename before it touches the filesystem.
///
/// Path components are stripped, whitespace becomes `_`, and any character
/// outside `[A-Za-z0-9._-]` is dropped. Leading dots are removed so an
/// upload can never become a hidden file. Falls back to `"resume"` when
/// nothing survives.
pub fn sanitize_filename(filename: &str) -> String {
    let base = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename);

    let cleaned: String = base
        .chars()
        .filter_map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                Some(c)
            } else if c.is_whitespace() {
                Some('_')
            } else {
                None
            }
        })
        .collect();

    let cleaned = cleaned.trim_start_matches('.').to_string();
    if cleaned.is_empty() {
        "resume".to_string()
    } else {
        cleaned
    }
}
