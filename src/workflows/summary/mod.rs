mod content;
mod markup;
mod render;

pub use content::{ExecutiveSummary, MetricCell, MetricRow, Paragraph, Span, SpanStyle};
pub use markup::{typeset, ACCENT, TEXT_PRIMARY, TEXT_SECONDARY};
pub use render::render_pdf;

use crate::workflows::artifact::write_atomically;
use chrono::NaiveDate;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("summary must fit on one page but typeset to {pages} pages")]
    PageOverflow { pages: usize },
    #[error("failed to compile summary document: {0}")]
    Compile(String),
    #[error("failed to export PDF: {0}")]
    Pdf(String),
    #[error("failed to write executive summary: {0}")]
    Io(#[from] std::io::Error),
}

/// Typesets `summary` and writes it as a one-page PDF at `path`.
pub fn write_executive_summary(
    summary: &ExecutiveSummary,
    path: &Path,
    generated_on: NaiveDate,
) -> Result<(), SummaryError> {
    let source = typeset(summary, generated_on);
    debug!(source_bytes = source.len(), "executive summary typeset");
    let bytes = render_pdf(&source)?;
    write_atomically(path, &bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_pdf_into_nested_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("assets").join("docs").join("executive_summary.pdf");
        let generated_on = NaiveDate::from_ymd_opt(2025, 10, 25).expect("valid date");

        write_executive_summary(&ExecutiveSummary::snapshot(), &path, generated_on)
            .expect("summary written");

        let bytes = std::fs::read(&path).expect("pdf readable");
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn content_spilling_past_one_page_is_rejected() {
        let filler = "#lorem(400)\n\n".repeat(6);
        let source = format!(
            "#set page(width: 8.5in, height: 11in, margin: (x: 0.65in, y: 0.4in))\n{filler}"
        );

        match render_pdf(&source) {
            Err(SummaryError::PageOverflow { pages }) => assert!(pages > 1),
            other => panic!("expected page overflow, got {other:?}"),
        }
    }
}
