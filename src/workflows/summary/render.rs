use super::SummaryError;
use tracing::warn;
use typst_as_lib::typst_kit_options::TypstKitFontOptions;
use typst_as_lib::TypstEngine;

/// Compiles Typst `source` with the embedded font set and returns the PDF bytes of its single
/// page.
pub fn render_pdf(source: &str) -> Result<Vec<u8>, SummaryError> {
    let engine = TypstEngine::builder()
        .main_file(source)
        .search_fonts_with(
            TypstKitFontOptions::default()
                .include_system_fonts(false)
                .include_embedded_fonts(true),
        )
        .build();

    let compiled = engine.compile();
    for warning in &compiled.warnings {
        warn!(message = %warning.message, "typst warning");
    }

    let document = compiled
        .output
        .map_err(|err| SummaryError::Compile(format!("{err:?}")))?;
    let bytes = typst_pdf::pdf(&document, &typst_pdf::PdfOptions::default())
        .map_err(|err| SummaryError::Pdf(format!("{err:?}")))?;

    let pages = document.pages.len();
    if pages != 1 {
        return Err(SummaryError::PageOverflow { pages });
    }

    Ok(bytes)
}
