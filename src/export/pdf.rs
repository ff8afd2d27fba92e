use anyhow::{Context, Result};
use printpdf::{BuiltinFont, Mm, PdfDocument};
use std::path::Path;

use crate::report::{format_amount, Report};

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 10.0;
const LINE_HEIGHT: f32 = 10.0;
const TITLE: &str = "Financial Report";

/// The body lines of the PDF summary, in print order.
pub(crate) fn summary_lines(report: &Report) -> Vec<String> {
    report
        .statement_rows()
        .iter()
        .chain(report.valuation_rows().iter())
        .map(|(label, value)| format!("{label}: {}", format_amount(*value)))
        .collect()
}

/// Render the one-page summary and return the PDF bytes.
pub(crate) fn render_pdf(report: &Report) -> Result<Vec<u8>> {
    let (doc, page, layer) =
        PdfDocument::new(TITLE, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Report");
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| anyhow::anyhow!("Failed to load PDF title font: {e:?}"))?;
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| anyhow::anyhow!("Failed to load PDF body font: {e:?}"))?;
    let layer = doc.get_page(page).get_layer(layer);

    // Helvetica Bold at 16pt is roughly 3.1mm per character
    let title_width = TITLE.len() as f32 * 3.1;
    let mut y = PAGE_HEIGHT - MARGIN - LINE_HEIGHT;
    layer.use_text(
        TITLE,
        16.0,
        Mm((PAGE_WIDTH - title_width) / 2.0),
        Mm(y),
        &bold,
    );

    for line in summary_lines(report) {
        y -= LINE_HEIGHT;
        layer.use_text(line, 12.0, Mm(MARGIN), Mm(y), &regular);
    }

    doc.save_to_bytes()
        .map_err(|e| anyhow::anyhow!("Failed to serialize PDF: {e:?}"))
}

pub(crate) fn write_pdf(report: &Report, path: &Path) -> Result<()> {
    let bytes = render_pdf(report)?;
    std::fs::write(path, bytes)
        .with_context(|| format!("Failed to write PDF: {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote PDF report");
    Ok(())
}
