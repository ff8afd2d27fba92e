//! PDF and spreadsheet serialization of a finished report.

mod pdf;
mod xlsx;

pub(crate) use pdf::write_pdf;
pub(crate) use xlsx::write_xlsx;
