mod cli;
mod tui;

use anyhow::Result;
use std::path::Path;

use crate::import::{MissingColumns, StatementLoader, REQUIRED_COLUMNS};
use crate::models::Transaction;

pub(crate) use cli::as_cli;
pub(crate) use tui::as_tui;

/// Load a statement, adding a header hint when required columns are missing.
pub(crate) fn load_statement(path: &Path) -> Result<Vec<Transaction>> {
    StatementLoader::load(path).map_err(|e| {
        if e.downcast_ref::<MissingColumns>().is_some() {
            e.context(format!(
                "Expected a header row like: {}",
                REQUIRED_COLUMNS.join(",")
            ))
        } else {
            e
        }
    })
}
