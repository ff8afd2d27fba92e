use std::path::{Path, PathBuf};

pub(crate) const PDF_FILE_NAME: &str = "report.pdf";
pub(crate) const XLSX_FILE_NAME: &str = "financials.xlsx";

/// Where exports land when no explicit path is given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ExportConfig {
    pub(crate) out_dir: PathBuf,
}

impl ExportConfig {
    pub(crate) fn new(out_dir: Option<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.unwrap_or_else(default_output_dir),
        }
    }

    pub(crate) fn pdf_path(&self) -> PathBuf {
        self.out_dir.join(PDF_FILE_NAME)
    }

    pub(crate) fn xlsx_path(&self) -> PathBuf {
        self.out_dir.join(XLSX_FILE_NAME)
    }
}

/// The user's download directory, or the working directory when the
/// platform has none.
pub(crate) fn default_output_dir() -> PathBuf {
    directories::UserDirs::new()
        .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Expand a leading `~/` to the home directory.
pub(crate) fn expand_path(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(dirs) = directories::BaseDirs::new() {
            return dirs.home_dir().join(rest);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
