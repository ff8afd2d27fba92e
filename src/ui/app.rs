use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::config::ExportConfig;
use crate::models::Transaction;
use crate::report::Report;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Statements,
    Transactions,
    Charts,
    Rules,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[
            Self::Statements,
            Self::Transactions,
            Self::Charts,
            Self::Rules,
        ]
    }

    pub(crate) fn next(self) -> Self {
        let screens = Self::all();
        let idx = screens.iter().position(|s| *s == self).unwrap_or(0);
        screens[(idx + 1) % screens.len()]
    }

    pub(crate) fn prev(self) -> Self {
        let screens = Self::all();
        let idx = screens.iter().position(|s| *s == self).unwrap_or(0);
        if idx == 0 {
            screens[screens.len() - 1]
        } else {
            screens[idx - 1]
        }
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Statements => write!(f, "Statements"),
            Self::Transactions => write!(f, "Transactions"),
            Self::Charts => write!(f, "Charts"),
            Self::Rules => write!(f, "Rules"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
        }
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    // Source and export targets
    pub(crate) source: PathBuf,
    pub(crate) export: ExportConfig,

    // Loaded statement
    pub(crate) transactions: Vec<Transaction>,
    pub(crate) report: Report,

    // Transactions table
    pub(crate) transaction_index: usize,
    pub(crate) transaction_scroll: usize,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(source: &Path, export: ExportConfig) -> Self {
        Self {
            running: true,
            screen: Screen::Statements,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,

            source: source.to_path_buf(),
            export,

            transactions: Vec::new(),
            report: Report::default(),

            transaction_index: 0,
            transaction_scroll: 0,

            visible_rows: 20,
        }
    }

    /// Run the whole pipeline again on the source file.
    pub(crate) fn load(&mut self) -> Result<()> {
        let transactions = crate::run::load_statement(&self.source)?;
        self.set_statement(transactions)?;
        self.set_status(format!(
            "Loaded {} transactions from {}",
            self.transactions.len(),
            self.source.display()
        ));
        Ok(())
    }

    /// Replace the loaded rows and rebuild every figure from them.
    pub(crate) fn set_statement(&mut self, transactions: Vec<Transaction>) -> Result<()> {
        self.report = Report::build(&transactions)?;
        self.transactions = transactions;
        if self.transaction_index >= self.transactions.len() {
            self.transaction_index = self.transactions.len().saturating_sub(1);
        }
        self.transaction_scroll = self.transaction_scroll.min(self.transaction_index);
        Ok(())
    }

    pub(crate) fn export_pdf(&mut self, path: Option<PathBuf>) -> Result<()> {
        let path = path.unwrap_or_else(|| self.export.pdf_path());
        crate::export::write_pdf(&self.report, &path)?;
        self.set_status(format!("Wrote PDF report to {}", path.display()));
        Ok(())
    }

    pub(crate) fn export_xlsx(&mut self, path: Option<PathBuf>) -> Result<()> {
        let path = path.unwrap_or_else(|| self.export.xlsx_path());
        crate::export::write_xlsx(&self.transactions, &self.report, &path)?;
        self.set_status(format!(
            "Wrote {} transactions to {}",
            self.transactions.len(),
            path.display()
        ));
        Ok(())
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
