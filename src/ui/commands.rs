use std::collections::HashMap;
use std::sync::LazyLock;

use super::app::{App, Screen};
use crate::config::expand_path;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit finstate", cmd_quit, r);
    register_command!("quit", "Quit finstate", cmd_quit, r);
    register_command!("s", "Go to Statements", cmd_statements, r);
    register_command!("statements", "Go to Statements", cmd_statements, r);
    register_command!("t", "Go to Transactions", cmd_transactions, r);
    register_command!("transactions", "Go to Transactions", cmd_transactions, r);
    register_command!("c", "Go to Charts", cmd_charts, r);
    register_command!("charts", "Go to Charts", cmd_charts, r);
    register_command!("r", "Go to Rules", cmd_rules, r);
    register_command!("rules", "Go to Rules", cmd_rules, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!(
        "pdf",
        "Write the PDF report (e.g. :pdf ~/report.pdf)",
        cmd_pdf,
        r
    );
    register_command!(
        "xlsx",
        "Write the XLSX workbook (e.g. :xlsx ~/financials.xlsx)",
        cmd_xlsx,
        r
    );
    register_command!(
        "export",
        "Write both PDF and XLSX to the output directory",
        cmd_export,
        r
    );
    register_command!("reload", "Reload the statement CSV", cmd_reload, r);

    r
});

/// Run a `:` command. Failures are reported in the status line rather
/// than ending the session.
pub(crate) fn handle_command(input: &str, app: &mut App) {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        if let Err(e) = (cmd.run)(args, app) {
            tracing::warn!(command = cmd_name, error = %e, "command failed");
            app.set_status(format!("Error: {e:#}"));
        }
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| (levenshtein(input, k), **k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

fn optional_path(args: &str) -> Option<std::path::PathBuf> {
    if args.is_empty() {
        None
    } else {
        Some(expand_path(args))
    }
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_statements(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.screen = Screen::Statements;
    Ok(())
}

fn cmd_transactions(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.screen = Screen::Transactions;
    Ok(())
}

fn cmd_charts(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.screen = Screen::Charts;
    Ok(())
}

fn cmd_rules(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.screen = Screen::Rules;
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_pdf(args: &str, app: &mut App) -> anyhow::Result<()> {
    app.export_pdf(optional_path(args))
}

fn cmd_xlsx(args: &str, app: &mut App) -> anyhow::Result<()> {
    app.export_xlsx(optional_path(args))
}

fn cmd_export(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.export_pdf(None)?;
    app.export_xlsx(None)?;
    app.set_status(format!(
        "Wrote {} and {}",
        app.export.pdf_path().display(),
        app.export.xlsx_path().display()
    ));
    Ok(())
}

fn cmd_reload(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.load()
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
