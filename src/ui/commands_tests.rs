#![allow(clippy::unwrap_used)]

use super::*;
use crate::config::ExportConfig;
use std::io::Write;
use std::path::Path;

fn app_in(dir: &Path) -> App {
    App::new(
        &dir.join("statement.csv"),
        ExportConfig::new(Some(dir.to_path_buf())),
    )
}

fn write_statement(dir: &Path, content: &str) {
    let mut f = std::fs::File::create(dir.join("statement.csv")).unwrap();
    f.write_all(content.as_bytes()).unwrap();
}

// ── levenshtein / find_closest ────────────────────────────────

#[test]
fn test_levenshtein() {
    assert_eq!(levenshtein("", ""), 0);
    assert_eq!(levenshtein("pdf", "pdf"), 0);
    assert_eq!(levenshtein("pfd", "pdf"), 2);
    assert_eq!(levenshtein("xls", "xlsx"), 1);
}

#[test]
fn test_find_closest() {
    assert_eq!(find_closest("xls"), "xlsx");
    assert_eq!(find_closest("relod"), "reload");
}

// ── handle_command ────────────────────────────────────────────

#[test]
fn test_navigation_commands() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_in(dir.path());
    handle_command("t", &mut app);
    assert_eq!(app.screen, Screen::Transactions);
    handle_command("charts", &mut app);
    assert_eq!(app.screen, Screen::Charts);
    handle_command("r", &mut app);
    assert_eq!(app.screen, Screen::Rules);
    handle_command("  statements  ", &mut app);
    assert_eq!(app.screen, Screen::Statements);
}

#[test]
fn test_quit_and_help() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_in(dir.path());
    handle_command("help", &mut app);
    assert!(app.show_help);
    handle_command("q", &mut app);
    assert!(!app.running);
}

#[test]
fn test_unknown_command_suggests() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_in(dir.path());
    handle_command("expor", &mut app);
    assert!(app.status_message.contains("Unknown command: :expor"));
    assert!(app.status_message.contains(":export"));
}

#[test]
fn test_reload_and_export() {
    let dir = tempfile::tempdir().unwrap();
    write_statement(
        dir.path(),
        "Date,Description,Amount\n2024-01-01,Shell Fuel,-50\n2024-01-02,Invoice,2000\n",
    );
    let mut app = app_in(dir.path());

    handle_command("reload", &mut app);
    assert_eq!(app.transactions.len(), 2);
    assert!(app.status_message.starts_with("Loaded 2 transactions"));

    handle_command("export", &mut app);
    assert!(dir.path().join("report.pdf").exists());
    assert!(dir.path().join("financials.xlsx").exists());
}

#[test]
fn test_pdf_with_explicit_path() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_in(dir.path());
    let target = dir.path().join("custom.pdf");
    handle_command(&format!("pdf {}", target.display()), &mut app);
    assert!(target.exists());
    assert!(app.status_message.contains("custom.pdf"));
}

#[test]
fn test_export_failure_goes_to_status() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_in(dir.path());
    handle_command("xlsx /nonexistent/dir/out.xlsx", &mut app);
    assert!(app.status_message.starts_with("Error:"));
    assert!(app.running);
}

#[test]
fn test_reload_missing_columns_keeps_session() {
    let dir = tempfile::tempdir().unwrap();
    write_statement(dir.path(), "Date,Amount\n2024-01-01,5\n");
    let mut app = app_in(dir.path());
    handle_command("reload", &mut app);
    assert!(app.status_message.contains("CSV must have columns"));
    assert!(app.transactions.is_empty());
    assert!(app.running);
}

#[test]
fn test_help_lists_every_long_command() {
    let long: Vec<&str> = COMMANDS.keys().copied().filter(|k| k.len() > 1).collect();
    assert!(long.contains(&"pdf"));
    assert!(long.contains(&"xlsx"));
    assert!(long.contains(&"reload"));
}
