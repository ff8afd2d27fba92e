#![allow(clippy::unwrap_used)]

use super::*;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::Transaction;

fn press(app: &mut App, code: KeyCode) {
    handle_key(KeyEvent::new(code, KeyModifiers::NONE), app);
}

fn ctrl(app: &mut App, c: char) {
    handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL), app);
}

fn app_with_rows(n: i64) -> (tempfile::TempDir, App) {
    let dir = tempfile::tempdir().unwrap();
    let mut app = App::new(
        &dir.path().join("statement.csv"),
        ExportConfig::new(Some(dir.path().to_path_buf())),
    );
    let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let rows = (0..n)
        .map(|i| Transaction::new(date, format!("Sale {i}"), Decimal::from(i + 1)))
        .collect();
    app.set_statement(rows).unwrap();
    app.visible_rows = 3;
    (dir, app)
}

// ── Navigation ────────────────────────────────────────────────

#[test]
fn test_number_keys_switch_tabs() {
    let (_dir, mut app) = app_with_rows(0);
    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.screen, Screen::Charts);
    press(&mut app, KeyCode::Char('4'));
    assert_eq!(app.screen, Screen::Rules);
    press(&mut app, KeyCode::Char('1'));
    assert_eq!(app.screen, Screen::Statements);
}

#[test]
fn test_tab_cycles_and_wraps() {
    let (_dir, mut app) = app_with_rows(0);
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.screen, Screen::Rules);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.screen, Screen::Statements);
}

#[test]
fn test_scroll_only_on_transactions() {
    let (_dir, mut app) = app_with_rows(10);
    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.transaction_index, 0);

    press(&mut app, KeyCode::Char('2'));
    for _ in 0..4 {
        press(&mut app, KeyCode::Char('j'));
    }
    assert_eq!(app.transaction_index, 4);
    assert_eq!(app.transaction_scroll, 2);

    press(&mut app, KeyCode::Char('G'));
    assert_eq!(app.transaction_index, 9);
    press(&mut app, KeyCode::Char('g'));
    assert_eq!((app.transaction_index, app.transaction_scroll), (0, 0));
}

#[test]
fn test_ctrl_q_quits() {
    let (_dir, mut app) = app_with_rows(0);
    ctrl(&mut app, 'q');
    assert!(!app.running);
}

#[test]
fn test_help_closes_on_any_key() {
    let (_dir, mut app) = app_with_rows(0);
    press(&mut app, KeyCode::Char('?'));
    assert!(app.show_help);
    press(&mut app, KeyCode::Char('3'));
    assert!(!app.show_help);
    assert_eq!(app.screen, Screen::Statements);
}

// ── Command mode ──────────────────────────────────────────────

#[test]
fn test_command_mode_runs_on_enter() {
    let (_dir, mut app) = app_with_rows(0);
    press(&mut app, KeyCode::Char(':'));
    assert_eq!(app.input_mode, InputMode::Command);
    for c in "rules".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.screen, Screen::Rules);
    assert!(app.command_input.is_empty());
}

#[test]
fn test_command_mode_escape_and_ctrl_w() {
    let (_dir, mut app) = app_with_rows(0);
    press(&mut app, KeyCode::Char(':'));
    for c in "pdf out".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    ctrl(&mut app, 'w');
    assert_eq!(app.command_input, "pdf ");
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert!(app.command_input.is_empty());
}

#[test]
fn test_backspace_on_empty_leaves_command_mode() {
    let (_dir, mut app) = app_with_rows(0);
    press(&mut app, KeyCode::Char(':'));
    press(&mut app, KeyCode::Char('q'));
    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert!(app.running);
}

// ── Export keys ───────────────────────────────────────────────

#[test]
fn test_export_keys_write_files() {
    let (dir, mut app) = app_with_rows(2);
    press(&mut app, KeyCode::Char('p'));
    assert!(dir.path().join("report.pdf").exists());
    press(&mut app, KeyCode::Char('x'));
    assert!(dir.path().join("financials.xlsx").exists());
    assert!(app.status_message.contains("financials.xlsx"));
}
