use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};
use rust_decimal::Decimal;

use crate::report::format_amount;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::format_ratio;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Headline cards
            Constraint::Min(8),    // Detail tables
        ])
        .split(area);

    render_cards(f, chunks[0], app);

    let detail = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(chunks[1]);

    let balance = [
        ("Assets", app.report.balance.assets),
        ("Liabilities", app.report.balance.liabilities),
        ("Equity", app.report.balance.equity),
    ];
    render_figures(
        f,
        detail[0],
        "Balance Sheet (Simplified)",
        balance
            .iter()
            .map(|(label, value)| (*label, format_amount(*value))),
    );
    render_figures(
        f,
        detail[1],
        "Ratios",
        app.report
            .ratios
            .rows()
            .into_iter()
            .map(|(label, ratio)| (label, format_ratio(ratio))),
    );
    render_figures(
        f,
        detail[2],
        "Enterprise Valuation",
        app.report
            .valuation_rows()
            .into_iter()
            .map(|(label, value)| (label, format_amount(value))),
    );
}

fn render_cards(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let income = &app.report.income;
    render_card(f, cards[0], "Revenue", income.revenue, theme::GREEN);
    render_card(f, cards[1], "Expenses", income.expenses, theme::RED);
    render_card(
        f,
        cards[2],
        "Net Profit",
        income.net_profit,
        signed_color(income.net_profit),
    );
    render_card(
        f,
        cards[3],
        "Equity",
        app.report.balance.equity,
        signed_color(app.report.balance.equity),
    );
}

fn signed_color(amount: Decimal) -> Color {
    if amount < Decimal::ZERO {
        theme::RED
    } else {
        theme::GREEN
    }
}

fn render_card(f: &mut Frame, area: Rect, title: &str, amount: Decimal, color: Color) {
    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format_amount(amount),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ])
    .centered()
    .block(theme::panel(title));

    f.render_widget(text, area);
}

fn render_figures<'a>(
    f: &mut Frame,
    area: Rect,
    title: &str,
    figures: impl Iterator<Item = (&'a str, String)>,
) {
    let rows: Vec<Row> = figures
        .enumerate()
        .map(|(i, (label, value))| {
            let style = if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };
            Row::new(vec![
                Cell::from(label),
                Cell::from(Line::from(value).right_aligned()),
            ])
            .style(style)
        })
        .collect();

    let widths = [Constraint::Min(16), Constraint::Length(16)];
    let table = Table::new(rows, widths).block(theme::panel(title));
    f.render_widget(table, area);
}
