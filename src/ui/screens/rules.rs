use ratatui::{
    layout::{Constraint, Rect},
    text::Span,
    widgets::{Cell, Row, Table},
    Frame,
};
use rust_decimal::Decimal;

use crate::categorize::{fallback_category, rules};
use crate::ui::theme;

pub(crate) fn render(f: &mut Frame, area: Rect) {
    let header = Row::new(
        ["#", "Description contains", "Category"]
            .iter()
            .map(|h| Cell::from(*h).style(theme::header_style())),
    );

    let keyword_rows = rules().iter().map(|rule| {
        (
            rule.keywords.join(" | "),
            rule.category,
            theme::normal_style(),
        )
    });
    let fallback_rows = [
        ("(no match, amount > 0)", Decimal::ONE),
        ("(no match, amount <= 0)", Decimal::ZERO),
    ]
    .into_iter()
    .map(|(when, amount)| (when.to_string(), fallback_category(amount), theme::dim_style()));

    let rows: Vec<Row> = keyword_rows
        .chain(fallback_rows)
        .enumerate()
        .map(|(i, (pattern, category, style))| {
            Row::new(vec![
                Cell::from(format!("{}", i + 1)),
                Cell::from(Span::styled(pattern, style)),
                Cell::from(category.as_str()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Min(28),
        Constraint::Length(18),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(theme::panel("Categorization Rules (first match wins)"));
    f.render_widget(table, area);
}
