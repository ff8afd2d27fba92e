use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};

use crate::report::format_amount;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::truncate;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    if app.transactions.is_empty() {
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled(
                "No transactions in this statement",
                theme::dim_style(),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Edit the CSV and run :reload",
                theme::dim_style(),
            )),
        ];
        f.render_widget(
            Paragraph::new(msg)
                .centered()
                .block(theme::panel("Transactions (0)")),
            area,
        );
        return;
    }

    let header_cells = ["Date", "Description", "Amount", "Category"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = app
        .transactions
        .iter()
        .enumerate()
        .skip(app.transaction_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, txn)| {
            let style = if i == app.transaction_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            let sign = if txn.is_credit() { "+" } else { "" };

            Row::new(vec![
                Cell::from(format!("  {}", txn.date_label())),
                Cell::from(truncate(&txn.description, 40)),
                Cell::from(
                    Line::from(Span::styled(
                        format!("{sign}{}", format_amount(txn.amount)),
                        theme::amount_style(txn.amount),
                    ))
                    .right_aligned(),
                ),
                Cell::from(format!("  {}", txn.category)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(14),
        Constraint::Min(20),
        Constraint::Length(16),
        Constraint::Length(18),
    ];

    let title = format!(
        "Transactions ({}) row {}",
        app.transactions.len(),
        app.transaction_index + 1
    );
    let table = Table::new(rows, widths)
        .header(header)
        .block(theme::panel(&title));

    f.render_widget(table, area);
}
