use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Bar, BarChart, BarGroup, Chart, Dataset, GraphType, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::report::format_amount;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::truncate;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_expense_bars(f, chunks[0], app);
    render_balance_line(f, chunks[1], app);
}

/// Borders leave no room for a plot when either side is under three cells.
fn too_small(area: Rect) -> bool {
    area.width < 3 || area.height < 3
}

fn render_empty(f: &mut Frame, area: Rect, title: &str, message: &str) {
    let msg = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(message.to_string(), theme::dim_style())),
    ])
    .centered()
    .block(theme::panel(title));
    f.render_widget(msg, area);
}

fn render_expense_bars(f: &mut Frame, area: Rect, app: &App) {
    const TITLE: &str = "Expenses by Category";
    let series = &app.report.expenses_by_category;
    if too_small(area) {
        f.render_widget(theme::panel(TITLE), area);
        return;
    }
    if series.is_empty() {
        render_empty(f, area, TITLE, "No outflows in this statement");
        return;
    }

    let slots = series.len() as u16;
    let bar_width = (area.width.saturating_sub(2) / slots)
        .saturating_sub(1)
        .clamp(6, 18)
        .min(area.width - 2);

    let bars: Vec<Bar> = series
        .iter()
        .map(|(category, amount)| {
            Bar::default()
                .value(amount.round().to_u64().unwrap_or(0))
                .text_value(format_amount(*amount))
                .label(Line::from(truncate(category.as_str(), bar_width as usize)))
                .style(Style::default().fg(theme::ACCENT))
                .value_style(
                    Style::default()
                        .fg(theme::HEADER_BG)
                        .bg(theme::ACCENT)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(theme::panel(TITLE))
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .bar_style(Style::default().fg(theme::ACCENT));

    f.render_widget(chart, area);
}

/// Day offsets from the first date against the closing balance of each day.
pub(crate) fn balance_points(series: &[(chrono::NaiveDate, Decimal)]) -> Vec<(f64, f64)> {
    let Some((first, _)) = series.first() else {
        return Vec::new();
    };
    series
        .iter()
        .map(|(date, balance)| {
            let x = (*date - *first).num_days() as f64;
            (x, balance.to_f64().unwrap_or(0.0))
        })
        .collect()
}

/// Axis bounds padded so a flat series still gets a visible range.
pub(crate) fn bounds(values: impl Iterator<Item = f64>) -> [f64; 2] {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !lo.is_finite() || !hi.is_finite() {
        return [0.0, 1.0];
    }
    if (hi - lo).abs() < f64::EPSILON {
        return [lo - 1.0, hi + 1.0];
    }
    [lo, hi]
}

fn render_balance_line(f: &mut Frame, area: Rect, app: &App) {
    const TITLE: &str = "Balance Over Time";
    let series = &app.report.balance_by_date;
    if too_small(area) {
        f.render_widget(theme::panel(TITLE), area);
        return;
    }
    let (Some((first, _)), Some((last, closing))) = (series.first(), series.last()) else {
        render_empty(f, area, TITLE, "No dated rows to plot");
        return;
    };

    let points = balance_points(series);
    let x_bounds = bounds(points.iter().map(|(x, _)| *x));
    let y_bounds = bounds(points.iter().map(|(_, y)| *y).chain(std::iter::once(0.0)));

    let dataset = Dataset::default()
        .name("Balance")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(theme::PEACH))
        .data(&points);

    let label = |s: String| Span::styled(s, theme::dim_style());
    let chart = Chart::new(vec![dataset])
        .block(theme::panel(&format!(
            "{TITLE} (closing {})",
            format_amount(*closing)
        )))
        .x_axis(
            Axis::default()
                .style(theme::dim_style())
                .bounds(x_bounds)
                .labels(vec![label(first.to_string()), label(last.to_string())]),
        )
        .y_axis(
            Axis::default()
                .style(theme::dim_style())
                .bounds(y_bounds)
                .labels(vec![
                    label(format!("{:.0}", y_bounds[0])),
                    label(format!("{:.0}", y_bounds[1])),
                ]),
        );

    f.render_widget(chart, area);
}

#[cfg(test)]
#[path = "charts_tests.rs"]
mod tests;
