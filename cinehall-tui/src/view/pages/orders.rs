//! Ticket orders page view.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Paragraph, Row, Table, TableState},
};

use crate::model::App;
use crate::view::theme::{Styles, colors};

/// Renders the ticket orders page.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    render_body(app, frame, chunks[0]);
    render_footer(app, frame, chunks[1]);
}

fn render_body(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let state = &app.orders;

    if state.rows.is_empty() {
        let text = if state.loading {
            "  Loading tickets..."
        } else {
            "  No tickets on sale."
        };
        frame.render_widget(
            Paragraph::new(text).style(Style::default().fg(c.muted)),
            area,
        );
        return;
    }

    let header = Row::new(vec![
        "Title", "Date", "Time", "Country", "Hall", "Price", "Tickets",
    ])
    .style(Styles::table_header());

    let rows: Vec<Row> = state
        .rows
        .iter()
        .map(|movie| {
            let tickets = movie
                .ticket_count
                .map_or_else(|| "-".to_string(), |n| n.to_string());
            Row::new(vec![
                movie.title.clone(),
                movie.available_date.clone(),
                movie.available_time.clone(),
                movie.country.clone(),
                movie.hall_number.to_string(),
                format!("${:.2}", movie.price),
                tickets,
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(18),
        Constraint::Length(11),
        Constraint::Length(6),
        Constraint::Length(12),
        Constraint::Length(5),
        Constraint::Length(8),
        Constraint::Length(8),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .row_highlight_style(
            Style::default()
                .bg(c.selected_bg)
                .fg(c.selected_fg)
                .add_modifier(Modifier::BOLD),
        );

    let mut table_state = TableState::default();
    table_state.select(Some(state.selected));

    frame.render_stateful_widget(table, area, &mut table_state);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let state = &app.orders;

    let line = if state.loading {
        Paragraph::new(" Loading...").style(Style::default().fg(c.muted))
    } else if let Some(ref error) = state.error {
        Paragraph::new(format!(" Last fetch failed: {error}"))
            .style(Style::default().fg(c.error))
    } else {
        Paragraph::new(format!(" {} tickets listed", state.rows.len()))
            .style(Style::default().fg(c.muted))
    };

    frame.render_widget(line, area);
}
