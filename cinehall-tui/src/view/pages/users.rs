//! Registered users page view.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Paragraph, Row, Table, TableState},
};

use crate::model::App;
use crate::view::theme::{Styles, colors};

/// Renders the users page.
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
    let state = &app.users;

    if state.rows.is_empty() {
        let text = if state.loading {
            "  Loading users..."
        } else {
            "  No registered users."
        };
        frame.render_widget(
            Paragraph::new(text).style(Style::default().fg(c.muted)),
            area,
        );
        return;
    }

    let header = Row::new(vec!["Name", "Email", "Phone number"]).style(Styles::table_header());

    let rows: Vec<Row> = state
        .rows
        .iter()
        .map(|user| {
            Row::new(vec![
                user.name.clone(),
                user.email.clone(),
                user.phonenumber.clone(),
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(18),
        Constraint::Min(24),
        Constraint::Length(16),
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
    let state = &app.users;

    let line = if state.loading {
        Paragraph::new(" Loading...").style(Style::default().fg(c.muted))
    } else if let Some(ref error) = state.error {
        Paragraph::new(format!(" Last fetch failed: {error}"))
            .style(Style::default().fg(c.error))
    } else {
        Paragraph::new(format!(" {} users", state.rows.len()))
            .style(Style::default().fg(c.muted))
    };

    frame.render_widget(line, area);
}
