//! Movie catalogue page view.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Paragraph, Row, Table, TableState},
};

use crate::model::App;
use crate::view::theme::{Styles, colors};

/// Renders the movie catalogue page.
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
    let state = &app.movies;

    if state.records.is_empty() {
        let text = if state.loading {
            "  Loading movies..."
        } else {
            "  No movies yet. Press Alt+a to add the first listing."
        };
        frame.render_widget(
            Paragraph::new(text).style(Style::default().fg(c.muted)),
            area,
        );
        return;
    }

    let header = Row::new(vec![
        "Title", "Age", "Date", "Time", "Format", "Hall", "Price", "Genres",
    ])
    .style(Styles::table_header());

    let rows: Vec<Row> = state
        .records
        .iter()
        .map(|row| {
            let movie = &row.movie;
            Row::new(vec![
                movie.title.clone(),
                format!("{}+", movie.age_restriction),
                movie.available_date.clone(),
                movie.available_time.clone(),
                movie.format.clone(),
                movie.hall_number.to_string(),
                format!("${:.2}", movie.price),
                movie.genre.join(", "),
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(18),
        Constraint::Length(4),
        Constraint::Length(11),
        Constraint::Length(6),
        Constraint::Length(6),
        Constraint::Length(5),
        Constraint::Length(8),
        Constraint::Min(14),
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
    let state = &app.movies;

    let line = if state.loading {
        Paragraph::new(" Loading...").style(Style::default().fg(c.muted))
    } else if let Some(ref error) = state.error {
        Paragraph::new(format!(" Last fetch failed: {error}"))
            .style(Style::default().fg(c.error))
    } else {
        Paragraph::new(format!(" {} movies", state.records.len()))
            .style(Style::default().fg(c.muted))
    };

    frame.render_widget(line, area);
}
