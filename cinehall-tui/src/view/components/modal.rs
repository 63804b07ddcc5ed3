//! Modal dialog rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::model::App;
use crate::model::state::{FormMode, MOVIE_FIELDS, Modal, MovieForm};
use crate::view::theme::colors;

/// Renders the active modal, if any, on top of everything else.
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::MovieForm {
            mode,
            form,
            focus,
            submitting,
            error,
        } => render_movie_form(frame, mode, form, *focus, *submitting, error.as_deref()),
        Modal::ConfirmDelete { title, focus, .. } => render_confirm_delete(frame, title, *focus),
        Modal::Help => render_help(frame),
        Modal::Error { title, message } => render_error(frame, title, message),
    }
}

/// Centers a `width` x `height` rect inside `area`.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Renders the create/edit movie dialog.
fn render_movie_form(
    frame: &mut Frame,
    mode: &FormMode,
    form: &MovieForm,
    focus: usize,
    submitting: bool,
    error: Option<&str>,
) {
    let c = colors();
    let field_count = MOVIE_FIELDS.len() as u16;
    // fields + error line + footer + padding + border
    let height = field_count + 5;
    let area = centered_rect(62, height, frame.area());

    frame.render_widget(Clear, area);

    let title = match mode {
        FormMode::Create => " ADD MOVIE ",
        FormMode::Edit { .. } => " EDIT MOVIE ",
    };

    let block = Block::default()
        .title(title)
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.highlight))
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();

    for (i, field) in MOVIE_FIELDS.iter().enumerate() {
        let is_focused = i == focus;
        let value = form.value(field.key);

        let label_style = if is_focused {
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(c.muted)
        };

        let (value_text, value_style) = if value.is_empty() && !is_focused {
            (
                field.placeholder.to_string(),
                Style::default().fg(Color::DarkGray),
            )
        } else if is_focused {
            // Trailing bar marks the input cursor.
            (format!("{value}▎"), Style::default().fg(c.selected_fg))
        } else {
            (value, Style::default().fg(c.fg))
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {:<16}", field.label), label_style),
            Span::styled(value_text, value_style),
        ]));
    }

    lines.push(Line::from(""));

    if let Some(error) = error {
        lines.push(Line::styled(
            format!(" {error}"),
            Style::default().fg(c.error),
        ));
    } else {
        lines.push(Line::from(""));
    }

    let footer = if submitting {
        Line::styled(" Saving...", Style::default().fg(c.muted))
    } else {
        Line::from(vec![
            Span::styled(" Enter", Style::default().fg(Color::Yellow)),
            Span::styled(" Save  ", Style::default().fg(c.muted)),
            Span::styled("Tab", Style::default().fg(Color::Yellow)),
            Span::styled(" Next field  ", Style::default().fg(c.muted)),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::styled(" Cancel", Style::default().fg(c.muted)),
        ])
    };
    lines.push(footer);

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, inner);
}

/// Renders the delete confirmation prompt.
fn render_confirm_delete(frame: &mut Frame, title: &str, focus: usize) {
    let c = colors();
    let area = centered_rect(52, 8, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Delete Movie ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.error))
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let button = |label: &str, selected: bool| {
        if selected {
            Span::styled(
                format!("[ {label} ]"),
                Style::default()
                    .bg(c.selected_bg)
                    .fg(c.selected_fg)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(format!("[ {label} ]"), Style::default().fg(c.muted))
        }
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!(" Really delete \"{title}\"?"),
            Style::default().fg(c.fg),
        )),
        Line::from(Span::styled(
            " The listing is removed from the backend.",
            Style::default().fg(c.muted),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("        "),
            button("Cancel", focus == 0),
            Span::raw("      "),
            button("Delete", focus == 1),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Renders the keybinding overview.
fn render_help(frame: &mut Frame) {
    let c = colors();
    let area = centered_rect(56, 16, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.highlight))
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let entry = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!(" {key:<12}"), Style::default().fg(Color::Yellow)),
            Span::styled(desc, Style::default().fg(c.fg)),
        ])
    };

    let lines = vec![
        Line::from(""),
        entry("Tab", "Switch between menu and content"),
        entry("↑↓ / jk", "Move the selection"),
        entry("Enter", "Open page / edit movie"),
        entry("Alt+a", "Add a movie"),
        entry("Alt+e", "Edit the selected movie"),
        entry("Alt+d", "Delete the selected movie"),
        entry("Alt+r", "Refresh the current page"),
        entry("Alt+h / ?", "This help"),
        entry("Esc", "Close dialog"),
        entry("Alt+q", "Quit"),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Renders an error dialog.
fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let c = colors();
    let area = centered_rect(56, 9, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.error))
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let paragraph = Paragraph::new(message.to_string())
        .style(Style::default().fg(c.fg))
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, inner);
}
