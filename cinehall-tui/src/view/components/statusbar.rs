//! Bottom status bar: shortcut hints plus the transient notice.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::model::{App, FocusPanel, Page};
use crate::notice::NoticeLevel;
use crate::view::theme::{Styles, colors};

/// Renders the status bar.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // The toast lives on the right-hand side of the bar.
    if let Some(ref active) = app.notice {
        let c = colors();
        let color = match active.notice.level {
            NoticeLevel::Success => c.success,
            NoticeLevel::Error => c.error,
        };
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            active.notice.text.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
    }

    let content = Line::from(spans);
    let paragraph = Paragraph::new(content).style(Styles::statusbar());

    frame.render_widget(paragraph, area);
}

/// Shortcut hints for the current focus and page.
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = Vec::new();

    if app.modal.is_open() {
        hints.push(("Tab", "Next field"));
        hints.push(("Enter", "Confirm"));
        hints.push(("Esc", "Cancel"));
        return hints;
    }

    hints.push(("Tab", "Switch panel"));

    match app.focus {
        FocusPanel::Navigation => {
            hints.push(("↑↓", "Navigate"));
            hints.push(("Enter", "Open"));
        }
        FocusPanel::Content => match app.current_page {
            Page::Orders | Page::Users => {
                hints.push(("↑↓", "Select"));
                hints.push(("Alt+r", "Refresh"));
            }
            Page::Movies => {
                hints.push(("↑↓", "Select"));
                hints.push(("Alt+a", "Add"));
                hints.push(("Alt+e", "Edit"));
                hints.push(("Alt+d", "Delete"));
            }
        },
    }

    hints.push(("Alt+q", "Quit"));

    hints
}
