use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::state::{HomeAction, HomeState};
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &HomeState) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Random user directory",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for action in HomeAction::ALL {
        let selected = action == state.selected;
        let marker = if selected { "› " } else { "  " };
        let mut line = Line::from(vec![
            Span::styled(marker, Style::default().fg(ACCENT)),
            Span::styled(
                format!("{:<8}", action.label()),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(action.hint(), Style::default().fg(MUTED_TEXT)),
        ]);
        if selected {
            line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        lines.push(line);
    }

    let width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let popup = centered_rect_by_size(area, width.saturating_add(4), lines.len() as u16 + 2);
    let block = Block::default()
        .title(Span::styled(" userdeck ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
