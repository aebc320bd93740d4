//! Small building blocks shared by the screens.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::theme::{
    FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK, STATUS_PENDING,
};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner(tick: u64) -> &'static str {
    SPINNER[(tick % SPINNER.len() as u64) as usize]
}

/// One-line bordered text input. Places the cursor at the end of `value`
/// when focused.
pub fn render_input(
    frame: &mut Frame<'_>,
    area: Rect,
    label: &str,
    value: &str,
    placeholder: &str,
    focused: bool,
) {
    let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    let text = if value.is_empty() {
        Span::styled(placeholder.to_string(), Style::default().fg(MUTED_TEXT))
    } else {
        Span::styled(value.to_string(), Style::default().fg(HEADER_TEXT))
    };
    let block = Block::default()
        .title(Span::styled(format!(" {label} "), Style::default().fg(border)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    frame.render_widget(Paragraph::new(Line::from(text)).block(block), area);

    if focused && area.width > 2 && area.height > 2 {
        let offset = (value.chars().count() as u16).min(area.width - 3);
        frame.set_cursor_position((area.x + 1 + offset, area.y + 1));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Pending,
    Ok,
    Error,
}

pub fn status_line(tone: Tone, text: &str) -> Line<'static> {
    let color = match tone {
        Tone::Pending => STATUS_PENDING,
        Tone::Ok => STATUS_OK,
        Tone::Error => STATUS_ERROR,
    };
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinner_wraps() {
        assert_eq!(spinner(0), spinner(SPINNER.len() as u64));
    }
}
