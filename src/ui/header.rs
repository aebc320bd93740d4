use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK,
};

/// Top bar: route on display, backend in use, and the last queueing error.
pub struct Header<'a> {
    route: String,
    backend_url: &'a str,
    saved_count: usize,
    error: Option<&'a str>,
}

impl<'a> Header<'a> {
    pub fn new(route: String, backend_url: &'a str, saved_count: usize, error: Option<&'a str>) -> Self {
        Self {
            route,
            backend_url,
            saved_count,
            error,
        }
    }

    pub fn widget(self) -> Paragraph<'a> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let marker_style = match self.error {
            Some(_) => Style::default().fg(STATUS_ERROR),
            None => Style::default().fg(STATUS_OK),
        };

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled("●", marker_style),
            Span::styled("  ", text_style),
            Span::styled("userdeck", Style::default().fg(ACCENT)),
            Span::styled("  │  ", separator_style),
            Span::styled(self.route, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(self.backend_url, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} saved", self.saved_count), text_style),
        ];
        if let Some(error) = self.error {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(error, Style::default().fg(STATUS_ERROR)));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
