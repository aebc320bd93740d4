use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::app::Screen;
use crate::ui::list::ListFocus;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer {
    hints: &'static str,
}

impl Footer {
    pub fn for_screen(screen: &Screen) -> Self {
        let hints = match screen {
            Screen::Home(_) => " ↑/↓: Move │ Enter: Open │ f: Fetch │ h: History │ Ctrl+Q: Quit",
            Screen::List(state) if state.focus == ListFocus::Rows => {
                " ↑/↓: Move │ Enter: Details │ Tab: Filters │ r: Refresh │ Esc: Back │ Ctrl+Q: Quit"
            }
            Screen::List(_) => {
                " Type to filter │ Ctrl+U: Clear │ Tab: Next │ Esc: Rows │ Ctrl+Q: Quit"
            }
            Screen::Detail(_) => {
                " Tab: Field │ Ctrl+S: Save │ Ctrl+U: Update │ Ctrl+D: Delete │ Esc: Back │ Ctrl+Q: Quit"
            }
        };
        Self { hints }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = self.hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(self.hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
