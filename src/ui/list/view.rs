use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState as ListWidgetState, Paragraph};
use ratatui::Frame;

use super::state::{ListFocus, ListState, LoadStatus};
use crate::filter::CountryMatch;
use crate::model::User;
use crate::store::Provenance;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use crate::ui::widgets::{render_input, spinner, status_line, Tone};

pub fn title(mode: Provenance) -> &'static str {
    match mode {
        Provenance::Random => "Random users",
        Provenance::Saved => "Saved users",
    }
}

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &ListState, users: &[User], tick: u64) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);
    let inputs = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    render_input(
        frame,
        inputs[0],
        "Name",
        &state.filter.name,
        "filter by name",
        state.focus == ListFocus::Name,
    );
    let (country_label, country_placeholder) = match state.filter.country_match {
        CountryMatch::Substring => ("Country", "filter by country"),
        CountryMatch::Exact => ("Country ◂ ▸", "all countries"),
    };
    render_input(
        frame,
        inputs[1],
        country_label,
        &state.filter.country,
        country_placeholder,
        state.focus == ListFocus::Country,
    );

    let visible = state.visible(users);
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ({} of {}) ", title(state.mode), visible.len(), users.len()),
            Style::default().fg(ACCENT),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    let list_area = match &state.status {
        LoadStatus::Loading(_) => {
            let text = format!("{} Loading users...", spinner(tick));
            frame.render_widget(
                Paragraph::new(status_line(Tone::Pending, &text)).block(block),
                rows[1],
            );
            return;
        }
        // The store keeps the previous list on failure, so it stays on screen.
        LoadStatus::Failed(message) => {
            let split = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Min(0)])
                .split(rows[1]);
            let mut line = status_line(Tone::Error, message);
            line.push_span(Span::styled(
                "  Press r to retry",
                Style::default().fg(MUTED_TEXT),
            ));
            frame.render_widget(Paragraph::new(line), split[0]);
            split[1]
        }
        LoadStatus::Idle => rows[1],
    };

    if visible.is_empty() {
        let line = Line::from(Span::styled(
            "No users found",
            Style::default().fg(MUTED_TEXT),
        ));
        frame.render_widget(Paragraph::new(line).block(block), list_area);
        return;
    }

    let name_width = visible
        .iter()
        .map(|user| user.full_name().chars().count())
        .max()
        .unwrap_or(0);
    let items: Vec<ListItem> = visible
        .iter()
        .map(|user| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<width$}", user.full_name(), width = name_width),
                    Style::default().fg(HEADER_TEXT),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("{:<16}", user.location.country),
                    Style::default().fg(HEADER_TEXT),
                ),
                Span::styled(user.email.clone(), Style::default().fg(MUTED_TEXT)),
            ]))
        })
        .collect();

    let highlight = if state.focus == ListFocus::Rows {
        Style::default()
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().bg(ACTIVE_HIGHLIGHT)
    };
    let list = List::new(items)
        .block(block)
        .highlight_style(highlight)
        .highlight_symbol("› ");
    let mut widget_state =
        ListWidgetState::default().with_selected(Some(state.selected.min(visible.len() - 1)));
    frame.render_stateful_widget(list, list_area, &mut widget_state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Dob, Location, Name, Picture};
    use crate::ui::worker::RequestId;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn user(id: &str, first: &str) -> User {
        User {
            id: id.to_string(),
            gender: "female".to_string(),
            name: Name::new("Ms", first, "Doe"),
            location: Location {
                country: "France".to_string(),
                ..Location::default()
            },
            email: format!("{first}@example.com"),
            phone: String::new(),
            picture: Picture::default(),
            dob: Dob::default(),
        }
    }

    fn screen_text(state: &ListState, users: &[User]) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), state, users, 0))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn failed_refetch_keeps_cached_rows_visible() {
        let users = vec![user("r1", "Jane")];
        let state = ListState {
            status: LoadStatus::Failed("Failed to fetch users".to_string()),
            ..ListState::default()
        };

        let text = screen_text(&state, &users);
        assert!(text.contains("Failed to fetch users"));
        assert!(text.contains("Press r to retry"));
        assert!(text.contains("Ms Jane Doe"));
    }

    #[test]
    fn failed_load_without_rows_says_no_users() {
        let state = ListState {
            status: LoadStatus::Failed("Failed to fetch saved users".to_string()),
            ..ListState::new(Provenance::Saved, CountryMatch::Substring)
        };

        let text = screen_text(&state, &[]);
        assert!(text.contains("Failed to fetch saved users"));
        assert!(text.contains("No users found"));
    }

    #[test]
    fn loading_hides_rows() {
        let users = vec![user("r1", "Jane")];
        let state = ListState {
            status: LoadStatus::Loading(RequestId::new(1)),
            ..ListState::default()
        };

        let text = screen_text(&state, &users);
        assert!(text.contains("Loading users..."));
        assert!(!text.contains("Ms Jane Doe"));
    }
}
