use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use super::state::{DetailAction, DetailState, NameField, Notice};
use crate::model::User;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use crate::ui::widgets::{render_input, spinner, status_line, Tone};

pub fn render(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &DetailState,
    user: Option<&User>,
    is_saved: bool,
    tick: u64,
) {
    let block = Block::default()
        .title(Span::styled(format!(" User {} ", state.id), Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    if state.is_loading() {
        let text = format!("{} Loading user...", spinner(tick));
        frame.render_widget(Paragraph::new(status_line(Tone::Pending, &text)).block(block), area);
        return;
    }

    let user = match user {
        Some(user) if !state.not_found => user,
        _ => {
            let mut lines = vec![status_line(Tone::Error, "User not found")];
            if let Some(Notice::Error(message)) = &state.notice {
                lines.push(Line::from(Span::styled(
                    message.clone(),
                    Style::default().fg(MUTED_TEXT),
                )));
            }
            frame.render_widget(Paragraph::new(lines).block(block), area);
            return;
        }
    };

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(inner);
    let fields = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(40),
            Constraint::Percentage(40),
        ])
        .split(rows[0]);
    for (field, slot) in NameField::ALL.into_iter().zip(fields.iter()) {
        render_input(
            frame,
            *slot,
            field.label(),
            field.value(&state.name),
            "",
            field == state.focus,
        );
    }

    let mut lines = profile_lines(user, is_saved);
    lines.push(Line::from(""));
    lines.push(actions_line(state, is_saved, tick));
    match &state.notice {
        Some(Notice::Info(message)) => lines.push(status_line(Tone::Ok, message)),
        Some(Notice::Error(message)) => lines.push(status_line(Tone::Error, message)),
        None => {}
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), rows[1]);
}

fn profile_lines(user: &User, is_saved: bool) -> Vec<Line<'static>> {
    let age = match user.birth_year() {
        Some(year) => format!("{} (born {year})", user.dob.age),
        None => user.dob.age.to_string(),
    };
    let street = &user.location.street;
    let saved = if is_saved { "saved" } else { "not saved" };

    vec![
        field("Picture", user.picture.large.clone()),
        field("Gender", user.gender.clone()),
        field("Age", age),
        field("Address", format!("{} {}", street.number, street.name)),
        field(
            "City",
            format!("{}, {}", user.location.city, user.location.state),
        ),
        field("Country", user.location.country.clone()),
        field("Email", user.email.clone()),
        field("Phone", user.phone.clone()),
        field("Status", saved.to_string()),
    ]
}

fn field(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<9}"), Style::default().fg(MUTED_TEXT)),
        Span::styled(value, Style::default().fg(HEADER_TEXT)),
    ])
}

fn actions_line(state: &DetailState, is_saved: bool, tick: u64) -> Line<'static> {
    if let Some(pending) = state.pending {
        let verb = match pending.action {
            DetailAction::Load => "Loading",
            DetailAction::Save => "Saving",
            DetailAction::Delete => "Deleting",
            DetailAction::Update => "Updating",
        };
        return status_line(Tone::Pending, &format!("{} {verb}...", spinner(tick)));
    }

    let key = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    let text = Style::default().fg(HEADER_TEXT);
    if is_saved {
        Line::from(vec![
            Span::styled("Ctrl+U", key),
            Span::styled(" Update  ", text),
            Span::styled("Ctrl+D", key),
            Span::styled(" Delete", text),
        ])
    } else {
        Line::from(vec![Span::styled("Ctrl+S", key), Span::styled(" Save", text)])
    }
}
