use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::filter::CountryMatch;
use crate::ui::app::{App, Screen};
use crate::ui::detail::DetailIntent;
use crate::ui::home::{HomeAction, HomeIntent};
use crate::ui::list::{ListFocus, ListIntent};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match app.screen() {
        Screen::Home(_) => handle_home_key(app, key),
        Screen::List(state) => {
            let focus = state.focus;
            let country_match = state.filter.country_match;
            handle_list_key(app, key, focus, country_match);
        }
        Screen::Detail(_) => handle_detail_key(app, key),
    }
}

fn handle_home_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.dispatch_home(HomeIntent::MoveUp),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
            app.dispatch_home(HomeIntent::MoveDown)
        }
        KeyCode::Enter => app.activate_home(),
        KeyCode::Char('f') => {
            app.dispatch_home(HomeIntent::Select(HomeAction::Fetch));
            app.activate_home();
        }
        KeyCode::Char('h') => {
            app.dispatch_home(HomeIntent::Select(HomeAction::History));
            app.activate_home();
        }
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Esc => {
            app.back();
        }
        _ => {}
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent, focus: ListFocus, country_match: CountryMatch) {
    match key.code {
        KeyCode::Tab => return app.dispatch_list(ListIntent::FocusNext),
        KeyCode::BackTab => return app.dispatch_list(ListIntent::FocusPrev),
        KeyCode::Up => return app.dispatch_list(ListIntent::MoveUp),
        KeyCode::Down => return app.list_move_down(),
        KeyCode::Enter => return app.open_selected_user(),
        _ => {}
    }

    if focus == ListFocus::Rows {
        match key.code {
            KeyCode::Char('k') => app.dispatch_list(ListIntent::MoveUp),
            KeyCode::Char('j') => app.list_move_down(),
            KeyCode::Char('r') => app.refresh_list(),
            KeyCode::Char('/') => app.dispatch_list(ListIntent::FocusNext),
            KeyCode::Char('q') => app.request_quit(),
            KeyCode::Esc | KeyCode::Backspace => {
                app.back();
            }
            _ => {}
        }
        return;
    }

    if is_ctrl_char(key, 'u') {
        return app.dispatch_list(ListIntent::ClearInput);
    }
    match key.code {
        KeyCode::Esc => app.dispatch_list(ListIntent::FocusRows),
        KeyCode::Backspace => app.dispatch_list(ListIntent::Backspace),
        KeyCode::Left | KeyCode::Right
            if focus == ListFocus::Country && country_match == CountryMatch::Exact =>
        {
            app.list_cycle_country(key.code == KeyCode::Right)
        }
        KeyCode::Char(ch) if is_plain(key) => app.dispatch_list(ListIntent::Input(ch)),
        _ => {}
    }
}

fn handle_detail_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 's') {
        return app.save_current_user();
    }
    if is_ctrl_char(key, 'd') {
        return app.delete_current_user();
    }
    if is_ctrl_char(key, 'u') {
        return app.update_current_user();
    }

    match key.code {
        KeyCode::Esc => {
            app.back();
        }
        KeyCode::Tab | KeyCode::Down => app.edit_detail(DetailIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => app.edit_detail(DetailIntent::FocusPrev),
        KeyCode::Backspace => app.edit_detail(DetailIntent::Backspace),
        KeyCode::Char(ch) if is_plain(key) => app.edit_detail(DetailIntent::Input(ch)),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

/// Printable input: no modifier other than Shift.
fn is_plain(key: KeyEvent) -> bool {
    (key.modifiers - KeyModifiers::SHIFT).is_empty()
}
