use ratatui::widgets::Clear;
use ratatui::Frame;

use crate::store::Provenance;
use crate::ui::app::{App, Screen};
use crate::ui::detail;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::home;
use crate::ui::layout::layout_regions;
use crate::ui::list;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let store = app.store();

    let header_widget = Header::new(
        app.route().path(),
        store.backend_url(),
        store.count(Provenance::Saved),
        app.last_error(),
    );
    frame.render_widget(header_widget.widget(), header);
    frame.render_widget(Clear, body);

    match app.screen() {
        Screen::Home(state) => home::view::render(frame, body, state),
        Screen::List(state) => {
            let users = store.users(state.mode);
            list::view::render(frame, body, state, &users, app.tick());
        }
        Screen::Detail(state) => {
            let user = state.target().and_then(|target| store.get(&target));
            let is_saved = store.is_saved(&state.id);
            detail::view::render(frame, body, state, user.as_ref(), is_saved, app.tick());
        }
    }

    let footer_widget = Footer::for_screen(app.screen());
    frame.render_widget(footer_widget.widget(footer), footer);
}
