use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use tokio::runtime::Handle;

use crate::filter::CountryMatch;
use crate::store::SessionStore;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::route::Route;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker::spawn_worker;

/// How the UI starts.
#[derive(Debug, Clone)]
pub struct UiOptions {
    pub start: Route,
    pub tick_rate: Duration,
    pub country_match: CountryMatch,
}

/// Take over the terminal and run until the person quits.
///
/// Backend work runs on `runtime`; this thread only draws and reacts to
/// events.
pub fn run(store: SessionStore, runtime: &Handle, options: UiOptions) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(options.tick_rate);
    let commands = spawn_worker(runtime, store.clone(), events.sender());

    let mut app = App::new(store, options.country_match);
    app.set_command_sender(commands);
    app.start(options.start);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(options.tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::trace!(cols, rows, "Terminal resized");
            }
            Ok(AppEvent::Completed(completion)) => app.on_completion(completion),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    app.store().flush();
    drop(guard);
    Ok(())
}
