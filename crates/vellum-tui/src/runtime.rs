use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use vellum_core::constants::TICK_MS;

use crate::input;
use crate::render::render;
use crate::ui::{App, Tui};

pub(crate) async fn run_app(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let mut event_stream = EventStream::new();
    let mut tick_interval = tokio::time::interval(Duration::from_millis(TICK_MS));

    while app.running {
        // Grant any pending focus hand-off before painting, so it always
        // lands between two keystrokes.
        app.commit_focus();
        terminal.draw(|f| render(f, app))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                if let Some(Ok(event)) = maybe_event {
                    match event {
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            if key.code == KeyCode::Char('c')
                                && key.modifiers.contains(KeyModifiers::CONTROL)
                            {
                                app.running = false;
                            } else {
                                input::handle_key(app, key);
                            }
                        }
                        Event::Paste(text) => input::handle_paste(app, &text),
                        _ => {}
                    }
                }
            }
            _ = tick_interval.tick() => {
                app.on_tick();
            }
        }
    }

    Ok(())
}
