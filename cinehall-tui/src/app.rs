//! Application main loop.
//!
//! Each iteration: expire the toast, draw, check the quit flag, apply any
//! backend completions that arrived since the last frame, then poll input
//! with a 100 ms timeout so the loop keeps ticking while requests are in
//! flight.

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::Backend;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// Runs the main loop until the app asks to quit.
pub async fn run(
    terminal: &mut Term,
    app: &mut App,
    backend: &Backend,
    completions: &mut UnboundedReceiver<AppMessage>,
) -> Result<()> {
    loop {
        // 1. Drop the toast once its display window has passed.
        app.expire_notice();

        // 2. Render.
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 3. Should we exit?
        if app.should_quit {
            break;
        }

        // 4. Apply finished backend calls.
        while let Ok(msg) = completions.try_recv() {
            update::update(app, backend, msg);
        }

        // 5. Poll input (100 ms timeout).
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            // 6. Translate and apply.
            let msg = event::handle_event(event, app);
            update::update(app, backend, msg);
        }
    }

    Ok(())
}
