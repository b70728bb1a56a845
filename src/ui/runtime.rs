use std::time::Duration;

use tracing::info;

use crate::api::ApiClient;
use crate::config::Config;
use crate::orchestrator::{completion_channel, Orchestrator};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse, handle_paste};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Run the TUI until the user quits or the process is told to stop.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let client = ApiClient::new(&config.service)?;
    let (completions_tx, completions_rx) = completion_channel();
    let orchestrator = Orchestrator::new(client, config.ui.default_url.clone(), completions_tx);
    let mut app = App::new(orchestrator);
    info!(base_url = %config.service.base_url, "starting newsbias");

    let (mut terminal, guard) = setup_terminal()?;
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    let mut events = EventHandler::new(
        Duration::from_millis(config.ui.tick_rate_ms),
        completions_rx,
    );

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next().await {
            AppEvent::Key(key) => handle_key(&mut app, key),
            AppEvent::Mouse(mouse) => handle_mouse(&mut app, mouse),
            AppEvent::Paste(text) => handle_paste(&mut app, &text),
            AppEvent::Resize(cols, rows) => app.on_resize(cols, rows),
            AppEvent::Tick => app.on_tick(),
            AppEvent::Completion(completion) => {
                app.on_completion(completion);
            }
            AppEvent::Shutdown => break,
        }
    }

    app.teardown();
    drop(guard);
    info!("newsbias stopped");
    Ok(())
}
