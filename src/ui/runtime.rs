use std::time::Duration;

use anyhow::Context;

use crate::api::VasClient;
use crate::cli::Cli;
use crate::config::{Config, ConfigStore};
use crate::session::SessionStore;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker;

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&config_path).context("loading configuration")?;
    cli.apply(&mut config);
    config.validate().context("validating configuration")?;

    let config = ConfigStore::new(config, config_path);
    let session = SessionStore::open(SessionStore::default_path());
    let client = VasClient::new(&config.get());

    let runtime = tokio::runtime::Runtime::new().context("starting async runtime")?;
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);
    let (command_tx, command_rx) = tokio::sync::mpsc::channel(8);
    runtime.spawn(worker::run(client, command_rx, events.sender()));

    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(config, session, command_tx);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::Api {
                generation,
                outcome,
            }) => app.on_api_outcome(generation, outcome),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
