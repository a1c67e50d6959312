use crate::config::Config;
use crate::submit::{run_submit_worker, RegistrationClient};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

/// Pending submissions the worker will accept. The in-flight guard keeps this at one in practice.
const COMMAND_QUEUE: usize = 4;

/// Run the interactive form until the user quits.
pub fn run(config: Config) -> io::Result<()> {
    let client = RegistrationClient::new(&config.endpoint)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err.to_string()))?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(100);
    let events = EventHandler::new(tick_rate);

    let (command_tx, command_rx) = mpsc::channel(COMMAND_QUEUE);
    runtime.spawn(run_submit_worker(client, command_rx, events.sender()));

    let mut app = App::new();
    app.set_command_sender(command_tx);
    tracing::info!(endpoint = %config.endpoint.url, "Registration form started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize) => {}
            Ok(AppEvent::Submitted(outcome)) => app.on_submit_completed(outcome),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    runtime.shutdown_timeout(Duration::from_millis(500));
    tracing::info!("Registration form closed");
    Ok(())
}
