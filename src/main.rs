use triagem::app::{App, AppMessage};
use triagem::cli::{parse_args, run_cli_command, USAGE};
use triagem::config::AppConfig;
use triagem::logging::init_logging;
use triagem::terminal::{setup_panic_hook, TerminalSession};
use triagem::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::Terminal;
use std::time::Duration;
use tokio::sync::mpsc;

/// Frame tick for the scroll animation and spinner.
const TICK: Duration = Duration::from_millis(16);

/// Exit status for invalid arguments or environment.
const EXIT_USAGE: i32 = 2;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let command = match parse_args(std::env::args()) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("triagem: {}\n\n{}", e, USAGE);
            std::process::exit(EXIT_USAGE);
        }
    };
    let overrides = run_cli_command(command);

    let config = match AppConfig::from_env() {
        Ok(config) => config.apply_cli(overrides),
        Err(e) => {
            eprintln!("triagem: {}", e);
            std::process::exit(EXIT_USAGE);
        }
    };

    // Logging is best-effort: the TUI still runs if the file can't be opened
    if let Err(e) = init_logging(&config.log_file) {
        eprintln!(
            "triagem: logging disabled ({}): {}",
            config.log_file.display(),
            e
        );
    }
    tracing::info!(url = %config.analyze_url(), "Starting triagem");

    let mut app = App::with_system_adapters(config)?;

    setup_panic_hook();
    let mut session = TerminalSession::new()?;
    let result = run_app(session.terminal(), &mut app).await;
    session.restore();

    if let Err(e) = &result {
        tracing::error!(error = %e, "Event loop failed");
    }
    tracing::info!("Exiting");
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &mut *app))?;
            app.needs_redraw = false;
        }

        if app.should_quit {
            return Ok(());
        }

        tokio::select! {
            _ = tokio::time::sleep(TICK) => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) => app.handle_key_event(key),
                    Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => return Ok(()),
                }
            }

            Some(msg) = async {
                match message_rx.as_mut() {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                app.handle_message(msg);
            }
        }
    }
}
