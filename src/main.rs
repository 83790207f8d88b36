use chatshell::app::{App, AppMessage};
use chatshell::cli::{handle_check_command, handle_version_command, parse_args, CliCommand, USAGE};
use chatshell::startup::{init_logging, CliOverrides, ClientConfig};
use chatshell::terminal::{setup_panic_hook, TerminalManager};
use chatshell::ui;

use color_eyre::Result;
use crossterm::event::EventStream;
use futures::StreamExt;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tracing::{error, info};

fn main() -> Result<()> {
    color_eyre::install()?;

    let overrides = match parse_args(std::env::args()) {
        Ok(CliCommand::Version) => handle_version_command(),
        Ok(CliCommand::Help) => {
            println!("{}", USAGE);
            return Ok(());
        }
        Ok(CliCommand::Check(overrides)) => {
            let config = load_config(overrides)?;
            return handle_check_command(&config);
        }
        Ok(CliCommand::RunTui(overrides)) => overrides,
        Err(e) => {
            eprintln!("{} error: {}\n\n{}", e.category(), e, USAGE);
            std::process::exit(2);
        }
    };

    let config = load_config(overrides)?;
    if let Err(e) = init_logging(&config) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_tui(&config))
}

async fn run_tui(config: &ClientConfig) -> Result<()> {
    let mut app = App::new(config)?;
    let mut term_manager = TerminalManager::new()?;

    if config.autostart {
        app.start_chat();
    }

    let result = run_app(term_manager.terminal(), &mut app).await;
    term_manager.restore()?;

    if let Err(e) = &result {
        error!(error = %e, "Exited with error");
    }
    info!("Session ended");
    result
}

fn load_config(overrides: CliOverrides) -> Result<ClientConfig> {
    let config = ClientConfig::from_env()?.apply(overrides);
    config.validate()?;
    Ok(config)
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

        // 16ms tick drives the typing indicator
        let timeout = tokio::time::sleep(std::time::Duration::from_millis(16));

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(event)) => {
                        app.handle_event(event);
                    }
                    Some(Err(e)) => {
                        error!(error = %e, "Terminal event stream failed");
                        return Err(e.into());
                    }
                    None => return Ok(()),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }
    }
}
