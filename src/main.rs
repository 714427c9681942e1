use gw2link::adapters::{ReqwestHttpClient, SystemPlatform};
use gw2link::api::Gw2ApiClient;
use gw2link::app::{App, AppMessage};
use gw2link::chatlink::decode_chat_link;
use gw2link::cli::{parse_args, run_cli_command, CliCommand};
use gw2link::component::MainComponent;
use gw2link::config::AppConfig;
use gw2link::logging::{default_log_path, init_logging};
use gw2link::terminal::{setup_panic_hook, TerminalManager};
use gw2link::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::Stdout;
use std::sync::Arc;
use tokio::sync::mpsc;

fn main() -> Result<()> {
    // CLI commands run before anything touches the terminal
    let command = parse_args(std::env::args());
    if let Some(result) = run_cli_command(&command) {
        return result;
    }
    let initial = match command {
        CliCommand::RunTui { initial } => initial,
        _ => None,
    };

    color_eyre::install()?;

    let config = AppConfig::from_env();
    if let Some(path) = default_log_path() {
        // Logging is best effort; the viewer works without it
        let _ = init_logging(&config.log_level, &path);
    }

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run(config, initial))
}

async fn run(config: AppConfig, initial: Option<String>) -> Result<()> {
    let http = Arc::new(ReqwestHttpClient::with_timeout(config.timeout())?);
    let api = Arc::new(Gw2ApiClient::from_config(http, &config));
    let platform = Arc::new(SystemPlatform::new());

    let initial_link = initial.as_deref().and_then(|text| match decode_chat_link(text) {
        Ok(link) => Some(link),
        Err(e) => {
            tracing::info!("Initial chat code {:?} not decodable: {}", text, e);
            None
        }
    });
    let has_link = initial_link.is_some();

    let component = Arc::new(
        MainComponent::new(api, platform, initial_link).with_site_url(config.site_url.clone()),
    );
    if let (false, Some(text)) = (has_link, initial.as_deref()) {
        // Keep the undecodable text visible so it can be fixed in place
        component.update_encoded(text);
    }

    let mut app = App::new(Arc::clone(&component), config.icon_cache_bytes);
    let _forwarder = app.spawn_state_forwarder();
    let _fragment_sync = app.spawn_fragment_sync();
    app.sync_state();

    let mut manager = TerminalManager::new()?;
    let result = run_app(manager.terminal(), &mut app).await;
    manager.restore();

    if let Err(ref e) = result {
        tracing::error!("Application error: {:?}", e);
    }
    result
}

async fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Create async event stream for keyboard input
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        // Draw the UI only when needed
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!("Terminal event error: {}", e);
                    }
                    None => return Ok(()),
                }
            }

            // Background fetch results and state changes
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

        if app.should_quit {
            return Ok(());
        }
    }
}
