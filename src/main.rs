use std::io;
use std::sync::Arc;

use color_eyre::Result;
use crossterm::{
    cursor::Show,
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};

use taskdeck::api::TodoApiClient;
use taskdeck::app::{handle_key_event, App};
use taskdeck::config::Config;
use taskdeck::logging;
use taskdeck::ui;
use taskdeck::ui::interaction::handle_click_action;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    if std::env::args().any(|arg| arg == "--version") {
        println!("taskdeck {}", VERSION);
        return Ok(());
    }

    color_eyre::install()?;

    let config = Config::from_env();
    logging::init(&config);
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run(config))
}

async fn run(config: Config) -> Result<()> {
    tracing::info!("starting taskdeck against {}", config.api_base_url);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let api = Arc::new(TodoApiClient::new(&config.api_base_url));
    let mut app = App::new(api);
    app.bootstrap();

    let result = run_app(&mut terminal, &mut app).await;

    restore_terminal();
    result
}

/// Main event loop: draw when dirty, then wait on either a terminal event
/// or a message from a spawned API task.
async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx = app
        .message_rx
        .take()
        .expect("message receiver already taken");

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &mut *app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            event = event_stream.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    // Any key press likely changes state (input, dismiss, quit)
                    app.mark_dirty();
                    handle_key_event(app, key);
                }
                Some(Ok(Event::Mouse(mouse)))
                    if mouse.kind == MouseEventKind::Down(MouseButton::Left) =>
                {
                    if let Some(action) = app.hit_areas.hit_test(mouse.column, mouse.row) {
                        handle_click_action(app, action);
                    }
                }
                Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                Some(Ok(_)) => {}
                Some(Err(err)) => tracing::warn!("terminal event error: {}", err),
                None => break,
            },
            message = message_rx.recv() => match message {
                Some(message) => app.handle_message(message),
                None => break,
            },
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(
        io::stdout(),
        DisableMouseCapture,
        LeaveAlternateScreen,
        Show
    );
}

/// Ensure the terminal is usable again if we panic mid-frame.
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));
}
