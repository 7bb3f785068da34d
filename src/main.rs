use propscope::app::InspectorApp;
use propscope::element::WrappedElement;
use propscope::terminal::{restore, setup, setup_panic_hook, Tui};
use propscope::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use serde_json::json;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing to a log file when `PROPSCOPE_LOG` names one.
///
/// Logging to stdout/stderr would scribble over the alternate screen,
/// so the subscriber is only installed with a file writer.
fn init_tracing() -> Result<()> {
    use tracing_subscriber::EnvFilter;

    let Ok(path) = std::env::var("PROPSCOPE_LOG") else {
        return Ok(());
    };
    let file = std::fs::File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("propscope=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// The demo's wrapped element: a component with nested props, a null,
/// and one declared-but-unsupplied parameter (`color`), so every
/// inspector behavior is reachable from the demo.
fn sample_element() -> WrappedElement {
    WrappedElement::new("UserCard")
        .with_schema(["name", "age", "active", "address", "items", "color"])
        .with_prop("name", json!("Alice"))
        .with_prop("age", json!(30))
        .with_prop("active", json!(true))
        .with_prop(
            "address",
            json!({
                "street": "Hauptstrasse 1",
                "city": "Oslo",
                "geo": [59.91, 10.75],
            }),
        )
        .with_prop("items", json!([1, 2]))
        .with_prop("note", json!(null))
}

fn main() -> Result<()> {
    if std::env::args().any(|arg| arg == "--version") {
        println!("propscope {}", VERSION);
        return Ok(());
    }

    color_eyre::install()?;
    init_tracing()?;
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;

    let mut terminal = setup()?;
    terminal.clear()?;

    let mut app = InspectorApp::new(sample_element());
    let result = runtime.block_on(run_app(&mut terminal, &mut app));

    restore(&mut terminal)?;
    result
}

async fn run_app(terminal: &mut Tui, app: &mut InspectorApp) -> Result<()> {
    let mut event_stream = EventStream::new();

    loop {
        if app.needs_redraw {
            terminal.draw(|frame| ui::render(frame, app))?;
            app.needs_redraw = false;
        }

        let Some(Ok(event)) = event_stream.next().await else {
            return Ok(());
        };

        match event {
            Event::Resize(_, _) => app.mark_dirty(),
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            _ => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
