//! Tabby CLI.
//!
//! Loads a page fixture, discovers its tab/accordion groups, plays an event
//! script against them and prints the resulting state.

mod error;
mod fixture;
mod report;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use log::{debug, info};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use tabby::{Runtime, Settings};
use tabby_dom::{Document, Element, Event};
use tokio::sync::mpsc;

use error::CliError;
use fixture::{PageFixture, ScriptedEvent};

/// Drive the tab/accordion groups of a page fixture.
#[derive(Parser)]
#[command(name = "tabby", version, about)]
struct Cli {
    /// Page fixture (JSON).
    page: PathBuf,

    /// Event script (JSON array of click, resize and wait steps).
    #[arg(long)]
    events: Option<PathBuf>,

    /// Override the page's viewport width.
    #[arg(long)]
    width: Option<u32>,

    /// Override the page's location hash.
    #[arg(long)]
    hash: Option<String>,

    /// Log level written to stderr.
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = TermLogger::init(
        cli.log_level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Warning: logging disabled: {err}");
    }

    match run(cli).await {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<String, CliError> {
    let page: PageFixture = fixture::load(&cli.page)?;
    let script: Vec<ScriptedEvent> = match &cli.events {
        Some(path) => fixture::load(path)?,
        None => Vec::new(),
    };

    let mut window = page.window();
    if let Some(width) = cli.width {
        window.width = width;
    }
    if let Some(hash) = &cli.hash {
        window.set_hash(hash);
    }

    let pristine = Document::new(Element::from(page.root)).with_window(window);
    let runtime = Runtime::new(pristine.clone(), Settings::default());
    info!("loaded {} with {} groups", cli.page.display(), runtime.groups().len());

    // Tab triggers get their ids rewritten during discovery, so targets are
    // looked up in the page as written first.
    let events = script
        .into_iter()
        .map(|step| resolve(&pristine, runtime.document(), step))
        .collect::<Result<Vec<_>, _>>()?;

    let (tx, rx) = mpsc::channel(16);
    let handle = tokio::spawn(runtime.run(rx));

    for step in events {
        match step {
            Step::Send(event) => {
                debug!("sending {event:?}");
                tx.send(event).await.map_err(|_| CliError::RuntimeStopped)?;
            }
            Step::Wait(delay) => tokio::time::sleep(delay).await,
        }
    }
    drop(tx);

    let output = handle.await?;
    Ok(report::render(&output.document, &output.groups))
}

enum Step {
    Send(Event),
    Wait(Duration),
}

fn resolve(pristine: &Document, live: &Document, step: ScriptedEvent) -> Result<Step, CliError> {
    Ok(match step {
        ScriptedEvent::Click(id) => {
            let target = pristine
                .element_by_id(&id)
                .or_else(|| live.element_by_id(&id))
                .ok_or(CliError::UnknownTarget(id))?;
            Step::Send(Event::click(target))
        }
        ScriptedEvent::Resize(width, height) => Step::Send(Event::resize(width, height)),
        ScriptedEvent::Wait(ms) => Step::Wait(Duration::from_millis(ms)),
    })
}
