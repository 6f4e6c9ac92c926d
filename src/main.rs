use std::io::{self, stdout};
use std::time::Duration;

use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing::{info, warn};

mod api;
mod app;
mod cli;
mod error;
mod filters;
mod logging;
mod models;
mod store;
mod theme;
mod ui;
mod utils;

use api::{ActivitySource, BoredClient};
use app::{App, Command, Notice, NoticeLevel};
use store::Store;

#[tokio::main]
async fn main() -> io::Result<()> {
    let config = cli::parse_args()?;

    // Storage is the one thing we cannot run without.
    let store = Store::open(config.data_dir.clone()).map_err(|err| {
        eprintln!("unbored: {}", err);
        io::Error::other(err.to_string())
    })?;

    // A missing log file only costs us diagnostics.
    if let Err(err) = logging::init(store.dir()) {
        eprintln!("unbored: logging disabled: {}", err);
    }
    info!(data_dir = %store.dir().display(), "starting up");

    let client =
        BoredClient::new(config.api_url).map_err(|err| io::Error::other(err.to_string()))?;
    let app = App::new(store);

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Run the app
    let result = run(&mut terminal, app, &client).await;

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

async fn run<S: ActivitySource>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
    client: &S,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, &app))?;

        // Handle input
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match app.on_key(key) {
                    Some(Command::Quit) => break,
                    Some(Command::Fetch) => {
                        // One synchronous round trip: show the waiting
                        // indicator, await the call, fold the result in.
                        app.begin_fetch();
                        terminal.draw(|frame| ui::render(frame, &app))?;
                        let outcome = client.fetch(&app.filters()).await;
                        app.finish_fetch(outcome);
                    }
                    Some(Command::OpenLink(url)) => match utils::open_link(&url) {
                        Ok(()) => {
                            app.notice = Some(Notice {
                                text: format!("Opening {}", url),
                                level: NoticeLevel::Info,
                            });
                        }
                        Err(err) => warn!(%url, %err, "could not open link"),
                    },
                    None => {}
                }
            }
        }
    }

    Ok(())
}
