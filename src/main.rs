use clap::Parser;
use color_eyre::Result;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use wordpop::app::App;
use wordpop::cli::Cli;
use wordpop::config::Config;
use wordpop::entry::{EntryOptions, EntryState};
use wordpop::wordlist::Wordlist;

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    #[cfg(debug_assertions)]
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::load();

    // Word list problems are fatal before the terminal is touched
    let words = Wordlist::load(&cli.wordlist, cli.column.as_deref(), cli.ngram)?;

    let entry = EntryState::new(EntryOptions {
        words: Some(words),
        suggester: None,
        match_options: cli.match_options(&config),
        list_height: cli.list_height(&config),
    })?;

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    execute!(std::io::stdout(), EnableMouseCapture)?;

    let result = run(terminal, App::new(entry));

    // Restore terminal (automatic cleanup)
    let _ = execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();

    if let Some(value) = result? {
        println!("{value}");
    }

    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<Option<String>> {
    loop {
        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        // Handle events
        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(app.committed().map(str::to_string))
}
