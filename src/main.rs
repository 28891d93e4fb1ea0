use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::Result;
use crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use ratatui::DefaultTerminal;

use careersearch::app::App;
use careersearch::autocomplete::SuggestionList;
use careersearch::config::{Config, load_config};
use careersearch::detail::{CardContent, DetailRenderer};
use careersearch::html;
use careersearch::logging;
use careersearch::source::worker::spawn_worker;
use careersearch::source::{CareerApi, DetailSource, SuggestionSource};

/// Search-as-you-type career lookup
#[derive(Parser, Debug)]
#[command(name = "careersearch", version, about)]
struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Override the suggestion debounce delay
    #[arg(long, value_name = "MS")]
    debounce_ms: Option<u64>,

    /// Append logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print suggestions for a query
    Suggest {
        query: String,
        /// Print the listbox markup instead of plain labels
        #[arg(long)]
        html: bool,
    },
    /// Print the detail cards for a name
    Detail {
        name: String,
        /// Print the card markup instead of plain text
        #[arg(long)]
        html: bool,
    },
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref(), cli.command.is_none())?;

    let mut config = load_config(cli.config.as_deref());
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }
    if let Some(debounce_ms) = cli.debounce_ms {
        config.search.debounce_ms = debounce_ms;
    }

    match cli.command {
        Some(Command::Suggest { query, html }) => suggest(&config, &query, html),
        Some(Command::Detail { name, html }) => detail(&config, &name, html),
        None => run_interactive(&config),
    }
}

fn block_on<F: std::future::Future>(future: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(runtime.block_on(future))
}

fn suggest(config: &Config, query: &str, as_html: bool) -> Result<()> {
    if query.trim().is_empty() {
        return Ok(());
    }

    let api = CareerApi::new(&config.api, config.search.max_suggestions);
    let labels = block_on(api.search(query))?;

    if as_html {
        let mut list = SuggestionList::new();
        list.render(labels, query);
        println!("{}", html::input_markup(query, &list));
        println!("{}", html::listbox_markup(&list));
    } else {
        for label in labels {
            println!("{}", label);
        }
    }
    Ok(())
}

fn detail(config: &Config, name: &str, as_html: bool) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        return Ok(());
    }

    let api = CareerApi::new(&config.api, config.search.max_suggestions);
    let outcome = block_on(api.fetch_detail(name))?;
    let mut details = DetailRenderer::new();
    details.present(&outcome, name);

    if as_html {
        let markup = html::cards_markup(&details);
        if !markup.is_empty() {
            println!("{}", markup);
        }
        return Ok(());
    }

    for content in details.slots().iter().filter_map(|slot| slot.content()) {
        match content {
            CardContent::Message(message) => println!("{}", message),
            CardContent::Card { heading, fields } => {
                println!("{}", heading);
                for field in fields {
                    println!("  {}: {}", field.label, field.value);
                }
            }
        }
    }
    Ok(())
}

fn run_interactive(config: &Config) -> Result<()> {
    let api = CareerApi::new(&config.api, config.search.max_suggestions);
    let app = App::new(config, Some(spawn_worker(api)));

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    crossterm::execute!(io::stdout(), EnableMouseCapture, EnableBracketedPaste)?;

    let result = run(terminal, app);

    let _ = crossterm::execute!(io::stdout(), DisableBracketedPaste, DisableMouseCapture);
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(app.poll_timeout())? {
            app.handle_event(event::read()?);
        }
        app.tick();

        if app.should_quit() {
            break;
        }
    }

    log::info!("Exiting");
    Ok(())
}
