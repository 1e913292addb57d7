use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use console::Emoji;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::io::{AsyncBufReadExt, BufReader};

use podexplorer::view::{render_genre_table, render_show_detail, render_show_list};
use podexplorer::{
    App, Config, DEFAULT_API_BASE, FilterState, Intent, NoopReporter, Outcome, ProgressEvent,
    PodcastStore, ProgressReporter, Route, SharedProgressReporter, ShowDetailLoader, SortOption,
    parse_genre,
};

// Emoji with fallback for terminals without Unicode support
static MICROPHONE: Emoji<'_, '_> = Emoji("🎙️  ", "");
static SEARCH: Emoji<'_, '_> = Emoji("🔍 ", "[~] ");
static HEADPHONES: Emoji<'_, '_> = Emoji("🎧 ", "[i] ");
static SUCCESS: Emoji<'_, '_> = Emoji("✅ ", "[+] ");
static FAILURE: Emoji<'_, '_> = Emoji("❌ ", "[!] ");

/// Page size used when only --page is given
const DEFAULT_PER_PAGE: usize = 12;

/// Browse a podcast directory from the terminal
#[derive(Parser, Debug)]
#[command(name = "podexplorer")]
#[command(about = "Search, filter and browse podcast shows, seasons and episodes")]
#[command(version)]
struct Args {
    /// Base URL of the podcast API
    #[arg(long, env = "PODEXPLORER_API_URL", default_value = DEFAULT_API_BASE, global = true)]
    api_url: String,

    /// Request timeout in seconds (default: wait indefinitely)
    #[arg(long, env = "PODEXPLORER_TIMEOUT", global = true)]
    timeout: Option<u64>,

    /// Quiet mode - suppress progress output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Verbose mode - show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List shows, optionally searched, filtered and sorted
    List {
        /// Only show titles containing this text (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,

        /// Only show this genre (id 1-9 or name)
        #[arg(short, long, value_parser = parse_genre_arg)]
        genre: Option<u32>,

        /// Sort order: none, title-asc, title-desc, updated-asc, updated-desc
        #[arg(long, default_value = "none")]
        sort: SortOption,

        /// Show only this page of the list (1-based)
        #[arg(long)]
        page: Option<usize>,

        /// Number of shows per page
        #[arg(long)]
        per_page: Option<usize>,

        /// Print the resulting list as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the seasons and episodes of a single show
    Show {
        /// Show id
        id: String,

        /// Season to list episodes for (1-based)
        #[arg(long, default_value_t = 1)]
        season: usize,
    },

    /// Render the view for a path such as "/" or "/show/10716"
    Open {
        path: String,
    },

    /// List all genres and their ids
    Genres,

    /// Interactive browser (default)
    Browse,
}

fn parse_genre_arg(value: &str) -> std::result::Result<u32, String> {
    parse_genre(value).ok_or_else(|| format!("unknown genre '{value}'"))
}

/// Progress reporter showing a spinner while requests are in flight
struct IndicatifReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl IndicatifReporter {
    fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn start(&self, message: String) {
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.green} {wide_msg}")
            .unwrap();

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(style);
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner.set_message(message);

        if let Some(previous) = self.spinner.lock().unwrap().replace(spinner) {
            previous.finish_and_clear();
        }
    }

    fn finish(&self, message: String) {
        if let Some(spinner) = self.spinner.lock().unwrap().take() {
            spinner.finish_and_clear();
        }
        eprintln!("{message}");
    }
}

impl ProgressReporter for IndicatifReporter {
    fn report(&self, event: ProgressEvent) {
        match event {
            ProgressEvent::FetchingShows { url } => {
                self.start(format!("{SEARCH}Fetching shows: {}", url.cyan()));
            }

            ProgressEvent::ShowsLoaded { count } => {
                self.finish(format!(
                    "{SUCCESS}{} shows loaded",
                    count.to_string().green().bold()
                ));
            }

            ProgressEvent::ShowsFailed { error } => {
                self.finish(format!("{FAILURE}{}", error.red()));
            }

            ProgressEvent::FetchingShow { show_id, url, .. } => {
                self.start(format!(
                    "{SEARCH}Fetching show {}: {}",
                    show_id.yellow(),
                    url.cyan()
                ));
            }

            ProgressEvent::ShowLoaded {
                show_title,
                season_count,
                episode_count,
                ..
            } => {
                self.finish(format!(
                    "{HEADPHONES}{} • {} seasons, {} episodes",
                    show_title.bold().green(),
                    season_count.to_string().cyan(),
                    episode_count.to_string().cyan()
                ));
            }

            ProgressEvent::ShowFailed { show_id, error, .. } => {
                self.finish(format!("{FAILURE}{} - {}", show_id.yellow(), error.red()));
            }

            ProgressEvent::StaleResponseIgnored { show_id, .. } => {
                tracing::debug!("Dropped stale response for show {}", show_id);
            }
        }
    }
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("podexplorer=debug")
        } else {
            EnvFilter::new("podexplorer=info")
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Print a rendered view, highlighting inline errors
fn print_view(text: &str) {
    for line in text.lines() {
        if line.starts_with("Error:") {
            println!("{}", line.red().bold());
        } else {
            println!("{line}");
        }
    }
}

async fn run_browser(app: &mut App<podexplorer::ReqwestClient>) -> Result<()> {
    app.start().await;
    print_view(&app.render());
    println!("\n{}", "Type 'help' for a list of commands.".dimmed());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("\n{} ", format!("{}>", app.route()).cyan().bold());
        std::io::stdout().flush().context("Failed to write prompt")?;

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Intent>() {
            Ok(intent) => match app.handle(intent).await {
                Outcome::Render(text) => print_view(&text),
                Outcome::Quit => break,
            },
            Err(e) => println!("{}", e.to_string().red()),
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = Config::new(&args.api_url, args.timeout.map(Duration::from_secs))
        .context("Invalid configuration")?;
    let api = config.build_api().context("Failed to set up API client")?;

    let reporter: SharedProgressReporter = if args.quiet {
        NoopReporter::shared()
    } else {
        Arc::new(IndicatifReporter::new())
    };

    let command = args.command.unwrap_or(Command::Browse);

    if !args.quiet && matches!(command, Command::Browse) {
        println!(
            "\n{}{} {}\n",
            MICROPHONE,
            "podexplorer".bold().magenta(),
            "- Podcast Explorer".dimmed()
        );
    }

    let succeeded = match command {
        Command::List {
            search,
            genre,
            sort,
            page,
            per_page,
            json,
        } => {
            let mut store = PodcastStore::new();
            store.load(&api, &reporter).await;
            store.set_filter(FilterState {
                search_text: search.unwrap_or_default(),
                genre_filter: genre,
                sort_option: sort,
            });

            if json && store.error().is_none() {
                let output = serde_json::to_string_pretty(store.visible())
                    .context("Failed to serialize show list")?;
                println!("{output}");
            } else {
                let page = match (page, per_page) {
                    (None, None) => None,
                    (page, per_page) => {
                        Some((page.unwrap_or(1), per_page.unwrap_or(DEFAULT_PER_PAGE)))
                    }
                };
                print_view(&render_show_list(&store, page));
            }
            store.error().is_none()
        }

        Command::Show { id, season } => {
            let mut loader = ShowDetailLoader::new();
            loader.load(&api, &id, &reporter).await;

            if loader.detail().is_some() && !loader.select_season(season.saturating_sub(1)) {
                tracing::warn!("Show {} has no season {}, showing the first", id, season);
            }
            print_view(&render_show_detail(&loader));
            loader.error().is_none()
        }

        Command::Open { path } => {
            let route = Route::parse(&path).context("Failed to resolve path")?;
            let mut app = App::new(api, reporter);
            app.start().await;
            app.navigate(route).await;

            print_view(&app.render());
            match app.route() {
                Route::List => app.store().error().is_none(),
                Route::Show(_) => app.detail().error().is_none(),
            }
        }

        Command::Genres => {
            println!("{}", render_genre_table());
            true
        }

        Command::Browse => {
            let mut app = App::new(api, reporter);
            run_browser(&mut app).await?;
            true
        }
    };

    if !succeeded {
        std::process::exit(1);
    }

    Ok(())
}
