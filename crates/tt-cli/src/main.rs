//! Terminal Tarot: card readings with a searchable history log.

mod commands;
mod prompt;
mod render;

use std::io;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tt_core::{RecordStore, SearchMode};
use tt_core::store::DEFAULT_LOG_FILE;
use tt_oracle::{OpenAiGenerator, ReaderConfig, ReadingSession};

use crate::prompt::Prompter;

#[derive(Parser)]
#[command(
    name = "tarot",
    about = "Terminal Tarot: draw cards, get a reading, and browse your history",
    version,
    propagate_version = true
)]
struct Cli {
    /// CSV file the reading history is kept in
    #[arg(long, global = true, env = "TAROT_LOG_FILE", default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,

    /// RNG seed for reproducible draws
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Skip the pauses while cards are revealed
    #[arg(long, global = true)]
    no_delay: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive menu (default)
    Menu,

    /// Draw cards and get a new reading
    Read {
        /// Focus question (skips the question menu)
        #[arg(short, long)]
        question: Option<String>,
    },

    /// Page through past readings, newest first
    History,

    /// Search past readings by date, question, or card
    Search {
        /// Field to search: date, question, card, all
        mode: SearchMode,

        /// Text to look for (asked for when omitted)
        query: Option<String>,
    },

    /// Show how often each card has been drawn
    Stats,

    /// Permanently delete the reading history
    Clear {
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("TAROT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn reader_config(cli: &Cli) -> ReaderConfig {
    let mut config = ReaderConfig::from_env();
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if cli.no_delay {
        config = config.with_reveal_delay(Duration::ZERO);
    }
    config
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let config = reader_config(&cli);
    debug!(
        log_file = %cli.log_file.display(),
        model = %config.model,
        api_key = config.api_key.is_some(),
        "starting"
    );
    let generator = OpenAiGenerator::new(config.clone());
    let mut session = ReadingSession::new(config, generator, RecordStore::new(cli.log_file));
    let store = session.store().clone();

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock());

    let result = match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => commands::menu::run(&mut session, &mut prompter),
        Commands::Read { question } => commands::read::run(&mut session, &mut prompter, question),
        Commands::History => commands::history::run(&store, &mut prompter),
        Commands::Search { mode, query } => {
            commands::search::run(&store, &mut prompter, Some(mode), query)
        }
        Commands::Stats => commands::stats::run(&store),
        Commands::Clear { yes } => commands::clear::run(&store, &mut prompter, yes),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
