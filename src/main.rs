use std::sync::Arc;

use clap::{
    ArgAction, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use moodlist::{
    cli, config, error, management::SessionManager, mood::Mood, spotify::auth::AccountsEndpoint,
    utils,
};
use tokio::sync::Mutex;

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    /// Remove the cached session
    Logout,

    /// Show the mood feature-range table
    Moods(MoodsOptions),

    /// Search the catalog for an artist (top match only)
    Search(SearchOptions),

    #[clap(about = "Generate a mood playlist from seed artists")]
    Playlist(PlaylistOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct MoodsOptions {
    /// Restrict the table to a single mood
    #[clap(long, value_parser = utils::parse_mood)]
    mood: Option<Mood>,
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Free-text artist query
    query: String,
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistOptions {
    /// Mood driving the target audio features
    #[clap(long, value_parser = utils::parse_mood)]
    mood: Mood,

    /// Seed-artist search query; can be repeated up to 5 times.
    /// Without this flag the command prompts interactively.
    #[clap(
        long = "artist",
        action = ArgAction::Append,
        num_args = 1
    )]
    artist: Vec<String>,

    /// Number of tracks to request (clamped to 1-100)
    #[clap(long, default_value_t = 20)]
    limit: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => {
            let sessions = Arc::new(Mutex::new(SessionManager::new(AccountsEndpoint)));
            cli::auth(Arc::clone(&sessions)).await;
        }
        Command::Logout => cli::logout().await,
        Command::Moods(opt) => cli::moods(opt.mood),
        Command::Search(opt) => cli::search(opt.query).await,
        Command::Playlist(opt) => cli::playlist(opt.mood, opt.artist, opt.limit).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
