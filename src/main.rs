use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};
use tracing_subscriber::EnvFilter;

use trello_api::{cli, config, error};

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
  name = "trello",
  bin_name = "trello",
  author = env!("CARGO_PKG_AUTHORS"),
  about = env!("CARGO_PKG_DESCRIPTION"),
  styles = styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Trello and store an access token
    Auth,

    /// Query boards
    Boards {
        #[command(subcommand)]
        command: BoardsSubcommand,
    },

    /// Query lists
    Lists {
        #[command(subcommand)]
        command: ListsSubcommand,
    },

    /// Query cards
    Cards {
        #[command(subcommand)]
        command: CardsSubcommand,
    },

    /// Inspect the API token in use
    Token {
        #[command(subcommand)]
        command: TokenSubcommand,
    },

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Subcommand, Debug, Clone)]
pub enum BoardsSubcommand {
    /// Show a board
    Get(IdOption),
    /// Open lists of a board
    Lists(IdOption),
    /// Labels of a board
    Labels(IdOption),
}

#[derive(Subcommand, Debug, Clone)]
pub enum ListsSubcommand {
    /// Show a list
    Get(IdOption),
    /// Cards of a list
    Cards(IdOption),
}

#[derive(Subcommand, Debug, Clone)]
pub enum CardsSubcommand {
    /// Show a card
    Get(IdOption),
    /// Comments of a card
    Comments(IdOption),
}

#[derive(Subcommand, Debug, Clone)]
pub enum TokenSubcommand {
    /// Owner, expiry and permissions of the token
    Info,
}

#[derive(Parser, Debug, Clone)]
pub struct IdOption {
    /// Trello id (or short link)
    id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => cli::auth().await,
        Command::Boards { command } => match command {
            BoardsSubcommand::Get(opt) => cli::board(&opt.id).await,
            BoardsSubcommand::Lists(opt) => cli::board_lists(&opt.id).await,
            BoardsSubcommand::Labels(opt) => cli::board_labels(&opt.id).await,
        },
        Command::Lists { command } => match command {
            ListsSubcommand::Get(opt) => cli::list(&opt.id).await,
            ListsSubcommand::Cards(opt) => cli::list_cards(&opt.id).await,
        },
        Command::Cards { command } => match command {
            CardsSubcommand::Get(opt) => cli::card(&opt.id).await,
            CardsSubcommand::Comments(opt) => cli::card_comments(&opt.id).await,
        },
        Command::Token { command } => match command {
            TokenSubcommand::Info => cli::token_info().await,
        },
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
