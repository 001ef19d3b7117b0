use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use minimax_connect_four::ai::{MinimaxAgent, RandomAgent, SearchAgent};
use minimax_connect_four::config::AppConfig;
use minimax_connect_four::session::{play_match, GameRecord, TextGame};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Opponent {
    /// Moves typed on stdin
    Human,
    /// Uniformly random legal moves
    Random,
}

/// Play Connect Four against a minimax agent.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against a minimax agent")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override search depth (plies)
    #[arg(long)]
    depth: Option<usize>,

    /// Override the move-history file
    #[arg(long)]
    history: Option<PathBuf>,

    /// Do not append the game to the history file
    #[arg(long)]
    no_history: bool,

    /// Who plays against the agent
    #[arg(long, value_enum, default_value = "human")]
    opponent: Opponent,

    /// Seed for the random opponent
    #[arg(long)]
    seed: Option<u64>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml().context("serializing default config")?);
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
    }
    if let Some(history) = cli.history {
        config.session.history_file = history;
    }
    if cli.no_history {
        config.session.record_history = false;
    }
    config.validate().context("invalid configuration after CLI overrides")?;

    let depth = config.search.depth;
    let agent = MinimaxAgent::from_config(&config.search);
    info!("agent: {} at depth {}", agent.name(), depth);

    let record = match cli.opponent {
        Opponent::Human => {
            let mut game = TextGame::new(agent, depth);
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut output = io::stdout();
            game.play(&mut input, &mut output).context("playing text game")?
        }
        Opponent::Random => {
            let mut agent = agent;
            let mut random = match cli.seed {
                Some(seed) => RandomAgent::with_seed(seed),
                None => RandomAgent::new(),
            };
            let record = play_match(&mut agent, &mut random, depth).context("playing match")?;
            print_summary(&record);
            record
        }
    };

    if config.session.record_history {
        let path = &config.session.history_file;
        record
            .append_to(path)
            .with_context(|| format!("appending history to {}", path.display()))?;
        info!("history appended to {}", path.display());
    }

    Ok(())
}

fn print_summary(record: &GameRecord) {
    println!("AI moves:     {:?}", record.ai_moves);
    println!("Random moves: {:?}", record.player_moves);
    match record.winner {
        Some(player) => println!("Player {} wins!", player.number()),
        None => println!("Its a draw!"),
    }
}
