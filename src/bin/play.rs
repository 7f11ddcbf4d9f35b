use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use log::LevelFilter;

use rust_minimax::core::PlayerId;
use rust_minimax::games::Variant;
use rust_minimax::play::{MatchConfig, Session};
use rust_minimax::strategy::StrategyKind;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum GameArg {
    SubtractSquare,
    Chopsticks,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Play subtract-square or chopsticks", long_about = None)]
struct Args {
    /// JSON match config. Other flags override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Game to play (default: subtract-square)
    #[arg(long, value_enum)]
    game: Option<GameArg>,

    /// Starting value for subtract-square (default: 20)
    #[arg(long, requires = "game")]
    start: Option<u32>,

    /// Player 1's chopsticks hands as LEFT-RIGHT (default: 1-1)
    #[arg(long, value_parser = parse_hands, requires = "game")]
    p1_hands: Option<[u8; 2]>,

    /// Player 2's chopsticks hands as LEFT-RIGHT (default: 1-1)
    #[arg(long, value_parser = parse_hands, requires = "game")]
    p2_hands: Option<[u8; 2]>,

    /// Player who moves first: p1 or p2
    #[arg(long)]
    first: Option<PlayerId>,

    /// Strategy for player 1: interactive, random, rough-outcome,
    /// recursive-minimax or iterative-minimax
    #[arg(long)]
    p1: Option<StrategyKind>,

    /// Strategy for player 2
    #[arg(long)]
    p2: Option<StrategyKind>,

    /// Seed for random strategies
    #[arg(long)]
    seed: Option<u64>,

    /// Abandon the match after this many moves (0 = never)
    #[arg(long)]
    max_moves: Option<usize>,

    /// Write the match transcript as JSON to this file
    #[arg(long)]
    transcript: Option<PathBuf>,

    /// Print the rules of the selected game and exit
    #[arg(long, default_value_t = false)]
    instructions: bool,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_hands(text: &str) -> Result<[u8; 2], String> {
    let (left, right) = text
        .split_once('-')
        .ok_or_else(|| format!("expected LEFT-RIGHT, got '{text}'"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<u8>()
            .map_err(|err| format!("bad hand '{part}': {err}"))
    };
    Ok([parse(left)?, parse(right)?])
}

fn init_logging(verbose: u8) -> anyhow::Result<()> {
    let level = match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .context("initialize logger")
}

fn build_config(args: &Args) -> anyhow::Result<MatchConfig> {
    let mut config = match &args.config {
        Some(path) => MatchConfig::load(path)?,
        None => MatchConfig::default(),
    };

    match args.game {
        Some(GameArg::SubtractSquare) => {
            if args.p1_hands.is_some() || args.p2_hands.is_some() {
                bail!("--p1-hands and --p2-hands only apply to chopsticks");
            }
            config.variant = Variant::subtract_square(args.start.unwrap_or(20));
        }
        Some(GameArg::Chopsticks) => {
            if args.start.is_some() {
                bail!("--start only applies to subtract-square");
            }
            config.variant = Variant::Chopsticks {
                p1: args.p1_hands.unwrap_or([1, 1]),
                p2: args.p2_hands.unwrap_or([1, 1]),
            };
        }
        None => {}
    }

    if let Some(first) = args.first {
        config.first_player = first;
    }
    if let Some(kind) = args.p1 {
        config.p1 = kind;
    }
    if let Some(kind) = args.p2 {
        config.p2 = kind;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(max) = args.max_moves {
        config.max_moves = max;
    }

    config.validate()?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    let config = build_config(&args)?;

    if args.instructions {
        println!("{}", config.build_game()?.instructions());
        return Ok(());
    }

    log::info!(
        "{}: {} ({}) vs {} ({}), {} moves first",
        config.variant.name(),
        PlayerId::P1,
        config.p1,
        PlayerId::P2,
        config.p2,
        config.first_player
    );

    let outcome = Session::run(&config)?;

    match outcome.winner {
        Some(winner) => println!("{winner} wins after {} moves.", outcome.move_count()),
        None => println!("No winner after {} moves.", outcome.move_count()),
    }

    if let Some(path) = &args.transcript {
        std::fs::write(path, outcome.transcript.to_json()?)
            .with_context(|| format!("write transcript to {}", path.display()))?;
        log::info!("transcript written to {}", path.display());
    }

    Ok(())
}
