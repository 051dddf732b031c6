//! Gomoku in the terminal
//!
//! Any mix of human and computer players, any supported variant.
//! Set `RUST_LOG=debug` to follow turn resolution and search statistics.

use std::io;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::info;

use gomoku::{
    AiPlayer, Game, GameConfig, GameError, HumanPlayer, Outcome, Player, RuleSet, RuleVariant,
    Stone,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PlayerKind {
    Human,
    Ai,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DoubleThrees {
    Allow,
    Forbid,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Play Gomoku, Ninuki-renju or Pente", long_about = None)]
struct Args {
    /// Board size (5 to 25)
    #[arg(long, default_value_t = 19)]
    size: u8,

    /// Rule variant
    #[arg(long, value_enum, default_value_t = RuleVariant::Standard)]
    variant: RuleVariant,

    /// Who plays Black (moves first)
    #[arg(long, value_enum, default_value_t = PlayerKind::Human)]
    black: PlayerKind,

    /// Who plays White
    #[arg(long, value_enum, default_value_t = PlayerKind::Ai)]
    white: PlayerKind,

    /// Search depth for computer players
    #[arg(long, default_value_t = GameConfig::DEFAULT_DEPTH)]
    depth: u8,

    /// Time budget per computer move, in milliseconds
    #[arg(long, default_value_t = GameConfig::DEFAULT_TIME_LIMIT_MS)]
    time_limit_ms: u64,

    /// Seed for the computer's random fallback moves
    #[arg(long)]
    seed: Option<u64>,

    /// Override the variant's double free-three rule
    #[arg(long, value_enum)]
    double_threes: Option<DoubleThrees>,
}

impl Args {
    fn config(&self) -> GameConfig {
        let mut rules = RuleSet::from_variant(self.variant);
        if let Some(choice) = self.double_threes {
            rules = rules.with_no_double_threes(choice == DoubleThrees::Forbid);
        }
        GameConfig::new(self.variant)
            .with_board_size(self.size)
            .with_rules(rules)
            .with_depth(self.depth)
            .with_time_limit(Duration::from_millis(self.time_limit_ms))
            .with_seed(self.seed)
    }
}

fn make_player(kind: PlayerKind, stone: Stone, config: &GameConfig) -> Box<dyn Player> {
    match kind {
        // One-byte buffer so two human players never read ahead of each
        // other; stdin keeps its own buffer underneath.
        PlayerKind::Human => Box::new(HumanPlayer::new(
            stone,
            io::BufReader::with_capacity(1, io::stdin()),
            io::stdout(),
        )),
        PlayerKind::Ai => Box::new(AiPlayer::new(stone, config)),
    }
}

fn print_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Win { winner, reason, .. } => println!("\n{winner} wins ({reason:?})!"),
        Outcome::Draw => println!("\nThe board is full: draw."),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = args.config();
    config.validate()?;
    info!(
        "{}x{} board, variant {}, rules {:?}",
        config.board_size,
        config.board_size,
        config.variant.name(),
        config.rules
    );

    let mut players = [
        make_player(args.black, Stone::Black, &config),
        make_player(args.white, Stone::White, &config),
    ];
    let mut game = Game::from_config(&config);
    println!("{}", game.board());

    loop {
        if let Some(outcome) = game.outcome() {
            print_outcome(outcome);
            break;
        }

        let stone = game.turn();
        let player = match stone {
            Stone::Black => &mut players[0],
            Stone::White => &mut players[1],
        };

        let Some(mv) = player.decide_move(game.board(), game.last_move())? else {
            println!("\n{stone} resigns. {} wins!", stone.opponent());
            break;
        };

        match game.play(mv) {
            Ok(report) => {
                println!("\n{} plays {}", stone, mv.pos);
                if !report.captured.is_empty() {
                    println!("{} captures {} stones", stone, report.captured.len());
                }
                if report.provisional_line.is_some() {
                    println!("{} has five, but it can still be broken!", stone);
                }
                println!("{}", game.board());
            }
            Err(GameError::Illegal(reason)) => player.notify(&reason.to_string())?,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}
