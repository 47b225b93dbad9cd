// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker Squares terminal game.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, anyhow};
use clap::{Args, Parser, Subcommand};
use directories::ProjectDirs;
use log::error;
use rand::{SeedableRng, rngs::StdRng};
use std::{fs, io, path::PathBuf};

use pokersquares_core::{
    game_state::Game,
    poker::{Card, GameMode, HandCategory, ScoringSystem},
};

use crate::{db::Db, terminal::Terminal};

pub mod db;
pub mod terminal;

#[derive(Debug, Parser)]
#[command(version, about = "Place 25 cards on a 5x5 grid to make the best poker hands.")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Play a game.
    Play {
        #[command(flatten)]
        game: GameArgs,
        /// The name saved in the leaderboard.
        #[arg(long, short)]
        name: Option<String>,
        /// Seed for a repeatable deck.
        #[arg(long)]
        seed: Option<u64>,
        /// The leaderboard database path.
        #[arg(long)]
        db: Option<PathBuf>,
    },
    /// Score a 5 cards hand, i.e. `score 10S JS QS KS AS`.
    Score {
        /// The hand cards.
        #[arg(num_args = 5, required = true)]
        cards: Vec<Card>,
        /// The scoring system.
        #[arg(long, short, default_value_t = ScoringSystem::American)]
        scoring: ScoringSystem,
    },
    /// Show the best scores.
    Leaderboard {
        #[command(flatten)]
        game: GameArgs,
        /// Number of scores to show.
        #[arg(long, default_value_t = 10)]
        limit: usize,
        /// The leaderboard database path.
        #[arg(long)]
        db: Option<PathBuf>,
    },
}

#[derive(Debug, Args)]
struct GameArgs {
    /// The game mode.
    #[arg(long, short, default_value_t = GameMode::Standard)]
    mode: GameMode,
    /// The scoring system.
    #[arg(long, short, default_value_t = ScoringSystem::American)]
    scoring: ScoringSystem,
}

/// Number of leaderboard entries shown after a game.
const LEADERBOARD_SIZE: usize = 10;

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Play {
            game: GameArgs { mode, scoring },
            name,
            seed,
            db,
        } => {
            let db = Db::open(db_path(db)?)?;
            let mut game = match seed {
                Some(seed) => Game::with_rng(mode, scoring, &mut StdRng::seed_from_u64(seed)),
                None => Game::new(mode, scoring),
            };

            let mut term = Terminal::new(io::stdin().lock(), io::stdout());
            let Some(card) = term.play(&mut game)? else {
                return Ok(());
            };

            let name = match name {
                Some(name) => name,
                None => term
                    .prompt("Your name: ")?
                    .filter(|n| !n.is_empty())
                    .unwrap_or_else(|| "Anonymous".to_string()),
            };

            db.insert(&name, mode, scoring, card.total())?;
            let entries = db.top(mode, scoring, LEADERBOARD_SIZE)?;
            term.print_leaderboard(mode, scoring, &entries)?;
        }
        Command::Score { cards, scoring } => {
            let hand = cards.iter().copied().map(Some).collect::<Vec<_>>();
            let points = pokersquares_eval::score_hand(&hand, scoring.name());
            let category = HandCategory::from_slots(&hand)
                .ok_or_else(|| anyhow!("a hand must have 5 cards"))?;

            let labels = cards.iter().map(Card::label).collect::<Vec<_>>();
            println!("{}: {category}, {points} points ({scoring})", labels.join(" "));
        }
        Command::Leaderboard {
            game: GameArgs { mode, scoring },
            limit,
            db,
        } => {
            let db = Db::open(db_path(db)?)?;
            let entries = db.top(mode, scoring, limit)?;
            Terminal::new(io::empty(), io::stdout()).print_leaderboard(mode, scoring, &entries)?;
        }
    }

    Ok(())
}

/// The database path given on the command line or the default one.
fn db_path(path: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = path {
        return Ok(path);
    }

    let dirs = ProjectDirs::from("", "", "pokersquares")
        .ok_or_else(|| anyhow!("cannot find a home directory for the leaderboard"))?;
    fs::create_dir_all(dirs.data_dir())?;

    Ok(dirs.data_dir().join("leaderboard.db"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_play_args() {
        let cli = Cli::try_parse_from([
            "pokersquares",
            "play",
            "--mode",
            "shuffle",
            "--scoring",
            "english",
            "--seed",
            "42",
        ])
        .unwrap();

        match cli.command {
            Command::Play {
                game: GameArgs { mode, scoring },
                seed,
                name,
                ..
            } => {
                assert_eq!(mode, GameMode::Shuffle);
                assert_eq!(scoring, ScoringSystem::English);
                assert_eq!(seed, Some(42));
                assert_eq!(name, None);
            }
            cmd => panic!("unexpected command {cmd:?}"),
        }
    }

    #[test]
    fn parse_score_args() {
        let cli = Cli::try_parse_from(["pokersquares", "score", "10S", "JS", "QS", "KS", "AS"])
            .unwrap();

        match cli.command {
            Command::Score { cards, scoring } => {
                assert_eq!(cards.len(), 5);
                assert_eq!(scoring, ScoringSystem::American);
            }
            cmd => panic!("unexpected command {cmd:?}"),
        }

        assert!(Cli::try_parse_from(["pokersquares", "score", "10S", "JS"]).is_err());
        assert!(Cli::try_parse_from(["pokersquares", "score", "1S", "JS", "QS", "KS", "AS"]).is_err());
        assert!(Cli::try_parse_from(["pokersquares", "play", "--scoring", "canadian"]).is_err());
    }
}
