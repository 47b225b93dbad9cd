// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Types used in a Poker Squares game.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

pub use pokersquares_cards::{Card, Deck, Rank, Suit};
pub use pokersquares_eval::{HandCategory, ScoringSystem};

/// How cards reach the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Cards are placed one at a time in the order they are dealt.
    #[default]
    Standard,
    /// 25 cards are visible in a pool, they can be placed in any order and
    /// placed cards can be lifted back to the pool.
    Shuffle,
}

impl GameMode {
    /// All game modes.
    pub const ALL: [GameMode; 2] = [GameMode::Standard, GameMode::Shuffle];

    /// The mode name.
    pub fn name(&self) -> &'static str {
        match self {
            GameMode::Standard => "standard",
            GameMode::Shuffle => "shuffle",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when parsing an unknown game mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown game mode '{0}'")]
pub struct ParseModeError(String);

impl FromStr for GameMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(GameMode::Standard),
            "shuffle" => Ok(GameMode::Shuffle),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}
