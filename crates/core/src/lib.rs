// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker Squares game session types.
//!
//! A [Game](game_state::Game) owns the deck, the pool of cards that can be
//! placed, and the 5x5 [Grid](grid::Grid). Once all 25 cards are placed each
//! row and column is scored as a poker hand:
//!
//! ```
//! # use pokersquares_core::{game_state::Game, grid::Cell, poker::*};
//! let mut game = Game::new(GameMode::Standard, ScoringSystem::English);
//! for cell in Cell::all() {
//!     game.place(0, cell).unwrap();
//! }
//!
//! let card = game.score_card().unwrap();
//! assert_eq!(card.lines().len(), 10);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod game_state;
pub mod grid;
pub mod poker;
