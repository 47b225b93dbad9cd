// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker Squares hand evaluator.
//!
//! Classifies 5 cards poker hands and scores them with the American or English
//! Poker Squares scoring tables.
//!
//! To score a hand use [score_hand] with the name of the scoring system, or
//! [ScoringSystem::score] if the system is already parsed:
//!
//! ```
//! # use pokersquares_eval::*;
//! let hand = ["TS", "JS", "QS", "KS", "AS"].map(|c| c.parse::<Card>().ok());
//! assert_eq!(score_hand(&hand, "american"), 100);
//! assert_eq!(ScoringSystem::English.score(&hand), 30);
//!
//! let cards = hand.map(Option::unwrap);
//! assert_eq!(HandCategory::classify(&cards), HandCategory::RoyalFlush);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{HandCategory, ParseScoringError, ScoringSystem, score_hand};

// Reexport cards types.
pub use pokersquares_cards::{Card, Deck, Rank, Suit};
