// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand classifier and scorer.
//!
//! A 5 cards hand is classified in exactly one [HandCategory], checks run from
//! the strongest category to the weakest and the first match wins, so a hand
//! that is both a straight and a flush is always a straight flush.
//!
//! A [ScoringSystem] maps each category to points, there are two systems the
//! American and the English, with the English system scoring straights higher
//! than flushes.
mod category;
pub use category::HandCategory;

mod scoring;
pub use scoring::{ParseScoringError, ScoringSystem, score_hand};
