// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker Squares cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use pokersquares_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let td: Card = "10♦".parse().unwrap();
//! assert_eq!(ah.label(), "A♥");
//! assert_eq!(td.to_string(), "TD");
//! ```
//!
//! and a [Deck] type for shuffling and dealing cards, a game uses a freshly
//! generated deck:
//!
//! ```
//! # use pokersquares_cards::{generate_deck, Deck};
//! let mut deck = generate_deck();
//! assert_eq!(deck.count(), Deck::SIZE);
//!
//! let card = deck.deal();
//! assert!(card.is_some());
//! assert_eq!(deck.count(), Deck::SIZE - 1);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, ParseCardError, Rank, Suit, generate_deck};
