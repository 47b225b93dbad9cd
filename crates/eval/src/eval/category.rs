// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories and 5 cards classification.
use serde::{Deserialize, Serialize};
use std::fmt;

use pokersquares_cards::{Card, Rank};

/// A poker hand category.
///
/// Categories compare by strength, a [HandCategory::RoyalFlush] is greater than
/// any other category and [HandCategory::HighCard] is the weakest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandCategory {
    /// No other category applies.
    HighCard = 0,
    /// Two cards of the same rank.
    OnePair,
    /// Two different pairs.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five consecutive ranks, including A-2-3-4-5.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// A straight of the same suit.
    StraightFlush,
    /// The 10-J-Q-K-A straight flush.
    RoyalFlush,
}

impl HandCategory {
    /// All categories from the strongest to the weakest.
    pub const ALL: [HandCategory; 10] = [
        HandCategory::RoyalFlush,
        HandCategory::StraightFlush,
        HandCategory::FourOfAKind,
        HandCategory::FullHouse,
        HandCategory::Flush,
        HandCategory::Straight,
        HandCategory::ThreeOfAKind,
        HandCategory::TwoPair,
        HandCategory::OnePair,
        HandCategory::HighCard,
    ];

    /// Classifies a 5 cards hand.
    ///
    /// Cards are not checked for uniqueness, hands built from a single deck
    /// never contain duplicates.
    pub fn classify(cards: &[Card; 5]) -> HandCategory {
        let mut counts = [0u8; Rank::COUNT];
        for card in cards {
            counts[card.rank().index()] += 1;
        }

        let is_straight = is_straight(&counts);
        let is_royal = is_straight
            && counts[Rank::Ace.index()] > 0
            && counts[Rank::Ten.index()] > 0;

        // Rank multiplicities from the largest, padded with zeros.
        counts.sort_unstable_by(|a, b| b.cmp(a));

        let first_suit = cards[0].suit();
        let is_flush = cards.iter().all(|c| c.suit() == first_suit);

        if is_flush && is_royal {
            HandCategory::RoyalFlush
        } else if is_flush && is_straight {
            HandCategory::StraightFlush
        } else if counts[0] == 4 {
            HandCategory::FourOfAKind
        } else if counts[0] == 3 && counts[1] == 2 {
            HandCategory::FullHouse
        } else if is_flush {
            HandCategory::Flush
        } else if is_straight {
            HandCategory::Straight
        } else if counts[0] == 3 {
            HandCategory::ThreeOfAKind
        } else if counts[0] == 2 && counts[1] == 2 {
            HandCategory::TwoPair
        } else if counts[0] == 2 {
            HandCategory::OnePair
        } else {
            HandCategory::HighCard
        }
    }

    /// Classifies a hand with possibly missing cards.
    ///
    /// Returns `None` if the hand doesn't have exactly 5 cards or if any of the
    /// slots is empty.
    pub fn from_slots(hand: &[Option<Card>]) -> Option<HandCategory> {
        let cards = hand.iter().copied().collect::<Option<Vec<_>>>()?;
        let cards: [Card; 5] = cards.try_into().ok()?;
        Some(Self::classify(&cards))
    }

    /// The category tag, i.e. `full_house`.
    pub fn name(&self) -> &'static str {
        match self {
            HandCategory::RoyalFlush => "royal_flush",
            HandCategory::StraightFlush => "straight_flush",
            HandCategory::FourOfAKind => "four_of_a_kind",
            HandCategory::FullHouse => "full_house",
            HandCategory::Flush => "flush",
            HandCategory::Straight => "straight",
            HandCategory::ThreeOfAKind => "three_of_a_kind",
            HandCategory::TwoPair => "two_pair",
            HandCategory::OnePair => "one_pair",
            HandCategory::HighCard => "high_card",
        }
    }

    /// The category label as shown to players, i.e. `Full House`.
    pub fn label(&self) -> &'static str {
        match self {
            HandCategory::RoyalFlush => "Royal Flush",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::FullHouse => "Full House",
            HandCategory::Flush => "Flush",
            HandCategory::Straight => "Straight",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::OnePair => "One Pair",
            HandCategory::HighCard => "High Card",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Checks for 5 distinct consecutive ranks, the ace can also play low.
fn is_straight(counts: &[u8; Rank::COUNT]) -> bool {
    let ranks = counts
        .iter()
        .enumerate()
        .filter_map(|(idx, &n)| (n > 0).then_some(idx))
        .collect::<Vec<_>>();

    if ranks.len() != 5 {
        return false;
    }

    // Indices are sorted and unique.
    if ranks[4] - ranks[0] == 4 {
        return true;
    }

    // A-2-3-4-5
    ranks
        == [
            Rank::Deuce.index(),
            Rank::Trey.index(),
            Rank::Four.index(),
            Rank::Five.index(),
            Rank::Ace.index(),
        ]
}
