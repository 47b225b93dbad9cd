// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Scoring systems.
use log::warn;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

use pokersquares_cards::Card;

use super::HandCategory;

/// Points indexed by [HandCategory] discriminant, from high card to royal flush.
const AMERICAN_POINTS: [u32; 10] = [0, 2, 5, 10, 15, 20, 25, 50, 75, 100];
const ENGLISH_POINTS: [u32; 10] = [0, 1, 3, 6, 12, 5, 10, 16, 30, 30];

/// A table that maps hand categories to points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringSystem {
    /// American scoring, flushes beat straights.
    #[default]
    American,
    /// English scoring, straights beat flushes.
    English,
}

/// Error returned when parsing an unknown scoring system name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown scoring system '{0}'")]
pub struct ParseScoringError(String);

impl ScoringSystem {
    /// All scoring systems.
    pub const ALL: [ScoringSystem; 2] = [ScoringSystem::American, ScoringSystem::English];

    /// The points for a hand category.
    pub fn points(&self, category: HandCategory) -> u32 {
        let table = match self {
            ScoringSystem::American => &AMERICAN_POINTS,
            ScoringSystem::English => &ENGLISH_POINTS,
        };

        table[category as usize]
    }

    /// Scores a hand, a hand without exactly 5 cards scores 0.
    pub fn score(&self, hand: &[Option<Card>]) -> u32 {
        HandCategory::from_slots(hand)
            .map(|category| self.points(category))
            .unwrap_or(0)
    }

    /// The scoring system name.
    pub fn name(&self) -> &'static str {
        match self {
            ScoringSystem::American => "american",
            ScoringSystem::English => "english",
        }
    }
}

impl fmt::Display for ScoringSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ScoringSystem {
    type Err = ParseScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "american" => Ok(ScoringSystem::American),
            "english" => Ok(ScoringSystem::English),
            _ => Err(ParseScoringError(s.to_string())),
        }
    }
}

/// Scores a hand with the scoring system of the given name.
///
/// Returns 0 if the hand doesn't have exactly 5 cards, if any card is missing,
/// or if the scoring system name is unknown.
///
/// ```
/// # use pokersquares_eval::*;
/// let hand = ["7S", "7H", "7D", "2C", "2S"].map(|c| c.parse::<Card>().ok());
/// assert_eq!(score_hand(&hand, "english"), 10);
/// assert_eq!(score_hand(&hand, "american"), 25);
/// assert_eq!(score_hand(&hand[..4], "american"), 0);
/// ```
pub fn score_hand(hand: &[Option<Card>], system: &str) -> u32 {
    match system.parse::<ScoringSystem>() {
        Ok(system) => system.score(hand),
        Err(e) => {
            warn!("Scoring hand with {e}");
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(cards: &str) -> Vec<Option<Card>> {
        cards
            .split_whitespace()
            .map(|c| Some(c.parse::<Card>().unwrap()))
            .collect()
    }

    #[test]
    fn scoring_tables() {
        use HandCategory::*;

        let american = [
            (RoyalFlush, 100),
            (StraightFlush, 75),
            (FourOfAKind, 50),
            (FullHouse, 25),
            (Flush, 20),
            (Straight, 15),
            (ThreeOfAKind, 10),
            (TwoPair, 5),
            (OnePair, 2),
            (HighCard, 0),
        ];

        for (category, points) in american {
            assert_eq!(ScoringSystem::American.points(category), points, "{category}");
        }

        let english = [
            (RoyalFlush, 30),
            (StraightFlush, 30),
            (FourOfAKind, 16),
            (FullHouse, 10),
            (Flush, 5),
            (Straight, 12),
            (ThreeOfAKind, 6),
            (TwoPair, 3),
            (OnePair, 1),
            (HighCard, 0),
        ];

        for (category, points) in english {
            assert_eq!(ScoringSystem::English.points(category), points, "{category}");
        }
    }

    #[test]
    fn score_hands() {
        assert_eq!(score_hand(&hand("10♠ J♠ Q♠ K♠ A♠"), "american"), 100);
        assert_eq!(score_hand(&hand("2♠ 3♠ 4♠ 5♠ 6♠"), "american"), 75);
        assert_eq!(score_hand(&hand("A♠ 2♥ 3♦ 4♣ 5♠"), "american"), 15);
        assert_eq!(score_hand(&hand("7♠ 7♥ 7♦ 2♣ 2♠"), "english"), 10);
        assert_eq!(score_hand(&hand("2♠ 2♥ 5♦ 9♣ K♠"), "american"), 2);
        assert_eq!(score_hand(&hand("10♠ J♠ Q♠ K♠ A♠"), "english"), 30);
        assert_eq!(score_hand(&hand("A♠ 2♥ 3♦ 4♣ 5♠"), "english"), 12);
    }

    #[test]
    fn malformed_hands_score_zero() {
        assert_eq!(score_hand(&[], "american"), 0);

        let royal = hand("TS JS QS KS AS");
        assert_eq!(score_hand(&royal[..4], "american"), 0);

        let mut missing = royal.clone();
        missing[0] = None;
        assert_eq!(score_hand(&missing, "american"), 0);

        let mut six = royal.clone();
        six.push(Some("2C".parse().unwrap()));
        assert_eq!(score_hand(&six, "american"), 0);
    }

    #[test]
    fn unknown_system_scores_zero() {
        let royal = hand("TS JS QS KS AS");
        assert_eq!(score_hand(&royal, "canadian"), 0);
        assert_eq!(score_hand(&royal, ""), 0);
        assert!("canadian".parse::<ScoringSystem>().is_err());
    }

    #[test]
    fn parse_system() {
        assert_eq!("american".parse::<ScoringSystem>(), Ok(ScoringSystem::American));
        assert_eq!("English".parse::<ScoringSystem>(), Ok(ScoringSystem::English));

        for system in ScoringSystem::ALL {
            assert_eq!(system.to_string().parse::<ScoringSystem>(), Ok(system));
        }
    }

    #[test]
    fn straight_and_flush_rank_differently() {
        let flush = hand("2H 9H JH 4H KH");
        let straight = hand("5C 6D 7H 8S 9C");

        let american = ScoringSystem::American;
        assert!(american.score(&flush) > american.score(&straight));

        let english = ScoringSystem::English;
        assert!(english.score(&flush) < english.score(&straight));
    }
}
