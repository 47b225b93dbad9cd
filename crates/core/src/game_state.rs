// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Game session state.
use log::{debug, info};
use rand::Rng;
use thiserror::Error;

use crate::{
    grid::{Cell, GRID_CELLS, Grid, ScoreCard},
    poker::{Card, Deck, GameMode, ScoringSystem},
};

/// An invalid game move.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The cell already has a card.
    #[error("cell {0} is already taken")]
    CellOccupied(Cell),
    /// The cell has no card.
    #[error("cell {0} is empty")]
    CellEmpty(Cell),
    /// There is no card at this pool position.
    #[error("no card at pool position {0}")]
    PoolIndexOutOfRange(usize),
    /// The move is not allowed in this game mode.
    #[error("cannot {action} in {mode} mode")]
    NotAllowedInMode {
        /// The attempted action.
        action: &'static str,
        /// The game mode.
        mode: GameMode,
    },
    /// All cards have been placed.
    #[error("the game is over")]
    GameOver,
    /// The grid still has empty cells.
    #[error("the grid has {0} empty cells")]
    GridIncomplete(usize),
}

/// A single player game.
#[derive(Debug)]
pub struct Game {
    mode: GameMode,
    scoring: ScoringSystem,
    deck: Deck,
    pool: Vec<Card>,
    grid: Grid,
}

impl Game {
    /// Starts a new game with a freshly shuffled deck.
    pub fn new(mode: GameMode, scoring: ScoringSystem) -> Self {
        Self::with_rng(mode, scoring, &mut rand::rng())
    }

    /// Starts a new game with user provided randomness.
    pub fn with_rng<R: Rng + ?Sized>(mode: GameMode, scoring: ScoringSystem, rng: &mut R) -> Self {
        let mut deck = Deck::new_and_shuffled(rng);

        let visible = match mode {
            GameMode::Standard => 1,
            GameMode::Shuffle => GRID_CELLS,
        };
        let pool = (0..visible).filter_map(|_| deck.deal()).collect();

        info!("Starting {mode} game with {scoring} scoring");

        Self {
            mode,
            scoring,
            deck,
            pool,
            grid: Grid::default(),
        }
    }

    /// The game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// The game scoring system.
    pub fn scoring(&self) -> ScoringSystem {
        self.scoring
    }

    /// The cards that can be placed.
    pub fn pool(&self) -> &[Card] {
        &self.pool
    }

    /// The cards grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of cards left in the deck.
    pub fn deck_count(&self) -> usize {
        self.deck.count()
    }

    /// Checks if all the cards have been placed.
    pub fn is_complete(&self) -> bool {
        self.grid.is_full()
    }

    /// Places the card at a pool position in an empty cell.
    ///
    /// In standard mode the pool has only the dealt card at position 0, once
    /// placed the next card is dealt.
    pub fn place(&mut self, pool_index: usize, cell: Cell) -> Result<Card, GameError> {
        if self.is_complete() {
            return Err(GameError::GameOver);
        }

        if pool_index >= self.pool.len() {
            return Err(GameError::PoolIndexOutOfRange(pool_index));
        }

        if self.grid.get(cell).is_some() {
            return Err(GameError::CellOccupied(cell));
        }

        let card = self.pool.remove(pool_index);
        self.grid
            .put(cell, card)
            .map_err(|_| GameError::CellOccupied(cell))?;

        debug!("Placed {card} at {cell}");

        if self.mode == GameMode::Standard && self.pool.is_empty() && !self.grid.is_full() {
            self.pool.extend(self.deck.deal());
        }

        if self.is_complete() {
            info!("Game complete with {} points", self.grid.score(self.scoring).total());
        }

        Ok(card)
    }

    /// Lifts a card from the grid back to the end of the pool.
    pub fn lift(&mut self, cell: Cell) -> Result<Card, GameError> {
        if self.mode != GameMode::Shuffle {
            return Err(GameError::NotAllowedInMode {
                action: "lift cards",
                mode: self.mode,
            });
        }

        if self.is_complete() {
            return Err(GameError::GameOver);
        }

        let card = self.grid.take(cell).ok_or(GameError::CellEmpty(cell))?;
        self.pool.push(card);

        debug!("Lifted {card} from {cell}");

        Ok(card)
    }

    /// Scores the completed grid.
    pub fn score_card(&self) -> Result<ScoreCard, GameError> {
        if !self.is_complete() {
            let empty = GRID_CELLS - self.grid.placed();
            return Err(GameError::GridIncomplete(empty));
        }

        Ok(self.grid.score(self.scoring))
    }
}
