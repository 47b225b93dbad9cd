// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! The 5x5 cards grid and its scoring lines.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

use crate::poker::{Card, HandCategory, ScoringSystem};

/// Number of rows and columns.
pub const GRID_SIZE: usize = 5;

/// Number of cells in the grid.
pub const GRID_CELLS: usize = GRID_SIZE * GRID_SIZE;

/// A grid cell, cells are numbered row by row from the top left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize")]
pub struct Cell(usize);

impl Cell {
    /// Creates a cell from its index, `None` if the index is not in the grid.
    pub fn new(index: usize) -> Option<Cell> {
        (index < GRID_CELLS).then_some(Cell(index))
    }

    /// Creates a cell from its row and column.
    pub fn at(row: usize, col: usize) -> Option<Cell> {
        (row < GRID_SIZE && col < GRID_SIZE).then_some(Cell(row * GRID_SIZE + col))
    }

    /// Returns all cells.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..GRID_CELLS).map(Cell)
    }

    /// The cell index.
    pub fn index(&self) -> usize {
        self.0
    }

    /// The cell row.
    pub fn row(&self) -> usize {
        self.0 / GRID_SIZE
    }

    /// The cell column.
    pub fn col(&self) -> usize {
        self.0 % GRID_SIZE
    }
}

impl TryFrom<usize> for Cell {
    type Error = ParseCellError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Cell::new(index).ok_or_else(|| ParseCellError(index.to_string()))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.col() as u8) as char, self.row() + 1)
    }
}

/// Error returned when parsing a cell.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid cell '{0}', use A1 to E5 or 1 to 25")]
pub struct ParseCellError(String);

impl FromStr for Cell {
    type Err = ParseCellError;

    /// Parses a cell from a column letter and row number, i.e. `B3`, or from its
    /// position from 1 to 25.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCellError(s.to_string());
        let s = s.trim();

        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            return s
                .parse::<usize>()
                .ok()
                .and_then(|pos| pos.checked_sub(1))
                .and_then(Cell::new)
                .ok_or_else(err);
        }

        let mut chars = s.chars();
        let col = chars
            .next()
            .map(|c| c.to_ascii_uppercase())
            .filter(|c| ('A'..='E').contains(c))
            .ok_or_else(err)?;
        let row = chars.as_str();
        if row.is_empty() || !row.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err());
        }
        let row = row.parse::<usize>().map_err(|_| err())?;

        row.checked_sub(1)
            .and_then(|row| Cell::at(row, (col as u8 - b'A') as usize))
            .ok_or_else(err)
    }
}

/// The direction of a scoring line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LineKind {
    /// A row, from left to right.
    Row,
    /// A column, from top to bottom.
    Column,
}

/// A scoring line, only lines inside the grid can be created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Line {
    kind: LineKind,
    index: usize,
}

impl Line {
    /// Number of lines in the grid.
    pub const COUNT: usize = 2 * GRID_SIZE;

    /// Creates a row line from 0 at the top, `None` if out of the grid.
    pub fn row(index: usize) -> Option<Line> {
        Self::checked(LineKind::Row, index)
    }

    /// Creates a column line from 0 at the left, `None` if out of the grid.
    pub fn column(index: usize) -> Option<Line> {
        Self::checked(LineKind::Column, index)
    }

    fn checked(kind: LineKind, index: usize) -> Option<Line> {
        (index < GRID_SIZE).then_some(Line { kind, index })
    }

    /// Returns all rows followed by all columns.
    pub fn all() -> impl Iterator<Item = Line> {
        [LineKind::Row, LineKind::Column]
            .into_iter()
            .flat_map(|kind| (0..GRID_SIZE).map(move |index| Line { kind, index }))
    }

    /// Whether this is a row or a column.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// The row or column index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The line cells.
    pub fn cells(&self) -> [Cell; GRID_SIZE] {
        // index < GRID_SIZE so every cell is in the grid.
        std::array::from_fn(|i| match self.kind {
            LineKind::Row => Cell(self.index * GRID_SIZE + i),
            LineKind::Column => Cell(i * GRID_SIZE + self.index),
        })
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            LineKind::Row => write!(f, "Row {}", self.index + 1),
            LineKind::Column => write!(f, "Column {}", (b'A' + self.index as u8) as char),
        }
    }
}

/// The cards grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    cells: [Option<Card>; GRID_CELLS],
}

impl Grid {
    /// The card at a cell.
    pub fn get(&self, cell: Cell) -> Option<Card> {
        self.cells[cell.0]
    }

    /// Puts a card in an empty cell, returns the card back if the cell is taken.
    pub fn put(&mut self, cell: Cell, card: Card) -> Result<(), Card> {
        match self.cells[cell.0] {
            Some(_) => Err(card),
            None => {
                self.cells[cell.0] = Some(card);
                Ok(())
            }
        }
    }

    /// Removes the card from a cell.
    pub fn take(&mut self, cell: Cell) -> Option<Card> {
        self.cells[cell.0].take()
    }

    /// Number of cards in the grid.
    pub fn placed(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Checks if all cells have a card.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// The cards in a line, missing cards are `None`.
    pub fn line(&self, line: Line) -> [Option<Card>; GRID_SIZE] {
        line.cells().map(|cell| self.get(cell))
    }

    /// Scores all lines, lines with missing cards score 0.
    pub fn score(&self, scoring: ScoringSystem) -> ScoreCard {
        let lines = Line::all()
            .map(|line| {
                let cards = self.line(line);
                let category = HandCategory::from_slots(&cards);
                LineScore {
                    line,
                    category,
                    points: category.map(|c| scoring.points(c)).unwrap_or(0),
                }
            })
            .collect();

        ScoreCard { scoring, lines }
    }
}

/// A line category and points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineScore {
    /// The scored line.
    pub line: Line,
    /// The line hand category, `None` if the line is not complete.
    pub category: Option<HandCategory>,
    /// The line points.
    pub points: u32,
}

/// The score of each line in a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreCard {
    scoring: ScoringSystem,
    lines: Vec<LineScore>,
}

impl ScoreCard {
    /// The scoring system used for this card.
    pub fn scoring(&self) -> ScoringSystem {
        self.scoring
    }

    /// The lines scores, rows first.
    pub fn lines(&self) -> &[LineScore] {
        &self.lines
    }

    /// The sum of all lines points.
    pub fn total(&self) -> u32 {
        self.lines.iter().map(|l| l.points).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: [&str; GRID_SIZE]) -> Grid {
        let mut grid = Grid::default();
        for (row, cards) in rows.iter().enumerate() {
            for (col, card) in cards.split_whitespace().enumerate() {
                let cell = Cell::at(row, col).unwrap();
                grid.put(cell, card.parse().unwrap()).unwrap();
            }
        }
        grid
    }

    fn test_grid() -> Grid {
        grid([
            "TS JS QS KS AS",
            "2H 3H 4H 5H 6H",
            "7C 7D 7H 7S 2C",
            "8C 8D 8H 9D 9H",
            "3D 5D JD QD KD",
        ])
    }

    #[test]
    fn parse_cell() {
        assert_eq!("A1".parse::<Cell>(), Ok(Cell(0)));
        assert_eq!("b3".parse::<Cell>(), Ok(Cell(11)));
        assert_eq!("E5".parse::<Cell>(), Ok(Cell(24)));
        assert_eq!("1".parse::<Cell>(), Ok(Cell(0)));
        assert_eq!("25".parse::<Cell>(), Ok(Cell(24)));

        for s in ["", "0", "26", "+5", "-1", "F1", "A0", "A6", "A+1", "AA", "1A"] {
            assert!(s.parse::<Cell>().is_err(), "{s}");
        }

        for cell in Cell::all() {
            assert_eq!(cell.to_string().parse::<Cell>(), Ok(cell));
        }
    }

    #[test]
    fn lines_cover_grid() {
        let lines = Line::all().collect::<Vec<_>>();
        assert_eq!(lines.len(), Line::COUNT);

        // Each cell is in exactly one row and one column.
        let mut hits = [0; GRID_CELLS];
        for line in &lines {
            for cell in line.cells() {
                hits[cell.index()] += 1;
            }
        }
        assert!(hits.iter().all(|&n| n == 2));

        assert_eq!(Line::row(1).unwrap().cells()[0], Cell::at(1, 0).unwrap());
        assert_eq!(Line::column(2).unwrap().cells()[4], Cell::at(4, 2).unwrap());
        assert_eq!(Line::column(4).unwrap().to_string(), "Column E");
    }

    #[test]
    fn lines_outside_grid() {
        assert_eq!(Line::row(5), None);
        assert_eq!(Line::column(5), None);
        assert_eq!(Line::column(usize::MAX), None);

        let grid = Grid::default();
        for line in Line::all() {
            assert!(line.index() < GRID_SIZE);
            assert_eq!(grid.line(line), [None; GRID_SIZE]);
        }
    }

    #[test]
    fn cell_index_conversion() {
        assert_eq!(Cell::try_from(24usize), Ok(Cell(24)));
        assert!(Cell::try_from(25usize).is_err());
        assert_eq!(Cell::new(25), None);
        assert_eq!(Cell::at(0, 5), None);
    }

    #[test]
    fn put_and_take() {
        let mut grid = Grid::default();
        let ah = "AH".parse::<Card>().unwrap();
        let kh = "KH".parse::<Card>().unwrap();
        let cell = Cell::at(2, 3).unwrap();

        assert_eq!(grid.put(cell, ah), Ok(()));
        assert_eq!(grid.put(cell, kh), Err(kh));
        assert_eq!(grid.get(cell), Some(ah));
        assert_eq!(grid.placed(), 1);

        assert_eq!(grid.take(cell), Some(ah));
        assert_eq!(grid.take(cell), None);
        assert_eq!(grid.placed(), 0);
    }

    #[test]
    fn score_full_grid() {
        let grid = test_grid();
        assert!(grid.is_full());

        let card = grid.score(ScoringSystem::American);
        let rows = card
            .lines()
            .iter()
            .filter(|l| l.line.kind() == LineKind::Row)
            .map(|l| (l.category, l.points))
            .collect::<Vec<_>>();

        assert_eq!(
            rows,
            vec![
                (Some(HandCategory::RoyalFlush), 100),
                (Some(HandCategory::StraightFlush), 75),
                (Some(HandCategory::FourOfAKind), 50),
                (Some(HandCategory::FullHouse), 25),
                (Some(HandCategory::Flush), 20),
            ]
        );

        // No column makes a hand.
        assert!(
            card.lines()
                .iter()
                .filter(|l| l.line.kind() == LineKind::Column)
                .all(|l| l.category == Some(HandCategory::HighCard) && l.points == 0)
        );

        assert_eq!(card.total(), 270);
        assert_eq!(grid.score(ScoringSystem::English).total(), 91);
    }

    #[test]
    fn score_partial_grid() {
        let mut grid = test_grid();
        grid.take(Cell::at(0, 0).unwrap());

        let card = grid.score(ScoringSystem::American);
        assert_eq!(card.lines()[0].category, None);
        assert_eq!(card.lines()[0].points, 0);
        assert_eq!(card.total(), 170);
    }
}
