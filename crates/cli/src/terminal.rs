// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal I/O.
use anyhow::{Result, anyhow, bail};
use crossterm::{
    queue,
    style::{self, Stylize},
};
use std::io;

use pokersquares_core::{
    game_state::Game,
    grid::{Cell, GRID_SIZE, ScoreCard},
    poker::{Card, GameMode, ScoringSystem},
};

use crate::db::Entry;

/// A player command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the card at a pool position in a cell.
    Place {
        /// Zero based pool position.
        pool: usize,
        /// The target cell.
        cell: Cell,
    },
    /// Lift a card back to the pool.
    Lift(Cell),
    /// Show the current lines score.
    Score,
    /// Show the commands.
    Help,
    /// Abandon the game.
    Quit,
}

impl Command {
    /// Parses a command line, pool positions are typed starting from 1.
    pub fn parse(line: &str, mode: GameMode) -> Result<Command> {
        let words = line.split_whitespace().collect::<Vec<_>>();

        let cmd = match (mode, words.as_slice()) {
            (_, ["q" | "quit"]) => Command::Quit,
            (_, ["h" | "help" | "?"]) => Command::Help,
            (_, ["s" | "score"]) => Command::Score,
            (_, ["l" | "lift", cell]) => Command::Lift(cell.parse()?),
            (GameMode::Standard, [cell]) | (GameMode::Standard, ["p" | "place", cell]) => {
                Command::Place {
                    pool: 0,
                    cell: cell.parse()?,
                }
            }
            (GameMode::Shuffle, [pos, cell]) | (GameMode::Shuffle, ["p" | "place", pos, cell]) => {
                Command::Place {
                    pool: parse_pool_position(pos)?,
                    cell: cell.parse()?,
                }
            }
            (_, []) => bail!("type a command, 'help' for help"),
            _ => bail!("unknown command '{}', 'help' for help", line.trim()),
        };

        Ok(cmd)
    }
}

fn parse_pool_position(s: &str) -> Result<usize> {
    s.parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .ok_or_else(|| anyhow!("invalid pool position '{s}'"))
}

/// Terminal reading player commands and printing the game.
pub struct Terminal<R, W> {
    input: R,
    out: W,
}

impl<R: io::BufRead, W: io::Write> Terminal<R, W> {
    /// Creates a terminal with the given input and output.
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    /// Runs the game loop until the grid is complete or the player quits.
    ///
    /// Returns the score card of a completed game.
    pub fn play(&mut self, game: &mut Game) -> Result<Option<ScoreCard>> {
        self.print_help(game.mode())?;

        loop {
            self.print_game(game)?;

            if game.is_complete() {
                let card = game.score_card()?;
                self.print_score_card(&card)?;
                return Ok(Some(card));
            }

            let Some(line) = self.prompt("> ")? else {
                return Ok(None);
            };

            let res = Command::parse(&line, game.mode()).and_then(|cmd| match cmd {
                Command::Place { pool, cell } => {
                    game.place(pool, cell)?;
                    Ok(false)
                }
                Command::Lift(cell) => {
                    game.lift(cell)?;
                    Ok(false)
                }
                Command::Score => {
                    self.print_score_card(&game.grid().score(game.scoring()))?;
                    Ok(false)
                }
                Command::Help => {
                    self.print_help(game.mode())?;
                    Ok(false)
                }
                Command::Quit => Ok(true),
            });

            match res {
                Ok(true) => return Ok(None),
                Ok(false) => {}
                Err(e) => self.print_error(&e.to_string())?,
            }
        }
    }

    /// Prints a message and reads a line, returns `None` at the end of input.
    pub fn prompt(&mut self, msg: &str) -> Result<Option<String>> {
        write!(self.out, "{msg}")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    /// Prints the grid and the cards that can be placed.
    pub fn print_game(&mut self, game: &Game) -> Result<()> {
        let w = &mut self.out;

        writeln!(w)?;
        write!(w, "   ")?;
        for col in 0..GRID_SIZE {
            write!(w, "{:>5}", (b'A' + col as u8) as char)?;
        }
        writeln!(w)?;

        for row in 0..GRID_SIZE {
            write!(w, "{:>3}", row + 1)?;
            for col in 0..GRID_SIZE {
                let cell = Cell::at(row, col).ok_or_else(|| anyhow!("cell out of grid"))?;
                match game.grid().get(cell) {
                    Some(card) => print_card(w, card, 5)?,
                    None => write!(w, "{:>5}", ".")?,
                }
            }
            writeln!(w)?;
        }

        writeln!(w)?;
        match game.mode() {
            GameMode::Standard => {
                if let Some(card) = game.pool().first() {
                    write!(w, "Next card: ")?;
                    print_card(w, *card, 0)?;
                    writeln!(w)?;
                }
            }
            GameMode::Shuffle => {
                if !game.pool().is_empty() {
                    write!(w, "Pool:")?;
                    for (idx, card) in game.pool().iter().enumerate() {
                        write!(w, " {}:", idx + 1)?;
                        print_card(w, *card, 0)?;
                    }
                    writeln!(w)?;
                }
            }
        }

        w.flush()?;
        Ok(())
    }

    /// Prints the lines score and the total.
    pub fn print_score_card(&mut self, card: &ScoreCard) -> Result<()> {
        let w = &mut self.out;

        writeln!(w)?;
        for line in card.lines() {
            let category = line.category.map(|c| c.label()).unwrap_or("-");
            writeln!(w, "{:<10} {:<16} {:>4}", line.line.to_string(), category, line.points)?;
        }

        let total = format!("{:<27} {:>4}", "Total", card.total());
        queue!(w, style::PrintStyledContent(total.as_str().bold()))?;
        writeln!(w, " ({} scoring)", card.scoring())?;
        w.flush()?;

        Ok(())
    }

    /// Prints the best scores of a leaderboard.
    pub fn print_leaderboard(
        &mut self,
        mode: GameMode,
        scoring: ScoringSystem,
        entries: &[Entry],
    ) -> Result<()> {
        let w = &mut self.out;

        let title = format!("Leaderboard {mode}/{scoring}");
        writeln!(w)?;
        queue!(w, style::PrintStyledContent(title.as_str().bold()))?;
        writeln!(w)?;

        if entries.is_empty() {
            writeln!(w, "No scores yet")?;
        }

        for (idx, entry) in entries.iter().enumerate() {
            writeln!(
                w,
                "{:>3}. {:<16.16} {:>5}  {}",
                idx + 1,
                entry.name,
                entry.score,
                entry.created_at
            )?;
        }

        w.flush()?;
        Ok(())
    }

    fn print_help(&mut self, mode: GameMode) -> Result<()> {
        let help = match mode {
            GameMode::Standard => {
                "Type a cell (A1 to E5, or 1 to 25) to place the next card.\n\
                 Other commands: score, help, quit."
            }
            GameMode::Shuffle => {
                "Type 'place N CELL' (or just 'N CELL') to place pool card N,\n\
                 'lift CELL' to move a card back to the pool.\n\
                 Other commands: score, help, quit."
            }
        };

        writeln!(self.out, "{help}")?;
        Ok(())
    }

    fn print_error(&mut self, msg: &str) -> Result<()> {
        queue!(self.out, style::PrintStyledContent(msg.red()))?;
        writeln!(self.out)?;
        Ok(())
    }
}

/// Prints a card label, red suits in red, right aligned to `width`.
fn print_card(w: &mut impl io::Write, card: Card, width: usize) -> Result<()> {
    let label = format!("{:>width$}", card.label());
    if card.suit().is_red() {
        queue!(w, style::PrintStyledContent(label.as_str().red()))?;
    } else {
        queue!(w, style::Print(label))?;
    }

    Ok(())
}
