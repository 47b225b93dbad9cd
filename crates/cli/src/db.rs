// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Leaderboard database.
use anyhow::Result;
use log::info;
use parking_lot::Mutex;
use rusqlite::{Connection, params};
use std::{path::Path, sync::Arc};

use pokersquares_core::poker::{GameMode, ScoringSystem};

/// A leaderboard row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The player name.
    pub name: String,
    /// The game score.
    pub score: u32,
    /// When the score was recorded.
    pub created_at: String,
}

/// Database for persisting finished games scores.
#[derive(Debug, Clone)]
pub struct Db {
    db: Arc<Mutex<Connection>>,
}

impl Db {
    /// Open a database.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        info!("Opening leaderboard {}", path.as_ref().display());
        Self::with_connection(Connection::open(path)?)
    }

    /// Open a memory database.
    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        // Create tables
        conn.execute(
            "CREATE TABLE IF NOT EXISTS scores (
               id INTEGER PRIMARY KEY AUTOINCREMENT,
               name TEXT NOT NULL,
               mode TEXT NOT NULL,
               scoring TEXT NOT NULL,
               score INTEGER NOT NULL,
               created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )",
            (),
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS scores_board
             ON scores (mode, scoring, score DESC)",
            (),
        )?;

        Ok(Db {
            db: Arc::new(Mutex::new(conn)),
        })
    }

    /// Records a finished game score.
    pub fn insert(
        &self,
        name: &str,
        mode: GameMode,
        scoring: ScoringSystem,
        score: u32,
    ) -> Result<()> {
        let db = self.db.lock();
        db.execute(
            "INSERT INTO scores (name, mode, scoring, score)
             VALUES (?1, ?2, ?3, ?4)",
            params![name, mode.name(), scoring.name(), score],
        )?;

        info!("Saved {score} points for {name} ({mode}/{scoring})");

        Ok(())
    }

    /// Gets the best scores for a mode and scoring system, ties are ordered by
    /// insertion.
    pub fn top(&self, mode: GameMode, scoring: ScoringSystem, limit: usize) -> Result<Vec<Entry>> {
        let limit = i64::try_from(limit)?;
        let db = self.db.lock();

        let mut stmt = db.prepare(
            "SELECT name, score, created_at
             FROM scores
             WHERE mode = ?1 AND scoring = ?2
             ORDER BY score DESC, id ASC
             LIMIT ?3",
        )?;

        let entries = stmt
            .query_map(
                params![mode.name(), scoring.name(), limit],
                |row| {
                    Ok(Entry {
                        name: row.get(0)?,
                        score: row.get(1)?,
                        created_at: row.get(2)?,
                    })
                },
            )?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(entries: &[Entry]) -> Vec<(&str, u32)> {
        entries.iter().map(|e| (e.name.as_str(), e.score)).collect()
    }

    #[test]
    fn leaderboard_order() {
        let db = Db::open_in_memory().unwrap();
        let (mode, scoring) = (GameMode::Standard, ScoringSystem::American);

        db.insert("Alice", mode, scoring, 120).unwrap();
        db.insert("Bob", mode, scoring, 310).unwrap();
        db.insert("Carol", mode, scoring, 120).unwrap();
        db.insert("Dave", mode, scoring, 45).unwrap();

        let top = db.top(mode, scoring, 10).unwrap();
        assert_eq!(
            names(&top),
            vec![("Bob", 310), ("Alice", 120), ("Carol", 120), ("Dave", 45)]
        );
        assert!(top.iter().all(|e| !e.created_at.is_empty()));

        let top = db.top(mode, scoring, 2).unwrap();
        assert_eq!(names(&top), vec![("Bob", 310), ("Alice", 120)]);

        assert!(db.top(mode, scoring, 0).unwrap().is_empty());
        assert!(db.top(mode, scoring, usize::MAX).is_err());
    }

    #[test]
    fn leaderboards_are_separate() {
        let db = Db::open_in_memory().unwrap();

        db.insert("Alice", GameMode::Standard, ScoringSystem::American, 100)
            .unwrap();
        db.insert("Bob", GameMode::Shuffle, ScoringSystem::American, 200)
            .unwrap();
        db.insert("Carol", GameMode::Standard, ScoringSystem::English, 50)
            .unwrap();

        let top = db
            .top(GameMode::Standard, ScoringSystem::American, 10)
            .unwrap();
        assert_eq!(names(&top), vec![("Alice", 100)]);

        let top = db
            .top(GameMode::Shuffle, ScoringSystem::American, 10)
            .unwrap();
        assert_eq!(names(&top), vec![("Bob", 200)]);

        let top = db
            .top(GameMode::Standard, ScoringSystem::English, 10)
            .unwrap();
        assert_eq!(names(&top), vec![("Carol", 50)]);

        let top = db
            .top(GameMode::Shuffle, ScoringSystem::English, 10)
            .unwrap();
        assert!(top.is_empty());
    }

    #[test]
    fn shared_handle() {
        let db = Db::open_in_memory().unwrap();
        let other = db.clone();

        other
            .insert("Alice", GameMode::Shuffle, ScoringSystem::English, 77)
            .unwrap();

        let top = db.top(GameMode::Shuffle, ScoringSystem::English, 1).unwrap();
        assert_eq!(names(&top), vec![("Alice", 77)]);
    }
}
