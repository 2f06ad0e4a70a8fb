#![allow(dead_code)]

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection};
use tempfile::TempDir;

pub const SCHEMA: &str = "CREATE TABLE eye_health (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    timestamp TEXT NOT NULL,
    blink_rate REAL,
    fatigue REAL,
    red_ratio REAL,
    yellow_ratio REAL,
    blue_ratio REAL,
    brightness_ratio REAL
)";

/// Temporary SQLite file shaped like the upstream recorder's output.
pub struct Fixture {
    _dir: TempDir,
    path: PathBuf,
}

impl Fixture {
    pub fn with_table() -> Self {
        let fixture = Self::without_table();
        let conn = Connection::open(fixture.path()).unwrap();
        conn.execute_batch(SCHEMA).unwrap();
        fixture
    }

    /// Database file exists but holds no `eye_health` table.
    pub fn without_table() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("eye_data.db");
        Connection::open(&path)
            .unwrap()
            .execute_batch("CREATE TABLE unrelated (x INTEGER)")
            .unwrap();
        Self { _dir: dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn insert(&self, timestamp: &str, blink_rate: f64) {
        self.insert_row(timestamp, [Some(blink_rate), Some(0.4), Some(0.3), Some(0.2), Some(0.5), Some(0.7)]);
    }

    pub fn insert_row(&self, timestamp: &str, values: [Option<f64>; 6]) {
        let conn = Connection::open(self.path()).unwrap();
        conn.execute(
            "INSERT INTO eye_health (timestamp, blink_rate, fatigue, red_ratio, yellow_ratio, blue_ratio, brightness_ratio)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![timestamp, values[0], values[1], values[2], values[3], values[4], values[5]],
        )
        .unwrap();
    }
}
