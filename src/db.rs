// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::GastosResult;
use rusqlite::Connection;
use std::path::Path;
use tracing::debug;

pub const DEFAULT_DB_FILE: &str = "expenses.db";

/// Opens (or creates) the backing file and makes sure the expenses table exists.
pub fn open_or_init(path: &Path) -> GastosResult<Connection> {
    debug!(path = %path.display(), "opening expense store");
    let conn = Connection::open(path)?;
    init_schema(&conn)?;
    Ok(conn)
}

pub fn open_in_memory() -> GastosResult<Connection> {
    let conn = Connection::open_in_memory()?;
    init_schema(&conn)?;
    Ok(conn)
}

// Column names and types are shared with files written by earlier versions.
fn init_schema(conn: &Connection) -> GastosResult<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS expenses (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        amount REAL NOT NULL,
        category TEXT NOT NULL,
        description TEXT,
        date TEXT NOT NULL
    );
    "#,
    )?;
    Ok(())
}
