// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use tracing::Level;

use gastos::{cli, db, shell::Shell};

fn main() -> Result<()> {
    let matches = cli::build_cli().get_matches();
    let settings = cli::Settings::from_matches(&matches);

    tracing_subscriber::fmt()
        .with_max_level(if settings.verbose { Level::DEBUG } else { Level::WARN })
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let conn = db::open_or_init(&settings.db_path)
        .with_context(|| format!("Open DB at {}", settings.db_path.display()))?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Shell::new(&conn, stdin.lock(), stdout.lock(), &settings).run()?;

    conn.close()
        .map_err(|(_, e)| e)
        .with_context(|| format!("Close DB at {}", settings.db_path.display()))?;
    Ok(())
}
