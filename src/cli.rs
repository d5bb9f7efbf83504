// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::exporter::{CSV_FILE, PDF_FILE};
use crate::db::DEFAULT_DB_FILE;
use clap::{crate_version, Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

pub fn build_cli() -> Command {
    Command::new("gastos")
        .version(crate_version!())
        .about("Controle de Gastos: registre despesas e gere relatórios por categoria")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log store and export activity to stderr"),
        )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub db_path: PathBuf,
    pub csv_path: PathBuf,
    pub pdf_path: PathBuf,
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            db_path: PathBuf::from(DEFAULT_DB_FILE),
            csv_path: PathBuf::from(CSV_FILE),
            pdf_path: PathBuf::from(PDF_FILE),
            verbose: false,
        }
    }
}

impl Settings {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Settings {
            verbose: m.get_flag("verbose"),
            ..Settings::default()
        }
    }
}
