// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Fault taxonomy shared by the store, the exporters and the shell.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GastosError {
    /// Non-numeric or otherwise malformed user input. Never reaches the store.
    #[error("{0}")]
    InputFormat(String),

    /// The backing file could not be opened or a statement failed.
    #[error("Erro no banco de dados: {0}")]
    Storage(#[from] rusqlite::Error),

    /// An export destination could not be written.
    #[error("Erro ao exportar para {}: {reason}", path.display())]
    Export { path: PathBuf, reason: String },
}

impl GastosError {
    pub fn export(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        GastosError::Export {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

pub type GastosResult<T> = Result<T, GastosError>;
