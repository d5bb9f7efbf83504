// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{GastosError, GastosResult};
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Table};

/// Timestamp layout used for the `date` column.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parses a user-typed amount. Amounts are stored as SQLite REAL, so any finite
/// `f64` is accepted, sign included.
pub fn parse_amount(s: &str) -> GastosResult<f64> {
    let v = s.trim().parse::<f64>().map_err(|_| {
        GastosError::InputFormat("Erro: O valor da despesa deve ser um número.".into())
    })?;
    if v.is_nan() {
        return Err(GastosError::InputFormat(
            "Erro: O valor da despesa deve ser um número.".into(),
        ));
    }
    if v.is_infinite() {
        return Err(GastosError::InputFormat(
            "Erro: O valor da despesa está fora do intervalo suportado.".into(),
        ));
    }
    Ok(v)
}

pub fn parse_id(s: &str) -> GastosResult<i64> {
    s.trim()
        .parse::<i64>()
        .map_err(|_| GastosError::InputFormat("Erro: O ID deve ser um número inteiro.".into()))
}

/// Two decimals, rounded to nearest.
pub fn fmt_total(v: f64) -> String {
    format!("{:.2}", v)
}

pub fn fmt_money(v: f64) -> String {
    format!("R${}", fmt_total(v))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    if let Some(col) = t.column_mut(headers.len().saturating_sub(1)) {
        col.set_cell_alignment(CellAlignment::Right);
    }
    t
}
