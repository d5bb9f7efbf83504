// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::GastosResult;
use crate::models::CategoryTotal;
use crate::utils::{fmt_total, pretty_table};
use comfy_table::Table;
use rusqlite::Connection;
use tracing::debug;

pub const REPORT_TITLE: &str = "Relatório de Gastos por Categoria";
pub const HEADERS: [&str; 2] = ["Categoria", "Total Gasto (R$)"];

/// Sums amounts per exact category string. Categories without records never appear.
pub fn sum_by_category(conn: &Connection) -> GastosResult<Vec<CategoryTotal>> {
    let mut stmt = conn.prepare(
        "SELECT category, SUM(amount) AS total
         FROM expenses
         GROUP BY category ORDER BY category",
    )?;
    let rows = stmt.query_map([], |r| {
        Ok(CategoryTotal {
            category: r.get(0)?,
            // SQLite yields NULL when a group sums to NaN (inf + -inf).
            total: r.get::<_, Option<f64>>(1)?.unwrap_or(f64::NAN),
        })
    })?;
    let mut data = Vec::new();
    for row in rows {
        data.push(row?);
    }
    debug!(categories = data.len(), "aggregated totals");
    Ok(data)
}

pub fn report_table(totals: &[CategoryTotal]) -> Table {
    let rows = totals
        .iter()
        .map(|t| vec![t.category.clone(), fmt_total(t.total)])
        .collect();
    pretty_table(&HEADERS, rows)
}

/// On-screen rendering of the aggregation, as printed before the export menu.
pub fn render_report(totals: &[CategoryTotal]) -> String {
    if totals.is_empty() {
        return "Nenhuma despesa registrada.".to_string();
    }
    format!("\n--- {} ---\n{}", REPORT_TITLE, report_table(totals))
}
