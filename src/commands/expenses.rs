// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{GastosError, GastosResult};
use crate::models::{Expense, NewExpense};
use crate::utils::{fmt_money, DATE_FORMAT};
use chrono::Local;
use rusqlite::{params, Connection, Row};
use std::fmt;
use tracing::debug;

const SELECT_COLUMNS: &str = "SELECT id, amount, category, description, date FROM expenses";

fn expense_from_row(r: &Row<'_>) -> rusqlite::Result<Expense> {
    Ok(Expense {
        id: r.get(0)?,
        amount: r.get(1)?,
        category: r.get(2)?,
        description: r.get(3)?,
        date: r.get(4)?,
    })
}

pub fn insert_expense(conn: &Connection, e: &NewExpense) -> GastosResult<i64> {
    conn.execute(
        "INSERT INTO expenses(amount, category, description, date) VALUES (?1, ?2, ?3, ?4)",
        params![
            e.amount,
            e.category,
            e.description,
            e.date.format(DATE_FORMAT).to_string()
        ],
    )?;
    let id = conn.last_insert_rowid();
    debug!(id, category = %e.category, "inserted expense");
    Ok(id)
}

pub fn select_all(conn: &Connection) -> GastosResult<Vec<Expense>> {
    let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} ORDER BY id"))?;
    let rows = stmt.query_map([], expense_from_row)?;
    let mut data = Vec::new();
    for row in rows {
        data.push(row?);
    }
    Ok(data)
}

pub fn select_by_category(conn: &Connection, category: &str) -> GastosResult<Vec<Expense>> {
    let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} WHERE category=?1 ORDER BY id"))?;
    let rows = stmt.query_map(params![category], expense_from_row)?;
    let mut data = Vec::new();
    for row in rows {
        data.push(row?);
    }
    Ok(data)
}

pub fn delete_by_id(conn: &Connection, id: i64) -> GastosResult<usize> {
    let n = conn.execute("DELETE FROM expenses WHERE id=?1", params![id])?;
    debug!(id, removed = n, "delete expense");
    Ok(n)
}

/// Records a new expense stamped with the current local time.
pub fn add_expense(
    conn: &Connection,
    amount: f64,
    category: &str,
    description: &str,
) -> GastosResult<i64> {
    if category.is_empty() {
        return Err(GastosError::InputFormat(
            "Erro: A categoria não pode ser vazia.".into(),
        ));
    }
    let date = Local::now().naive_local();
    insert_expense(
        conn,
        &NewExpense {
            amount,
            category: category.to_string(),
            description: description.to_string(),
            date,
        },
    )
}

/// Outcome of a listing: either a heading with one line per record, or the
/// message shown when nothing matched.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    Records { heading: String, lines: Vec<String> },
    NoRecords(String),
}

impl Listing {
    pub fn is_empty(&self) -> bool {
        matches!(self, Listing::NoRecords(_))
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Listing::Records { heading, lines } => {
                write!(f, "\n{}", heading)?;
                for line in lines {
                    write!(f, "\n{}", line)?;
                }
                Ok(())
            }
            Listing::NoRecords(msg) => write!(f, "\n{}", msg),
        }
    }
}

fn describe(e: &Expense, with_category: bool) -> String {
    let description = e.description.as_deref().unwrap_or_default();
    let date = e.date.format(DATE_FORMAT);
    if with_category {
        format!(
            "ID: {}, Valor: {}, Categoria: {}, Descrição: {}, Data: {}",
            e.id,
            fmt_money(e.amount),
            e.category,
            description,
            date
        )
    } else {
        format!(
            "ID: {}, Valor: {}, Descrição: {}, Data: {}",
            e.id,
            fmt_money(e.amount),
            description,
            date
        )
    }
}

pub fn list_expenses(conn: &Connection) -> GastosResult<Listing> {
    let data = select_all(conn)?;
    if data.is_empty() {
        return Ok(Listing::NoRecords("Nenhuma despesa registrada.".into()));
    }
    Ok(Listing::Records {
        heading: "--- Lista de Despesas ---".into(),
        lines: data.iter().map(|e| describe(e, true)).collect(),
    })
}

pub fn list_expenses_by_category(conn: &Connection, category: &str) -> GastosResult<Listing> {
    let data = select_by_category(conn, category)?;
    if data.is_empty() {
        return Ok(Listing::NoRecords(format!(
            "Nenhuma despesa encontrada para a categoria '{}'.",
            category
        )));
    }
    Ok(Listing::Records {
        heading: format!("--- Despesas na Categoria '{}' ---", category),
        lines: data.iter().map(|e| describe(e, false)).collect(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed(i64),
    NotFound(i64),
}

impl fmt::Display for RemoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoveOutcome::Removed(id) => write!(f, "Despesa com ID {} removida com sucesso.", id),
            RemoveOutcome::NotFound(id) => write!(f, "Nenhuma despesa encontrada com ID {}.", id),
        }
    }
}

pub fn remove_expense(conn: &Connection, id: i64) -> GastosResult<RemoveOutcome> {
    if delete_by_id(conn, id)? > 0 {
        Ok(RemoveOutcome::Removed(id))
    } else {
        Ok(RemoveOutcome::NotFound(id))
    }
}
