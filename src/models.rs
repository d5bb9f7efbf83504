// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub amount: f64, // SQLite REAL
    pub category: String,
    pub description: Option<String>,
    pub date: NaiveDateTime, // stamped at insert, YYYY-MM-DD HH:MM:SS
}

/// An expense before the store has assigned it an id.
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub amount: f64, // SQLite REAL
    pub category: String,
    pub description: String,
    pub date: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}
