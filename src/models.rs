// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fixed category list. Entry validation rejects anything not listed here.
pub const CATEGORIES: [&str; 7] = [
    "Food",
    "Learning",
    "Investment",
    "Entertainment",
    "Shopping",
    "Loans And Family",
    "Miscellaneous",
];

pub fn is_known_category(name: &str) -> bool {
    CATEGORIES.contains(&name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    Expense,
    Credit,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Expense => "expense",
            EntryKind::Credit => "credit",
        }
    }

    pub fn parse(s: &str) -> Option<EntryKind> {
        match s {
            "expense" => Some(EntryKind::Expense),
            "credit" => Some(EntryKind::Credit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: i64,
    pub date: NaiveDate,
    pub kind: EntryKind,
    pub amount: Decimal,
    /// Present iff kind is Expense.
    pub category: Option<String>,
    pub notes: Option<String>,
}

/// Operator-asserted absolute balance, effective from `date` inclusive.
/// Append-only; the row with the largest id is the authoritative anchor
/// (insertion order, not date order — assertions may be backdated).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceAssertion {
    pub id: i64,
    pub date: NaiveDate,
    pub balance: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    AddExpense,
    AddCredit,
    SetBalance,
    DeleteEntry,
    Reset,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::AddExpense => "add_expense",
            ActionKind::AddCredit => "add_credit",
            ActionKind::SetBalance => "set_balance",
            ActionKind::DeleteEntry => "delete_entry",
            ActionKind::Reset => "reset",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionLogEntry {
    pub id: i64,
    pub timestamp: NaiveDateTime,
    pub action: String,
    pub details: String,
}
