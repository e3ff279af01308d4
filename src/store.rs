// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Owned store handle over the SQLite database.
//!
//! Reads go through a cached, fully-materialized [`Snapshot`]; every
//! mutation invalidates the cache before returning, so a stale balance
//! after a write cannot happen. Each mutation commits its row and its
//! action-log record in one transaction: both land or neither does.

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{params, Connection};
use rust_decimal::Decimal;

use crate::db;
use crate::error::ValidationError;
use crate::models::{
    is_known_category, ActionKind, ActionLogEntry, BalanceAssertion, EntryKind, LedgerEntry,
};
use crate::utils::fmt_money;

/// Point-in-time materialization of the ledger and its balance assertions.
/// The engine functions take this by reference and never see the database.
#[derive(Debug, Default)]
pub struct Snapshot {
    pub entries: Vec<LedgerEntry>,
    pub assertions: Vec<BalanceAssertion>,
}

pub struct Store {
    conn: Connection,
    snapshot: Option<Snapshot>,
}

impl Store {
    pub fn open() -> Result<Store> {
        Ok(Store {
            conn: db::open_or_init()?,
            snapshot: None,
        })
    }

    /// Wrap an existing connection; the schema must already exist.
    pub fn from_connection(conn: Connection) -> Store {
        Store {
            conn,
            snapshot: None,
        }
    }

    /// Current snapshot, loaded from SQLite at most once per mutation cycle.
    pub fn snapshot(&mut self) -> Result<&Snapshot> {
        if self.snapshot.is_none() {
            self.snapshot = Some(load_snapshot(&self.conn)?);
        }
        Ok(self.snapshot.as_ref().unwrap())
    }

    fn invalidate(&mut self) {
        self.snapshot = None;
    }

    /// Validated insert. No row is written when validation fails.
    pub fn add_entry(
        &mut self,
        date: NaiveDate,
        kind: EntryKind,
        amount: Decimal,
        category: Option<&str>,
        notes: Option<&str>,
    ) -> Result<i64> {
        validate_entry(kind, amount, category)?;
        let (action, details) = match kind {
            EntryKind::Expense => (
                ActionKind::AddExpense,
                format!(
                    "{} {} on {}",
                    fmt_money(&amount),
                    category.unwrap_or_default(),
                    date
                ),
            ),
            EntryKind::Credit => (
                ActionKind::AddCredit,
                format!("{} on {}", fmt_money(&amount), date),
            ),
        };
        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO ledger(date, kind, amount, category, notes) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                date.to_string(),
                kind.as_str(),
                amount.to_string(),
                category,
                notes
            ],
        )?;
        let id = tx.last_insert_rowid();
        append_log(&tx, action, &details)?;
        tx.commit()?;
        self.invalidate();
        Ok(id)
    }

    /// Idempotent delete: a missing id is a no-op and appends no log row.
    pub fn delete_entry(&mut self, id: i64) -> Result<bool> {
        let tx = self.conn.transaction()?;
        let removed = tx.execute("DELETE FROM ledger WHERE id=?1", params![id])?;
        if removed == 0 {
            return Ok(false);
        }
        append_log(&tx, ActionKind::DeleteEntry, &format!("entry id {}", id))?;
        tx.commit()?;
        self.invalidate();
        Ok(true)
    }

    /// Record a balance assertion. Earlier assertions stay in place; the
    /// newest insertion becomes the anchor.
    pub fn set_balance(&mut self, date: NaiveDate, balance: Decimal) -> Result<i64> {
        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO balance_assertions(date, balance) VALUES (?1, ?2)",
            params![date.to_string(), balance.to_string()],
        )?;
        let id = tx.last_insert_rowid();
        append_log(
            &tx,
            ActionKind::SetBalance,
            &format!("{} from {}", fmt_money(&balance), date),
        )?;
        tx.commit()?;
        self.invalidate();
        Ok(id)
    }

    /// Clear the ledger and balance assertions. The action log is cleared
    /// too unless `keep_log`; when kept, the reset itself is logged.
    pub fn reset(&mut self, keep_log: bool) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM ledger", [])?;
        tx.execute("DELETE FROM balance_assertions", [])?;
        if keep_log {
            append_log(
                &tx,
                ActionKind::Reset,
                "cleared ledger and balance assertions",
            )?;
        } else {
            tx.execute("DELETE FROM action_log", [])?;
        }
        tx.commit()?;
        self.invalidate();
        Ok(())
    }

    /// Action-log rows with timestamp dates in `from..=to`, newest first.
    pub fn log_range(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<ActionLogEntry>> {
        let mut sql =
            String::from("SELECT id, timestamp, action, details FROM action_log WHERE 1=1");
        let mut params_vec: Vec<String> = Vec::new();
        if let Some(f) = from {
            sql.push_str(" AND date(timestamp) >= ?");
            params_vec.push(f.to_string());
        }
        if let Some(t) = to {
            sql.push_str(" AND date(timestamp) <= ?");
            params_vec.push(t.to_string());
        }
        sql.push_str(" ORDER BY timestamp DESC, id DESC");

        let mut stmt = self.conn.prepare(&sql)?;
        let params: Vec<&dyn rusqlite::ToSql> = params_vec
            .iter()
            .map(|s| s as &dyn rusqlite::ToSql)
            .collect();
        let mut rows = stmt.query(rusqlite::params_from_iter(params))?;
        let mut out = Vec::new();
        while let Some(r) = rows.next()? {
            let id: i64 = r.get(0)?;
            let ts: String = r.get(1)?;
            let action: String = r.get(2)?;
            let details: String = r.get(3)?;
            let timestamp = NaiveDateTime::parse_from_str(&ts, "%Y-%m-%d %H:%M:%S")
                .with_context(|| format!("Invalid timestamp '{}' in action_log", ts))?;
            out.push(ActionLogEntry {
                id,
                timestamp,
                action,
                details,
            });
        }
        Ok(out)
    }
}

/// Boundary validation per the entry invariants: positive amount, category
/// present iff expense, category drawn from the fixed list.
pub fn validate_entry(
    kind: EntryKind,
    amount: Decimal,
    category: Option<&str>,
) -> Result<(), ValidationError> {
    if amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount(amount.to_string()));
    }
    match (kind, category) {
        (EntryKind::Expense, None) => Err(ValidationError::MissingCategory),
        (EntryKind::Expense, Some(c)) if !is_known_category(c) => {
            Err(ValidationError::UnknownCategory(c.to_string()))
        }
        (EntryKind::Credit, Some(_)) => Err(ValidationError::UnexpectedCategory),
        _ => Ok(()),
    }
}

fn append_log(tx: &rusqlite::Transaction, action: ActionKind, details: &str) -> Result<()> {
    tx.execute(
        "INSERT INTO action_log(action, details) VALUES (?1, ?2)",
        params![action.as_str(), details],
    )?;
    Ok(())
}

fn load_snapshot(conn: &Connection) -> Result<Snapshot> {
    let mut stmt =
        conn.prepare("SELECT id, date, kind, amount, category, notes FROM ledger ORDER BY date, id")?;
    let mut rows = stmt.query([])?;
    let mut entries = Vec::new();
    while let Some(r) = rows.next()? {
        let id: i64 = r.get(0)?;
        let date_s: String = r.get(1)?;
        let kind_s: String = r.get(2)?;
        let amount_s: String = r.get(3)?;
        let category: Option<String> = r.get(4)?;
        let notes: Option<String> = r.get(5)?;
        let date = NaiveDate::parse_from_str(&date_s, "%Y-%m-%d")
            .with_context(|| format!("Invalid date '{}' in ledger row {}", date_s, id))?;
        let kind = EntryKind::parse(&kind_s)
            .with_context(|| format!("Invalid kind '{}' in ledger row {}", kind_s, id))?;
        let amount = amount_s
            .parse::<Decimal>()
            .with_context(|| format!("Invalid amount '{}' in ledger row {}", amount_s, id))?;
        entries.push(LedgerEntry {
            id,
            date,
            kind,
            amount,
            category,
            notes,
        });
    }

    let mut stmt = conn.prepare("SELECT id, date, balance FROM balance_assertions ORDER BY id")?;
    let mut rows = stmt.query([])?;
    let mut assertions = Vec::new();
    while let Some(r) = rows.next()? {
        let id: i64 = r.get(0)?;
        let date_s: String = r.get(1)?;
        let balance_s: String = r.get(2)?;
        let date = NaiveDate::parse_from_str(&date_s, "%Y-%m-%d")
            .with_context(|| format!("Invalid date '{}' in balance assertion {}", date_s, id))?;
        let balance = balance_s
            .parse::<Decimal>()
            .with_context(|| format!("Invalid balance '{}' in assertion {}", balance_s, id))?;
        assertions.push(BalanceAssertion { id, date, balance });
    }

    Ok(Snapshot {
        entries,
        assertions,
    })
}
