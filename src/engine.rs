// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Balance and aggregation engine: pure functions over a ledger snapshot.
//! Nothing here touches the database or fails on well-formed input; empty
//! history yields zero sums and empty tables.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{BalanceAssertion, EntryKind, LedgerEntry};
use crate::utils::month_key;

/// Current account balance.
///
/// The anchor is the most recently *inserted* balance assertion (largest id,
/// not latest date — assertions may be backdated). Without any assertion the
/// anchor is balance 0 at the epoch, so all recorded history counts. Credits
/// and expenses dated on or after the anchor date adjust the anchor balance.
///
/// `override_balance` short-circuits the computation; it is resolved by the
/// caller, never stored.
pub fn compute_balance(
    entries: &[LedgerEntry],
    assertions: &[BalanceAssertion],
    override_balance: Option<Decimal>,
) -> Decimal {
    if let Some(v) = override_balance {
        return v;
    }
    let anchor = assertions.iter().max_by_key(|a| a.id);
    let (anchor_date, anchor_balance) = match anchor {
        Some(a) => (a.date, a.balance),
        None => (NaiveDate::MIN, Decimal::ZERO),
    };
    let mut balance = anchor_balance;
    for e in entries.iter().filter(|e| e.date >= anchor_date) {
        match e.kind {
            EntryKind::Credit => balance += e.amount,
            EntryKind::Expense => balance -= e.amount,
        }
    }
    balance
}

/// Expense total for a single day.
pub fn today_spent(entries: &[LedgerEntry], today: NaiveDate) -> Decimal {
    period_spent(entries, today, today)
}

/// Expense total over `from..=to`, inclusive both ends.
pub fn period_spent(entries: &[LedgerEntry], from: NaiveDate, to: NaiveDate) -> Decimal {
    entries
        .iter()
        .filter(|e| e.kind == EntryKind::Expense && e.date >= from && e.date <= to)
        .map(|e| e.amount)
        .sum()
}

/// Mean daily spend over the trailing window ending at `today`.
///
/// The denominator is the fixed window length, not the count of active days:
/// sparse spending dilutes the average. That smoothing is deliberate.
pub fn trailing_average(entries: &[LedgerEntry], today: NaiveDate, window_days: u64) -> Decimal {
    if window_days == 0 {
        return Decimal::ZERO;
    }
    let from = today
        .checked_sub_days(Days::new(window_days - 1))
        .unwrap_or(NaiveDate::MIN);
    period_spent(entries, from, today) / Decimal::from(window_days)
}

/// Per-day totals (credits and expenses both contribute their magnitude),
/// ascending by date. Days with no activity do not appear.
pub fn by_day(entries: &[LedgerEntry]) -> Vec<(NaiveDate, Decimal)> {
    let mut map: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for e in entries {
        *map.entry(e.date).or_insert(Decimal::ZERO) += e.amount;
    }
    map.into_iter().collect()
}

/// Per-calendar-month totals, ascending by YYYY-MM key.
pub fn by_month(entries: &[LedgerEntry]) -> Vec<(String, Decimal)> {
    let mut map: BTreeMap<String, Decimal> = BTreeMap::new();
    for e in entries {
        *map.entry(month_key(e.date)).or_insert(Decimal::ZERO) += e.amount;
    }
    map.into_iter().collect()
}

/// Expense totals per category, descending by amount; ties break on the
/// category name ascending so the order is deterministic.
pub fn by_category(entries: &[LedgerEntry]) -> Vec<(String, Decimal)> {
    let mut map: BTreeMap<String, Decimal> = BTreeMap::new();
    for e in entries.iter().filter(|e| e.kind == EntryKind::Expense) {
        let cat = e.category.as_deref().unwrap_or("(uncategorized)");
        *map.entry(cat.to_string()).or_insert(Decimal::ZERO) += e.amount;
    }
    let mut items: Vec<(String, Decimal)> = map.into_iter().collect();
    items.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    items
}

/// Category with the largest expense total; `None` when there are no
/// expenses, so callers must guard instead of trusting a default.
pub fn top_category(entries: &[LedgerEntry]) -> Option<(String, Decimal)> {
    by_category(entries).into_iter().next()
}
