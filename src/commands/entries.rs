// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{EntryKind, LedgerEntry};
use crate::store::Store;
use crate::utils::{fmt_money, maybe_print_json, month_start, parse_date, parse_decimal, pretty_table};
use anyhow::Result;
use serde::Serialize;

pub fn handle_expense(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    if let Some(("add", sub)) = m.subcommand() {
        add(store, sub, EntryKind::Expense)?;
    }
    Ok(())
}

pub fn handle_credit(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    if let Some(("add", sub)) = m.subcommand() {
        add(store, sub, EntryKind::Credit)?;
    }
    Ok(())
}

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(store, sub)?,
        Some(("rm", sub)) => rm(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &mut Store, sub: &clap::ArgMatches, kind: EntryKind) -> Result<()> {
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => chrono::Utc::now().date_naive(),
    };
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    // Only expense commands define a category arg.
    let category = match kind {
        EntryKind::Expense => sub.get_one::<String>("category").map(|s| s.as_str()),
        EntryKind::Credit => None,
    };
    let notes = sub.get_one::<String>("notes").map(|s| s.as_str());

    let id = store.add_entry(date, kind, amount, category, notes)?;
    match kind {
        EntryKind::Expense => println!(
            "Recorded expense {} ({}) on {} [id {}]",
            fmt_money(&amount),
            category.unwrap_or_default(),
            date,
            id
        ),
        EntryKind::Credit => println!(
            "Recorded credit {} on {} [id {}]",
            fmt_money(&amount),
            date,
            id
        ),
    }
    Ok(())
}

fn rm(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    if store.delete_entry(id)? {
        println!("Deleted entry {}", id);
    } else {
        println!("No entry with id {}", id);
    }
    Ok(())
}

#[derive(Serialize)]
pub struct EntryRow {
    pub id: i64,
    pub date: String,
    pub kind: String,
    pub category: String,
    pub amount: String,
    pub notes: String,
}

fn list(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(store, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.date.clone(),
                    r.kind.clone(),
                    r.category.clone(),
                    r.amount.clone(),
                    r.notes.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Date", "Kind", "Category", "Amount", "Notes"], rows)
        );
    }
    Ok(())
}

/// Entries in the requested range, newest first. Without an explicit range
/// this covers the current calendar month up to today.
pub fn query_rows(store: &mut Store, sub: &clap::ArgMatches) -> Result<Vec<EntryRow>> {
    let today = chrono::Utc::now().date_naive();
    let from = match sub.get_one::<String>("from") {
        Some(s) => parse_date(s)?,
        None => month_start(today),
    };
    let to = match sub.get_one::<String>("to") {
        Some(s) => parse_date(s)?,
        None => today,
    };

    let snap = store.snapshot()?;
    let mut matched: Vec<&LedgerEntry> = snap
        .entries
        .iter()
        .filter(|e| e.date >= from && e.date <= to)
        .collect();
    matched.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));

    Ok(matched
        .into_iter()
        .map(|e| EntryRow {
            id: e.id,
            date: e.date.to_string(),
            kind: e.kind.as_str().to_string(),
            category: e.category.clone().unwrap_or_default(),
            amount: fmt_money(&e.amount),
            notes: e.notes.clone().unwrap_or_default(),
        })
        .collect())
}
