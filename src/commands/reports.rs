// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::engine;
use crate::models::LedgerEntry;
use crate::store::Store;
use crate::utils::{fmt_money, maybe_print_json, parse_date, pretty_table};
use anyhow::Result;
use serde::Serialize;

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(store, sub)?,
        Some(("by-category", sub)) => by_category(store, sub)?,
        Some(("by-day", sub)) => by_day(store, sub)?,
        Some(("by-month", sub)) => by_month(store, sub)?,
        _ => {}
    }
    Ok(())
}

/// Optional `--from`/`--to` filter, applied before any grouping. Reports
/// cover the full history when no range is given.
fn filtered(entries: &[LedgerEntry], sub: &clap::ArgMatches) -> Result<Vec<LedgerEntry>> {
    let from = sub
        .get_one::<String>("from")
        .map(|s| parse_date(s))
        .transpose()?;
    let to = sub
        .get_one::<String>("to")
        .map(|s| parse_date(s))
        .transpose()?;
    Ok(entries
        .iter()
        .filter(|e| from.is_none_or(|f| e.date >= f) && to.is_none_or(|t| e.date <= t))
        .cloned()
        .collect())
}

#[derive(Serialize)]
struct Summary {
    total_spent: String,
    today_spent: String,
    avg_7d: String,
    avg_30d: String,
    top_category: Option<String>,
}

fn summary(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let today = chrono::Utc::now().date_naive();
    let snap = store.snapshot()?;

    let total: rust_decimal::Decimal = engine::by_category(&snap.entries)
        .into_iter()
        .map(|(_, amt)| amt)
        .sum();
    let s = Summary {
        total_spent: fmt_money(&total),
        today_spent: fmt_money(&engine::today_spent(&snap.entries, today)),
        avg_7d: fmt_money(&engine::trailing_average(&snap.entries, today, 7)),
        avg_30d: fmt_money(&engine::trailing_average(&snap.entries, today, 30)),
        top_category: engine::top_category(&snap.entries).map(|(c, _)| c),
    };
    if !maybe_print_json(json_flag, jsonl_flag, &s)? {
        let rows = vec![
            vec!["Total spent".into(), s.total_spent.clone()],
            vec!["Spent today".into(), s.today_spent.clone()],
            vec!["Avg daily (7d)".into(), s.avg_7d.clone()],
            vec!["Avg daily (30d)".into(), s.avg_30d.clone()],
            vec![
                "Top category".into(),
                s.top_category.clone().unwrap_or_else(|| "(none)".into()),
            ],
        ];
        println!("{}", pretty_table(&["Metric", "Value"], rows));
    }
    Ok(())
}

fn by_category(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let entries = filtered(&store.snapshot()?.entries, sub)?;
    let data: Vec<Vec<String>> = engine::by_category(&entries)
        .into_iter()
        .map(|(cat, amt)| vec![cat, fmt_money(&amt)])
        .collect();
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!("{}", pretty_table(&["Category", "Spent"], data));
    }
    Ok(())
}

fn by_day(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let entries = filtered(&store.snapshot()?.entries, sub)?;
    let data: Vec<Vec<String>> = engine::by_day(&entries)
        .into_iter()
        .map(|(d, amt)| vec![d.to_string(), fmt_money(&amt)])
        .collect();
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!("{}", pretty_table(&["Date", "Total"], data));
    }
    Ok(())
}

fn by_month(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let snap = store.snapshot()?;
    let data: Vec<Vec<String>> = engine::by_month(&snap.entries)
        .into_iter()
        .map(|(m, amt)| vec![m, fmt_money(&amt)])
        .collect();
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!("{}", pretty_table(&["Month", "Total"], data));
    }
    Ok(())
}
