// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::Store;
use crate::utils::fmt_money;
use anyhow::Result;
use serde_json::json;

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("entries", sub)) => export_entries(store, sub),
        _ => Ok(()),
    }
}

fn export_entries(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    // Snapshot order is date then id, which is also the export order.
    let snap = store.snapshot()?;

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["id", "date", "kind", "category", "amount", "notes"])?;
            for e in &snap.entries {
                wtr.write_record([
                    e.id.to_string(),
                    e.date.to_string(),
                    e.kind.as_str().to_string(),
                    e.category.clone().unwrap_or_default(),
                    fmt_money(&e.amount),
                    e.notes.clone().unwrap_or_default(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let mut items = Vec::new();
            for e in &snap.entries {
                items.push(json!({
                    "id": e.id,
                    "date": e.date.to_string(),
                    "kind": e.kind.as_str(),
                    "category": e.category,
                    "amount": fmt_money(&e.amount),
                    "notes": e.notes
                }));
            }
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
            return Ok(());
        }
    }
    println!("Exported {} entries to {}", snap.entries.len(), out);
    Ok(())
}
