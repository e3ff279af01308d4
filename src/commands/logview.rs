// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::Store;
use crate::utils::{maybe_print_json, parse_date, pretty_table};
use anyhow::Result;

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    if let Some(("list", sub)) = m.subcommand() {
        list(store, sub)?;
    }
    Ok(())
}

fn list(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let from = sub
        .get_one::<String>("from")
        .map(|s| parse_date(s))
        .transpose()?;
    let to = sub
        .get_one::<String>("to")
        .map(|s| parse_date(s))
        .transpose()?;

    let entries = store.log_range(from, to)?;
    if !maybe_print_json(json_flag, jsonl_flag, &entries)? {
        let rows: Vec<Vec<String>> = entries
            .iter()
            .map(|e| {
                vec![
                    e.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
                    e.action.clone(),
                    e.details.clone(),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Timestamp", "Action", "Details"], rows));
    }
    Ok(())
}
