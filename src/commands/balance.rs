// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::engine;
use crate::store::Store;
use crate::utils::{fmt_money, maybe_print_json, parse_date, parse_decimal};
use anyhow::Result;
use serde::Serialize;

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(store, sub)?,
        Some(("show", sub)) => show(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn set(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => chrono::Utc::now().date_naive(),
    };
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    store.set_balance(date, amount)?;
    println!("Balance asserted at {} from {}", fmt_money(&amount), date);
    Ok(())
}

#[derive(Serialize)]
struct BalanceRow {
    balance: String,
    overridden: bool,
}

fn show(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let override_balance = match sub.get_one::<String>("override") {
        Some(s) => Some(parse_decimal(s)?),
        None => None,
    };
    let snap = store.snapshot()?;
    let balance = engine::compute_balance(&snap.entries, &snap.assertions, override_balance);
    let row = BalanceRow {
        balance: fmt_money(&balance),
        overridden: override_balance.is_some(),
    };
    if !maybe_print_json(json_flag, jsonl_flag, &row)? {
        if row.overridden {
            println!("Balance: {} (override)", row.balance);
        } else {
            println!("Balance: {}", row.balance);
        }
    }
    Ok(())
}
