// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use spendbook::{cli, commands, db, store::Store};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let mut store = Store::open()?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", db::db_path()?.display());
        }
        Some(("expense", sub)) => commands::entries::handle_expense(&mut store, sub)?,
        Some(("credit", sub)) => commands::entries::handle_credit(&mut store, sub)?,
        Some(("entry", sub)) => commands::entries::handle(&mut store, sub)?,
        Some(("balance", sub)) => commands::balance::handle(&mut store, sub)?,
        Some(("report", sub)) => commands::reports::handle(&mut store, sub)?,
        Some(("log", sub)) => commands::logview::handle(&mut store, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&mut store, sub)?,
        Some(("reset", sub)) => commands::resetter::handle(&mut store, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
