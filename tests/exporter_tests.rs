// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rusqlite::Connection;
use spendbook::models::EntryKind;
use spendbook::store::Store;
use spendbook::{cli, commands, db};

fn setup() -> Store {
    let mut conn = Connection::open_in_memory().unwrap();
    db::init_schema(&mut conn).unwrap();
    let mut store = Store::from_connection(conn);
    store
        .add_entry(
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            EntryKind::Expense,
            "200".parse().unwrap(),
            Some("Food"),
            Some("lunches"),
        )
        .unwrap();
    store
        .add_entry(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            EntryKind::Credit,
            "1000".parse().unwrap(),
            None,
            None,
        )
        .unwrap();
    store
}

fn run_export(store: &mut Store, args: &[&str]) {
    let matches = cli::build_cli().get_matches_from(args);
    if let Some(("export", sub)) = matches.subcommand() {
        commands::exporter::handle(store, sub).unwrap();
    } else {
        panic!("no export subcommand");
    }
}

#[test]
fn csv_export_column_order_and_date_sort() {
    let mut store = setup();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("entries.csv");
    run_export(
        &mut store,
        &[
            "spendbook",
            "export",
            "entries",
            "--format",
            "csv",
            "--out",
            out.to_str().unwrap(),
        ],
    );

    let text = std::fs::read_to_string(&out).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next().unwrap(), "id,date,kind,category,amount,notes");
    // Date order, not insertion order: the credit was inserted second but
    // dated earlier.
    let first = lines.next().unwrap();
    assert!(first.contains("2024-01-01"));
    assert!(first.contains("credit"));
    let second = lines.next().unwrap();
    assert!(second.contains("2024-01-05"));
    assert!(second.contains("Food"));
    assert!(second.contains("200.00"));
    assert!(lines.next().is_none());
}

#[test]
fn json_export_round_trips_fields() {
    let mut store = setup();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("entries.json");
    run_export(
        &mut store,
        &[
            "spendbook",
            "export",
            "entries",
            "--format",
            "json",
            "--out",
            out.to_str().unwrap(),
        ],
    );

    let text = std::fs::read_to_string(&out).unwrap();
    let items: serde_json::Value = serde_json::from_str(&text).unwrap();
    let arr = items.as_array().unwrap();
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["kind"], "credit");
    assert_eq!(arr[1]["category"], "Food");
    assert_eq!(arr[1]["amount"], "200.00");
    assert_eq!(arr[1]["notes"], "lunches");
}
