// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rusqlite::Connection;
use spendbook::commands::entries;
use spendbook::models::EntryKind;
use spendbook::store::Store;
use spendbook::{cli, db};

fn setup() -> Store {
    let mut conn = Connection::open_in_memory().unwrap();
    db::init_schema(&mut conn).unwrap();
    let mut store = Store::from_connection(conn);
    for (i, day) in [1, 2, 3].iter().enumerate() {
        store
            .add_entry(
                NaiveDate::from_ymd_opt(2025, 1, *day).unwrap(),
                EntryKind::Expense,
                format!("{}0", i + 1).parse().unwrap(),
                Some("Food"),
                None,
            )
            .unwrap();
    }
    store
}

fn list_matches(args: &[&str]) -> clap::ArgMatches {
    let matches = cli::build_cli().get_matches_from(args);
    if let Some(("entry", entry_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = entry_m.subcommand() {
            return list_m.clone();
        }
    }
    panic!("no entry list subcommand");
}

#[test]
fn list_range_is_inclusive_and_newest_first() {
    let mut store = setup();
    let m = list_matches(&[
        "spendbook",
        "entry",
        "list",
        "--from",
        "2025-01-01",
        "--to",
        "2025-01-02",
    ]);
    let rows = entries::query_rows(&mut store, &m).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].date, "2025-01-02");
    assert_eq!(rows[0].amount, "20.00");
    assert_eq!(rows[1].date, "2025-01-01");
}

#[test]
fn credit_add_records_entry_through_cli() {
    let mut conn = Connection::open_in_memory().unwrap();
    db::init_schema(&mut conn).unwrap();
    let mut store = Store::from_connection(conn);

    let matches = cli::build_cli().get_matches_from([
        "spendbook",
        "credit",
        "add",
        "--date",
        "2025-01-04",
        "--amount",
        "10",
    ]);
    if let Some(("credit", sub)) = matches.subcommand() {
        entries::handle_credit(&mut store, sub).unwrap();
    } else {
        panic!("no credit subcommand");
    }

    let snap = store.snapshot().unwrap();
    assert_eq!(snap.entries.len(), 1);
    assert_eq!(snap.entries[0].kind, EntryKind::Credit);
    assert_eq!(snap.entries[0].amount, "10".parse().unwrap());
    assert_eq!(snap.entries[0].category, None);
}

#[test]
fn list_defaults_to_current_month_through_today() {
    let mut conn = Connection::open_in_memory().unwrap();
    db::init_schema(&mut conn).unwrap();
    let mut store = Store::from_connection(conn);

    let today = chrono::Utc::now().date_naive();
    store
        .add_entry(today, EntryKind::Expense, "15".parse().unwrap(), Some("Food"), None)
        .unwrap();
    // Dated long before the current month: outside the default window.
    store
        .add_entry(
            NaiveDate::from_ymd_opt(2000, 1, 5).unwrap(),
            EntryKind::Expense,
            "99".parse().unwrap(),
            Some("Shopping"),
            None,
        )
        .unwrap();

    let m = list_matches(&["spendbook", "entry", "list"]);
    let rows = entries::query_rows(&mut store, &m).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].date, today.to_string());
    assert_eq!(rows[0].amount, "15.00");
}

#[test]
fn list_outside_range_is_empty_not_an_error() {
    let mut store = setup();
    let m = list_matches(&[
        "spendbook",
        "entry",
        "list",
        "--from",
        "2030-01-01",
        "--to",
        "2030-12-31",
    ]);
    let rows = entries::query_rows(&mut store, &m).unwrap();
    assert!(rows.is_empty());
}
