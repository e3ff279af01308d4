// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use spendbook::engine;
use spendbook::models::{BalanceAssertion, EntryKind, LedgerEntry};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn expense(id: i64, date: &str, amount: &str, category: &str) -> LedgerEntry {
    LedgerEntry {
        id,
        date: d(date),
        kind: EntryKind::Expense,
        amount: dec(amount),
        category: Some(category.to_string()),
        notes: None,
    }
}

fn credit(id: i64, date: &str, amount: &str) -> LedgerEntry {
    LedgerEntry {
        id,
        date: d(date),
        kind: EntryKind::Credit,
        amount: dec(amount),
        category: None,
        notes: None,
    }
}

fn sample() -> Vec<LedgerEntry> {
    vec![
        credit(1, "2024-01-01", "1000"),
        expense(2, "2024-01-05", "200", "Food"),
        expense(3, "2024-01-10", "50", "Food"),
    ]
}

#[test]
fn balance_without_assertion_counts_all_history() {
    let entries = sample();
    let bal = engine::compute_balance(&entries, &[], None);
    assert_eq!(bal, dec("750"));
}

#[test]
fn balance_is_insertion_order_invariant() {
    let mut entries = sample();
    let expected = engine::compute_balance(&entries, &[], None);
    entries.reverse();
    assert_eq!(engine::compute_balance(&entries, &[], None), expected);
    entries.swap(0, 1);
    assert_eq!(engine::compute_balance(&entries, &[], None), expected);
}

#[test]
fn anchor_excludes_earlier_entries() {
    let mut entries = sample();
    entries.push(credit(4, "2024-02-02", "100"));
    let assertions = vec![BalanceAssertion {
        id: 1,
        date: d("2024-02-01"),
        balance: dec("5000"),
    }];
    let bal = engine::compute_balance(&entries, &assertions, None);
    assert_eq!(bal, dec("5100"));
}

#[test]
fn latest_inserted_assertion_wins_even_when_backdated() {
    let entries = vec![
        credit(1, "2024-01-02", "10"),
        expense(2, "2024-03-01", "3", "Food"),
    ];
    // Second assertion is backdated but inserted later, so it is the anchor.
    let assertions = vec![
        BalanceAssertion {
            id: 1,
            date: d("2024-02-01"),
            balance: dec("100"),
        },
        BalanceAssertion {
            id: 2,
            date: d("2024-01-01"),
            balance: dec("500"),
        },
    ];
    let bal = engine::compute_balance(&entries, &assertions, None);
    assert_eq!(bal, dec("500") + dec("10") - dec("3"));
}

#[test]
fn override_short_circuits_computation() {
    let entries = sample();
    let bal = engine::compute_balance(&entries, &[], Some(dec("42.42")));
    assert_eq!(bal, dec("42.42"));
}

#[test]
fn empty_history_yields_zero_everywhere() {
    let today = d("2024-06-01");
    assert_eq!(engine::compute_balance(&[], &[], None), Decimal::ZERO);
    assert_eq!(engine::today_spent(&[], today), Decimal::ZERO);
    assert_eq!(
        engine::period_spent(&[], d("2024-01-01"), today),
        Decimal::ZERO
    );
    assert_eq!(engine::trailing_average(&[], today, 7), Decimal::ZERO);
    assert!(engine::by_day(&[]).is_empty());
    assert!(engine::by_month(&[]).is_empty());
    assert!(engine::by_category(&[]).is_empty());
    assert_eq!(engine::top_category(&[]), None);
}

#[test]
fn today_spent_ignores_credits_and_other_days() {
    let entries = vec![
        expense(1, "2024-01-05", "30", "Food"),
        expense(2, "2024-01-05", "20", "Shopping"),
        expense(3, "2024-01-06", "99", "Food"),
        credit(4, "2024-01-05", "500"),
    ];
    assert_eq!(engine::today_spent(&entries, d("2024-01-05")), dec("50"));
}

#[test]
fn period_spent_is_inclusive_both_ends() {
    let entries = vec![
        expense(1, "2024-01-01", "1", "Food"),
        expense(2, "2024-01-02", "2", "Food"),
        expense(3, "2024-01-03", "4", "Food"),
    ];
    assert_eq!(
        engine::period_spent(&entries, d("2024-01-01"), d("2024-01-03")),
        dec("7")
    );
    assert_eq!(
        engine::period_spent(&entries, d("2024-01-02"), d("2024-01-02")),
        dec("2")
    );
}

#[test]
fn trailing_average_divides_by_window_length() {
    // 140 spent across two of the seven days; sparse days still count.
    let entries = vec![
        expense(1, "2024-01-08", "90", "Food"),
        expense(2, "2024-01-10", "50", "Shopping"),
    ];
    let avg = engine::trailing_average(&entries, d("2024-01-10"), 7);
    assert_eq!(avg, dec("20"));
}

#[test]
fn trailing_window_excludes_day_before_window() {
    let entries = vec![
        expense(1, "2024-01-03", "70", "Food"), // 7 days before the 10th: excluded
        expense(2, "2024-01-04", "70", "Food"), // first day in window
    ];
    let avg = engine::trailing_average(&entries, d("2024-01-10"), 7);
    assert_eq!(avg, dec("10"));
}

#[test]
fn by_day_sums_ascending() {
    let days = engine::by_day(&sample());
    assert_eq!(
        days,
        vec![
            (d("2024-01-01"), dec("1000")),
            (d("2024-01-05"), dec("200")),
            (d("2024-01-10"), dec("50")),
        ]
    );
}

#[test]
fn by_month_groups_calendar_months() {
    let mut entries = sample();
    entries.push(expense(4, "2024-02-14", "25", "Entertainment"));
    let months = engine::by_month(&entries);
    assert_eq!(
        months,
        vec![
            ("2024-01".to_string(), dec("1250")),
            ("2024-02".to_string(), dec("25")),
        ]
    );
}

#[test]
fn by_category_sorts_desc_then_name() {
    let entries = vec![
        expense(1, "2024-01-01", "30", "Shopping"),
        expense(2, "2024-01-02", "30", "Food"),
        expense(3, "2024-01-03", "100", "Learning"),
        credit(4, "2024-01-04", "999"),
    ];
    let cats = engine::by_category(&entries);
    assert_eq!(
        cats,
        vec![
            ("Learning".to_string(), dec("100")),
            ("Food".to_string(), dec("30")),
            ("Shopping".to_string(), dec("30")),
        ]
    );
}

#[test]
fn by_category_totals_reconcile_with_period_spent() {
    let mut entries = sample();
    entries.push(expense(4, "2024-03-01", "17.25", "Miscellaneous"));
    let cat_total: Decimal = engine::by_category(&entries)
        .into_iter()
        .map(|(_, amt)| amt)
        .sum();
    let spent = engine::period_spent(&entries, NaiveDate::MIN, NaiveDate::MAX);
    assert_eq!(cat_total, spent);
}

#[test]
fn top_category_is_argmax() {
    let entries = sample();
    assert_eq!(
        engine::top_category(&entries),
        Some(("Food".to_string(), dec("250")))
    );
}
