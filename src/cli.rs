// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

fn range_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("from")
            .long("from")
            .value_name("YYYY-MM-DD")
            .help("Start date, inclusive"),
    )
    .arg(
        Arg::new("to")
            .long("to")
            .value_name("YYYY-MM-DD")
            .help("End date, inclusive"),
    )
}

pub fn build_cli() -> Command {
    Command::new("spendbook")
        .about("Single-account expense ledger and spend reports")
        .version(clap::crate_version!())
        .subcommand_required(false)
        .subcommand(Command::new("init").about("Create the database if missing"))
        .subcommand(
            Command::new("expense")
                .about("Expense entries")
                .subcommand(
                    Command::new("add")
                        .about("Record an expense")
                        .arg(Arg::new("date").long("date").value_name("YYYY-MM-DD"))
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .required(true)
                                .help("One of the fixed category list"),
                        )
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("notes").long("notes")),
                ),
        )
        .subcommand(
            Command::new("credit").about("Credit entries").subcommand(
                Command::new("add")
                    .about("Record a credit")
                    .arg(Arg::new("date").long("date").value_name("YYYY-MM-DD"))
                    .arg(Arg::new("amount").long("amount").required(true))
                    .arg(Arg::new("notes").long("notes")),
            ),
        )
        .subcommand(
            Command::new("entry")
                .about("Browse and remove ledger entries")
                .subcommand(json_flags(range_args(
                    Command::new("list")
                        .about("List entries (defaults to the current month)"),
                )))
                .subcommand(
                    Command::new("rm")
                        .about("Delete an entry by id (no-op if absent)")
                        .arg(
                            Arg::new("id")
                                .long("id")
                                .required(true)
                                .value_parser(clap::value_parser!(i64)),
                        ),
                ),
        )
        .subcommand(
            Command::new("balance")
                .about("Account balance")
                .subcommand(
                    Command::new("set")
                        .about("Assert the true balance from a date")
                        .arg(Arg::new("date").long("date").value_name("YYYY-MM-DD"))
                        .arg(Arg::new("amount").long("amount").required(true)),
                )
                .subcommand(json_flags(
                    Command::new("show")
                        .about("Show the computed balance")
                        .arg(
                            Arg::new("override")
                                .long("override")
                                .value_name("AMOUNT")
                                .help("Display this balance instead of computing one"),
                        ),
                )),
        )
        .subcommand(
            Command::new("report")
                .about("Aggregate spend reports")
                .subcommand(json_flags(Command::new("summary").about(
                    "Total, today, trailing averages, and top category",
                )))
                .subcommand(json_flags(range_args(
                    Command::new("by-category").about("Expense totals per category"),
                )))
                .subcommand(json_flags(range_args(
                    Command::new("by-day").about("Daily totals, ascending"),
                )))
                .subcommand(json_flags(
                    Command::new("by-month").about("Monthly totals, ascending"),
                )),
        )
        .subcommand(
            Command::new("log").about("Action audit log").subcommand(json_flags(
                range_args(Command::new("list").about("List logged actions, newest first")),
            )),
        )
        .subcommand(
            Command::new("export").about("Export store contents").subcommand(
                Command::new("entries")
                    .about("Write all ledger entries to a file")
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .default_value("csv")
                            .help("csv or json"),
                    )
                    .arg(Arg::new("out").long("out").required(true)),
            ),
        )
        .subcommand(
            Command::new("reset")
                .about("Clear the ledger and balance assertions")
                .arg(
                    Arg::new("keep-log")
                        .long("keep-log")
                        .action(ArgAction::SetTrue)
                        .help("Retain the action log across the reset"),
                ),
        )
}
