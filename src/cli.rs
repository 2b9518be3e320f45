// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, Arg, ArgAction, Command};

fn output_flags() -> [Arg; 2] {
    [
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON Lines"),
    ]
}

fn period_arg() -> Arg {
    Arg::new("period")
        .long("period")
        .value_name("PERIOD")
        .default_value("all")
        .help("Reporting window: week|month|year|all")
}

pub fn build_cli() -> Command {
    Command::new("flowtrack")
        .version(crate_version!())
        .about("FlowTrack: personal income/expense tracking, reporting, and export")
        .subcommand(Command::new("init").about("Initialize the data store and report its location"))
        .subcommand(
            Command::new("category")
                .about("Manage categories")
                .subcommand(
                    Command::new("add")
                        .about("Add a category")
                        .arg(
                            Arg::new("name")
                                .long("name")
                                .value_name("NAME")
                                .required(true),
                        )
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_name("TYPE")
                                .required(true)
                                .help("expense|income"),
                        )
                        .arg(
                            Arg::new("icon")
                                .long("icon")
                                .value_name("ICON")
                                .default_value("dots-horizontal"),
                        )
                        .arg(
                            Arg::new("color")
                                .long("color")
                                .value_name("HEX")
                                .default_value("#607D8B"),
                        ),
                )
                .subcommand(
                    Command::new("list")
                        .about("List categories")
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_name("TYPE")
                                .help("Only expense or income categories"),
                        )
                        .args(output_flags()),
                )
                .subcommand(
                    Command::new("edit")
                        .about("Edit a category in place")
                        .arg(Arg::new("id").long("id").value_name("ID").required(true))
                        .arg(Arg::new("name").long("name").value_name("NAME"))
                        .arg(Arg::new("icon").long("icon").value_name("ICON"))
                        .arg(Arg::new("color").long("color").value_name("HEX")),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Remove a category")
                        .arg(Arg::new("id").long("id").value_name("ID").required(true)),
                ),
        )
        .subcommand(
            Command::new("tx")
                .about("Manage transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_name("TYPE")
                                .required(true)
                                .help("expense|income"),
                        )
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .value_name("AMOUNT")
                                .required(true),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .value_name("NAME_OR_ID")
                                .required(true)
                                .help("Category name or id; must match the transaction type"),
                        )
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .value_name("DATE")
                                .help("RFC 3339 timestamp or YYYY-MM-DD; defaults to now"),
                        )
                        .arg(Arg::new("notes").long("notes").value_name("TEXT")),
                )
                .subcommand(
                    Command::new("list")
                        .about("List transactions")
                        .arg(period_arg())
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_name("TYPE")
                                .help("Only expense or income transactions"),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .value_name("NAME")
                                .help("Only transactions in this category"),
                        )
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_name("N")
                                .value_parser(clap::value_parser!(usize)),
                        )
                        .args(output_flags()),
                )
                .subcommand(
                    Command::new("edit")
                        .about("Edit a transaction in place")
                        .arg(Arg::new("id").long("id").value_name("ID").required(true))
                        .arg(Arg::new("amount").long("amount").value_name("AMOUNT"))
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .value_name("NAME_OR_ID")
                                .help("Re-snapshots the category onto the transaction"),
                        )
                        .arg(Arg::new("date").long("date").value_name("DATE"))
                        .arg(Arg::new("notes").long("notes").value_name("TEXT")),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction")
                        .arg(Arg::new("id").long("id").value_name("ID").required(true)),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Aggregated views over recorded transactions")
                .subcommand(
                    Command::new("summary")
                        .about("Income, expenses, and balance for a period")
                        .arg(period_arg())
                        .args(output_flags()),
                )
                .subcommand(
                    Command::new("by-category")
                        .about("Totals grouped by category, largest first")
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_name("TYPE")
                                .default_value("expense")
                                .help("expense|income"),
                        )
                        .arg(period_arg())
                        .args(output_flags()),
                )
                .subcommand(
                    Command::new("daily")
                        .about("Per-day income/expense series")
                        .arg(
                            Arg::new("period")
                                .long("period")
                                .value_name("PERIOD")
                                .default_value("month")
                                .help("week|month; ignored when --from is given"),
                        )
                        .arg(
                            Arg::new("from")
                                .long("from")
                                .value_name("DATE")
                                .help("Explicit window start (YYYY-MM-DD)"),
                        )
                        .arg(
                            Arg::new("to")
                                .long("to")
                                .value_name("DATE")
                                .help("Explicit window end (YYYY-MM-DD); defaults to today"),
                        )
                        .args(output_flags()),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Export data to a file")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_name("FORMAT")
                        .required(true)
                        .help("json|summary|detailed|csv"),
                )
                .arg(
                    Arg::new("out")
                        .long("out")
                        .value_name("FILE")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("import")
                .about("Import a previously exported JSON snapshot")
                .arg(
                    Arg::new("file")
                        .long("file")
                        .value_name("FILE")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("currency")
                .about("Display currency selection")
                .subcommand(
                    Command::new("list")
                        .about("List supported currencies")
                        .args(output_flags()),
                )
                .subcommand(Command::new("get").about("Show the selected currency"))
                .subcommand(
                    Command::new("set")
                        .about("Select the display currency")
                        .arg(Arg::new("code").value_name("CODE").required(true)),
                ),
        )
}
