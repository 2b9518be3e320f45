// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Utc;

use crate::aggregate::{self, Period};
use crate::currency::format_amount;
use crate::store::{self, KeyValueStore};
use crate::utils::{maybe_print_json, parse_date, parse_kind, parse_period, pretty_table};

pub fn handle(kv: &mut impl KeyValueStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(kv, sub)?,
        Some(("by-category", sub)) => by_category(kv, sub)?,
        Some(("daily", sub)) => daily(kv, sub)?,
        _ => {}
    }
    Ok(())
}

fn summary(kv: &mut impl KeyValueStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let period = parse_period(sub.get_one::<String>("period").unwrap())?;

    let txs = store::list_transactions(kv)?;
    let filtered = aggregate::filter_by_period(&txs, period, Utc::now());
    let summary = aggregate::summary(&filtered);

    if !maybe_print_json(json_flag, jsonl_flag, &summary)? {
        let code = store::get_currency(kv)?;
        let rows = vec![vec![
            format_amount(summary.total_income, &code),
            format_amount(summary.total_expense, &code),
            format_amount(summary.balance, &code),
        ]];
        println!("{}", pretty_table(&["Income", "Expenses", "Balance"], rows));
    }
    Ok(())
}

fn by_category(kv: &mut impl KeyValueStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let kind = parse_kind(sub.get_one::<String>("type").unwrap())?;
    let period = parse_period(sub.get_one::<String>("period").unwrap())?;

    let txs = store::list_transactions(kv)?;
    let filtered = aggregate::filter_by_period(&txs, period, Utc::now());
    let totals = aggregate::totals_by_category(&filtered, kind);

    if !maybe_print_json(json_flag, jsonl_flag, &totals)? {
        let code = store::get_currency(kv)?;
        let rows = totals
            .iter()
            .map(|t| vec![t.name.clone(), format_amount(t.amount, &code)])
            .collect();
        println!("{}", pretty_table(&["Category", "Amount"], rows));
    }
    Ok(())
}

fn daily(kv: &mut impl KeyValueStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let now = Utc::now();
    let (start, end) = if let Some(from) = sub.get_one::<String>("from") {
        let start = parse_date(from)?;
        let end = match sub.get_one::<String>("to") {
            Some(to) => parse_date(to)?,
            None => now.date_naive(),
        };
        anyhow::ensure!(start <= end, "Window start {} is after end {}", start, end);
        (start, end)
    } else {
        let period = parse_period(sub.get_one::<String>("period").unwrap())?;
        if !matches!(period, Period::Week | Period::Month) {
            anyhow::bail!("Daily series supports --period week|month");
        }
        (period.start(now).date_naive(), now.date_naive())
    };

    let txs = store::list_transactions(kv)?;
    let series = aggregate::daily_series(&txs, start, end);

    if !maybe_print_json(json_flag, jsonl_flag, &series)? {
        let code = store::get_currency(kv)?;
        let rows = series
            .iter()
            .map(|d| {
                vec![
                    d.date.to_string(),
                    format_amount(d.income, &code),
                    format_amount(d.expense, &code),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Date", "Income", "Expense"], rows));
    }
    Ok(())
}
