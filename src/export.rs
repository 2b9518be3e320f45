// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{ImportPayload, Snapshot, Transaction, TxKind};

const SECTION_RULE: &str = "----------------------------------------\n";
const FOOTER: &str = "\n--- Generated by FlowTrack App ---\n";

/// Verbatim serialization of the snapshot:
/// `{"transactions": [...], "categories": [...]}`.
pub fn render_json(snapshot: &Snapshot) -> serde_json::Result<String> {
    serde_json::to_string_pretty(snapshot)
}

/// Tolerant inverse of `render_json`; either collection may be absent.
pub fn parse_import(json: &str) -> serde_json::Result<ImportPayload> {
    serde_json::from_str(json)
}

struct CategoryLine {
    name: String,
    kind: TxKind,
    amount: Decimal,
}

#[derive(Default)]
struct MonthTotals {
    income: Decimal,
    expenses: Decimal,
    categories: Vec<CategoryLine>,
}

/// Month-by-month income/expense/net report with a per-month category
/// breakdown sorted descending by amount. Months are emitted in
/// chronological order, labeled with the full month name and 4-digit year.
pub fn render_summary_report(transactions: &[Transaction], generated_on: NaiveDate) -> String {
    let mut months: BTreeMap<(i32, u32), MonthTotals> = BTreeMap::new();
    for t in transactions {
        let totals = months.entry((t.date.year(), t.date.month())).or_default();
        match t.r#type {
            TxKind::Income => totals.income += t.amount,
            TxKind::Expense => totals.expenses += t.amount,
        }
        match totals
            .categories
            .iter_mut()
            .find(|c| c.name == t.category.name)
        {
            Some(line) => line.amount += t.amount,
            None => totals.categories.push(CategoryLine {
                name: t.category.name.clone(),
                kind: t.r#type,
                amount: t.amount,
            }),
        }
    }

    let mut report = String::from("FlowTrack Monthly Summary Report\n");
    report.push_str(&format!("Generated on: {}\n\n", date_label(generated_on)));

    for ((year, month), totals) in &months {
        report.push_str(&format!("\n=== {} ===\n", month_label(*year, *month)));
        report.push_str(&format!("Total Income: ${:.2}\n", totals.income));
        report.push_str(&format!("Total Expenses: ${:.2}\n", totals.expenses));
        let net = totals.income - totals.expenses;
        let sign = if net >= Decimal::ZERO { "+" } else { "" };
        report.push_str(&format!("Net: {}${:.2}\n\n", sign, net));

        report.push_str("Category Breakdown:\n");
        let mut lines: Vec<&CategoryLine> = totals.categories.iter().collect();
        lines.sort_by(|a, b| b.amount.cmp(&a.amount));
        for line in lines {
            report.push_str(&format!(
                "{}: ${:.2} ({})\n",
                line.name, line.amount, line.kind
            ));
        }
        report.push('\n');
    }

    report.push_str(FOOTER);
    report
}

/// Transactions grouped by calendar date, newest date first; within a date
/// income sorts before expense, then larger amounts first.
pub fn render_detailed_list(transactions: &[Transaction], generated_on: NaiveDate) -> String {
    let mut days: BTreeMap<NaiveDate, Vec<&Transaction>> = BTreeMap::new();
    for t in transactions {
        days.entry(t.date.date_naive()).or_default().push(t);
    }

    let mut listing = String::from("FlowTrack Detailed Transaction List\n");
    listing.push_str(&format!("Generated on: {}\n\n", date_label(generated_on)));

    for (date, group) in days.iter().rev() {
        listing.push_str(&format!("Date: {}\n", date_label(*date)));
        listing.push_str(SECTION_RULE);

        let mut group = group.clone();
        group.sort_by(|a, b| {
            if a.r#type != b.r#type {
                if a.r#type == TxKind::Income {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }
            } else {
                b.amount.cmp(&a.amount)
            }
        });

        for t in group {
            listing.push_str(&format!(
                "{}: ${}\n",
                t.r#type.label(),
                t.amount.normalize()
            ));
            listing.push_str(&format!("Category: {}\n", t.category.name));
            if let Some(note) = t.notes.as_deref().filter(|n| !n.is_empty()) {
                listing.push_str(&format!("Note: {}\n", note));
            }
            listing.push_str(SECTION_RULE);
        }
        listing.push('\n');
    }

    listing.push_str(FOOTER);
    listing
}

fn month_label(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .expect("month key came from a valid date")
        .format("%B %Y")
        .to_string()
}

fn date_label(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}
