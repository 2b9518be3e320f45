// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::aggregate;
use crate::currency::format_amount_str;
use crate::models::{Category, Transaction, TxKind};
use crate::store::{self, KeyValueStore};
use crate::utils::{
    maybe_print_json, parse_amount, parse_datetime, parse_kind, parse_period, pretty_table,
};

pub fn handle(kv: &mut impl KeyValueStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(kv, sub)?,
        Some(("list", sub)) => list(kv, sub)?,
        Some(("edit", sub)) => edit(kv, sub)?,
        Some(("rm", sub)) => rm(kv, sub)?,
        _ => {}
    }
    Ok(())
}

/// The category must exist and carry the transaction's kind; this is the
/// command-layer guard the store deliberately does not enforce.
fn resolve_category(
    kv: &mut impl KeyValueStore,
    name_or_id: &str,
    kind: TxKind,
) -> Result<Category> {
    store::list_categories(kv)?
        .into_iter()
        .filter(|c| c.r#type == kind)
        .find(|c| c.id == name_or_id || c.name == name_or_id)
        .with_context(|| format!("No {} category named '{}'", kind, name_or_id))
}

fn add(kv: &mut impl KeyValueStore, sub: &clap::ArgMatches) -> Result<()> {
    let kind = parse_kind(sub.get_one::<String>("type").unwrap())?;
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let category = resolve_category(kv, sub.get_one::<String>("category").unwrap(), kind)?;
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_datetime(s)?,
        None => Utc::now(),
    };
    let notes = sub.get_one::<String>("notes").cloned();

    let tx = Transaction {
        id: String::new(),
        r#type: kind,
        amount,
        category,
        date,
        notes,
    };
    let saved = store::save_transaction(kv, tx)?;
    println!(
        "Recorded {} {} in '{}' on {} (id: {})",
        saved.r#type,
        saved.amount,
        saved.category.name,
        saved.date.date_naive(),
        saved.id
    );
    Ok(())
}

fn list(kv: &mut impl KeyValueStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(kv, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let code = store::get_currency(kv)?;
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.r#type.clone(),
                    format_amount_str(&r.amount, &code),
                    r.category.clone(),
                    r.notes.clone(),
                    r.id.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Type", "Amount", "Category", "Notes", "ID"], rows)
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub r#type: String,
    pub amount: String,
    pub category: String,
    pub notes: String,
}

pub fn query_rows(
    kv: &impl KeyValueStore,
    sub: &clap::ArgMatches,
) -> Result<Vec<TransactionRow>> {
    let period = parse_period(sub.get_one::<String>("period").unwrap())?;
    let mut txs = aggregate::filter_by_period(&store::list_transactions(kv)?, period, Utc::now());

    if let Some(kind) = sub.get_one::<String>("type") {
        let kind = parse_kind(kind)?;
        txs.retain(|t| t.r#type == kind);
    }
    if let Some(category) = sub.get_one::<String>("category") {
        txs.retain(|t| t.category.name == *category || t.category.id == *category);
    }

    // Newest first; insertion order breaks ties within a timestamp.
    txs.reverse();
    txs.sort_by(|a, b| b.date.cmp(&a.date));
    if let Some(limit) = sub.get_one::<usize>("limit") {
        txs.truncate(*limit);
    }

    Ok(txs
        .into_iter()
        .map(|t| TransactionRow {
            id: t.id,
            date: t.date.date_naive().to_string(),
            r#type: t.r#type.to_string(),
            amount: t.amount.normalize().to_string(),
            category: t.category.name,
            notes: t.notes.unwrap_or_default(),
        })
        .collect())
}

fn edit(kv: &mut impl KeyValueStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let mut tx = store::list_transactions(kv)?
        .into_iter()
        .find(|t| t.id == *id)
        .ok_or_else(|| anyhow::anyhow!("Transaction '{}' not found", id))?;

    if let Some(amount) = sub.get_one::<String>("amount") {
        tx.amount = parse_amount(amount)?;
    }
    if let Some(date) = sub.get_one::<String>("date") {
        tx.date = parse_datetime(date)?;
    }
    if let Some(notes) = sub.get_one::<String>("notes") {
        tx.notes = Some(notes.clone());
    }
    if let Some(category) = sub.get_one::<String>("category") {
        tx.category = resolve_category(kv, category, tx.r#type)?;
    }

    let updated = store::update_transaction(kv, tx)?;
    println!("Updated transaction '{}'", updated.id);
    Ok(())
}

fn rm(kv: &mut impl KeyValueStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    store::delete_transaction(kv, id)?;
    println!("Deleted transaction '{}'", id);
    Ok(())
}
