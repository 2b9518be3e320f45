// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{SecondsFormat, Utc};

use crate::export;
use crate::models::Transaction;
use crate::store::{self, KeyValueStore};

pub fn handle(kv: &mut impl KeyValueStore, m: &clap::ArgMatches) -> Result<()> {
    let fmt = m.get_one::<String>("format").unwrap().to_lowercase();
    let out = m.get_one::<String>("out").unwrap();

    let snapshot = store::export_snapshot(kv)?;
    let today = Utc::now().date_naive();

    match fmt.as_str() {
        "json" => std::fs::write(out, export::render_json(&snapshot)?)?,
        "summary" => std::fs::write(
            out,
            export::render_summary_report(&snapshot.transactions, today),
        )?,
        "detailed" => std::fs::write(
            out,
            export::render_detailed_list(&snapshot.transactions, today),
        )?,
        "csv" => write_csv(&snapshot.transactions, out)?,
        _ => anyhow::bail!("Unknown format: {} (use json|summary|detailed|csv)", fmt),
    }
    println!("Exported data to {}", out);
    Ok(())
}

fn write_csv(transactions: &[Transaction], out: &str) -> Result<()> {
    let mut wtr = csv::Writer::from_path(out)?;
    wtr.write_record(["date", "type", "amount", "category", "notes"])?;
    for t in transactions {
        wtr.write_record([
            t.date.to_rfc3339_opts(SecondsFormat::Millis, true),
            t.r#type.to_string(),
            t.amount.normalize().to_string(),
            t.category.name.clone(),
            t.notes.clone().unwrap_or_default(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
