// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};

use crate::export;
use crate::store::{self, KeyValueStore};

pub fn handle(kv: &mut impl KeyValueStore, m: &clap::ArgMatches) -> Result<()> {
    let path = m.get_one::<String>("file").unwrap();
    let raw = std::fs::read_to_string(path).with_context(|| format!("Read {}", path))?;
    let payload = export::parse_import(&raw).with_context(|| format!("Parse {}", path))?;

    let tx_count = payload.transactions.as_ref().map_or(0, Vec::len);
    let cat_count = payload.categories.as_ref().map_or(0, Vec::len);
    store::import_snapshot(kv, &payload)?;
    println!(
        "Imported {} transactions and {} categories from {}",
        tx_count, cat_count, path
    );
    Ok(())
}
