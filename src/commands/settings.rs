// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::currency;
use crate::store::{self, KeyValueStore};
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(kv: &mut impl KeyValueStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => {
            let json_flag = sub.get_flag("json");
            let jsonl_flag = sub.get_flag("jsonl");
            if !maybe_print_json(json_flag, jsonl_flag, &currency::all())? {
                let rows = currency::all()
                    .iter()
                    .map(|c| {
                        vec![
                            c.code.to_string(),
                            c.symbol.to_string(),
                            c.name.to_string(),
                            c.decimal_places.to_string(),
                        ]
                    })
                    .collect();
                println!(
                    "{}",
                    pretty_table(&["Code", "Symbol", "Name", "Decimals"], rows)
                );
            }
        }
        Some(("get", _)) => {
            let code = store::get_currency(kv)?;
            match currency::lookup(&code) {
                Some(c) => println!("{} ({})", c.code, c.symbol),
                None => println!("{}", code),
            }
        }
        Some(("set", sub)) => {
            let code = sub.get_one::<String>("code").unwrap().to_uppercase();
            anyhow::ensure!(
                currency::lookup(&code).is_some(),
                "Unknown currency code '{}'",
                code
            );
            store::set_currency(kv, &code)?;
            println!("Display currency set to {}", code);
        }
        _ => {}
    }
    Ok(())
}
