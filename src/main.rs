// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use flowtrack::{cli, commands, store};

fn main() -> Result<()> {
    env_logger::init();
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let mut kv = store::FileStore::open_default()?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Data store initialized at {}", store::store_path()?.display());
        }
        Some(("category", sub)) => commands::categories::handle(&mut kv, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&mut kv, sub)?,
        Some(("report", sub)) => commands::reports::handle(&mut kv, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&mut kv, sub)?,
        Some(("import", sub)) => commands::importer::handle(&mut kv, sub)?,
        Some(("currency", sub)) => commands::settings::handle(&mut kv, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
