// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{TimeZone, Utc};
use flowtrack::models::TxKind;
use flowtrack::store::{self, MemoryStore};
use flowtrack::{cli, commands::importer};
use rust_decimal::Decimal;
use tempfile::tempdir;

fn run_import(kv: &mut MemoryStore, file: &str) -> anyhow::Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["flowtrack", "import", "--file", file]);
    if let Some(("import", import_m)) = matches.subcommand() {
        importer::handle(kv, import_m)
    } else {
        panic!("no import subcommand");
    }
}

#[test]
fn import_accepts_data_written_by_older_clients() {
    // Numeric amount, bare date, no notes: the shapes older exports carry.
    let payload = r##"{
        "transactions": [
            {
                "id": "t1",
                "type": "expense",
                "amount": 12.5,
                "category": {
                    "id": "food",
                    "name": "Food & Dining",
                    "icon": "food",
                    "color": "#FF9800",
                    "type": "expense"
                },
                "date": "2024-01-15"
            }
        ]
    }"##;

    let dir = tempdir().unwrap();
    let path = dir.path().join("backup.json");
    std::fs::write(&path, payload).unwrap();

    let mut kv = MemoryStore::new();
    run_import(&mut kv, &path.to_string_lossy()).unwrap();

    let all = store::list_transactions(&kv).unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, "t1");
    assert_eq!(all[0].r#type, TxKind::Expense);
    assert_eq!(all[0].amount, "12.5".parse::<Decimal>().unwrap());
    assert_eq!(
        all[0].date,
        Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap()
    );
    assert_eq!(all[0].notes, None);
}

#[test]
fn import_replaces_only_the_collections_present() {
    let mut kv = MemoryStore::new();
    // Seed the defaults, then rename one so we can tell whether the
    // category collection was touched by the import.
    let mut food = store::list_categories(&mut kv)
        .unwrap()
        .into_iter()
        .find(|c| c.id == "food")
        .unwrap();
    food.name = "Groceries".to_string();
    store::update_category(&mut kv, food).unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("transactions-only.json");
    std::fs::write(&path, r#"{"transactions": []}"#).unwrap();
    run_import(&mut kv, &path.to_string_lossy()).unwrap();

    assert!(store::list_transactions(&kv).unwrap().is_empty());
    let categories = store::list_categories(&mut kv).unwrap();
    assert!(categories.iter().any(|c| c.name == "Groceries"));
}

#[test]
fn import_of_unparseable_json_fails_without_touching_state() {
    let mut kv = MemoryStore::new();
    store::set_currency(&mut kv, "USD").unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(run_import(&mut kv, &path.to_string_lossy()).is_err());
    assert!(store::list_transactions(&kv).unwrap().is_empty());
    assert_eq!(store::get_currency(&kv).unwrap(), "USD");
}
