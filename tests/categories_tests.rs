// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use flowtrack::models::TxKind;
use flowtrack::store::{self, MemoryStore};
use flowtrack::{cli, commands::categories};

fn run_category(kv: &mut MemoryStore, args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["flowtrack", "category"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("category", cat_m)) = matches.subcommand() {
        categories::handle(kv, cat_m)
    } else {
        panic!("no category subcommand");
    }
}

#[test]
fn add_appends_after_the_seeded_defaults() {
    let mut kv = MemoryStore::new();
    run_category(
        &mut kv,
        &[
            "add",
            "--name",
            "Subscriptions",
            "--type",
            "expense",
            "--icon",
            "movie-outline",
            "--color",
            "#E91E63",
        ],
    )
    .unwrap();

    let all = store::list_categories(&mut kv).unwrap();
    assert_eq!(all.len(), 14);
    let added = all.last().unwrap();
    assert_eq!(added.name, "Subscriptions");
    assert_eq!(added.r#type, TxKind::Expense);
    assert!(!added.id.is_empty());
    // Generated ids are UUIDs, unlike the seeded symbolic ones.
    assert_eq!(added.id.len(), 36);
}

#[test]
fn edit_renames_in_place_without_moving_the_record() {
    let mut kv = MemoryStore::new();
    store::list_categories(&mut kv).unwrap();

    run_category(&mut kv, &["edit", "--id", "food", "--name", "Groceries"]).unwrap();

    let all = store::list_categories(&mut kv).unwrap();
    assert_eq!(all[0].id, "food");
    assert_eq!(all[0].name, "Groceries");
    // Icon and color untouched by a name-only edit.
    assert_eq!(all[0].icon, "food");
    assert_eq!(all[0].color, "#FF9800");
}

#[test]
fn edit_of_a_missing_id_fails() {
    let mut kv = MemoryStore::new();
    let err = run_category(&mut kv, &["edit", "--id", "missing", "--name", "X"]);
    assert!(err.is_err());
}

#[test]
fn rm_with_unknown_id_is_a_noop() {
    let mut kv = MemoryStore::new();
    let before = store::list_categories(&mut kv).unwrap().len();
    run_category(&mut kv, &["rm", "--id", "missing"]).unwrap();
    assert_eq!(store::list_categories(&mut kv).unwrap().len(), before);
}

#[test]
fn seeded_defaults_match_the_shipped_set() {
    let mut kv = MemoryStore::new();
    let all = store::list_categories(&mut kv).unwrap();

    let food = all.iter().find(|c| c.id == "food").unwrap();
    assert_eq!(food.name, "Food & Dining");
    assert_eq!(food.color, "#FF9800");
    assert_eq!(food.r#type, TxKind::Expense);

    let expense_count = all.iter().filter(|c| c.r#type == TxKind::Expense).count();
    let income_count = all.iter().filter(|c| c.r#type == TxKind::Income).count();
    assert_eq!(expense_count, 8);
    assert_eq!(income_count, 5);
}
