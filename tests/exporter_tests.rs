// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use flowtrack::models::{Category, Transaction, TxKind};
use flowtrack::store::{self, MemoryStore};
use flowtrack::utils::parse_datetime;
use flowtrack::{cli, commands::exporter, export};
use rust_decimal::Decimal;
use tempfile::tempdir;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn category(id: &str, name: &str, kind: TxKind) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        icon: "food".to_string(),
        color: "#FF9800".to_string(),
        r#type: kind,
    }
}

fn transaction(kind: TxKind, amount: &str, cat: Category, date: &str) -> Transaction {
    Transaction {
        id: format!("tx-{}-{}", cat.id, amount),
        r#type: kind,
        amount: dec(amount),
        category: cat,
        date: parse_datetime(date).unwrap(),
        notes: None,
    }
}

#[test]
fn snapshot_survives_an_export_import_round_trip() {
    let mut kv = MemoryStore::new();
    let food = category("food", "Food & Dining", TxKind::Expense);
    let mut with_note = transaction(TxKind::Expense, "45.5", food.clone(), "2024-01-15");
    with_note.notes = Some("lunch".to_string());
    store::save_transaction(&mut kv, with_note).unwrap();
    store::save_transaction(
        &mut kv,
        transaction(
            TxKind::Income,
            "1000",
            category("salary", "Salary", TxKind::Income),
            "2024-01-01T09:30:00Z",
        ),
    )
    .unwrap();

    let snapshot = store::export_snapshot(&mut kv).unwrap();
    let json = export::render_json(&snapshot).unwrap();
    let payload = export::parse_import(&json).unwrap();

    let mut fresh = MemoryStore::new();
    store::import_snapshot(&mut fresh, &payload).unwrap();
    let restored = store::export_snapshot(&mut fresh).unwrap();
    assert_eq!(restored, snapshot);
}

#[test]
fn summary_report_groups_months_and_categories() {
    let txs = vec![
        transaction(
            TxKind::Income,
            "1000",
            category("salary", "Salary", TxKind::Income),
            "2024-01-01",
        ),
        transaction(
            TxKind::Expense,
            "45.5",
            category("food", "Food & Dining", TxKind::Expense),
            "2024-01-02",
        ),
        transaction(
            TxKind::Expense,
            "20",
            category("transport", "Transportation", TxKind::Expense),
            "2024-02-03",
        ),
    ];
    let generated_on = NaiveDate::from_ymd_opt(2024, 2, 5).unwrap();

    let expected = concat!(
        "FlowTrack Monthly Summary Report\n",
        "Generated on: 2/5/2024\n",
        "\n",
        "\n",
        "=== January 2024 ===\n",
        "Total Income: $1000.00\n",
        "Total Expenses: $45.50\n",
        "Net: +$954.50\n",
        "\n",
        "Category Breakdown:\n",
        "Salary: $1000.00 (income)\n",
        "Food & Dining: $45.50 (expense)\n",
        "\n",
        "\n",
        "=== February 2024 ===\n",
        "Total Income: $0.00\n",
        "Total Expenses: $20.00\n",
        "Net: $-20.00\n",
        "\n",
        "Category Breakdown:\n",
        "Transportation: $20.00 (expense)\n",
        "\n",
        "\n",
        "--- Generated by FlowTrack App ---\n",
    );
    assert_eq!(export::render_summary_report(&txs, generated_on), expected);
}

#[test]
fn detailed_list_orders_dates_and_kinds() {
    let food = category("food", "Food & Dining", TxKind::Expense);
    let mut with_note = transaction(TxKind::Expense, "5.25", food.clone(), "2024-01-15");
    with_note.notes = Some("coffee".to_string());
    let txs = vec![
        with_note,
        transaction(
            TxKind::Income,
            "50",
            category("salary", "Salary", TxKind::Income),
            "2024-01-16",
        ),
        transaction(TxKind::Expense, "20", food, "2024-01-16"),
    ];
    let generated_on = NaiveDate::from_ymd_opt(2024, 2, 5).unwrap();

    let expected = concat!(
        "FlowTrack Detailed Transaction List\n",
        "Generated on: 2/5/2024\n",
        "\n",
        "Date: 1/16/2024\n",
        "----------------------------------------\n",
        "Income: $50\n",
        "Category: Salary\n",
        "----------------------------------------\n",
        "Expense: $20\n",
        "Category: Food & Dining\n",
        "----------------------------------------\n",
        "\n",
        "Date: 1/15/2024\n",
        "----------------------------------------\n",
        "Expense: $5.25\n",
        "Category: Food & Dining\n",
        "Note: coffee\n",
        "----------------------------------------\n",
        "\n",
        "\n",
        "--- Generated by FlowTrack App ---\n",
    );
    assert_eq!(export::render_detailed_list(&txs, generated_on), expected);
}

#[test]
fn export_json_writes_the_snapshot_envelope() {
    let mut kv = MemoryStore::new();
    store::save_transaction(
        &mut kv,
        transaction(
            TxKind::Expense,
            "45.5",
            category("food", "Food & Dining", TxKind::Expense),
            "2024-01-15",
        ),
    )
    .unwrap();

    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.json");
    let out_str = out_path.to_string_lossy().to_string();

    let cli = cli::build_cli();
    let matches =
        cli.get_matches_from(["flowtrack", "export", "--format", "json", "--out", &out_str]);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(&mut kv, export_m).unwrap();
    } else {
        panic!("no export subcommand");
    }

    let parsed: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out_path).unwrap()).unwrap();
    assert_eq!(parsed["transactions"].as_array().unwrap().len(), 1);
    assert_eq!(
        parsed["transactions"][0]["category"]["name"],
        "Food & Dining"
    );
    // The category store had never been read, so the export seeded defaults.
    assert_eq!(parsed["categories"].as_array().unwrap().len(), 13);
}

#[test]
fn export_csv_streams_one_row_per_transaction() {
    let mut kv = MemoryStore::new();
    let mut tx = transaction(
        TxKind::Expense,
        "45.5",
        category("food", "Food & Dining", TxKind::Expense),
        "2024-01-15",
    );
    tx.notes = Some("Weekly run".to_string());
    store::save_transaction(&mut kv, tx).unwrap();

    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.csv");
    let out_str = out_path.to_string_lossy().to_string();

    let cli = cli::build_cli();
    let matches =
        cli.get_matches_from(["flowtrack", "export", "--format", "csv", "--out", &out_str]);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(&mut kv, export_m).unwrap();
    } else {
        panic!("no export subcommand");
    }

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(lines.next(), Some("date,type,amount,category,notes"));
    assert_eq!(
        lines.next(),
        Some("2024-01-15T00:00:00.000Z,expense,45.5,Food & Dining,Weekly run")
    );
    assert_eq!(lines.next(), None);
}

#[test]
fn export_rejects_unknown_format() {
    let mut kv = MemoryStore::new();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.unknown");
    let out_str = out_path.to_string_lossy().to_string();

    let cli = cli::build_cli();
    let matches =
        cli.get_matches_from(["flowtrack", "export", "--format", "xml", "--out", &out_str]);
    if let Some(("export", export_m)) = matches.subcommand() {
        assert!(exporter::handle(&mut kv, export_m).is_err());
    } else {
        panic!("no export subcommand");
    }
    assert!(!out_path.exists());
}
