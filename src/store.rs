// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;
use log::{debug, warn};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::currency::DEFAULT_CURRENCY;
use crate::models::{Category, ImportPayload, Snapshot, Transaction, TxKind};
use crate::utils::new_id;

pub const TRANSACTIONS_KEY: &str = "flowtrack_transactions";
pub const CATEGORIES_KEY: &str = "flowtrack_categories";
pub const CURRENCY_KEY: &str = "flowtrack_currency";

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.alphavelocity", "FlowTrack", "flowtrack"));

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{entity} '{id}' not found")]
    NotFound { entity: &'static str, id: String },
    #[error("failed to read or write persisted data: {0}")]
    Persistence(#[from] io::Error),
    #[error("malformed JSON in {what}: {source}")]
    Malformed {
        what: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// The persistence contract: three independent string-keyed entries, no
/// structure below the value level. Mutations rewrite whole values.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

pub fn store_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2).ok_or_else(|| {
        StoreError::Persistence(io::Error::new(
            io::ErrorKind::NotFound,
            "could not determine platform-specific data dir",
        ))
    })?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir)?;
    Ok(data_dir.join("flowtrack.json"))
}

/// File-backed store: the whole key space is one JSON object on disk,
/// re-read before and rewritten after every mutation. O(n) per operation;
/// acceptable because collections stay small (single user, local data).
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn open(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn open_default() -> Result<Self> {
        Ok(Self::open(store_path()?))
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };
        serde_json::from_str(&raw).map_err(|e| {
            warn!("store file {} is malformed: {}", self.path.display(), e);
            StoreError::Malformed {
                what: self.path.display().to_string(),
                source: e,
            }
        })
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let raw = serde_json::to_string_pretty(entries).map_err(|e| StoreError::Malformed {
            what: self.path.display().to_string(),
            source: e,
        })?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_entries()?.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut entries = self.read_entries()?;
        entries.remove(key);
        self.write_entries(&entries)
    }
}

fn read_list<T: DeserializeOwned>(kv: &impl KeyValueStore, key: &str) -> Result<Option<Vec<T>>> {
    match kv.get(key)? {
        Some(raw) => {
            let list = serde_json::from_str(&raw).map_err(|e| {
                warn!("persisted list under '{}' is malformed: {}", key, e);
                StoreError::Malformed {
                    what: key.to_string(),
                    source: e,
                }
            })?;
            Ok(Some(list))
        }
        None => Ok(None),
    }
}

fn write_list<T: Serialize>(kv: &mut impl KeyValueStore, key: &str, list: &[T]) -> Result<()> {
    let raw = serde_json::to_string(list).map_err(|e| StoreError::Malformed {
        what: key.to_string(),
        source: e,
    })?;
    kv.set(key, &raw)
}

// ---- Transactions ----

pub fn list_transactions(kv: &impl KeyValueStore) -> Result<Vec<Transaction>> {
    Ok(read_list(kv, TRANSACTIONS_KEY)?.unwrap_or_default())
}

/// Appends a transaction, assigning a fresh id when the record carries none.
pub fn save_transaction(kv: &mut impl KeyValueStore, mut tx: Transaction) -> Result<Transaction> {
    if tx.id.is_empty() {
        tx.id = new_id();
    }
    let mut all = list_transactions(kv)?;
    all.push(tx.clone());
    write_list(kv, TRANSACTIONS_KEY, &all)?;
    Ok(tx)
}

pub fn update_transaction(kv: &mut impl KeyValueStore, tx: Transaction) -> Result<Transaction> {
    let mut all = list_transactions(kv)?;
    let slot = all
        .iter_mut()
        .find(|t| t.id == tx.id)
        .ok_or_else(|| StoreError::NotFound {
            entity: "transaction",
            id: tx.id.clone(),
        })?;
    *slot = tx.clone();
    write_list(kv, TRANSACTIONS_KEY, &all)?;
    Ok(tx)
}

/// No-op when the id is absent.
pub fn delete_transaction(kv: &mut impl KeyValueStore, id: &str) -> Result<()> {
    let mut all = list_transactions(kv)?;
    all.retain(|t| t.id != id);
    write_list(kv, TRANSACTIONS_KEY, &all)
}

// ---- Categories ----

/// Lists categories, seeding the defaults exactly once: only when the
/// backing key has never been written. A persisted empty list stays empty.
pub fn list_categories(kv: &mut impl KeyValueStore) -> Result<Vec<Category>> {
    if let Some(list) = read_list(kv, CATEGORIES_KEY)? {
        return Ok(list);
    }
    let defaults = default_categories();
    debug!("seeding {} default categories", defaults.len());
    write_list(kv, CATEGORIES_KEY, &defaults)?;
    Ok(defaults)
}

pub fn save_category(kv: &mut impl KeyValueStore, mut category: Category) -> Result<Category> {
    if category.id.is_empty() {
        category.id = new_id();
    }
    let mut all = list_categories(kv)?;
    all.push(category.clone());
    write_list(kv, CATEGORIES_KEY, &all)?;
    Ok(category)
}

pub fn update_category(kv: &mut impl KeyValueStore, category: Category) -> Result<Category> {
    let mut all = list_categories(kv)?;
    let slot = all
        .iter_mut()
        .find(|c| c.id == category.id)
        .ok_or_else(|| StoreError::NotFound {
            entity: "category",
            id: category.id.clone(),
        })?;
    *slot = category.clone();
    write_list(kv, CATEGORIES_KEY, &all)?;
    Ok(category)
}

/// No-op when the id is absent.
pub fn delete_category(kv: &mut impl KeyValueStore, id: &str) -> Result<()> {
    let mut all = list_categories(kv)?;
    all.retain(|c| c.id != id);
    write_list(kv, CATEGORIES_KEY, &all)
}

// ---- Selected currency ----

pub fn get_currency(kv: &impl KeyValueStore) -> Result<String> {
    Ok(kv
        .get(CURRENCY_KEY)?
        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()))
}

pub fn set_currency(kv: &mut impl KeyValueStore, code: &str) -> Result<()> {
    kv.set(CURRENCY_KEY, code)
}

// ---- Snapshot export/import ----

pub fn export_snapshot(kv: &mut impl KeyValueStore) -> Result<Snapshot> {
    Ok(Snapshot {
        transactions: list_transactions(kv)?,
        categories: list_categories(kv)?,
    })
}

/// Each collection present in the payload replaces the persisted one
/// wholesale; absent collections are left untouched.
pub fn import_snapshot(kv: &mut impl KeyValueStore, payload: &ImportPayload) -> Result<()> {
    if let Some(transactions) = &payload.transactions {
        write_list(kv, TRANSACTIONS_KEY, transactions)?;
    }
    if let Some(categories) = &payload.categories {
        write_list(kv, CATEGORIES_KEY, categories)?;
    }
    Ok(())
}

/// Removes both collections. The currency selection survives.
pub fn clear_all_data(kv: &mut impl KeyValueStore) -> Result<()> {
    kv.remove(TRANSACTIONS_KEY)?;
    kv.remove(CATEGORIES_KEY)
}

pub fn default_categories() -> Vec<Category> {
    let cat = |id: &str, name: &str, icon: &str, color: &str, kind: TxKind| Category {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        color: color.to_string(),
        r#type: kind,
    };
    vec![
        cat("food", "Food & Dining", "food", "#FF9800", TxKind::Expense),
        cat("transport", "Transportation", "car", "#2196F3", TxKind::Expense),
        cat("shopping", "Shopping", "cart", "#9C27B0", TxKind::Expense),
        cat(
            "bills",
            "Bills & Utilities",
            "file-document-outline",
            "#F44336",
            TxKind::Expense,
        ),
        cat(
            "entertainment",
            "Entertainment",
            "movie-outline",
            "#E91E63",
            TxKind::Expense,
        ),
        cat(
            "health",
            "Health & Medical",
            "medical-bag",
            "#4CAF50",
            TxKind::Expense,
        ),
        cat(
            "education",
            "Education",
            "school-outline",
            "#3F51B5",
            TxKind::Expense,
        ),
        cat(
            "other_expense",
            "Other",
            "dots-horizontal",
            "#607D8B",
            TxKind::Expense,
        ),
        cat("salary", "Salary", "cash", "#4CAF50", TxKind::Income),
        cat("freelance", "Freelance", "laptop", "#00BCD4", TxKind::Income),
        cat("gifts", "Gifts", "gift-outline", "#8BC34A", TxKind::Income),
        cat(
            "investments",
            "Investments",
            "chart-line",
            "#FFC107",
            TxKind::Income,
        ),
        cat(
            "other_income",
            "Other",
            "dots-horizontal",
            "#009688",
            TxKind::Income,
        ),
    ]
}
