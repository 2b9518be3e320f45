// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::models::Category;
use crate::store::{self, KeyValueStore};
use crate::utils::{maybe_print_json, parse_kind, pretty_table};

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

fn add(kv: &mut impl KeyValueStore, sub: &clap::ArgMatches) -> Result<()> {
    let category = Category {
        id: String::new(),
        name: sub.get_one::<String>("name").unwrap().clone(),
        icon: sub.get_one::<String>("icon").unwrap().clone(),
        color: sub.get_one::<String>("color").unwrap().clone(),
        r#type: parse_kind(sub.get_one::<String>("type").unwrap())?,
    };
    let saved = store::save_category(kv, category)?;
    println!("Added {} category '{}' (id: {})", saved.r#type, saved.name, saved.id);
    Ok(())
}

fn list(kv: &mut impl KeyValueStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let mut categories = store::list_categories(kv)?;
    if let Some(kind) = sub.get_one::<String>("type") {
        let kind = parse_kind(kind)?;
        categories.retain(|c| c.r#type == kind);
    }
    if !maybe_print_json(json_flag, jsonl_flag, &categories)? {
        let rows = categories
            .iter()
            .map(|c| {
                vec![
                    c.id.clone(),
                    c.name.clone(),
                    c.r#type.to_string(),
                    c.icon.clone(),
                    c.color.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["ID", "Name", "Type", "Icon", "Color"], rows)
        );
    }
    Ok(())
}

fn edit(kv: &mut impl KeyValueStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let mut category = store::list_categories(kv)?
        .into_iter()
        .find(|c| c.id == *id)
        .ok_or_else(|| anyhow::anyhow!("Category '{}' not found", id))?;
    if let Some(name) = sub.get_one::<String>("name") {
        category.name = name.clone();
    }
    if let Some(icon) = sub.get_one::<String>("icon") {
        category.icon = icon.clone();
    }
    if let Some(color) = sub.get_one::<String>("color") {
        category.color = color.clone();
    }
    let updated = store::update_category(kv, category)?;
    println!("Updated category '{}'", updated.name);
    Ok(())
}

fn rm(kv: &mut impl KeyValueStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    store::delete_category(kv, id)?;
    println!("Removed category '{}'", id);
    Ok(())
}
