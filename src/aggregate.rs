// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Transaction, TxKind};

/// Relative reporting window, anchored at a caller-supplied "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Week,
    Month,
    Year,
    All,
}

impl Period {
    pub fn start(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            Period::Week => now - Duration::days(7),
            Period::Month => day_start(
                NaiveDate::from_ymd_opt(now.year(), now.month(), 1)
                    .expect("first of month is a valid date"),
            ),
            Period::Year => day_start(
                NaiveDate::from_ymd_opt(now.year(), 1, 1).expect("January 1st is a valid date"),
            ),
            Period::All => DateTime::UNIX_EPOCH,
        }
    }
}

fn day_start(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Keeps transactions with `start <= date <= now`, both bounds inclusive.
pub fn filter_by_period(
    transactions: &[Transaction],
    period: Period,
    now: DateTime<Utc>,
) -> Vec<Transaction> {
    let start = period.start(now);
    transactions
        .iter()
        .filter(|t| t.date >= start && t.date <= now)
        .cloned()
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category_id: String,
    pub name: String,
    pub color: String,
    pub amount: Decimal,
}

/// Sums amounts by embedded category id, restricted to one kind, sorted
/// descending by total. The sort is stable, so categories with equal totals
/// keep first-seen order.
pub fn totals_by_category(transactions: &[Transaction], kind: TxKind) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for t in transactions.iter().filter(|t| t.r#type == kind) {
        match index.get(t.category.id.as_str()) {
            Some(&i) => totals[i].amount += t.amount,
            None => {
                index.insert(t.category.id.clone(), totals.len());
                totals.push(CategoryTotal {
                    category_id: t.category.id.clone(),
                    name: t.category.name.clone(),
                    color: t.category.color.clone(),
                    amount: t.amount,
                });
            }
        }
    }
    totals.sort_by(|a, b| b.amount.cmp(&a.amount));
    totals
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DayTotals {
    pub date: NaiveDate,
    pub expense: Decimal,
    pub income: Decimal,
}

/// One entry per calendar day in `[start, end]` inclusive. Days with no
/// transactions carry zero totals rather than being omitted. Bucketing is
/// by the transaction timestamp's calendar date, not a rolling 24h window.
pub fn daily_series(
    transactions: &[Transaction],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<DayTotals> {
    let mut buckets: HashMap<NaiveDate, (Decimal, Decimal)> = HashMap::new();
    for t in transactions {
        let entry = buckets.entry(t.date.date_naive()).or_default();
        match t.r#type {
            TxKind::Expense => entry.0 += t.amount,
            TxKind::Income => entry.1 += t.amount,
        }
    }

    let mut series = Vec::new();
    let mut day = start;
    while day <= end {
        let (expense, income) = buckets.get(&day).copied().unwrap_or_default();
        series.push(DayTotals {
            date: day,
            expense,
            income,
        });
        day += Duration::days(1);
    }
    series
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub balance: Decimal,
}

pub fn summary(transactions: &[Transaction]) -> Summary {
    let mut total_income = Decimal::ZERO;
    let mut total_expense = Decimal::ZERO;
    for t in transactions {
        match t.r#type {
            TxKind::Income => total_income += t.amount,
            TxKind::Expense => total_expense += t.amount,
        }
    }
    Summary {
        total_income,
        total_expense,
        balance: total_income - total_expense,
    }
}
