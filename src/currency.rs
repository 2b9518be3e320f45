// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    Before,
    After,
}

/// Static reference data for one supported currency.
#[derive(Debug, Clone, Serialize)]
pub struct Currency {
    pub code: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
    pub position: SymbolPosition,
    pub decimal_places: u32,
    pub decimal_separator: char,
    pub thousands_separator: char,
}

pub const DEFAULT_CURRENCY: &str = "PKR";

const fn ccy(
    code: &'static str,
    symbol: &'static str,
    name: &'static str,
    position: SymbolPosition,
    decimal_places: u32,
    decimal_separator: char,
    thousands_separator: char,
) -> Currency {
    Currency {
        code,
        symbol,
        name,
        position,
        decimal_places,
        decimal_separator,
        thousands_separator,
    }
}

use SymbolPosition::{After, Before};

const TABLE: &[Currency] = &[
    ccy("USD", "$", "US Dollar", Before, 2, '.', ','),
    ccy("EUR", "€", "Euro", After, 2, ',', '.'),
    ccy("GBP", "£", "British Pound", Before, 2, '.', ','),
    ccy("JPY", "¥", "Japanese Yen", Before, 0, '.', ','),
    ccy("INR", "₹", "Indian Rupee", Before, 2, '.', ','),
    ccy("PKR", "₨", "Pakistani Rupee", Before, 2, '.', ','),
    ccy("AUD", "A$", "Australian Dollar", Before, 2, '.', ','),
    ccy("CAD", "C$", "Canadian Dollar", Before, 2, '.', ','),
    ccy("CNY", "¥", "Chinese Yuan", Before, 2, '.', ','),
    ccy("AED", "د.إ", "UAE Dirham", Before, 2, '.', ','),
    ccy("SAR", "﷼", "Saudi Riyal", Before, 2, '.', ','),
    ccy("SGD", "S$", "Singapore Dollar", Before, 2, '.', ','),
    ccy("VUV", "Vt", "Vanuatu Vatu", Before, 0, '.', ','),
    ccy("YER", "﷼", "Yemeni Rial", Before, 0, '.', ','),
    ccy("ZAR", "R", "South African Rand", Before, 2, '.', ','),
    ccy("ZMW", "ZK", "Zambian Kwacha", Before, 2, '.', ','),
    ccy("ZWL", "Z$", "Zimbabwean Dollar", Before, 2, '.', ','),
];

static BY_CODE: Lazy<BTreeMap<&'static str, &'static Currency>> =
    Lazy::new(|| TABLE.iter().map(|c| (c.code, c)).collect());

pub fn all() -> &'static [Currency] {
    TABLE
}

pub fn lookup(code: &str) -> Option<&'static Currency> {
    BY_CODE.get(code).copied()
}

/// Renders an amount for display in the given currency.
///
/// Unknown codes fall back to a plain numeric string. A whole-number amount
/// in a currency with decimals renders with no decimal places (100 -> "100",
/// not "100.00") -- a deliberate display simplification.
pub fn format_amount(amount: Decimal, code: &str) -> String {
    let Some(currency) = lookup(code) else {
        return amount.normalize().to_string();
    };

    let places = if currency.decimal_places > 0 && amount.fract().is_zero() {
        0
    } else {
        currency.decimal_places
    };
    let rounded = amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);

    let digits = format!("{:.*}", places as usize, rounded.abs());
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits.as_str(), None),
    };

    let mut number = String::new();
    if rounded.is_sign_negative() && !rounded.is_zero() {
        number.push('-');
    }
    number.push_str(&group_thousands(int_part, currency.thousands_separator));
    if let Some(frac) = frac_part {
        number.push(currency.decimal_separator);
        number.push_str(frac);
    }

    match currency.position {
        SymbolPosition::Before => format!("{}{}", currency.symbol, number),
        SymbolPosition::After => format!("{}{}", number, currency.symbol),
    }
}

/// Raw-input entry point: anything that does not parse as a number is
/// returned unchanged rather than erroring.
pub fn format_amount_str(raw: &str, code: &str) -> String {
    match raw.trim().parse::<Decimal>() {
        Ok(amount) => format_amount(amount, code),
        Err(_) => raw.to_string(),
    }
}

fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
