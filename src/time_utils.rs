// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, Datelike, Utc};

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Format a UTC timestamp as "{Month name} {day}", e.g. "April 14".
pub fn format_month_day(date: DateTime<Utc>) -> String {
    let month = MONTHS[date.month0() as usize];
    format!("{} {}", month, date.day())
}
