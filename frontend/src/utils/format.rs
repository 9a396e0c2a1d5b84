//! Display formatting for the Indonesian locale.
//!
//! Every helper here is total: input the backend sends in an unexpected shape
//! renders as [`FALLBACK`] instead of failing the view.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime};

use crate::config::APP_TIME_ZONE;

pub const FALLBACK: &str = "-";

const MONTHS_ID: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Formats an amount as Rupiah without fraction digits, e.g. `Rp 1.500.000`.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return FALLBACK.to_string();
    }
    let rounded = amount.round();
    let digits = format!("{}", rounded.abs() as u64);
    let grouped = group_thousands(&digits, '.');
    if rounded < 0.0 {
        format!("-Rp {}", grouped)
    } else {
        format!("Rp {}", grouped)
    }
}

fn group_thousands(digits: &str, separator: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

fn parse_date_time(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.with_timezone(&APP_TIME_ZONE).naive_local());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .ok()
        .or_else(|| parse_date_time(raw).map(|dt| dt.date()))
}

pub fn long_date(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        MONTHS_ID[date.month0() as usize],
        date.year()
    )
}

/// Long-form Indonesian date (`2 Januari 2025`), or `-` when unparsable.
pub fn format_date(raw: &str) -> String {
    parse_date(raw)
        .map(long_date)
        .unwrap_or_else(|| FALLBACK.to_string())
}

pub fn format_optional_date(raw: Option<&str>) -> String {
    raw.map(format_date).unwrap_or_else(|| FALLBACK.to_string())
}

/// Jakarta time of day as `HH.MM`.
///
/// Offset-carrying timestamps are converted; naive ones are already Jakarta
/// wall-clock and plain `HH:MM[:SS]` values are passed through.
pub fn format_time(raw: &str) -> String {
    let time = parse_date_time(raw)
        .map(|dt| dt.time())
        .or_else(|| NaiveTime::parse_from_str(raw.trim(), "%H:%M:%S").ok())
        .or_else(|| NaiveTime::parse_from_str(raw.trim(), "%H:%M").ok());
    time.map(|t| t.format("%H.%M").to_string())
        .unwrap_or_else(|| FALLBACK.to_string())
}

pub fn format_optional_time(raw: Option<&str>) -> String {
    raw.map(format_time).unwrap_or_else(|| FALLBACK.to_string())
}

pub fn format_date_time(raw: &str) -> String {
    match parse_date_time(raw) {
        Some(dt) => format!("{}, {}", long_date(dt.date()), dt.format("%H.%M")),
        None => FALLBACK.to_string(),
    }
}

pub fn format_minutes(minutes: i64) -> String {
    if minutes <= 0 {
        return "0 m".to_string();
    }
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{} m", m),
        (h, 0) => format!("{} h", h),
        (h, m) => format!("{} h {} m", h, m),
    }
}

pub fn format_percentage(value: f64) -> String {
    if !value.is_finite() {
        return FALLBACK.to_string();
    }
    format!("{:.1}%", value).replace('.', ",")
}

/// `YYYY-MM-DD`, the value format of `<input type="date">`.
pub fn input_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
