use chrono::{DateTime, Utc};
use num_format::{Locale, ToFormattedString};

/// Weekday plus 24-hour clock, e.g. `Tue 14:05`.
pub const TIME_LABEL_PATTERN: &str = "%a %H:%M";

const MAX_VALUE_PRECISION: usize = 12;

/// Formats an epoch-millisecond tick as a UTC weekday/time label.
#[must_use]
pub fn format_time_label(time_ms: f64) -> String {
    if !time_ms.is_finite() {
        return "nan".to_owned();
    }
    let Some(dt) = DateTime::<Utc>::from_timestamp_millis(time_ms.round() as i64) else {
        return format!("{time_ms:.0}");
    };
    dt.format(TIME_LABEL_PATTERN).to_string()
}

/// Decimal places needed to tell ticks `step` apart: `max(0, -floor(log10(step)))`.
#[must_use]
pub fn value_label_precision(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    let digits = -step.log10().floor();
    if digits <= 0.0 {
        0
    } else {
        (digits as usize).min(MAX_VALUE_PRECISION)
    }
}

/// Fewest decimals (up to 6) that represent a lone tick value exactly.
#[must_use]
pub fn value_label_precision_for_value(value: f64) -> usize {
    if !value.is_finite() {
        return 0;
    }
    (0..=6)
        .find(|&precision| {
            let factor = 10f64.powi(precision as i32);
            ((value * factor).round() / factor - value).abs() <= f64::EPSILON * value.abs().max(1.0)
        })
        .unwrap_or(6)
}

/// Fixed-point label with thousands separators, e.g. `-1,234.50`.
#[must_use]
pub fn format_value_label(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return "nan".to_owned();
    }

    let precision = precision.min(MAX_VALUE_PRECISION);
    let fixed = format!("{:.precision$}", value.abs());
    let (integer_text, fraction_text) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let grouped = integer_text
        .parse::<u128>()
        .map(|integer| integer.to_formatted_string(&Locale::en))
        .unwrap_or_else(|_| integer_text.to_owned());

    // Values that round to zero never carry a sign.
    let is_zero = fixed.bytes().all(|b| b == b'0' || b == b'.');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    match fraction_text {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}
