//! Nice tick placement for linear value domains and UTC time domains.
//!
//! Both generators return ascending values inside the inclusive domain. A
//! zero-width domain yields exactly one tick; non-finite input yields none.

use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};

const SECOND_MS: f64 = 1_000.0;
const MINUTE_MS: f64 = 60.0 * SECOND_MS;
const HOUR_MS: f64 = 60.0 * MINUTE_MS;
const DAY_MS: f64 = 24.0 * HOUR_MS;
const WEEK_MS: f64 = 7.0 * DAY_MS;
const MONTH_MS: f64 = 30.0 * DAY_MS;
const YEAR_MS: f64 = 365.0 * DAY_MS;

/// Upper bound on emitted ticks regardless of the requested hint.
pub const MAX_TICKS: usize = 1_000;

/// Upper bound on calendar days visited by a single day or week enumeration.
const MAX_DAY_WALK: usize = 31 * MAX_TICKS;

/// Index-space slack absorbing float error in `value / step`.
const INDEX_EPSILON: f64 = 1e-9;

/// Step size from `{1, 2, 5} × 10^k` giving roughly `count` intervals over the span.
///
/// Returns `None` for empty, zero-width or non-finite spans.
#[must_use]
pub fn nice_tick_step(start: f64, end: f64, count: usize) -> Option<f64> {
    if count == 0 {
        return None;
    }
    let span = (end - start).abs();
    if !span.is_finite() || span == 0.0 {
        return None;
    }

    let count = count.min(MAX_TICKS) as f64;
    let mut step = 10f64.powf((span / count).log10().floor());
    let error = count / span * step;
    if error <= 0.15 {
        step *= 10.0;
    } else if error <= 0.35 {
        step *= 5.0;
    } else if error <= 0.75 {
        step *= 2.0;
    }

    (step.is_finite() && step > 0.0).then_some(step)
}

/// Ascending multiples of the nice step inside `[start, end]`.
#[must_use]
pub fn linear_ticks(start: f64, end: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !end.is_finite() {
        return Vec::new();
    }
    let (lo, hi) = (start.min(end), start.max(end));
    if lo == hi {
        return vec![lo];
    }
    let Some(step) = nice_tick_step(lo, hi, count) else {
        return vec![lo];
    };

    // Sub-unit steps divide by the inverse so 0.1-style ticks stay exact.
    if step < 1.0 {
        let inverse = (1.0 / step).round();
        index_ticks(lo * inverse, hi * inverse, |index| index / inverse)
    } else {
        index_ticks(lo / step, hi / step, |index| index * step)
    }
}

fn index_ticks(lo_index: f64, hi_index: f64, to_value: impl Fn(f64) -> f64) -> Vec<f64> {
    let first = (lo_index - INDEX_EPSILON).ceil();
    let last = (hi_index + INDEX_EPSILON).floor();
    if !first.is_finite() || !last.is_finite() || last < first {
        return Vec::new();
    }

    // Clamp before the cast so `+ 1` cannot overflow.
    let count = (last - first).min((MAX_TICKS - 1) as f64) as usize + 1;
    (0..count)
        .map(|offset| to_value(first + offset as f64))
        .collect()
}

/// Calendar-aware tick interval for UTC time axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TimeTickInterval {
    /// Sub-second spans fall back to nice linear millisecond steps.
    Milliseconds(f64),
    Seconds(u32),
    Minutes(u32),
    Hours(u32),
    /// Days whose day-of-month index is a multiple of the step.
    Days(u32),
    /// Sunday midnights.
    Weeks,
    /// Month starts whose month index is a multiple of the step.
    Months(u32),
    /// January 1st of years that are a multiple of the step.
    Years(u32),
}

impl TimeTickInterval {
    #[must_use]
    pub fn approx_duration_ms(self) -> f64 {
        match self {
            Self::Milliseconds(step) => step,
            Self::Seconds(step) => f64::from(step) * SECOND_MS,
            Self::Minutes(step) => f64::from(step) * MINUTE_MS,
            Self::Hours(step) => f64::from(step) * HOUR_MS,
            Self::Days(step) => f64::from(step) * DAY_MS,
            Self::Weeks => WEEK_MS,
            Self::Months(step) => f64::from(step) * MONTH_MS,
            Self::Years(step) => f64::from(step) * YEAR_MS,
        }
    }
}

const TIME_TICK_INTERVALS: [TimeTickInterval; 18] = [
    TimeTickInterval::Seconds(1),
    TimeTickInterval::Seconds(5),
    TimeTickInterval::Seconds(15),
    TimeTickInterval::Seconds(30),
    TimeTickInterval::Minutes(1),
    TimeTickInterval::Minutes(5),
    TimeTickInterval::Minutes(15),
    TimeTickInterval::Minutes(30),
    TimeTickInterval::Hours(1),
    TimeTickInterval::Hours(3),
    TimeTickInterval::Hours(6),
    TimeTickInterval::Hours(12),
    TimeTickInterval::Days(1),
    TimeTickInterval::Days(2),
    TimeTickInterval::Weeks,
    TimeTickInterval::Months(1),
    TimeTickInterval::Months(3),
    TimeTickInterval::Years(1),
];

/// Picks the interval whose duration is closest (in ratio) to `span / count`.
///
/// Spans under one second use nice millisecond steps; targets of one year or
/// more use nice whole-year steps.
#[must_use]
pub fn select_time_interval(start_ms: f64, end_ms: f64, count: usize) -> Option<TimeTickInterval> {
    if count == 0 {
        return None;
    }
    let span = (end_ms - start_ms).abs();
    if !span.is_finite() || span == 0.0 {
        return None;
    }

    let target = span / count.min(MAX_TICKS) as f64;
    let index = TIME_TICK_INTERVALS.partition_point(|i| i.approx_duration_ms() <= target);

    // Targets of a year or more switch to nice multi-year steps.
    if index == TIME_TICK_INTERVALS.len() {
        let step = nice_tick_step(start_ms / YEAR_MS, end_ms / YEAR_MS, count)?;
        return Some(TimeTickInterval::Years(step.max(1.0).round() as u32));
    }
    if index == 0 {
        return nice_tick_step(start_ms, end_ms, count).map(TimeTickInterval::Milliseconds);
    }

    let below = TIME_TICK_INTERVALS[index - 1];
    let above = TIME_TICK_INTERVALS[index];
    if target / below.approx_duration_ms() < above.approx_duration_ms() / target {
        Some(below)
    } else {
        Some(above)
    }
}

/// Ascending UTC tick times (epoch milliseconds) inside `[start_ms, end_ms]`.
#[must_use]
pub fn time_ticks(start_ms: f64, end_ms: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start_ms.is_finite() || !end_ms.is_finite() {
        return Vec::new();
    }
    let (lo, hi) = (start_ms.min(end_ms), start_ms.max(end_ms));
    if lo == hi {
        return vec![lo];
    }
    let Some(interval) = select_time_interval(lo, hi, count) else {
        return vec![lo];
    };

    time_ticks_with_interval(lo, hi, interval)
}

/// Enumerates the ticks of a fixed interval inside `[lo, hi]`.
#[must_use]
pub fn time_ticks_with_interval(lo: f64, hi: f64, interval: TimeTickInterval) -> Vec<f64> {
    match interval {
        TimeTickInterval::Milliseconds(step) => linear_ticks_with_step(lo, hi, step),
        TimeTickInterval::Seconds(_)
        | TimeTickInterval::Minutes(_)
        | TimeTickInterval::Hours(_) => {
            // Sub-day units stay aligned to UTC because the epoch is a UTC midnight.
            linear_ticks_with_step(lo, hi, interval.approx_duration_ms())
        }
        TimeTickInterval::Days(step) => {
            let step = step.max(1);
            day_ticks(lo, hi, |date| date.day0() % step == 0)
        }
        TimeTickInterval::Weeks => day_ticks(lo, hi, |date| date.weekday() == Weekday::Sun),
        TimeTickInterval::Months(step) => month_ticks(lo, hi, step.max(1)),
        TimeTickInterval::Years(step) => year_ticks(lo, hi, step.max(1)),
    }
}

fn linear_ticks_with_step(lo: f64, hi: f64, step: f64) -> Vec<f64> {
    if !step.is_finite() || step <= 0.0 {
        return Vec::new();
    }
    index_ticks(lo / step, hi / step, |index| index * step)
}

fn utc_from_millis(ms: f64) -> Option<DateTime<Utc>> {
    if !ms.is_finite() {
        return None;
    }
    DateTime::<Utc>::from_timestamp_millis(ms.floor() as i64)
}

fn midnight_ms(date: NaiveDate) -> Option<f64> {
    date.and_hms_opt(0, 0, 0)
        .map(|time| time.and_utc().timestamp_millis() as f64)
}

fn day_ticks(lo: f64, hi: f64, keep: impl Fn(NaiveDate) -> bool) -> Vec<f64> {
    let Some(start) = utc_from_millis(lo) else {
        return Vec::new();
    };
    let span_days = ((hi - lo) / DAY_MS).ceil().clamp(0.0, MAX_DAY_WALK as f64) as usize;

    let mut ticks = Vec::new();
    let mut day = start.date_naive();
    for _ in 0..=span_days {
        let Some(ms) = midnight_ms(day) else {
            break;
        };
        if ms > hi || ticks.len() >= MAX_TICKS {
            break;
        }
        if ms >= lo && keep(day) {
            ticks.push(ms);
        }
        let Some(next) = day.succ_opt() else {
            break;
        };
        day = next;
    }
    ticks
}

fn month_ticks(lo: f64, hi: f64, step: u32) -> Vec<f64> {
    let Some(start) = utc_from_millis(lo) else {
        return Vec::new();
    };

    let mut ticks = Vec::new();
    let (mut year, mut month0) = (start.year(), start.month0());
    while let Some(ms) = NaiveDate::from_ymd_opt(year, month0 + 1, 1).and_then(midnight_ms) {
        if ms > hi || ticks.len() >= MAX_TICKS {
            break;
        }
        if ms >= lo && month0 % step == 0 {
            ticks.push(ms);
        }
        month0 += 1;
        if month0 == 12 {
            month0 = 0;
            year += 1;
        }
    }
    ticks
}

fn year_ticks(lo: f64, hi: f64, step: u32) -> Vec<f64> {
    let Some(start) = utc_from_millis(lo) else {
        return Vec::new();
    };

    let step = i32::try_from(step).unwrap_or(i32::MAX);
    let mut ticks = Vec::new();
    let mut year = start.year();
    while let Some(ms) = NaiveDate::from_ymd_opt(year, 1, 1).and_then(midnight_ms) {
        if ms > hi || ticks.len() >= MAX_TICKS {
            break;
        }
        if ms >= lo && year.rem_euclid(step) == 0 {
            ticks.push(ms);
        }
        year += 1;
    }
    ticks
}

#[cfg(test)]
mod tests {
    use super::{
        MAX_TICKS, TimeTickInterval, linear_ticks, nice_tick_step, select_time_interval,
        time_ticks_with_interval,
    };

    #[test]
    fn nice_step_picks_from_one_two_five_sequence() {
        assert_eq!(nice_tick_step(0.0, 100.0, 10), Some(10.0));
        assert_eq!(nice_tick_step(0.0, 100.0, 3), Some(50.0));
        let decimal = nice_tick_step(0.0, 1.0, 10).expect("step");
        assert!((decimal - 0.1).abs() <= 1e-12);
        assert_eq!(nice_tick_step(0.0, 7.0, 3), Some(2.0));
    }

    #[test]
    fn sub_unit_ticks_are_exact_decimals() {
        let ticks = linear_ticks(0.0, 1.0, 10);
        assert_eq!(ticks.len(), 11);
        assert_eq!(ticks[3], 0.3);
        assert_eq!(ticks[7], 0.7);
    }

    #[test]
    fn hour_span_selects_minute_interval() {
        let interval = select_time_interval(0.0, 3_600_000.0, 10).expect("interval");
        assert_eq!(interval, TimeTickInterval::Minutes(5));
    }

    #[test]
    fn sub_second_span_falls_back_to_milliseconds() {
        let interval = select_time_interval(0.0, 500.0, 10).expect("interval");
        assert_eq!(interval, TimeTickInterval::Milliseconds(50.0));
    }

    #[test]
    fn fixed_intervals_over_huge_spans_are_capped() {
        let seconds = time_ticks_with_interval(0.0, 1e25, TimeTickInterval::Seconds(1));
        assert_eq!(seconds.len(), MAX_TICKS);

        let weeks = time_ticks_with_interval(0.0, 1e25, TimeTickInterval::Weeks);
        assert_eq!(weeks.len(), MAX_TICKS);
    }
}
