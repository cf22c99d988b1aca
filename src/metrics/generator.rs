//! Mock metric and series generation

use super::random::RandomSource;
use super::types::{
    Feature, MetricsSnapshot, PerformancePoint, UsagePoint, SYSTEM_STATUS, UPTIME,
};
use chrono::{DateTime, Days, TimeZone};

/// Number of daily points in the performance trend
pub const PERFORMANCE_DAYS: u64 = 30;

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Generate a fresh metrics snapshot
pub fn generate_metrics(rng: &mut impl RandomSource) -> MetricsSnapshot {
    MetricsSnapshot {
        model_accuracy: round_one_decimal(rng.uniform_f64(85.0, 99.0)),
        response_time: rng.uniform_u32(50, 200),
        active_users: rng.uniform_u32(1000, 5000),
        data_processed: rng.uniform_u32(10_000, 50_000),
        system_status: SYSTEM_STATUS.to_string(),
        uptime: UPTIME.to_string(),
    }
}

/// Generate the 30-day performance trend ending the day before `now`
///
/// Points are ordered oldest first. Each point is drawn independently of
/// the others.
pub fn generate_performance_series<Tz: TimeZone>(
    rng: &mut impl RandomSource,
    now: &DateTime<Tz>,
) -> Vec<PerformancePoint> {
    let today = now.date_naive();

    (1..=PERFORMANCE_DAYS)
        .rev()
        .filter_map(|days_back| today.checked_sub_days(Days::new(days_back)))
        .map(|date| PerformancePoint {
            date,
            accuracy: round_one_decimal(rng.uniform_f64(80.0, 98.0)),
            response_time: rng.uniform_u32(80, 250),
        })
        .collect()
}

/// Generate one usage count per feature, in [`Feature::ALL`] order
pub fn generate_usage_series(rng: &mut impl RandomSource) -> Vec<UsagePoint> {
    Feature::ALL
        .iter()
        .map(|&feature| UsagePoint {
            feature,
            count: rng.uniform_u32(100, 1000),
        })
        .collect()
}
