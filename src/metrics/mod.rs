//! Mock dashboard data
//!
//! Everything here is simulated: the generators draw from an injected
//! [`RandomSource`] and keep no state between calls.

mod generator;
pub mod random;
mod types;

pub use generator::{
    generate_metrics, generate_performance_series, generate_usage_series, PERFORMANCE_DAYS,
};
pub use random::{RandomSource, SeededRandom, ThreadRandom};
pub use types::{
    Feature, MetricsSnapshot, PerformancePoint, UsagePoint, SYSTEM_STATUS, UPTIME,
};

use crate::charts::{Column, Frame};

/// Column names of the performance series when charted
pub mod performance_columns {
    pub const DATE: &str = "Date";
    pub const ACCURACY: &str = "准确率";
    pub const RESPONSE_TIME: &str = "响应时间(ms)";
}

/// Column names of the usage series when charted
pub mod usage_columns {
    pub const FEATURE: &str = "功能";
    pub const COUNT: &str = "使用次数";
}

impl Frame for [PerformancePoint] {
    fn column(&self, name: &str) -> Option<Column> {
        match name {
            performance_columns::DATE => Some(Column::Text(
                self.iter()
                    .map(|p| p.date.format("%Y-%m-%d").to_string())
                    .collect(),
            )),
            performance_columns::ACCURACY => {
                Some(Column::Float(self.iter().map(|p| p.accuracy).collect()))
            }
            performance_columns::RESPONSE_TIME => Some(Column::Integer(
                self.iter().map(|p| i64::from(p.response_time)).collect(),
            )),
            _ => None,
        }
    }
}

impl Frame for [UsagePoint] {
    fn column(&self, name: &str) -> Option<Column> {
        match name {
            usage_columns::FEATURE => Some(Column::Text(
                self.iter().map(|p| p.feature.label().to_string()).collect(),
            )),
            usage_columns::COUNT => Some(Column::Integer(
                self.iter().map(|p| i64::from(p.count)).collect(),
            )),
            _ => None,
        }
    }
}
