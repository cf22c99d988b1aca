//! Generated record types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fixed status string reported by every snapshot
pub const SYSTEM_STATUS: &str = "正常运行";

/// Fixed uptime string reported by every snapshot
pub const UPTIME: &str = "99.9%";

/// One set of headline dashboard metrics
///
/// Created fresh for every request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// Percent, `[85, 99]`, one decimal place
    pub model_accuracy: f64,
    /// Milliseconds, `[50, 200]`
    pub response_time: u32,
    /// `[1000, 5000]`
    pub active_users: u32,
    /// `[10000, 50000]`
    pub data_processed: u32,
    pub system_status: String,
    pub uptime: String,
}

/// One day of the simulated performance trend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformancePoint {
    pub date: NaiveDate,
    /// Percent, `[80, 98]`, one decimal place
    pub accuracy: f64,
    /// Milliseconds, `[80, 250]`
    pub response_time: u32,
}

/// Product features tracked by the usage chart, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    ImageRecognition,
    NaturalLanguageProcessing,
    PredictiveAnalytics,
    DataMining,
    Automation,
}

impl Feature {
    /// All features in their fixed declared order
    pub const ALL: [Feature; 5] = [
        Feature::ImageRecognition,
        Feature::NaturalLanguageProcessing,
        Feature::PredictiveAnalytics,
        Feature::DataMining,
        Feature::Automation,
    ];

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            Feature::ImageRecognition => "图像识别",
            Feature::NaturalLanguageProcessing => "自然语言处理",
            Feature::PredictiveAnalytics => "预测分析",
            Feature::DataMining => "数据挖掘",
            Feature::Automation => "自动化",
        }
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Usage count for one feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsagePoint {
    pub feature: Feature,
    /// `[100, 1000]`
    pub count: u32,
}
