//! Property tests for the mock data generators

use ai_dashboard::charts::{encode_line_chart, TRANSPARENT};
use ai_dashboard::metrics::{
    generate_metrics, generate_performance_series, generate_usage_series,
    performance_columns as perf, Feature, SeededRandom,
};
use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;

proptest! {
    #[test]
    fn metrics_stay_in_range(seed in any::<u64>()) {
        let m = generate_metrics(&mut SeededRandom::new(seed));
        prop_assert!((85.0..=99.0).contains(&m.model_accuracy));
        prop_assert!((50..=200).contains(&m.response_time));
        prop_assert!((1000..=5000).contains(&m.active_users));
        prop_assert!((10_000..=50_000).contains(&m.data_processed));
    }

    #[test]
    fn performance_series_is_daily(seed in any::<u64>(), secs in 0i64..4_000_000_000) {
        let now = Utc.timestamp_opt(secs, 0).unwrap();
        let series = generate_performance_series(&mut SeededRandom::new(seed), &now);

        prop_assert_eq!(series.len(), 30);
        prop_assert_eq!(series[29].date, now.date_naive() - Duration::days(1));
        for pair in series.windows(2) {
            prop_assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }
        for p in &series {
            prop_assert!((80.0..=98.0).contains(&p.accuracy));
            prop_assert!((80..=250).contains(&p.response_time));
        }
    }

    #[test]
    fn usage_series_follows_feature_order(seed in any::<u64>()) {
        let series = generate_usage_series(&mut SeededRandom::new(seed));
        let features: Vec<_> = series.iter().map(|p| p.feature).collect();
        prop_assert_eq!(features, Feature::ALL.to_vec());
        prop_assert!(series.iter().all(|p| (100..=1000).contains(&p.count)));
    }

    #[test]
    fn line_encoding_is_stable(seed in any::<u64>()) {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let series = generate_performance_series(&mut SeededRandom::new(seed), &now);
        let fields = [perf::ACCURACY, perf::RESPONSE_TIME];

        let first = encode_line_chart(series.as_slice(), perf::DATE, &fields, "trend").unwrap();
        let second = encode_line_chart(series.as_slice(), perf::DATE, &fields, "trend").unwrap();
        prop_assert_eq!(first.as_str(), second.as_str());

        let doc: serde_json::Value = serde_json::from_str(first.as_str()).unwrap();
        prop_assert_eq!(doc["data"][0]["y"].as_array().unwrap().len(), 30);
        prop_assert_eq!(doc["data"][1]["y"].as_array().unwrap().len(), 30);
        prop_assert_eq!(&doc["layout"]["plot_bgcolor"], TRANSPARENT);
    }
}
