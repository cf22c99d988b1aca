//! Chart encoding
//!
//! Turns a tabular series into a serialized Plotly figure. The encoders do no
//! rendering; the output is a data contract consumed by Plotly.js in the
//! browser. All randomness lives upstream in the generators, so encoding the
//! same series always yields the same bytes.

mod error;
pub mod figure;

pub use error::ChartError;
pub use figure::{Column, Figure, TRANSPARENT};

use figure::{Axis, ColorAxis, Layout, Legend, Line, Marker, Trace, TraceKind, LINE_COLORS};
use serde::Serialize;

/// Result type for chart encoding
pub type ChartResult<T> = std::result::Result<T, ChartError>;

/// Named-column view of a series
pub trait Frame {
    /// Values of the named column, or `None` if there is no such column
    fn column(&self, name: &str) -> Option<Column>;
}

/// Serialized chart document, ready to embed in a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SerializedChart(String);

impl SerializedChart {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for SerializedChart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn require_column<F: Frame + ?Sized>(series: &F, name: &str) -> ChartResult<Column> {
    series
        .column(name)
        .ok_or_else(|| ChartError::UnknownField(name.to_string()))
}

fn check_length(field: &str, column: &Column, expected: usize) -> ChartResult<()> {
    if column.len() != expected {
        return Err(ChartError::LengthMismatch {
            field: field.to_string(),
            expected,
            actual: column.len(),
        });
    }
    Ok(())
}

fn serialize(figure: &Figure) -> ChartResult<SerializedChart> {
    Ok(SerializedChart(serde_json::to_string(figure)?))
}

/// Multi-series line chart, one trace per y field
#[derive(Debug, Clone)]
pub struct LineChart {
    x_field: String,
    y_fields: Vec<String>,
    title: String,
    value_label: String,
    variable_label: String,
}

impl LineChart {
    pub fn new<I, S>(x_field: impl Into<String>, y_fields: I, title: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            x_field: x_field.into(),
            y_fields: y_fields.into_iter().map(Into::into).collect(),
            title: title.into(),
            value_label: "value".to_string(),
            variable_label: "variable".to_string(),
        }
    }

    /// Set the y-axis title and the legend title
    pub fn with_labels(mut self, value: impl Into<String>, variable: impl Into<String>) -> Self {
        self.value_label = value.into();
        self.variable_label = variable.into();
        self
    }

    pub fn figure<F: Frame + ?Sized>(&self, series: &F) -> ChartResult<Figure> {
        if self.y_fields.is_empty() {
            return Err(ChartError::NoSeries);
        }

        let x = require_column(series, &self.x_field)?;
        let mut data = Vec::with_capacity(self.y_fields.len());

        for (i, field) in self.y_fields.iter().enumerate() {
            let y = require_column(series, field)?;
            check_length(field, &y, x.len())?;

            data.push(Trace {
                kind: TraceKind::Scatter,
                name: field.clone(),
                x: x.clone(),
                y,
                xaxis: "x",
                yaxis: "y",
                mode: Some("lines"),
                orientation: None,
                legendgroup: Some(field.clone()),
                showlegend: true,
                line: Some(Line {
                    color: LINE_COLORS[i % LINE_COLORS.len()],
                    dash: "solid",
                }),
                marker: None,
                hovertemplate: format!(
                    "{}={}<br>{}=%{{x}}<br>{}=%{{y}}<extra></extra>",
                    self.variable_label, field, self.x_field, self.value_label
                ),
            });
        }

        let mut layout = Layout::new(
            self.title.clone(),
            Axis::new("y", self.x_field.clone()),
            Axis::new("x", self.value_label.clone()),
        );
        layout.legend = Some(Legend {
            title: figure::Title::new(self.variable_label.clone()),
            tracegroupgap: 0,
        });

        Ok(Figure { data, layout })
    }

    pub fn encode<F: Frame + ?Sized>(&self, series: &F) -> ChartResult<SerializedChart> {
        serialize(&self.figure(series)?)
    }
}

/// Single-series bar chart coloured by a numeric column
#[derive(Debug, Clone)]
pub struct BarChart {
    x_field: String,
    y_field: String,
    title: String,
    color_field: String,
}

impl BarChart {
    pub fn new(
        x_field: impl Into<String>,
        y_field: impl Into<String>,
        title: impl Into<String>,
        color_field: impl Into<String>,
    ) -> Self {
        Self {
            x_field: x_field.into(),
            y_field: y_field.into(),
            title: title.into(),
            color_field: color_field.into(),
        }
    }

    pub fn figure<F: Frame + ?Sized>(&self, series: &F) -> ChartResult<Figure> {
        let x = require_column(series, &self.x_field)?;
        let y = require_column(series, &self.y_field)?;
        let color = require_column(series, &self.color_field)?;
        check_length(&self.y_field, &y, x.len())?;
        check_length(&self.color_field, &color, x.len())?;

        let trace = Trace {
            kind: TraceKind::Bar,
            name: String::new(),
            x,
            y,
            xaxis: "x",
            yaxis: "y",
            mode: None,
            orientation: Some("v"),
            legendgroup: None,
            showlegend: false,
            line: None,
            marker: Some(Marker {
                color,
                coloraxis: "coloraxis",
            }),
            hovertemplate: format!(
                "{}=%{{x}}<br>{}=%{{y}}<br>{}=%{{marker.color}}<extra></extra>",
                self.x_field, self.y_field, self.color_field
            ),
        };

        let mut layout = Layout::new(
            self.title.clone(),
            Axis::new("y", self.x_field.clone()),
            Axis::new("x", self.y_field.clone()),
        );
        layout.coloraxis = Some(ColorAxis::blues(self.color_field.clone()));
        layout.barmode = Some("relative");

        Ok(Figure {
            data: vec![trace],
            layout,
        })
    }

    pub fn encode<F: Frame + ?Sized>(&self, series: &F) -> ChartResult<SerializedChart> {
        serialize(&self.figure(series)?)
    }
}

/// Encode a line chart with default axis labels
pub fn encode_line_chart<F, S>(
    series: &F,
    x_field: &str,
    y_fields: &[S],
    title: &str,
) -> ChartResult<SerializedChart>
where
    F: Frame + ?Sized,
    S: AsRef<str>,
{
    LineChart::new(x_field, y_fields.iter().map(AsRef::<str>::as_ref), title).encode(series)
}

/// Encode a bar chart coloured on the continuous `Blues` scale
pub fn encode_bar_chart<F: Frame + ?Sized>(
    series: &F,
    x_field: &str,
    y_field: &str,
    title: &str,
    color_field: &str,
) -> ChartResult<SerializedChart> {
    BarChart::new(x_field, y_field, title, color_field).encode(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{
        generate_performance_series, generate_usage_series, performance_columns as perf,
        usage_columns as usage, SeededRandom,
    };
    use chrono::{TimeZone, Utc};
    use serde_json::Value;

    fn perf_series() -> Vec<crate::metrics::PerformancePoint> {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        generate_performance_series(&mut SeededRandom::new(21), &now)
    }

    #[test]
    fn test_line_chart_shape() {
        let series = perf_series();
        let chart = LineChart::new(perf::DATE, [perf::ACCURACY, perf::RESPONSE_TIME], "AI模型性能趋势")
            .with_labels("数值", "指标")
            .encode(series.as_slice())
            .unwrap();

        let doc: Value = serde_json::from_str(chart.as_str()).unwrap();
        let data = doc["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        for trace in data {
            assert_eq!(trace["type"], "scatter");
            assert_eq!(trace["mode"], "lines");
            assert_eq!(trace["x"].as_array().unwrap().len(), 30);
            assert_eq!(trace["y"].as_array().unwrap().len(), 30);
        }
        assert_eq!(data[0]["name"], "准确率");
        assert_eq!(data[1]["name"], "响应时间(ms)");
        assert_eq!(data[0]["x"][29], "2024-05-31");

        let layout = &doc["layout"];
        assert_eq!(layout["title"]["text"], "AI模型性能趋势");
        assert_eq!(layout["yaxis"]["title"]["text"], "数值");
        assert_eq!(layout["legend"]["title"]["text"], "指标");
        assert_eq!(layout["plot_bgcolor"], TRANSPARENT);
        assert_eq!(layout["paper_bgcolor"], TRANSPARENT);
    }

    #[test]
    fn test_bar_chart_shape() {
        let series = generate_usage_series(&mut SeededRandom::new(9));
        let chart =
            encode_bar_chart(series.as_slice(), usage::FEATURE, usage::COUNT, "功能使用情况", usage::COUNT)
                .unwrap();

        let doc: Value = serde_json::from_str(chart.as_str()).unwrap();
        let trace = &doc["data"][0];
        assert_eq!(trace["type"], "bar");
        assert_eq!(trace["x"][0], "图像识别");
        assert_eq!(trace["marker"]["color"], trace["y"]);
        assert_eq!(trace["marker"]["coloraxis"], "coloraxis");

        let coloraxis = &doc["layout"]["coloraxis"];
        assert_eq!(coloraxis["colorbar"]["title"]["text"], "使用次数");
        assert_eq!(coloraxis["colorscale"].as_array().unwrap().len(), 9);
        assert_eq!(coloraxis["colorscale"][8][0], 1.0);
        assert_eq!(doc["layout"]["plot_bgcolor"], TRANSPARENT);
        assert_eq!(doc["layout"]["paper_bgcolor"], TRANSPARENT);
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let series = perf_series();
        let fields = [perf::ACCURACY, perf::RESPONSE_TIME];

        let a = encode_line_chart(series.as_slice(), perf::DATE, &fields, "t").unwrap();
        let b = encode_line_chart(series.clone().as_slice(), perf::DATE, &fields, "t").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unknown_field() {
        let series = perf_series();
        let err = encode_line_chart(series.as_slice(), perf::DATE, &["latency"], "t").unwrap_err();
        assert!(matches!(err, ChartError::UnknownField(ref f) if f == "latency"));

        let usage_series = generate_usage_series(&mut SeededRandom::new(1));
        let err = encode_bar_chart(usage_series.as_slice(), usage::FEATURE, usage::COUNT, "t", "colour")
            .unwrap_err();
        assert!(matches!(err, ChartError::UnknownField(_)));
    }

    #[test]
    fn test_line_chart_needs_fields() {
        let series = perf_series();
        let none: [&str; 0] = [];
        let err = encode_line_chart(series.as_slice(), perf::DATE, &none, "t").unwrap_err();
        assert!(matches!(err, ChartError::NoSeries));
    }

    struct Ragged;

    impl Frame for Ragged {
        fn column(&self, name: &str) -> Option<Column> {
            match name {
                "x" => Some(Column::Text(vec!["a".into(), "b".into()])),
                "y" => Some(Column::Integer(vec![1])),
                _ => None,
            }
        }
    }

    #[test]
    fn test_length_mismatch() {
        let err = encode_line_chart(&Ragged, "x", &["y"], "t").unwrap_err();
        assert!(matches!(
            err,
            ChartError::LengthMismatch {
                expected: 2,
                actual: 1,
                ..
            }
        ));
    }
}
