//! Plotly figure document
//!
//! The browser hands `data` and `layout` straight to `Plotly.newPlot`, so
//! field names here follow the Plotly.js schema. Struct field order fixes the
//! serialized key order, which keeps encoded output byte-stable.

use serde::Serialize;

/// Background colour applied to both plot and paper
pub const TRANSPARENT: &str = "rgba(0,0,0,0)";

/// Plotly's `Blues` sequential scale
pub const BLUES: [&str; 9] = [
    "rgb(247,251,255)",
    "rgb(222,235,247)",
    "rgb(198,219,239)",
    "rgb(158,202,225)",
    "rgb(107,174,214)",
    "rgb(66,146,198)",
    "rgb(33,113,181)",
    "rgb(8,81,156)",
    "rgb(8,48,107)",
];

/// Default qualitative colour sequence for line traces
pub const LINE_COLORS: [&str; 10] = [
    "#636efa", "#EF553B", "#00cc96", "#ab63fa", "#FFA15A", "#19d3f3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

/// A column of chart values
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Column {
    Text(Vec<String>),
    Float(Vec<f64>),
    Integer(Vec<i64>),
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Column::Text(v) => v.len(),
            Column::Float(v) => v.len(),
            Column::Integer(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Complete chart description
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceKind {
    Scatter,
    Bar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: TraceKind,
    pub name: String,
    pub x: Column,
    pub y: Column,
    pub xaxis: &'static str,
    pub yaxis: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legendgroup: Option<String>,
    pub showlegend: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    pub hovertemplate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub color: &'static str,
    pub dash: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub color: Column,
    pub coloraxis: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub anchor: &'static str,
    pub domain: [f64; 2],
    pub title: Title,
}

impl Axis {
    pub fn new(anchor: &'static str, title: impl Into<String>) -> Self {
        Self {
            anchor,
            domain: [0.0, 1.0],
            title: Title::new(title),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub title: Title,
    pub tracegroupgap: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorAxis {
    pub colorbar: ColorBar,
    pub colorscale: Vec<(f64, &'static str)>,
}

impl ColorAxis {
    /// Continuous `Blues` axis with stops spread evenly over `[0, 1]`
    pub fn blues(title: impl Into<String>) -> Self {
        let last = (BLUES.len() - 1) as f64;
        Self {
            colorbar: ColorBar {
                title: Title::new(title),
            },
            colorscale: BLUES
                .iter()
                .enumerate()
                .map(|(i, &color)| (i as f64 / last, color))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorBar {
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Margin {
    pub t: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    pub xaxis: Axis,
    pub yaxis: Axis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coloraxis: Option<ColorAxis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barmode: Option<&'static str>,
    pub margin: Margin,
    pub plot_bgcolor: &'static str,
    pub paper_bgcolor: &'static str,
}

impl Layout {
    pub fn new(title: impl Into<String>, xaxis: Axis, yaxis: Axis) -> Self {
        Self {
            title: Title::new(title),
            xaxis,
            yaxis,
            legend: None,
            coloraxis: None,
            barmode: None,
            margin: Margin { t: 60 },
            plot_bgcolor: TRANSPARENT,
            paper_bgcolor: TRANSPARENT,
        }
    }
}
