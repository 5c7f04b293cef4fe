//! Chart specifications in the shape Plotly.js expects for `Plotly.react(div, data, layout)`.

use serde::Serialize;

#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Clone, Serialize, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Scatter {
        x: Vec<String>,
        y: Vec<u64>,
        mode: &'static str,
        name: &'static str,
    },
    Bar {
        x: Vec<String>,
        y: Vec<u64>,
    },
    Pie {
        labels: Vec<String>,
        values: Vec<u64>,
    },
}

#[derive(Clone, Serialize, Debug, Default, PartialEq)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot_bgcolor: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper_bgcolor: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
}

#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Option<Title> {
        Some(Title { text: text.into() })
    }
}

#[derive(Clone, Serialize, Debug, Default, PartialEq)]
pub struct Font {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
}

#[derive(Clone, Serialize, Debug, Default, PartialEq)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub axis_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickangle: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rangeslider: Option<RangeSlider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct RangeSlider {
    pub visible: bool,
}

/// Text placed in paper coordinates, (0.5, 0.5) is the center of the plot.
#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct Annotation {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub xref: &'static str,
    pub yref: &'static str,
    pub showarrow: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
}

impl Annotation {
    pub fn centered(text: impl Into<String>, font: Option<Font>) -> Annotation {
        Annotation {
            text: text.into(),
            x: 0.5,
            y: 0.5,
            xref: "paper",
            yref: "paper",
            showarrow: false,
            font,
        }
    }
}
