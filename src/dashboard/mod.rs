//! Dashboard composition
//!
//! Ties the controls to the aggregations through [`BINDINGS`] and renders the
//! results. The [`Dashboard`] only holds the shared, read-only dataset; control
//! values come with every request.

pub mod controls;
pub mod figure;
pub mod render;

pub use controls::{
    inputs_of, slots_for, BackgroundColor, Binding, ChartSlot, ControlId, ControlValues, BINDINGS,
};
pub use figure::Figure;

use crate::aggregation;
use crate::dataset::Dataset;
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

pub const DASHBOARD_TITLE: &str = "Spotify Popular Songs Dashboard";
pub const DASHBOARD_DESCRIPTION: &str =
    "This interactive dashboard explores trends among the most popular songs on Spotify.";
pub const DEFAULT_YEAR: i32 = 2020;

pub type Figures = BTreeMap<ChartSlot, Figure>;

#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct ControlOption {
    pub label: String,
    pub value: serde_json::Value,
}

#[derive(Clone, Serialize, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ControlKind {
    DateRange {
        min: Option<NaiveDate>,
        max: Option<NaiveDate>,
    },
    Radio {
        options: Vec<ControlOption>,
    },
    Dropdown {
        options: Vec<ControlOption>,
    },
}

#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct ControlSpec {
    pub id: ControlId,
    pub label: &'static str,
    #[serde(flatten)]
    pub kind: ControlKind,
}

#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct SlotSpec {
    pub slot: ChartSlot,
    pub heading: &'static str,
    pub inputs: &'static [ControlId],
}

/// Everything the page needs to draw itself on first load.
#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct DashboardLayout {
    pub title: &'static str,
    pub description: &'static str,
    pub slots: Vec<SlotSpec>,
    pub controls: Vec<ControlSpec>,
    pub values: ControlValues,
    pub figures: Figures,
}

pub struct Dashboard {
    dataset: Arc<Dataset>,
    default_year: i32,
}

impl Dashboard {
    pub fn new(dataset: Arc<Dataset>, default_year: i32) -> Dashboard {
        Dashboard {
            dataset,
            default_year,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn initial_values(&self) -> ControlValues {
        ControlValues::initial(&self.dataset, self.default_year)
    }

    /// Runs the aggregation behind `slot` with the current control values.
    pub fn evaluate(&self, slot: ChartSlot, values: &ControlValues) -> Figure {
        let dataset = self.dataset.as_ref();
        match slot {
            ChartSlot::StreamsOverTime => render::streams_line_figure(
                aggregation::streams_over_time(dataset, &values.date_range),
                values.line_color,
            ),
            ChartSlot::TopSongs => render::top_songs_figure(
                aggregation::top_songs_by_year(dataset, values.songs_year),
                values.songs_year,
            ),
            ChartSlot::TopArtists => render::top_artists_figure(
                aggregation::top_artists_by_year(dataset, values.artists_year),
                values.artists_year,
            ),
            ChartSlot::ModeDistribution => render::mode_pie_figure(
                aggregation::mode_distribution_by_year(dataset, values.mode_year),
                values.mode_year,
            ),
        }
    }

    /// Re-evaluates only the slots bound to `changed`.
    pub fn update(&self, values: &ControlValues, changed: ControlId) -> Figures {
        let slots = slots_for(changed);
        debug!("{:?} changed, updating {:?}", changed, slots);
        slots
            .into_iter()
            .map(|slot| (slot, self.evaluate(slot, values)))
            .collect()
    }

    pub fn layout(&self) -> DashboardLayout {
        let values = self.initial_values();
        let figures = ChartSlot::ALL
            .into_iter()
            .map(|slot| (slot, self.evaluate(slot, &values)))
            .collect();
        DashboardLayout {
            title: DASHBOARD_TITLE,
            description: DASHBOARD_DESCRIPTION,
            slots: ChartSlot::ALL
                .into_iter()
                .map(|slot| SlotSpec {
                    slot,
                    heading: slot.heading(),
                    inputs: inputs_of(slot),
                })
                .collect(),
            controls: self.control_specs(),
            values,
            figures,
        }
    }

    fn control_specs(&self) -> Vec<ControlSpec> {
        let span = self.dataset.date_span();
        let year_options: Vec<ControlOption> = self
            .dataset
            .years()
            .into_iter()
            .map(|year| ControlOption {
                label: year.to_string(),
                value: json!(year),
            })
            .collect();
        let year_dropdown = |id, label| ControlSpec {
            id,
            label,
            kind: ControlKind::Dropdown {
                options: year_options.clone(),
            },
        };

        vec![
            ControlSpec {
                id: ControlId::DateRange,
                label: "Date range",
                kind: ControlKind::DateRange {
                    min: span.map(|(min, _)| min),
                    max: span.map(|(_, max)| max),
                },
            },
            ControlSpec {
                id: ControlId::LineColor,
                label: "Background color",
                kind: ControlKind::Radio {
                    options: BackgroundColor::ALL
                        .into_iter()
                        .map(|color| ControlOption {
                            label: color.label().to_string(),
                            value: json!(color),
                        })
                        .collect(),
                },
            },
            year_dropdown(ControlId::SongsYear, "Year"),
            year_dropdown(ControlId::ArtistsYear, "Year"),
            year_dropdown(ControlId::ModeYear, "Year"),
        ]
    }
}
