use crate::aggregation::DateRange;
use crate::dataset::Dataset;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ControlId {
    DateRange,
    LineColor,
    SongsYear,
    ArtistsYear,
    ModeYear,
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ChartSlot {
    StreamsOverTime,
    TopSongs,
    TopArtists,
    ModeDistribution,
}

impl ChartSlot {
    /// In page order.
    pub const ALL: [ChartSlot; 4] = [
        ChartSlot::StreamsOverTime,
        ChartSlot::TopSongs,
        ChartSlot::TopArtists,
        ChartSlot::ModeDistribution,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ChartSlot::StreamsOverTime => "streams_over_time",
            ChartSlot::TopSongs => "top_songs",
            ChartSlot::TopArtists => "top_artists",
            ChartSlot::ModeDistribution => "mode_distribution",
        }
    }

    pub fn from_id(id: &str) -> Option<ChartSlot> {
        ChartSlot::ALL.into_iter().find(|slot| slot.id() == id)
    }

    pub fn heading(&self) -> &'static str {
        match self {
            ChartSlot::StreamsOverTime => "Streams over time",
            ChartSlot::TopSongs => "Top 5 most streamed songs by year",
            ChartSlot::TopArtists => "Top 10 artists by year",
            ChartSlot::ModeDistribution => "Musical mode distribution by year",
        }
    }
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundColor {
    #[default]
    White,
    Black,
}

impl BackgroundColor {
    pub const ALL: [BackgroundColor; 2] = [BackgroundColor::White, BackgroundColor::Black];

    pub fn css(&self) -> &'static str {
        match self {
            BackgroundColor::White => "white",
            BackgroundColor::Black => "black",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BackgroundColor::White => "Light",
            BackgroundColor::Black => "Dark",
        }
    }

    /// Text color readable on top of this background.
    pub fn contrast(&self) -> &'static str {
        match self {
            BackgroundColor::White => "#222222",
            BackgroundColor::Black => "#eeeeee",
        }
    }
}

/// Declares which controls feed a chart slot.
#[derive(Clone, Copy, Serialize, Debug, PartialEq, Eq)]
pub struct Binding {
    pub slot: ChartSlot,
    pub inputs: &'static [ControlId],
}

pub const BINDINGS: [Binding; 4] = [
    Binding {
        slot: ChartSlot::StreamsOverTime,
        inputs: &[ControlId::DateRange, ControlId::LineColor],
    },
    Binding {
        slot: ChartSlot::TopSongs,
        inputs: &[ControlId::SongsYear],
    },
    Binding {
        slot: ChartSlot::TopArtists,
        inputs: &[ControlId::ArtistsYear],
    },
    Binding {
        slot: ChartSlot::ModeDistribution,
        inputs: &[ControlId::ModeYear],
    },
];

pub fn inputs_of(slot: ChartSlot) -> &'static [ControlId] {
    BINDINGS
        .iter()
        .find(|binding| binding.slot == slot)
        .map(|binding| binding.inputs)
        .unwrap_or(&[])
}

/// Slots to re-evaluate when `control` changes.
pub fn slots_for(control: ControlId) -> Vec<ChartSlot> {
    BINDINGS
        .iter()
        .filter(|binding| binding.inputs.contains(&control))
        .map(|binding| binding.slot)
        .collect()
}

/// The current value of every control on one page.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct ControlValues {
    pub date_range: DateRange,
    pub line_color: BackgroundColor,
    pub songs_year: i32,
    pub artists_year: i32,
    pub mode_year: i32,
}

impl ControlValues {
    pub fn initial(dataset: &Dataset, default_year: i32) -> ControlValues {
        // 1970-01-01 when there is nothing to span, the range chart then shows no data.
        let (start, end) = dataset
            .date_span()
            .unwrap_or((NaiveDate::default(), NaiveDate::default()));
        ControlValues {
            date_range: DateRange::new(start, end),
            line_color: BackgroundColor::default(),
            songs_year: default_year,
            artists_year: default_year,
            mode_year: default_year,
        }
    }
}
