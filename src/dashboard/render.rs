use super::controls::BackgroundColor;
use super::figure::{Annotation, Axis, Figure, Font, Layout, RangeSlider, Title, Trace};
use crate::aggregation::{LabelTotal, ModeCounts, NoData, RankedStreams, StreamsByDate};

const BAR_CHART_HEIGHT: u32 = 500;
const BAR_TICK_ANGLE: i32 = -45;
const RANGE_MESSAGE_FONT_SIZE: u32 = 18;

/// Blank chart with the no-data message in the middle.
pub fn empty_figure(no_data: NoData) -> Figure {
    let font = match no_data {
        NoData::EmptyRange => Some(Font {
            size: Some(RANGE_MESSAGE_FONT_SIZE),
            color: None,
        }),
        _ => None,
    };
    let hidden = || {
        Some(Axis {
            visible: Some(false),
            ..Default::default()
        })
    };
    Figure {
        data: vec![],
        layout: Layout {
            xaxis: hidden(),
            yaxis: hidden(),
            annotations: vec![Annotation::centered(no_data.message(), font)],
            ..Default::default()
        },
    }
}

pub fn streams_line_figure(result: Result<StreamsByDate, NoData>, color: BackgroundColor) -> Figure {
    let rows = match result {
        Ok(rows) => rows,
        Err(no_data) => return empty_figure(no_data),
    };
    let (x, y) = rows
        .into_iter()
        .map(|row| (row.date.format("%Y-%m-%d").to_string(), row.streams))
        .unzip();
    Figure {
        data: vec![Trace::Scatter {
            x,
            y,
            mode: "lines",
            name: "Streams",
        }],
        layout: Layout {
            title: Title::new("Streams over time"),
            plot_bgcolor: Some(color.css()),
            paper_bgcolor: Some(color.css()),
            font: Some(Font {
                size: None,
                color: Some(color.contrast()),
            }),
            xaxis: Some(Axis {
                axis_type: Some("date"),
                rangeslider: Some(RangeSlider { visible: true }),
                ..Default::default()
            }),
            ..Default::default()
        },
    }
}

pub fn top_artists_figure(result: Result<RankedStreams, NoData>, year: i32) -> Figure {
    match result {
        Ok(rows) => ranked_bar_figure(
            rows,
            format!("Top 10 most streamed artists in {}", year),
            "Artist",
        ),
        Err(no_data) => empty_figure(no_data),
    }
}

pub fn top_songs_figure(result: Result<RankedStreams, NoData>, year: i32) -> Figure {
    match result {
        Ok(rows) => ranked_bar_figure(
            rows,
            format!("Top 5 most streamed songs in {}", year),
            "Song",
        ),
        Err(no_data) => empty_figure(no_data),
    }
}

pub fn mode_pie_figure(result: Result<ModeCounts, NoData>, year: i32) -> Figure {
    let rows = match result {
        Ok(rows) => rows,
        Err(no_data) => return empty_figure(no_data),
    };
    let (labels, values) = split_labels(rows);
    Figure {
        data: vec![Trace::Pie { labels, values }],
        layout: Layout {
            title: Title::new(format!("Musical mode distribution in {}", year)),
            ..Default::default()
        },
    }
}

fn ranked_bar_figure(rows: Vec<LabelTotal>, title: String, category: &str) -> Figure {
    let (x, y) = split_labels(rows);
    Figure {
        data: vec![Trace::Bar { x, y }],
        layout: Layout {
            title: Title::new(title),
            height: Some(BAR_CHART_HEIGHT),
            xaxis: Some(Axis {
                title: Title::new(category),
                tickangle: Some(BAR_TICK_ANGLE),
                ..Default::default()
            }),
            yaxis: Some(Axis {
                title: Title::new("Streams"),
                ..Default::default()
            }),
            ..Default::default()
        },
    }
}

fn split_labels(rows: Vec<LabelTotal>) -> (Vec<String>, Vec<u64>) {
    rows.into_iter().map(|row| (row.label, row.value)).unzip()
}
