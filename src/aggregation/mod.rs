//! The four dashboard aggregations
//!
//! Each function is a pure group-by/sum/sort/head over the immutable [`Dataset`],
//! returning either a small ordered table or a [`NoData`] signal. Nothing is cached,
//! every call recomputes from the dataset.

mod no_data;

pub use no_data::NoData;

use crate::dataset::{Dataset, SongRecord};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

pub const TOP_ARTISTS_LIMIT: usize = 10;
pub const TOP_SONGS_LIMIT: usize = 5;

/// Inclusive on both ends. A range with `start > end` is valid and matches nothing.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> DateRange {
        DateRange { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[derive(Clone, Serialize, Debug, PartialEq, Eq)]
pub struct DateTotal {
    pub date: NaiveDate,
    pub streams: u64,
}

#[derive(Clone, Serialize, Debug, PartialEq, Eq)]
pub struct LabelTotal {
    pub label: String,
    pub value: u64,
}

/// Summed streams per release date, ascending by date.
pub type StreamsByDate = Vec<DateTotal>;
/// Summed streams per label, descending by value.
pub type RankedStreams = Vec<LabelTotal>;
/// Occurrences per mode label, descending by count.
pub type ModeCounts = Vec<LabelTotal>;

pub fn streams_over_time(dataset: &Dataset, range: &DateRange) -> Result<StreamsByDate, NoData> {
    let mut totals: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for record in dataset
        .records()
        .iter()
        .filter(|r| range.contains(r.release_date))
    {
        let total = totals.entry(record.release_date).or_default();
        *total = total.saturating_add(record.streams.unwrap_or(0));
    }

    if totals.is_empty() {
        return Err(NoData::EmptyRange);
    }
    Ok(totals
        .into_iter()
        .map(|(date, streams)| DateTotal { date, streams })
        .collect())
}

pub fn top_artists_by_year(dataset: &Dataset, year: i32) -> Result<RankedStreams, NoData> {
    let ranked = rank_by_streams(dataset.records_of_year(year), |r| r.artist_name.as_str());
    if ranked.is_empty() {
        return Err(NoData::NoArtistsForYear);
    }
    Ok(ranked.into_iter().take(TOP_ARTISTS_LIMIT).collect())
}

pub fn top_songs_by_year(dataset: &Dataset, year: i32) -> Result<RankedStreams, NoData> {
    let ranked = rank_by_streams(dataset.records_of_year(year), |r| r.track_name.as_str());
    if ranked.is_empty() {
        return Err(NoData::NoSongsForYear);
    }
    Ok(ranked.into_iter().take(TOP_SONGS_LIMIT).collect())
}

pub fn mode_distribution_by_year(dataset: &Dataset, year: i32) -> Result<ModeCounts, NoData> {
    let mut records = dataset.records_of_year(year).peekable();
    if records.peek().is_none() {
        return Err(NoData::NoModeForYear);
    }

    let mut counts = GroupedTotals::default();
    for mode in records.filter_map(|r| r.mode) {
        counts.add(mode.label(), 1);
    }
    let counts = counts.into_ranked();
    if counts.is_empty() {
        return Err(NoData::NoMappedModes);
    }
    Ok(counts)
}

/// Groups records by `key`, summing streams. Missing stream counts add nothing
/// but the group still exists.
fn rank_by_streams<'a, I, F>(records: I, key: F) -> RankedStreams
where
    I: Iterator<Item = &'a SongRecord>,
    F: Fn(&'a SongRecord) -> &'a str,
{
    let mut totals = GroupedTotals::default();
    for record in records {
        totals.add(key(record), record.streams.unwrap_or(0));
    }
    totals.into_ranked()
}

/// Sums values per label, saturating at `u64::MAX`, while remembering the order
/// labels were first seen in.
#[derive(Default)]
struct GroupedTotals<'a> {
    index: HashMap<&'a str, usize>,
    totals: Vec<(&'a str, u64)>,
}

impl<'a> GroupedTotals<'a> {
    fn add(&mut self, label: &'a str, value: u64) {
        match self.index.get(label) {
            Some(&idx) => {
                let total = &mut self.totals[idx].1;
                *total = total.saturating_add(value);
            }
            None => {
                self.index.insert(label, self.totals.len());
                self.totals.push((label, value));
            }
        }
    }

    /// Descending by value. The sort is stable so ties stay in first-seen order.
    fn into_ranked(mut self) -> Vec<LabelTotal> {
        self.totals.sort_by(|a, b| b.1.cmp(&a.1));
        self.totals
            .into_iter()
            .map(|(label, value)| LabelTotal {
                label: label.to_string(),
                value,
            })
            .collect()
    }
}
