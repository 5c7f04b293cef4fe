use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    Major,
    Minor,
}

impl Mode {
    /// Only the exact source spellings are recognized, anything else is unmapped.
    pub fn parse(s: &str) -> Option<Mode> {
        match s.trim() {
            "Major" => Some(Mode::Major),
            "Minor" => Some(Mode::Minor),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mode::Major => "Major (Happy)",
            Mode::Minor => "Minor (Sad)",
        }
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct SongRecord {
    pub track_name: String,
    /// One string even when several artists are credited, e.g. "Bad Bunny, Chencho Corleone".
    pub artist_name: String,
    pub released_year: i32,
    pub released_month: u32,
    pub released_day: u32,
    pub release_date: NaiveDate,
    pub streams: Option<u64>,
    pub mode: Option<Mode>,
}

impl SongRecord {
    /// Builds a record from its date parts, returns None when they don't form a calendar date.
    pub fn new(
        track_name: impl Into<String>,
        artist_name: impl Into<String>,
        released_year: i32,
        released_month: u32,
        released_day: u32,
        streams: Option<u64>,
        mode: Option<Mode>,
    ) -> Option<SongRecord> {
        let release_date = NaiveDate::from_ymd_opt(released_year, released_month, released_day)?;
        Some(SongRecord {
            track_name: track_name.into(),
            artist_name: artist_name.into(),
            released_year,
            released_month,
            released_day,
            release_date,
            streams,
            mode,
        })
    }
}
