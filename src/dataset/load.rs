//! Dataset loading and cleaning
//!
//! Reads the songs CSV, resolves the fixed column schema from the header once,
//! then turns every row into a typed [`SongRecord`]. Rows whose release date
//! can't be built are dropped, unparseable stream counts are kept as `None`.

use super::{Dataset, Mode, SongRecord};
use csv::ByteRecord;
use encoding_rs::WINDOWS_1252;
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

const TRACK_NAME: &str = "track_name";
const ARTIST_NAME: &str = "artist(s)_name";
const RELEASED_YEAR: &str = "released_year";
const RELEASED_MONTH: &str = "released_month";
const RELEASED_DAY: &str = "released_day";
const STREAMS: &str = "streams";
const MODE: &str = "mode";

pub const REQUIRED_COLUMNS: [&str; 6] = [
    TRACK_NAME,
    ARTIST_NAME,
    RELEASED_YEAR,
    RELEASED_MONTH,
    RELEASED_DAY,
    STREAMS,
];

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset file not found: {0}")]
    NotFound(String),
    #[error("dataset is empty, no header row found")]
    EmptyInput,
    #[error("dataset is missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("dataset is not valid CSV: {0}")]
    Malformed(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Column positions resolved from the header row.
struct Schema {
    track_name: usize,
    artist_name: usize,
    released_year: usize,
    released_month: usize,
    released_day: usize,
    streams: usize,
    mode: Option<usize>,
}

impl Schema {
    fn resolve(header: &[String]) -> Result<Schema, DatasetError> {
        let position = |name: &str| header.iter().position(|h| h.trim() == name);

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|name| position(name).is_none())
            .map(|name| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(DatasetError::MissingColumns(missing));
        }

        // Every required column is present at this point.
        let required = |name: &str| position(name).unwrap_or_default();
        Ok(Schema {
            track_name: required(TRACK_NAME),
            artist_name: required(ARTIST_NAME),
            released_year: required(RELEASED_YEAR),
            released_month: required(RELEASED_MONTH),
            released_day: required(RELEASED_DAY),
            streams: required(STREAMS),
            mode: position(MODE),
        })
    }
}

#[derive(Debug, Default)]
struct LoadStats {
    rows: usize,
    invalid_date: usize,
    malformed: usize,
    missing_streams: usize,
}

pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset, DatasetError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(DatasetError::NotFound(path.display().to_string()));
    }
    info!("Loading dataset from {}...", path.display());
    let file = File::open(path)?;
    read_dataset(BufReader::new(file))
}

/// Parses and cleans a dataset from any CSV source.
pub fn read_dataset<R: Read>(reader: R) -> Result<Dataset, DatasetError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let header = csv_reader.byte_headers().map_err(map_csv_error)?;
    if header.is_empty() {
        return Err(DatasetError::EmptyInput);
    }
    let header: Vec<String> = header
        .iter()
        .enumerate()
        .map(|(idx, field)| {
            let field = if idx == 0 {
                field.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(field)
            } else {
                field
            };
            decode_field(field).into_owned()
        })
        .collect();
    let schema = Schema::resolve(&header)?;

    let mut stats = LoadStats::default();
    let mut records = Vec::new();
    let mut row = ByteRecord::new();
    loop {
        match csv_reader.read_byte_record(&mut row) {
            Ok(false) => break,
            Ok(true) => {
                stats.rows += 1;
                match parse_row(&row, &schema) {
                    RowOutcome::Kept(record) => {
                        if record.streams.is_none() {
                            stats.missing_streams += 1;
                        }
                        records.push(record);
                    }
                    RowOutcome::InvalidDate => stats.invalid_date += 1,
                }
            }
            Err(err) => {
                skip_malformed_row(err)?;
                stats.rows += 1;
                stats.malformed += 1;
            }
        }
    }

    let dataset = Dataset::from_records(records);
    info!(
        "Dataset loaded: {} rows read, {} kept, {} dropped ({} invalid dates, {} malformed)",
        stats.rows,
        dataset.len(),
        stats.invalid_date + stats.malformed,
        stats.invalid_date,
        stats.malformed
    );
    if stats.missing_streams > 0 {
        warn!(
            "{} records have no usable stream count",
            stats.missing_streams
        );
    }
    match dataset.date_span() {
        Some((first, last)) => info!("Release dates span {} to {}", first, last),
        None => warn!("Dataset has no valid records"),
    }
    Ok(dataset)
}

enum RowOutcome {
    Kept(SongRecord),
    InvalidDate,
}

fn parse_row(row: &ByteRecord, schema: &Schema) -> RowOutcome {
    let field = |idx: usize| decode_field(row.get(idx).unwrap_or(b""));

    let year = parse_integer(&field(schema.released_year)).and_then(|v| i32::try_from(v).ok());
    let month = parse_integer(&field(schema.released_month)).and_then(|v| u32::try_from(v).ok());
    let day = parse_integer(&field(schema.released_day)).and_then(|v| u32::try_from(v).ok());
    let (year, month, day) = match (year, month, day) {
        (Some(y), Some(m), Some(d)) => (y, m, d),
        _ => return RowOutcome::InvalidDate,
    };

    let streams = parse_streams(&field(schema.streams));
    let mode = schema.mode.and_then(|idx| Mode::parse(&field(idx)));

    match SongRecord::new(
        field(schema.track_name).into_owned(),
        field(schema.artist_name).into_owned(),
        year,
        month,
        day,
        streams,
        mode,
    ) {
        Some(record) => RowOutcome::Kept(record),
        None => RowOutcome::InvalidDate,
    }
}

/// UTF-8 when valid, Windows-1252 otherwise (the dataset is commonly saved as latin1).
fn decode_field(field: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(field) {
        Ok(s) => Cow::Borrowed(s),
        Err(_) => {
            let (cow, _, _) = WINDOWS_1252.decode(field);
            cow
        }
    }
}

/// Accepts plain integers and integral floats such as "2020.0".
fn parse_integer(s: &str) -> Option<i64> {
    let s = s.trim();
    if let Ok(v) = s.parse::<i64>() {
        return Some(v);
    }
    let v = s.parse::<f64>().ok()?;
    if v.is_finite() && v.fract() == 0.0 && v.abs() <= i64::MAX as f64 {
        Some(v as i64)
    } else {
        None
    }
}

fn parse_streams(s: &str) -> Option<u64> {
    let s = s.trim();
    if let Ok(v) = s.parse::<u64>() {
        return Some(v);
    }
    let v = s.parse::<f64>().ok()?;
    if v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v <= u64::MAX as f64 {
        Some(v as u64)
    } else {
        None
    }
}

fn map_csv_error(err: csv::Error) -> DatasetError {
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(e) => DatasetError::Io(e),
        _ => DatasetError::Malformed(message),
    }
}

/// IO failures abort the load, any other row error only loses that row.
fn skip_malformed_row(err: csv::Error) -> Result<(), DatasetError> {
    match map_csv_error(err) {
        DatasetError::Malformed(message) => {
            debug!("Skipping malformed row: {}", message);
            Ok(())
        }
        err => Err(err),
    }
}
