use super::SongRecord;
use chrono::NaiveDate;

/// The cleaned song table. Built once at startup and never mutated afterwards,
/// records keep the order in which they appeared in the source file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<SongRecord>,
}

impl Dataset {
    pub fn from_records(records: Vec<SongRecord>) -> Dataset {
        Dataset { records }
    }

    pub fn records(&self) -> &[SongRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Earliest and latest release dates, None for an empty dataset.
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let mut dates = self.records.iter().map(|r| r.release_date);
        let first = dates.next()?;
        Some(dates.fold((first, first), |(min, max), d| (min.min(d), max.max(d))))
    }

    /// Distinct release years, ascending.
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.records.iter().map(|r| r.released_year).collect();
        years.sort_unstable();
        years.dedup();
        years
    }

    pub fn records_of_year(&self, year: i32) -> impl Iterator<Item = &SongRecord> {
        self.records.iter().filter(move |r| r.released_year == year)
    }
}
