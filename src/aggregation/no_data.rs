use serde::Serialize;

/// Explicit empty result of an aggregation. Not an error: it is rendered
/// as a placeholder chart carrying [`NoData::message`].
#[derive(Clone, Copy, Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NoData {
    EmptyRange,
    NoArtistsForYear,
    NoSongsForYear,
    NoModeForYear,
    NoMappedModes,
}

impl NoData {
    pub fn message(&self) -> &'static str {
        match self {
            NoData::EmptyRange => "No data in this date range.",
            NoData::NoArtistsForYear => "No artist data for this year.",
            NoData::NoSongsForYear => "No song data for this year.",
            NoData::NoModeForYear => "No valid 'mode' data for this year.",
            NoData::NoMappedModes => "No mode values to show.",
        }
    }
}

impl std::fmt::Display for NoData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}
