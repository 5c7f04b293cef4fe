//! Shared constants for end-to-end tests
//!
//! When the fixture dataset changes, update only this file and `fixtures.rs`.

// ============================================================================
// Fixture dataset
// ============================================================================

/// Year selected by default in every year control
pub const DEFAULT_YEAR: i32 = 2020;

/// Year with no songs in the fixture dataset
pub const EMPTY_YEAR: i32 = 1950;

/// Most streamed song of 2020
pub const TOP_SONG_2020: &str = "Blinding Lights";

/// Artist of the most streamed song of 2020
pub const TOP_ARTIST_2020: &str = "The Weeknd";

/// Summed 2020 streams of The Weeknd (Blinding Lights + Save Your Tears)
pub const TOP_ARTIST_2020_STREAMS: u64 = 3_703_895_074 + 1_591_223_784;

/// Earliest valid release date in the fixture dataset
pub const FIRST_RELEASE_DATE: &str = "2019-11-29";

/// Latest valid release date in the fixture dataset
pub const LAST_RELEASE_DATE: &str = "2023-01-12";

/// Distinct release years in the fixture dataset
pub const FIXTURE_YEARS: [i32; 4] = [2019, 2020, 2022, 2023];

/// Number of rows in the fixture that survive cleaning
pub const VALID_ROWS: usize = 9;

// ============================================================================
// Timeouts
// ============================================================================

/// Maximum time to wait for a test server to answer
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Interval between readiness polls
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 20;

/// Timeout for a single test request
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
