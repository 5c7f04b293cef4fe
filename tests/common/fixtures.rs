//! Test fixture creation for the songs dataset
//!
//! The fixture mirrors the shape of the real export: extra columns the
//! dashboard ignores, quoted multi-artist names, a latin1 encoded name and a
//! few rows that cleaning must drop or keep without streams.

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const HEADER: &[u8] = b"track_name,artist(s)_name,artist_count,released_year,released_month,released_day,in_spotify_playlists,streams,bpm,key,mode\n";

const ROWS: &[&[u8]] = &[
    b"Blinding Lights,The Weeknd,1,2020,1,1,43899,3703895074,171,C#,Major\n",
    b"Save Your Tears,The Weeknd,1,2020,3,20,12688,1591223784,118,,Major\n",
    b"Dance Monkey,Tones and I,1,2019,11,29,24529,2864791672,98,F#,Minor\n",
    b"Levitating (feat. DaBaby),\"Dua Lipa, DaBaby\",2,2020,3,27,15894,1802514301,103,F#,Minor\n",
    b"Mood (feat. iann dior),\"24kgoldn, Iann Dior\",2,2020,7,24,12854,1699402402,91,G,Minor\n",
    b"As It Was,Harry Styles,1,2022,3,31,23575,2513188493,174,F#,Minor\n",
    b"Flowers,Miley Cyrus,1,2023,1,12,12211,1316855716,118,,Major\n",
    b"\"Quevedo: Bzrp Music Sessions, Vol. 52\",\"Bizarrap, Quevedo\",2,2022,7,6,8506,BPM128KeyDModeMajor,128,D,Major\n",
    // "Beyonce" with a latin1 e-acute
    b"CUFF IT,Beyonc\xE9,1,2022,7,29,7842,595900742,115,G,Major\n",
    b"Broken Date,Nobody,1,2021,13,1,10,1000,100,C,Major\n",
    b"No Year,Nobody,1,,5,5,10,1000,100,C,Minor\n",
];

/// Creates a temporary dataset file.
/// Returns (temp_dir, dataset_path)
pub fn create_test_dataset() -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let dataset_path = dir.path().join("Popular_Spotify_Songs.csv");

    let mut content = HEADER.to_vec();
    for row in ROWS {
        content.extend_from_slice(row);
    }
    fs::write(&dataset_path, content)?;

    Ok((dir, dataset_path))
}
