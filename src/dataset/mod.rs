mod dataset;
mod load;
mod song;

pub use dataset::Dataset;
pub use load::{load_dataset, DatasetError, REQUIRED_COLUMNS};
pub use song::{Mode, SongRecord};
