pub mod check;
pub mod generate;
pub mod roll;

use std::path::Path;

use pg_data::{DataResult, GameData};

/// Read and validate the dataset in `dir`, or the built-in one.
fn read_data(dir: Option<&Path>) -> DataResult<GameData> {
    match dir {
        Some(dir) => GameData::from_dir(dir),
        None => GameData::builtin(),
    }
}

/// Like [`read_data`], with the error flattened for printing.
fn load_data(dir: Option<&Path>) -> Result<GameData, String> {
    read_data(dir).map_err(|e| format!("failed to load dataset: {e}"))
}

/// The source line for `--data`, for messages.
fn data_label(dir: Option<&Path>) -> String {
    match dir {
        Some(dir) => format!("'{}'", dir.display()),
        None => "built-in dataset".to_string(),
    }
}
