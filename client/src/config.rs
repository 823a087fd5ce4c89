use crate::error::ClientError;
use serde::Deserialize;
use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

pub const DEFAULT_PATH: &str = "config.json";

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// JSON-lines transcript to replay; stdin when absent.
    #[serde(default)]
    pub transcript: Option<PathBuf>,
    #[serde(default)]
    pub render_snapshots: bool,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ClientError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Path from the first argument, else `config.json` if present, else
    /// defaults.
    pub fn from_args() -> Result<Self, ClientError> {
        match std::env::args_os().nth(1) {
            Some(path) => Config::load(path),
            None if Path::new(DEFAULT_PATH).exists() => Config::load(DEFAULT_PATH),
            None => Ok(Config::default()),
        }
    }
}
