use dotenvy::dotenv;
use log::warn;
use std::env;
use std::path::PathBuf;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATA_FILE: &str = "players.json";
const DEFAULT_PUBLIC_DIR: &str = "public";

#[derive(Debug, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub data_file: PathBuf,
    pub public_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any variable source. Missing, empty or
    /// unparseable values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = match lookup("PLAYERS_HOST") {
            Some(val) if !val.is_empty() => val,
            _ => DEFAULT_HOST.to_string(),
        };

        let port = match lookup("PLAYERS_PORT") {
            Some(val) => match val.parse::<u16>() {
                Ok(port) => port,
                Err(_) => {
                    warn!("PLAYERS_PORT={} is not a valid port, using {}", val, DEFAULT_PORT);
                    DEFAULT_PORT
                }
            },
            None => DEFAULT_PORT,
        };

        let data_file = match lookup("PLAYERS_DATA_FILE") {
            Some(val) if !val.is_empty() => PathBuf::from(val),
            _ => PathBuf::from(DEFAULT_DATA_FILE),
        };

        let public_dir = match lookup("PLAYERS_PUBLIC_DIR") {
            Some(val) if !val.is_empty() => PathBuf::from(val),
            _ => PathBuf::from(DEFAULT_PUBLIC_DIR),
        };

        Self {
            host,
            port,
            data_file,
            public_dir,
        }
    }
}
