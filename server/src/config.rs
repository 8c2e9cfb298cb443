use std::{env, fmt::Display, str::FromStr};

use chrono_tz::Tz;
use meeting::DEFAULT_OWNER_CONTACT;
use tracing::{info, warn};

pub struct Config {
    pub port: u16,
    pub database_url: String,
    /// Zone the stored civil appointment timestamps are interpreted in.
    pub meeting_zone: Tz,
    pub owner_contact: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("RUST_PORT", "2222"),
            database_url: try_load("DATABASE_URL", "postgres://postgres@localhost:5432/vetcal"),
            meeting_zone: try_load("MEETING_ZONE", "Europe/Istanbul"),
            owner_contact: try_load("OWNER_CONTACT", DEFAULT_OWNER_CONTACT),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
