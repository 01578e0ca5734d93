use crate::prelude::*;
use anyhow::anyhow;
use std::{env::var, io::stderr, str::FromStr};
use tracing::Level;

// Logs go to stderr; stdout carries the renamed document.
pub async fn set_logging() -> Result<()> {
    let (level, warning) = match var("LOG_LEVEL") {
        Ok(value) => match parse_level(&value) {
            Some(level) => (level, None),
            None => (Level::INFO, Some(format!("Invalid LOG_LEVEL {:?}, using info", value))),
        },
        Err(_) => (Level::INFO, None),
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(stderr)
        .try_init()
        .map_err(|e| anyhow!("Failed to set tracing subscriber: {}", e))?;

    if let Some(warning) = warning {
        tracing::warn!("{}", warning);
    }

    Ok(())
}

pub fn parse_level(value: &str) -> Option<Level> {
    Level::from_str(value.trim()).ok()
}
