use crate::prelude::*;
use anyhow::anyhow;
use std::{env::current_exe, path::PathBuf};

pub async fn get_parent_dir() -> Result<PathBuf> {
    let exe_path = current_exe()?;
    match exe_path.parent() {
        Some(parent_dir) => Ok(parent_dir.to_path_buf()),
        None => {
            let err = "Parent directory of executable is None";
            tracing::error!("{}", err);
            Err(anyhow!(err))
        }
    }
}

/// Loads `variables.env` from beside the executable, falling back to `.env` in the
/// working directory. Neither file is required.
pub async fn load_env_file() -> Result<()> {
    let env_path = get_parent_dir().await?.join("variables.env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)?;
        tracing::info!("Loaded environment from {}", env_path.display());
        return Ok(());
    }

    match dotenvy::dotenv() {
        Ok(path) => tracing::info!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => tracing::debug!("No env file found"),
        Err(e) => {
            let err = format!("Failed to load .env: {}", e);
            tracing::error!("{}", err);
            return Err(anyhow!(err));
        }
    }

    Ok(())
}
