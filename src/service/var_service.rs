use crate::prelude::*;
use anyhow::anyhow;
use std::env::var;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Yaml,
    Json,
}

pub async fn get_region_args() -> Result<Vec<String>> {
    match var("RENAME_ARGS") {
        Ok(args) => Ok(split_region_args(&args)),
        Err(e) => {
            tracing::debug!("RENAME_ARGS not found in environment: {}", e);
            Ok(Vec::new())
        }
    }
}

pub async fn get_document_path() -> Result<Option<String>> {
    get_optional_path("PROXY_DOCUMENT_PATH").await
}

pub async fn get_output_path() -> Result<Option<String>> {
    get_optional_path("RENAME_OUTPUT_PATH").await
}

pub async fn get_output_format() -> Result<OutputFormat> {
    match var("RENAME_OUTPUT_FORMAT") {
        Ok(format) => parse_output_format(&format),
        Err(_) => Ok(OutputFormat::Yaml),
    }
}

async fn get_optional_path(key: &str) -> Result<Option<String>> {
    match var(key) {
        Ok(path) => match path.is_empty() {
            true => {
                tracing::debug!("{} is empty", key);
                Ok(None)
            }
            false => Ok(Some(path)),
        },
        Err(e) => {
            tracing::debug!("{} not found in environment: {}", key, e);
            Ok(None)
        }
    }
}

pub fn split_region_args(args: &str) -> Vec<String> {
    args.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

pub fn parse_output_format(format: &str) -> Result<OutputFormat> {
    match format.trim().to_lowercase().as_str() {
        "" | "yaml" | "yml" => Ok(OutputFormat::Yaml),
        "json" => Ok(OutputFormat::Json),
        other => {
            let err = format!("Unsupported RENAME_OUTPUT_FORMAT: {}", other);
            tracing::error!("{}", err);
            Err(anyhow!(err))
        }
    }
}
