use super::var_service::OutputFormat;
use crate::document::Document;
use crate::prelude::*;
use tokio::io::{self, AsyncReadExt, AsyncWriteExt};

pub async fn read_document(path: Option<&str>) -> Result<String> {
    let text = match path {
        Some(path) => {
            tracing::info!("Reading proxies from {}", path);
            tokio::fs::read_to_string(path).await?
        }
        None => {
            tracing::info!("Reading proxies from stdin");
            let mut text = String::new();
            io::stdin().read_to_string(&mut text).await?;
            text
        }
    };

    Ok(text)
}

pub async fn write_document(path: Option<&str>, text: &str) -> Result<()> {
    match path {
        Some(path) => {
            tokio::fs::write(path, text).await?;
            tracing::info!("Wrote renamed proxies to {}", path);
        }
        None => {
            let mut stdout = io::stdout();
            stdout.write_all(text.as_bytes()).await?;
            stdout.flush().await?;
        }
    }

    Ok(())
}

/// Parses YAML (or JSON, which YAML accepts) into a document.
pub fn parse_document(text: &str) -> Result<Document> {
    let value: serde_yaml::Value = serde_yaml::from_str(text)?;
    Ok(Document::from_value(value)?)
}

/// Emits `name` (when present) and `proxies`; other top-level keys are dropped.
pub fn render_document(document: &Document, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => Ok(serde_yaml::to_string(document)?),
        OutputFormat::Json => {
            let mut text = serde_json::to_string_pretty(document)?;
            text.push('\n');
            Ok(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUBSCRIPTION: &str = "name: Airport\nextra: dropped\nproxies:\n  - name: 香港 01\n    port: 443\n";

    #[test]
    fn parse_rejects_invalid_yaml() {
        assert!(parse_document("proxies: [").is_err());
    }

    #[test]
    fn parse_accepts_json() {
        let document = parse_document(r#"{"proxies": [{"name": "a", "port": 1}]}"#).unwrap();
        assert_eq!(document.proxies[0].name(), Some("a"));
    }

    #[test]
    fn yaml_output_keeps_only_name_and_proxies() {
        let document = parse_document(SUBSCRIPTION).unwrap();
        let text = render_document(&document, OutputFormat::Yaml).unwrap();
        let value: serde_yaml::Value = serde_yaml::from_str(&text).unwrap();

        assert_eq!(value["name"].as_str(), Some("Airport"));
        assert_eq!(value["proxies"][0]["name"].as_str(), Some("香港 01"));
        assert_eq!(value["proxies"][0]["port"].as_u64(), Some(443));
        assert!(value.get("extra").is_none());
    }

    #[test]
    fn absent_name_is_not_emitted() {
        let document = parse_document("proxies: []\n").unwrap();
        let text = render_document(&document, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert!(value.get("name").is_none());
        assert_eq!(value["proxies"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn writes_and_reads_a_file() {
        let path = std::env::temp_dir().join(format!("proxy-rename-{}.yaml", std::process::id()));
        let path = path.to_string_lossy().to_string();

        write_document(Some(&path), SUBSCRIPTION).await.unwrap();
        let text = read_document(Some(&path)).await.unwrap();
        tokio::fs::remove_file(&path).await.unwrap();

        assert_eq!(text, SUBSCRIPTION);
    }
}
