use itertools::Itertools;
use proxy_rename::{
    prelude::*,
    service::{
        document_service::{parse_document, read_document, render_document, write_document},
        var_service::{get_document_path, get_output_format, get_output_path, get_region_args},
    },
    transform,
    util::{env_service::load_env_file, log_service::set_logging},
    RegionConfig,
};
use std::env;

#[tokio::main]
async fn main() -> Result<()> {
    set_logging().await?;
    load_env_file().await?;

    let mut tokens = get_region_args().await?;
    tokens.extend(env::args().skip(1));
    let config = RegionConfig::from_tokens(&tokens);
    let disabled = config.disabled_keys();
    if !disabled.is_empty() {
        tracing::info!("Regions left as is: {}", disabled.iter().join(", "));
    }

    let text = read_document(get_document_path().await?.as_deref()).await?;
    let document = parse_document(&text)?;
    let document = transform(&document, &config)?;
    let text = render_document(&document, get_output_format().await?)?;
    write_document(get_output_path().await?.as_deref(), &text).await?;

    Ok(())
}
