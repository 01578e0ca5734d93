use crate::document::{Document, Entry};
use crate::error::RenameError;
use crate::region::config::RegionConfig;
use crate::region::regions::{match_region, region_rules, RegionRule};
use crate::rename::normalizer::normalize;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

/// A matched name becomes `<flag> [<CODE>]` plus the normalized remainder; any other
/// name is only normalized.
pub fn rename(name: &str, rules: &[RegionRule]) -> String {
    match match_region(name, rules) {
        Some(region) => region.prefixed_name(&normalize(&region.remainder)),
        None => normalize(name),
    }
}

/// Rewrites every proxy name in `document`, keeping entry order and all other fields.
/// Every entry is checked before any name is rewritten, so an error leaves nothing
/// half done.
pub fn transform(document: &Document, config: &RegionConfig) -> Result<Document, RenameError> {
    let names = document
        .proxies
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            entry.name().ok_or_else(|| {
                let err = format!("proxy {} has no string name", index);
                tracing::error!("{}", err);
                RenameError::malformed(err)
            })
        })
        .collect::<Result<Vec<&str>, RenameError>>()?;

    let rules = region_rules(config);
    let renamed: Vec<String> = names.par_iter().map(|name| rename(name, &rules)).collect();

    let mut changed = 0;
    let proxies: Vec<Entry> = document
        .proxies
        .iter()
        .zip(names.iter().zip(renamed))
        .map(|(entry, (old, new))| {
            if *old != new {
                tracing::debug!("Renamed \"{}\" to \"{}\"", old, new);
                changed += 1;
            }
            entry.with_name(new)
        })
        .collect();

    tracing::info!("Renamed {} of {} proxies", changed, proxies.len());

    Ok(Document {
        name: document.name.clone(),
        proxies,
    })
}
