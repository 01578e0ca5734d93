use std::collections::HashMap;

/// Which regions get renamed. Built once from `code=value` tokens and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionConfig {
    overrides: HashMap<String, bool>,
}

impl RegionConfig {
    /// Only the literal value `false` disables a region. Keys are kept as given, so
    /// `HK=false` does not disable `hk`. Pieces after a second `=` are ignored and
    /// later tokens win over earlier ones.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut overrides = HashMap::new();
        for token in tokens {
            let mut pieces = token.as_ref().split('=');
            let key = pieces.next().unwrap_or_default();
            let enabled = pieces.next() != Some("false");
            overrides.insert(key.to_string(), enabled);
        }

        RegionConfig { overrides }
    }

    /// Looks up the lowercased region code; unknown codes are enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.overrides
            .get(&code.to_lowercase())
            .copied()
            .unwrap_or(true)
    }

    pub fn disabled_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .overrides
            .iter()
            .filter(|(_, enabled)| !**enabled)
            .map(|(key, _)| key.as_str())
            .collect();
        keys.sort_unstable();
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn everything_enabled_by_default() {
        let config = RegionConfig::default();
        assert!(config.is_enabled("HK"));
        assert!(config.is_enabled("RU"));
    }

    #[test]
    fn only_literal_false_disables() {
        let config = RegionConfig::from_tokens(["hk=false", "jp=False", "sg=0", "us", "mo="]);
        assert!(!config.is_enabled("HK"));
        assert!(config.is_enabled("JP"));
        assert!(config.is_enabled("SG"));
        assert!(config.is_enabled("US"));
        assert!(config.is_enabled("MO"));
    }

    #[test]
    fn keys_are_not_case_normalized() {
        let config = RegionConfig::from_tokens(["HK=false"]);
        assert!(config.is_enabled("HK"));
    }

    #[test]
    fn extra_pieces_are_ignored() {
        let config = RegionConfig::from_tokens(["tw=false=true"]);
        assert!(!config.is_enabled("TW"));
    }

    #[test]
    fn later_tokens_win() {
        let config = RegionConfig::from_tokens(["kr=false", "kr=true", "de=true", "de=false"]);
        assert!(config.is_enabled("KR"));
        assert!(!config.is_enabled("DE"));
    }

    #[test]
    fn unknown_codes_are_accepted() {
        let config = RegionConfig::from_tokens(["xx=false", "gb=false"]);
        assert_eq!(config.disabled_keys(), vec!["gb", "xx"]);
    }
}
