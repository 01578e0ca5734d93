use super::config::RegionConfig;
use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;

// Order is priority: a name that fits several regions takes the first one listed.
const REGION_KEYPHRASES: [(&str, &str, &[&str]); 11] = [
    ("HK", "🇭🇰", &["香港", "Hong Kong", "HK", "HongKong"]),
    ("TW", "🇹🇼", &["台湾", "台灣", "Taiwan", "TW"]),
    (
        "JP",
        "🇯🇵",
        &["日本", "东京", "大阪", "泉州", "埼玉", "沪日", "穗日", "中日", "Japan", "JP"],
    ),
    ("SG", "🇸🇬", &["新加坡", "狮城", "Singapore", "SG"]),
    ("US", "🇺🇸", &["美国", "美", "United States", "US"]),
    ("MO", "🇲🇴", &["澳门", "澳門", "Macau", "MO"]),
    ("KR", "🇰🇷", &["韩国", "韓國", "Korea", "KR"]),
    ("GB", "🇬🇧", &["英国", "英", "United Kingdom", "UK"]),
    ("DE", "🇩🇪", &["德国", "德", "Germany", "DE"]),
    ("FR", "🇫🇷", &["法国", "法", "France", "FR"]),
    ("RU", "🇷🇺", &["俄罗斯", "俄", "Russia", "RU"]),
];

// No word boundaries: "us" inside "Custom" counts as a hit. Latin keyphrases fold
// case over ASCII only, so the Kelvin sign does not read as a `k`.
static REGION_PATTERNS: Lazy<Vec<(&'static str, &'static str, Regex)>> = Lazy::new(|| {
    REGION_KEYPHRASES
        .iter()
        .map(|(code, flag, keyphrases)| {
            let alternation = keyphrases
                .iter()
                .map(|k| match k.is_ascii() {
                    true => format!("(?i-u:{})", regex::escape(k)),
                    false => regex::escape(k),
                })
                .join("|");
            let pattern = Regex::new(&alternation)
                .expect("region keyphrases are escaped literals");
            (*code, *flag, pattern)
        })
        .collect()
});

#[derive(Debug, Clone)]
pub struct RegionRule {
    pub code: &'static str,
    pub flag: &'static str,
    pub pattern: Regex,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionMatch<'a> {
    pub code: &'a str,
    pub flag: &'a str,
    /// The name with the first occurrence of the region's keyphrase cut out, untrimmed.
    pub remainder: String,
}

impl RegionMatch<'_> {
    /// `<flag> [<CODE>]` followed directly by `tail`.
    pub fn prefixed_name(&self, tail: &str) -> String {
        format!("{} [{}]{}", self.flag, self.code, tail)
    }
}

/// The static rule table in priority order, with `enabled` resolved against `config`.
pub fn region_rules(config: &RegionConfig) -> Vec<RegionRule> {
    REGION_PATTERNS
        .iter()
        .map(|(code, flag, pattern)| RegionRule {
            code: *code,
            flag: *flag,
            pattern: pattern.clone(),
            enabled: config.is_enabled(code),
        })
        .collect()
}

pub fn match_region<'a>(name: &str, rules: &'a [RegionRule]) -> Option<RegionMatch<'a>> {
    for rule in rules.iter().filter(|rule| rule.enabled) {
        if rule.pattern.is_match(name) {
            return Some(RegionMatch {
                code: rule.code,
                flag: rule.flag,
                remainder: rule.pattern.replace(name, "").into_owned(),
            });
        }
    }

    None
}
