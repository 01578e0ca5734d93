use once_cell::sync::Lazy;
use regex::Regex;

// Case folding is ASCII-only (`(?i-u)`), so `ſ` never stands in for `s`.
// Airport branding, censorship markers and protocol names, removed wherever they occur.
static BRAND_NOISE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"官网|官方|原版|牆|墙|(?i-u:V2|SSR|SS|Trojan|Vmess)").unwrap()
});

// Line types, routing descriptors and streaming markers, removed only as whole words.
// Boundaries are ASCII, so a CJK descriptor is only cut when it sits between ASCII
// word characters.
static DESCRIPTOR_NOISE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?-u:\b)(?:(?i-u:IEPL|IPLC|CMI|NBN|CN2|GIA)|专线|中转|回国|解锁|测试|游戏|(?i-u:GAME|Netflix|NF|Disney|YouTube|YT|Transit|Unlock|Unblock|Test))(?-u:\b)",
    )
    .unwrap()
});

static SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[-|│┃｜()（）\[\]【】「」]").unwrap());

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").unwrap());

/// Cleans a display name: noise removal, separators to spaces, whitespace collapse.
/// `normalize(normalize(s)) == normalize(s)`.
pub fn normalize(name: &str) -> String {
    let text = strip_noise(name);
    let text = SEPARATORS.replace_all(&text, " ");
    WHITESPACE_RUN.replace_all(&text, " ").trim().to_string()
}

// Repeats until stable: cutting "V2" out of "VV22" leaves another "V2".
fn strip_noise(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let stripped = BRAND_NOISE.replace_all(&current, "");
        let stripped = DESCRIPTOR_NOISE.replace_all(&stripped, "").into_owned();
        if stripped == current {
            return current;
        }
        current = stripped;
    }
}
