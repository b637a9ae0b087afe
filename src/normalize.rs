use std::sync::LazyLock;

use regex::Regex;

static RE_NON_NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\d.\-]").expect("invalid regex: non-numeric"));

/// Parses a noisy numeric cell ("1.234.567 €", "+12,5 %", "—") into an f64.
///
/// Every character that is not a digit, a decimal point or a minus sign is
/// stripped before parsing. Anything that still fails to parse, including
/// the empty string, comes back as 0.0. Never returns NaN or an infinity.
pub fn clean_number(raw: &str) -> f64 {
    let cleaned = RE_NON_NUMERIC.replace_all(raw, "");
    match cleaned.parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => 0.0,
    }
}
