//! Field coercion and classification helpers
//!
//! These functions never fail: values that cannot be interpreted fall back
//! to a default chosen by the caller.

use crate::config::{CountryRule, SkillRule};

/// Parse a progress cell such as `45%`, `12,5` or `80`
///
/// The first `%` is removed and the first `,` becomes a decimal point; the
/// longest leading decimal number is then read, so `"45 pts"` gives 45.
/// Returns `None` when no finite number can be read.
pub fn parse_progress(raw: &str) -> Option<f64> {
    let cleaned = raw.replacen('%', "", 1).replacen(',', ".", 1);
    leading_float(cleaned.trim())
}

/// Read the longest prefix of `s` that forms a decimal number
fn leading_float(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when followed by at least one digit
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Capitalize the first character of each whitespace-delimited token and
/// lower-case the rest; whitespace is preserved as-is
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut at_token_start = true;

    for c in value.chars() {
        if c.is_whitespace() {
            out.push(c);
            at_token_start = true;
        } else if at_token_start {
            out.extend(c.to_uppercase());
            at_token_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }

    out
}

/// Upper-case a country value and map known spellings to their code
///
/// Values that match no rule pass through upper-cased. Empty stays empty.
pub fn normalize_country(value: &str, rules: &[CountryRule]) -> String {
    let upper = value.trim().to_uppercase();
    if upper.is_empty() {
        return upper;
    }

    rules
        .iter()
        .find(|rule| {
            rule.fragments
                .iter()
                .any(|fragment| upper.contains(&fragment.to_uppercase()))
        })
        .map(|rule| rule.code.clone())
        .unwrap_or(upper)
}

/// Classify a competency into a skill type by keyword
///
/// Rules are tried in order against the lower-cased competency text; the
/// fallback label is returned when none matches.
pub fn classify_skill_type(competency: &str, rules: &[SkillRule], fallback: &str) -> String {
    let lower = competency.to_lowercase();

    rules
        .iter()
        .find(|rule| {
            rule.keywords
                .iter()
                .any(|keyword| lower.contains(&keyword.to_lowercase()))
        })
        .map(|rule| rule.label.clone())
        .unwrap_or_else(|| fallback.to_string())
}
