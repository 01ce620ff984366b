//! Budget parsing for free-text amounts like `$900k`, `1.1m` or `850–950k`.
//!
//! Nothing here fails loudly: text that cannot be read as money comes back as
//! `None`, which callers treat as "no budget known".

/// Range separators, tried in order.
const RANGE_SEPARATORS: [char; 2] = ['–', '-'];

fn strip_currency(text: &str) -> String {
    text.to_lowercase().replace(['$', ','], "").trim().to_string()
}

/// Truncates toward zero; `None` for non-finite or out-of-range values.
pub(crate) fn truncate(value: f64) -> Option<i64> {
    if !value.is_finite() {
        return None;
    }
    let truncated = value.trunc();
    if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return None;
    }
    Some(truncated as i64)
}

fn parse_scaled(digits: &str, scale: f64) -> Option<i64> {
    let value: f64 = digits.trim().parse().ok()?;
    truncate(value * scale)
}

/// Parses a single amount in whole dollars.
///
/// A trailing `k` multiplies by 1,000 and `m` by 1,000,000; the result is
/// truncated toward zero.
pub fn parse_money(token: &str) -> Option<i64> {
    let s = strip_currency(token);

    if let Some(digits) = s.strip_suffix('k') {
        return parse_scaled(digits, 1_000.0);
    }
    if let Some(digits) = s.strip_suffix('m') {
        return parse_scaled(digits, 1_000_000.0);
    }
    parse_scaled(&s, 1.0)
}

fn midpoint(low: i64, high: i64) -> i64 {
    ((low as i128 + high as i128) / 2) as i64
}

fn magnitude_suffix(token: &str) -> Option<char> {
    token.trim().chars().last().filter(|c| matches!(c, 'k' | 'm'))
}

/// Reads `850` in `850–950k` as `850k`. The bare low end only takes the high
/// end's suffix when the range stays ascending, so `800000-1m` keeps 800,000.
fn borrow_magnitude(left: &str, right: &str, high: Option<i64>) -> Option<i64> {
    let left = left.trim();
    if !left.ends_with(|c: char| c.is_ascii_digit() || c == '.') {
        return None;
    }
    let suffix = magnitude_suffix(right)?;
    let high = high?;
    parse_money(&format!("{left}{suffix}")).filter(|low| *low <= high)
}

/// Parses a budget band. Ranges resolve to the midpoint of both ends, or to
/// whichever end is readable.
pub fn parse_band(band: &str) -> Option<i64> {
    let s = strip_currency(band);
    if s.is_empty() {
        return None;
    }

    let split = RANGE_SEPARATORS
        .iter()
        .find_map(|sep| s.split_once(*sep));

    if let Some((left, right)) = split {
        let high = parse_money(right);
        let low = borrow_magnitude(left, right, high).or_else(|| parse_money(left));
        match (low, high) {
            (Some(l), Some(r)) => return Some(midpoint(l, r)),
            (Some(one), None) | (None, Some(one)) => return Some(one),
            (None, None) => {}
        }
    }

    parse_money(&s)
}

/// Resolves the budget to recommend against. A numeric budget always wins
/// over the band, even when both are given.
pub fn normalize_budget(budget_band: Option<&str>, numeric_budget: Option<i64>) -> Option<i64> {
    if numeric_budget.is_some() {
        return numeric_budget;
    }
    match budget_band {
        Some(band) if !band.is_empty() => parse_band(band),
        _ => None,
    }
}
