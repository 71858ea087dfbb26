use std::sync::LazyLock;

use regex::Regex;

// "5 years", "3.5+ yrs", case-insensitive, optional whitespace before the unit.
static YEARS_PHRASE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*\+?\s*(?:years|yrs)").unwrap());

// Standalone 4-digit years starting with 19 or 20.
static CALENDAR_YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b((?:19|20)\d{2})\b").unwrap());

/// Heuristic years-of-experience estimate, in priority order:
///
/// 1. the first "N years" / "N+ yrs" mention, taken verbatim;
/// 2. the span between the earliest and latest calendar year mentioned;
/// 3. `None` when neither signal is present.
///
/// No attempt is made to associate years with specific roles.
pub fn estimate_years(text: &str) -> Option<f64> {
    if let Some(caps) = YEARS_PHRASE_RE.captures(text) {
        if let Ok(value) = caps[1].parse::<f64>() {
            return Some(value);
        }
        // Unparseable capture falls through to the span heuristic.
    }

    let years: Vec<i32> = CALENDAR_YEAR_RE
        .captures_iter(text)
        .filter_map(|caps| caps[1].parse().ok())
        .collect();
    match (years.iter().min(), years.iter().max()) {
        (Some(min), Some(max)) => Some(f64::from(max - min)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_years_phrase_wins() {
        assert_eq!(
            estimate_years("5 years of Python and SQL experience"),
            Some(5.0)
        );
        assert_eq!(estimate_years("10 years then 3 years"), Some(10.0));
    }

    #[test]
    fn accepts_decimals_plus_suffix_and_yrs() {
        assert_eq!(estimate_years("3.5+ yrs in backend work"), Some(3.5));
        assert_eq!(estimate_years("7+ Years leading teams"), Some(7.0));
        assert_eq!(estimate_years("2yrs support"), Some(2.0));
    }

    #[test]
    fn calendar_span_is_the_fallback() {
        assert_eq!(estimate_years("Acme Corp 2018 - 2023, developer"), Some(5.0));
        assert_eq!(estimate_years("Joined in 2021."), Some(0.0));
    }

    #[test]
    fn years_phrase_takes_priority_over_span() {
        assert_eq!(estimate_years("4 years (2019-2023)"), Some(4.0));
    }

    #[test]
    fn no_signal_returns_none() {
        assert_eq!(estimate_years(""), None);
        assert_eq!(estimate_years("seasoned engineer, many projects"), None);
        // 5-digit numbers are not calendar years
        assert_eq!(estimate_years("badge 20187"), None);
    }
}
