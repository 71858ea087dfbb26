use crate::catalog::SkillCatalog;
use crate::normalize::{tokenize, Token};
use crate::SkillSet;

/// Acceptance bar for the fuzzy stage; strictly greater-than on a 0-100 scale.
const FUZZY_ACCEPT_THRESHOLD: f64 = 85.0;

/// Two-stage skill extraction: exact phrase matching unioned with a fuzzy
/// fallback. Pure function of (text, catalog); empty inputs produce an empty
/// set, never an error.
///
/// The fuzzy stage scores word n-grams of the text against each catalog
/// entry instead of the whole document, which keeps partial-ratio costs
/// bounded and avoids short-substring false positives. Accepted windows
/// resolve to the catalog form when the casing-folded lookup succeeds,
/// otherwise the window's own surface form is kept.
pub fn find_skills(text: &str, catalog: &SkillCatalog) -> SkillSet {
    let mut found = SkillSet::new();
    if catalog.is_empty() {
        return found;
    }

    let tokens = tokenize(text);
    if tokens.is_empty() {
        return found;
    }

    for entry in catalog.iter() {
        let pattern: Vec<String> = tokenize(entry).into_iter().map(|t| t.lower).collect();
        if pattern.is_empty() {
            continue;
        }

        if contains_phrase(&tokens, &pattern) {
            found.insert(entry.to_string());
            continue;
        }

        if let Some(surface) = best_fuzzy_window(&tokens, &pattern) {
            let resolved = catalog
                .canonical(&surface)
                .map(str::to_string)
                .unwrap_or(surface);
            found.insert(resolved);
        }
    }

    found
}

/// Contiguous, case-insensitive token-sequence match.
fn contains_phrase(tokens: &[Token], pattern: &[String]) -> bool {
    tokens.windows(pattern.len()).any(|window| {
        window
            .iter()
            .map(|t| t.lower.as_str())
            .eq(pattern.iter().map(String::as_str))
    })
}

/// Partial-ratio style similarity on a 0-100 scale.
fn fuzzy_score(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(a, b) * 100.0
}

/// Slide a window the size of the catalog entry over the text tokens and keep
/// the best-scoring window above the threshold, if any.
fn best_fuzzy_window(tokens: &[Token], pattern: &[String]) -> Option<String> {
    let entry_lower = pattern.join(" ");
    let mut best: Option<(f64, String)> = None;

    for window in tokens.windows(pattern.len()) {
        let candidate = window
            .iter()
            .map(|t| t.lower.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let score = fuzzy_score(&candidate, &entry_lower);
        if score <= FUZZY_ACCEPT_THRESHOLD {
            continue;
        }

        if best.as_ref().map_or(true, |(top, _)| score > *top) {
            let surface = window
                .iter()
                .map(|t| t.surface.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            best = Some((score, surface));
        }
    }

    best.map(|(_, surface)| surface)
}
