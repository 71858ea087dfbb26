use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::normalize::{is_stopword, nfkc_lower};

// Words of two or more alphanumeric characters, the usual vectorizer token rule.
static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w\w+\b").unwrap());

/// TF-IDF cosine similarity between a JD and a résumé, in [0, 1].
///
/// The vector space is built fresh over exactly the two documents: unigrams
/// plus bigrams formed after stopword removal, smoothed idf, L2-normalized
/// vectors. Either document collapsing to an empty vocabulary yields 0.0.
pub fn jd_resume_similarity(jd_text: &str, resume_text: &str) -> f64 {
    let docs = [term_grams(jd_text), term_grams(resume_text)];

    let mut vocab: HashMap<&str, usize> = HashMap::new();
    for doc in &docs {
        for term in doc {
            let next = vocab.len();
            vocab.entry(term.as_str()).or_insert(next);
        }
    }
    if vocab.is_empty() {
        return 0.0;
    }

    let mut vectors = [vec![0.0_f64; vocab.len()], vec![0.0_f64; vocab.len()]];
    for (d, doc) in docs.iter().enumerate() {
        for term in doc {
            vectors[d][vocab[term.as_str()]] += 1.0;
        }
    }

    // Smoothed idf over the two-document corpus: ln((1+n)/(1+df)) + 1, n = 2.
    for idx in 0..vocab.len() {
        let df = vectors.iter().filter(|v| v[idx] > 0.0).count() as f64;
        let idf = ((1.0 + 2.0) / (1.0 + df)).ln() + 1.0;
        vectors[0][idx] *= idf;
        vectors[1][idx] *= idf;
    }

    cosine(&vectors[0], &vectors[1])
}

/// Unigrams and bigrams over stopword-filtered word tokens.
fn term_grams(text: &str) -> Vec<String> {
    let lowered = nfkc_lower(text);
    let words: Vec<&str> = WORD_RE
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|w| !is_stopword(w))
        .collect();

    let mut terms: Vec<String> = words.iter().map(|w| (*w).to_string()).collect();
    terms.extend(words.windows(2).map(|pair| format!("{} {}", pair[0], pair[1])));
    terms
}

fn cosine(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        tracing::debug!("zero vector in similarity; returning 0.0");
        return 0.0;
    }

    dot / (norm_a * norm_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_documents_score_one() {
        let text = "senior python developer building data pipelines";
        let sim = jd_resume_similarity(text, text);
        assert!((sim - 1.0).abs() < 1e-9);
    }

    #[test]
    fn identical_beats_disjoint_vocabulary() {
        let text = "rust systems engineer";
        let unrelated = "pastry chef watercolor painting";
        assert!(jd_resume_similarity(text, text) > jd_resume_similarity(text, unrelated));
        assert_eq!(jd_resume_similarity(text, unrelated), 0.0);
    }

    #[test]
    fn partial_overlap_lands_strictly_between() {
        let jd = "python developer with docker experience";
        let resume = "python developer shipping java services";
        let sim = jd_resume_similarity(jd, resume);
        assert!(sim > 0.0 && sim < 1.0);
    }

    #[test]
    fn empty_or_stopword_only_documents_score_zero() {
        assert_eq!(jd_resume_similarity("", ""), 0.0);
        assert_eq!(jd_resume_similarity("python developer", ""), 0.0);
        assert_eq!(jd_resume_similarity("the and of", "python developer"), 0.0);
    }

    #[test]
    fn bigrams_reward_matching_word_order() {
        let jd = "machine learning engineer";
        let ordered = "machine learning practice";
        let scrambled = "learning machine practice";
        assert!(jd_resume_similarity(jd, ordered) > jd_resume_similarity(jd, scrambled));
    }

    #[test]
    fn result_stays_in_unit_interval() {
        let sim = jd_resume_similarity("a b python sql sql", "python python sql");
        assert!((0.0..=1.0).contains(&sim));
    }
}
