use std::collections::HashSet;
use std::sync::LazyLock;

use unicode_normalization::UnicodeNormalization;

/// English stopword list shared by the quality filter and the TF-IDF
/// vectorizer (the classic frozen list used by bag-of-words vectorizers).
pub const STOPWORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst",
    "amoungst", "amount", "an", "and", "another", "any", "anyhow", "anyone", "anything", "anyway",
    "anywhere", "are", "around", "as", "at", "back", "be", "became", "because", "become",
    "becomes", "becoming", "been", "before", "beforehand", "behind", "being", "below", "beside",
    "besides", "between", "beyond", "bill", "both", "bottom", "but", "by", "call", "can",
    "cannot", "cant", "co", "con", "could", "couldnt", "cry", "de", "describe", "detail", "do",
    "done", "down", "due", "during", "each", "eg", "eight", "either", "eleven", "else",
    "elsewhere", "empty", "enough", "etc", "even", "ever", "every", "everyone", "everything",
    "everywhere", "except", "few", "fifteen", "fifty", "fill", "find", "fire", "first", "five",
    "for", "former", "formerly", "forty", "found", "four", "from", "front", "full", "further",
    "get", "give", "go", "had", "has", "hasnt", "have", "he", "hence", "her", "here",
    "hereafter", "hereby", "herein", "hereupon", "hers", "herself", "him", "himself", "his",
    "how", "however", "hundred", "i", "ie", "if", "in", "inc", "indeed", "interest", "into",
    "is", "it", "its", "itself", "keep", "last", "latter", "latterly", "least", "less", "ltd",
    "made", "many", "may", "me", "meanwhile", "might", "mill", "mine", "more", "moreover",
    "most", "mostly", "move", "much", "must", "my", "myself", "name", "namely", "neither",
    "never", "nevertheless", "next", "nine", "no", "nobody", "none", "noone", "nor", "not",
    "nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one", "only", "onto",
    "or", "other", "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own",
    "part", "per", "perhaps", "please", "put", "rather", "re", "same", "see", "seem", "seemed",
    "seeming", "seems", "serious", "several", "she", "should", "show", "side", "since",
    "sincere", "six", "sixty", "so", "some", "somehow", "someone", "something", "sometime",
    "sometimes", "somewhere", "still", "such", "system", "take", "ten", "than", "that", "the",
    "their", "them", "themselves", "then", "thence", "there", "thereafter", "thereby",
    "therefore", "therein", "thereupon", "these", "they", "thick", "thin", "third", "this",
    "those", "though", "three", "through", "throughout", "thru", "thus", "to", "together",
    "too", "top", "toward", "towards", "twelve", "twenty", "two", "un", "under", "until", "up",
    "upon", "us", "very", "via", "was", "we", "well", "were", "what", "whatever", "when",
    "whence", "whenever", "where", "whereafter", "whereas", "whereby", "wherein", "whereupon",
    "wherever", "whether", "which", "while", "whither", "who", "whoever", "whole", "whom",
    "whose", "why", "will", "with", "within", "without", "would", "yet", "you", "your",
    "yours", "yourself", "yourselves",
];

static STOPWORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOPWORDS.iter().copied().collect());

pub fn is_stopword(word: &str) -> bool {
    STOPWORD_SET.contains(word)
}

/// A word with its original casing preserved alongside the NFKC-lowercased
/// form used for comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub surface: String,
    pub lower: String,
}

pub fn nfkc_lower(input: &str) -> String {
    input.nfkc().collect::<String>().trim().to_lowercase()
}

fn is_outer_punct(c: char) -> bool {
    matches!(
        c,
        ',' | '.'
            | ';'
            | ':'
            | '!'
            | '?'
            | '('
            | ')'
            | '['
            | ']'
            | '{'
            | '}'
            | '"'
            | '\''
            | '`'
            | '<'
            | '>'
            | '/'
            | '\\'
            | '|'
            | '\u{2018}'
            | '\u{2019}'
            | '\u{201c}'
            | '\u{201d}'
            | '\u{2026}'
    )
}

/// Whitespace-split tokenizer that strips surrounding punctuation while
/// keeping interior characters, so `node.js`, `c++` and `c#` survive intact.
pub fn tokenize(text: &str) -> Vec<Token> {
    text.split_whitespace()
        .filter_map(|raw| {
            let trimmed = raw.trim_matches(is_outer_punct);
            if trimmed.is_empty() {
                None
            } else {
                Some(Token {
                    surface: trimmed.to_string(),
                    lower: nfkc_lower(trimmed),
                })
            }
        })
        .collect()
}

/// Quality filter: lowercased alphabetic tokens with stopwords removed.
/// Not part of the scoring path.
pub fn clean_text(text: &str) -> String {
    tokenize(text)
        .into_iter()
        .filter(|t| !t.lower.is_empty() && t.lower.chars().all(char::is_alphabetic))
        .filter(|t| !is_stopword(&t.lower))
        .map(|t| t.lower)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_strips_outer_punctuation_only() {
        let tokens = tokenize("Python, Docker (expert). node.js; C++!");
        let lowered: Vec<_> = tokens.iter().map(|t| t.lower.as_str()).collect();
        assert_eq!(lowered, vec!["python", "docker", "expert", "node.js", "c++"]);
    }

    #[test]
    fn tokenize_preserves_surface_case() {
        let tokens = tokenize("PostgreSQL rocks");
        assert_eq!(tokens[0].surface, "PostgreSQL");
        assert_eq!(tokens[0].lower, "postgresql");
    }

    #[test]
    fn tokenize_handles_empty_and_punct_only_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("... !! ??").is_empty());
    }

    #[test]
    fn clean_text_drops_stopwords_and_non_alpha() {
        assert_eq!(
            clean_text("We are looking for a Python developer with 5 years"),
            "looking python developer years"
        );
    }

    #[test]
    fn clean_text_of_all_stopwords_is_empty() {
        assert_eq!(clean_text("the and of a"), "");
    }

    #[test]
    fn nfkc_lower_folds_fullwidth_forms() {
        assert_eq!(nfkc_lower("Ｐｙｔｈｏｎ"), "python");
        assert_eq!(nfkc_lower("  Rust  "), "rust");
    }
}
