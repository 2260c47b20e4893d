//! Lower-cased unigram/bigram tokenization shared by index build and query
//! transform. A token starts with an alphanumeric (or underscore) character
//! and may continue with alphanumerics, underscores, or hyphens.

/// Split text into lower-cased word tokens.
pub fn words(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut tokens = Vec::new();
    let mut current = String::new();

    for c in lower.chars() {
        let starts = c.is_alphanumeric() || c == '_';
        let continues = starts || c == '-';
        if current.is_empty() {
            if starts {
                current.push(c);
            }
            // Leading hyphens and punctuation are skipped.
        } else if continues {
            current.push(c);
        } else {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

/// Unigram + adjacent-bigram bag. Bigram terms join the two words with a
/// single space, matching the indexed vocabulary format.
pub fn terms(text: &str, bigrams: bool) -> Vec<String> {
    let words = words(text);
    let mut terms = words.clone();
    if bigrams {
        for pair in words.windows(2) {
            terms.push(format!("{} {}", pair[0], pair[1]));
        }
    }
    terms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_splits_on_punctuation() {
        assert_eq!(words("Честность — лучшая политика."), vec![
            "честность",
            "лучшая",
            "политика"
        ]);
    }

    #[test]
    fn keeps_inner_hyphens() {
        assert_eq!(words("какой-то выбор"), vec!["какой-то", "выбор"]);
    }

    #[test]
    fn single_letter_words_survive() {
        assert_eq!(words("я и он"), vec!["я", "и", "он"]);
    }

    #[test]
    fn bigrams_join_with_space() {
        let t = terms("правда и доверие", true);
        assert!(t.contains(&"правда и".to_string()));
        assert!(t.contains(&"и доверие".to_string()));
        assert_eq!(t.len(), 5);
    }

    #[test]
    fn bigrams_can_be_disabled() {
        assert_eq!(terms("правда и доверие", false).len(), 3);
    }

    #[test]
    fn empty_text_yields_no_terms() {
        assert!(terms("", true).is_empty());
        assert!(terms("…!?", true).is_empty());
    }
}
