use crate::types::Content;
use lazy_static::lazy_static;
use serde_json::Value;
use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref STOPWORDS: HashSet<&'static str> = {
        // Apostrophes are stripped before lookup, so contractions appear in
        // their collapsed form (dont, isnt, ...).
        let words: &[&str] = &[
            "a","about","above","after","again","against","all","am","an","and","any","are","arent","as","at",
            "be","because","been","before","being","below","between","both","but","by",
            "can","cant","cannot","could","couldnt",
            "did","didnt","do","does","doesnt","doing","dont","down","during",
            "each","few","for","from","further",
            "had","hadnt","has","hasnt","have","havent","having","he","her","here","heres","hers","herself","him","himself","his","how","hows",
            "i","if","in","into","is","isnt","it","its","itself",
            "lets","me","more","most","mustnt","my","myself",
            "no","nor","not","of","off","on","once","only","or","other","ought","our","ours","ourselves","out","over","own",
            "same","she","should","shouldnt","so","some","such",
            "than","that","thats","the","their","theirs","them","themselves","then","there","theres","these","they","this","those","through","to","too",
            "under","until","up","very",
            "was","wasnt","we","were","werent","what","whats","when","whens","where","wheres","which","while","who","whos","whom","why","whys","with","wont","would","wouldnt",
            "you","your","yours","yourself","yourselves",
        ];
        words.iter().copied().collect()
    };
}

/// Flattens `content` into lowercase alphanumeric tokens with stop words
/// removed. `extra_stop_words` are filtered in addition to the built-in
/// English list. Pure text transform; the engine consumes the output as-is.
pub fn tokenize(content: &Content, extra_stop_words: &[String]) -> Vec<String> {
    let mut text = content.string.clone();

    if !content.object.is_empty() {
        if !content.object_indexes.is_empty() {
            for index in &content.object_indexes {
                if let Some(value) = content.object.get(index) {
                    push_fragment(&mut text, value);
                }
            }
        } else {
            for value in content.object.values() {
                push_fragment(&mut text, value);
            }
        }
    }

    let normalized = text.nfkc().collect::<String>().to_lowercase();
    // Keep only ascii alphanumerics and spaces; punctuation joins rather
    // than splits, so "don't" becomes "dont".
    let filtered: String = normalized
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect();

    filtered
        .split_whitespace()
        .filter(|word| !STOPWORDS.contains(word))
        .filter(|word| !extra_stop_words.iter().any(|stop| stop == word))
        .map(str::to_string)
        .collect()
}

/// Scalars are stringified; nested objects and arrays carry no tokens.
fn push_fragment(text: &mut String, value: &Value) {
    let fragment = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return,
    };
    if !text.is_empty() {
        text.push(' ');
    }
    text.push_str(&fragment);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn content_from_text(text: &str) -> Content {
        Content {
            string: text.to_string(),
            ..Content::default()
        }
    }

    #[test]
    fn lowercases_and_strips_punctuation() {
        let tokens = tokenize(&content_from_text("Rust-lang, don't panic!"), &[]);
        assert_eq!(tokens, vec!["rustlang", "panic"]);
    }

    #[test]
    fn selects_object_fields_in_index_order() {
        let content = Content {
            string: String::new(),
            object: serde_json::from_value(json!({
                "title": "alpha",
                "body": "beta",
                "skipped": "gamma"
            }))
            .unwrap(),
            object_indexes: vec!["body".to_string(), "title".to_string()],
        };
        assert_eq!(tokenize(&content, &[]), vec!["beta", "alpha"]);
    }

    #[test]
    fn extra_stop_words_are_filtered() {
        let tokens = tokenize(&content_from_text("keep drop keep"), &["drop".to_string()]);
        assert_eq!(tokens, vec!["keep", "keep"]);
    }
}
