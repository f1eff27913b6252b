use engine::tokenizer::tokenize;
use engine::Content;
use serde_json::json;

fn text_content(text: &str) -> Content {
    Content {
        string: text.to_string(),
        ..Content::default()
    }
}

#[test]
fn it_normalizes_and_lowercases() {
    let tokens = tokenize(&text_content("Café MENU №7"), &[]);
    // NFKC folds the numero sign to "no" and café to cafe.
    assert!(tokens.contains(&"cafe".to_string()));
    assert!(tokens.contains(&"menu".to_string()));
    assert!(tokens.contains(&"no7".to_string()));
}

#[test]
fn it_filters_stopwords() {
    let tokens = tokenize(&text_content("The quick brown fox and the lazy dog"), &[]);
    assert!(!tokens.contains(&"the".to_string()));
    assert!(!tokens.contains(&"and".to_string()));
    assert!(tokens.contains(&"quick".to_string()));
    assert!(tokens.contains(&"dog".to_string()));
}

#[test]
fn it_flattens_object_values_when_no_indexes_given() {
    let content = Content {
        string: "intro".to_string(),
        object: serde_json::from_value(json!({
            "count": 12,
            "flag": true,
            "nested": { "ignored": "yes" },
            "title": "Hello World"
        }))
        .unwrap(),
        object_indexes: Vec::new(),
    };
    let tokens = tokenize(&content, &[]);
    assert!(tokens.contains(&"intro".to_string()));
    assert!(tokens.contains(&"hello".to_string()));
    assert!(tokens.contains(&"world".to_string()));
    assert!(tokens.contains(&"12".to_string()));
    assert!(tokens.contains(&"true".to_string()));
    // Nested structures contribute nothing.
    assert!(!tokens.contains(&"ignored".to_string()));
    assert!(!tokens.contains(&"yes".to_string()));
}

#[test]
fn it_preserves_token_order_and_repetition() {
    let tokens = tokenize(&text_content("beta alpha beta"), &[]);
    assert_eq!(tokens, vec!["beta", "alpha", "beta"]);
}

#[test]
fn empty_content_yields_no_tokens() {
    assert!(tokenize(&Content::default(), &[]).is_empty());
}
