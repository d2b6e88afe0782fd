use crate::{Span, TaggedWord, WordList};

fn words() -> Vec<TaggedWord> {
    vec![
        TaggedWord::new("Who", "who", "WP"),
        TaggedWord::new("is", "be", "VBZ").with_prob(0.99),
        TaggedWord::new("Tom", "Tom", "NNP"),
        TaggedWord::new("Cruise", "Cruise", "NNP"),
    ]
}

#[test]
fn word_display_matches_tagger_format() {
    let words = words();
    assert_eq!(words[0].to_string(), "Who|who|WP");
    assert_eq!(words[1].to_string(), "is|be|VBZ|0.99");
}

#[test]
fn word_list_joins_fields() {
    let words = words();
    let list = WordList::new(&words[2..]);
    assert_eq!(list.len(), 2);
    assert_eq!(list.tokens(), "Tom Cruise");
    assert_eq!(list.lemmas(), "Tom Cruise");
    assert_eq!(list.to_string(), "Tom|Tom|NNP Cruise|Cruise|NNP");

    let empty = WordList::new(&words[..0]);
    assert!(empty.is_empty());
    assert_eq!(empty.tokens(), "");
}

#[test]
fn word_deserializes_without_prob() {
    let word: TaggedWord =
        serde_json::from_str(r#"{"token":"is","lemma":"be","pos":"VBZ"}"#).unwrap();
    assert_eq!(word, TaggedWord::new("is", "be", "VBZ"));
    assert_eq!(
        serde_json::to_string(&word).unwrap(),
        r#"{"token":"is","lemma":"be","pos":"VBZ"}"#
    );
}

#[test]
fn span_containment() {
    let outer = Span::new(1, 4);
    assert!(outer.contains(Span::new(2, 4)));
    assert!(outer.contains(Span::new(1, 1)));
    assert!(!outer.contains(Span::new(0, 2)));
    assert_eq!(outer.len(), 3);
    assert_eq!(outer.to_string(), "1..4");
    assert_eq!(Span::from(2..2), Span::new(2, 2));
    assert!(Span::new(2, 2).is_empty());
}
