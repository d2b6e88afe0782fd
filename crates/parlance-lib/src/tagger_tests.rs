use parlance_core::TaggedWord;

use crate::tagger::{PretaggedTagger, Tagger, TaggingError};

#[test]
fn pretagged_words() {
    let words = PretaggedTagger
        .tag("who|who|WP is|be|VBZ  Tom|Tom|NNP|0.93")
        .unwrap();

    assert_eq!(
        words,
        [
            TaggedWord::new("who", "who", "WP"),
            TaggedWord::new("is", "be", "VBZ"),
            TaggedWord::new("Tom", "Tom", "NNP").with_prob(0.93),
        ]
    );
}

#[test]
fn empty_text_has_no_words() {
    assert!(PretaggedTagger.tag("  ").unwrap().is_empty());
}

#[test]
fn malformed_entries_fail() {
    let err = PretaggedTagger.tag("who|who").unwrap_err();
    assert_eq!(
        err.to_string(),
        "tagging failed: expected `token|lemma|POS[|prob]`, found `who|who`"
    );

    assert!(PretaggedTagger.tag("who||WP").is_err());
    assert!(PretaggedTagger.tag("who|who|WP|likely").is_err());
}

#[test]
fn closures_are_taggers() {
    let tagger = |text: &str| -> Result<Vec<TaggedWord>, TaggingError> {
        Ok(text
            .split_whitespace()
            .map(|token| TaggedWord::new(token, token.to_lowercase(), "NN"))
            .collect())
    };

    let words = tagger.tag("Dogs bark").unwrap();
    assert_eq!(words[0].lemma, "dogs");
    assert_eq!(words.len(), 2);
}
