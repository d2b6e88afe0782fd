use super::lexer::{SyntaxKind, lex, token_text};

fn kinds(source: &str) -> Vec<(SyntaxKind, &str)> {
    lex(source)
        .iter()
        .map(|t| (t.kind, token_text(source, t)))
        .collect()
}

#[test]
fn lexes_predicates_and_punctuation() {
    use SyntaxKind::*;
    assert_eq!(
        kinds("{ pos:PRP$ _ }+ @who"),
        vec![
            (BraceOpen, "{"),
            (Id, "pos"),
            (Colon, ":"),
            (Id, "PRP$"),
            (Underscore, "_"),
            (BraceClose, "}"),
            (Plus, "+"),
            (At, "@"),
            (Id, "who"),
        ]
    );
}

#[test]
fn strings_keep_quotes_and_escapes() {
    assert_eq!(
        kinds(r#"token:"a \"b\"" lemma:don't"#),
        vec![
            (SyntaxKind::Id, "token"),
            (SyntaxKind::Colon, ":"),
            (SyntaxKind::StringLiteral, r#""a \"b\"""#),
            (SyntaxKind::Id, "lemma"),
            (SyntaxKind::Colon, ":"),
            (SyntaxKind::Id, "don't"),
        ]
    );
}

#[test]
fn comments_and_whitespace_are_dropped() {
    assert_eq!(
        kinds("lemma:be // copula\n\tpos:NN"),
        vec![
            (SyntaxKind::Id, "lemma"),
            (SyntaxKind::Colon, ":"),
            (SyntaxKind::Id, "be"),
            (SyntaxKind::Id, "pos"),
            (SyntaxKind::Colon, ":"),
            (SyntaxKind::Id, "NN"),
        ]
    );
}

#[test]
fn garbage_is_coalesced() {
    let source = "pos:NN #%& _";
    let tokens = lex(source);
    assert_eq!(tokens[3].kind, SyntaxKind::Garbage);
    assert_eq!(tokens[3].span, 7..10);
    assert_eq!(tokens[4].kind, SyntaxKind::Underscore);
    assert_eq!(tokens.len(), 5);
}
