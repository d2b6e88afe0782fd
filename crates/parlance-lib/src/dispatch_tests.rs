use parlance_compiler::{any, lemma, pos};
use parlance_core::dsl::{FixedRelation, FixedType, HasKeyword};
use parlance_core::{Expression, TaggedWord};

use crate::config::{BackendKind, Settings};
use crate::render::{MqlRenderer, SparqlRenderer, Target};
use crate::rule::{Particle, Rule, RuleRegistry, RuleSet};
use crate::semantics::{HandlerSet, WordHandler, handle_noun_phrase};
use crate::tagger::{PretaggedTagger, TaggingError};
use crate::{Dispatcher, Error};

const IS_PERSON: FixedType = FixedType::new("foaf:Person");
const DEFINITION: FixedRelation = FixedRelation::new("rdfs:comment").reversed();

fn person() -> Particle {
    Particle::new("Person", pos("NNP").plus()).interpret(|m| {
        Ok(IS_PERSON.build() + HasKeyword::DEFAULT.apply(&m.words().tokens()))
    })
}

fn rules() -> RuleSet {
    RuleRegistry::new()
        .with(Rule::new(
            "who-is",
            lemma("who") + lemma("be") + person(),
            |m| Ok(DEFINITION.apply(&m.interpret("person")?)),
        ))
        .with(
            Rule::new(
                "what-is",
                lemma("what") + lemma("be") + pos("DT").opt() + pos("NN").plus().capture("thing"),
                |m| {
                    let thing = handle_noun_phrase(
                        m.group("thing")?.as_slice(),
                        m.handlers(),
                        false,
                        false,
                    )?;
                    Ok((DEFINITION.apply(&thing), serde_json::json!("definition")))
                },
            )
            .weight(2),
        )
        .with(Rule::new("fallback", any().plus(), |m| {
            Ok(HasKeyword::DEFAULT.apply(&m.words().lemmas()))
        }))
        .build()
        .unwrap()
}

fn dispatcher() -> Dispatcher {
    Dispatcher::new(rules(), PretaggedTagger, SparqlRenderer::new())
}

#[test]
fn best_rule_answers_first() {
    let answers: Vec<_> = dispatcher()
        .evaluate("who|who|WP is|be|VBZ Tom|Tom|NNP Cruise|Cruise|NNP")
        .collect::<Result<_, _>>()
        .unwrap();

    let names: Vec<&str> = answers.iter().map(|a| a.rule.as_str()).collect();
    assert_eq!(names, ["who-is", "fallback"]);

    let best = &answers[0];
    assert_eq!(best.target, Target::Variable("?x1".into()));
    insta::assert_snapshot!(best.query, @r#"
    SELECT DISTINCT ?x1 WHERE {
      ?x0 rdf:type foaf:Person.
      ?x0 parlance:Keyword "Tom Cruise".
      ?x1 rdfs:comment ?x0.
    }
    "#);
    assert_eq!(best.metadata, None);
}

#[test]
fn weight_orders_rules() {
    let dispatcher = dispatcher();
    let names: Vec<&str> = dispatcher.rules().iter().map(|rule| rule.name()).collect();
    assert_eq!(names, ["what-is", "who-is", "fallback"]);
}

#[test]
fn metadata_reaches_the_answer() {
    let answer = dispatcher()
        .first("what|what|WP is|be|VBZ a|a|DT dog|dog|NN")
        .unwrap()
        .unwrap();

    assert_eq!(answer.rule, "what-is");
    assert_eq!(answer.metadata, Some(serde_json::json!("definition")));
    assert!(answer.query.contains("?x1 rdfs:comment ?x0."));
}

#[test]
fn rejection_falls_through_to_next_rule() {
    let rules = RuleRegistry::new()
        .with(
            Rule::new("noun-phrase", any().plus(), |m| {
                handle_noun_phrase(m.words().as_slice(), m.handlers(), true, false)
            })
            .weight(1),
        )
        .with(Rule::new("fallback", any().plus(), |m| {
            Ok(HasKeyword::DEFAULT.apply(&m.words().lemmas()))
        }))
        .build()
        .unwrap();
    let dispatcher = Dispatcher::new(rules, PretaggedTagger, SparqlRenderer::new());

    let answer = dispatcher.first("big|big|JJ dog|dog|NN").unwrap().unwrap();
    assert_eq!(answer.rule, "noun-phrase");

    // `run` is not a noun, so the noun-phrase interpretation rejects it.
    let answer = dispatcher.first("dogs|dog|NNS run|run|VBP").unwrap().unwrap();
    assert_eq!(answer.rule, "fallback");
}

#[test]
fn no_rule_means_no_answer() {
    let rules = RuleRegistry::new()
        .with(Rule::new("only-nouns", pos("NN").plus(), |m| {
            Ok(HasKeyword::DEFAULT.apply(&m.words().lemmas()))
        }))
        .build()
        .unwrap();
    let dispatcher = Dispatcher::new(rules, PretaggedTagger, SparqlRenderer::new());

    assert_eq!(dispatcher.first("run|run|VB").unwrap(), None);
    assert_eq!(dispatcher.evaluate("run|run|VB").count(), 0);
}

#[test]
fn tagging_failure_means_no_answer() {
    let failing = |_: &str| -> Result<Vec<TaggedWord>, TaggingError> {
        Err(TaggingError::new("tagger crashed"))
    };
    let dispatcher = Dispatcher::new(rules(), failing, SparqlRenderer::new());

    assert_eq!(dispatcher.evaluate("anything").count(), 0);
    assert_eq!(dispatcher.first("anything").unwrap(), None);
}

#[test]
fn scope_violation_surfaces() {
    let rules = RuleRegistry::new()
        .with(Rule::new("who-is", lemma("who") + lemma("be") + person(), |m| {
            m.interpret("name")
        }))
        .build()
        .unwrap();
    let dispatcher = Dispatcher::new(rules, PretaggedTagger, SparqlRenderer::new());

    let err = dispatcher
        .first("who|who|WP is|be|VBZ Tom|Tom|NNP")
        .unwrap_err();
    assert!(matches!(err, Error::Lookup { ref rule, .. } if rule == "who-is"));
}

#[test]
fn generation_error_surfaces() {
    let rules = RuleRegistry::new()
        .with(Rule::new("lone", any(), |_| Ok(Expression::new())))
        .build()
        .unwrap();
    let dispatcher = Dispatcher::new(rules, PretaggedTagger, MqlRenderer::new());

    let err = dispatcher.first("hi|hi|UH").unwrap_err();
    assert_eq!(
        err.to_string(),
        "rule `lone`: expression has no node with outgoing edges to root a nested query"
    );
}

#[test]
fn settings_pick_backend_and_fuel() {
    let settings = Settings {
        backend: BackendKind::Nested,
        ..Settings::default()
    };
    let dispatcher = Dispatcher::from_settings(rules(), PretaggedTagger, &settings);

    let answer = dispatcher
        .first("who|who|WP is|be|VBZ Tom|Tom|NNP")
        .unwrap()
        .unwrap();
    assert_eq!(answer.target, Target::Path(Vec::new()));
    assert!(answer.query.contains(r#""rdfs:comment": {"#));

    let starved = Dispatcher::from_settings(
        rules(),
        PretaggedTagger,
        &Settings {
            fuel: 3,
            ..Settings::default()
        },
    );
    assert!(matches!(
        starved.first("who|who|WP is|be|VBZ Tom|Tom|NNP"),
        Err(Error::Runtime(_))
    ));
}

struct Cities;

impl WordHandler for Cities {
    fn check(&self, word: &TaggedWord) -> bool {
        word.lemma == "paris"
    }

    fn handle(&self, _: &TaggedWord) -> Expression {
        FixedType::new("dbpedia-owl:City").build()
    }
}

#[test]
fn handlers_reach_interpretations() {
    let dispatcher = dispatcher().handlers(HandlerSet::new().with(Cities));

    let answer = dispatcher
        .first("what|what|WP is|be|VBZ Paris|paris|NN")
        .unwrap()
        .unwrap();
    assert!(answer.query.contains("?x0 rdf:type dbpedia-owl:City."));
    assert!(!answer.query.contains("parlance:Keyword"));
}

#[test]
fn dispatcher_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Dispatcher>();
}
