//! Built-in rules used by `parlance ask`.
//!
//! A small DBpedia-flavoured pack: enough to drive the dispatcher from the
//! command line. Real rule packs live with their applications.

use parlance_compiler::{lemma, pos};
use parlance_core::Expression;
use parlance_core::dsl::{FixedRelation, FixedType, HasKeyword};
use parlance_lib::semantics::handle_noun_phrase;
use parlance_lib::{
    BackendKind, Dispatcher, DotRenderer, Error, HandlerSet, Particle, Pattern, PretaggedTagger,
    Rule, RuleRegistry, RuleSet, Settings,
};

const IS_PERSON: FixedType = FixedType::new("foaf:Person");
const IS_COUNTRY: FixedType = FixedType::new("dbpedia-owl:Country");

const DEFINITION_OF: FixedRelation = FixedRelation::new("rdfs:comment").reversed();
const CAPITAL_OF: FixedRelation = FixedRelation::new("dbpedia-owl:capital");
const POPULATION_OF: FixedRelation = FixedRelation::new("dbpprop:populationTotal");

/// Keywords are English `rdfs:label` literals.
pub const KEYWORD: HasKeyword = HasKeyword::new()
    .with_relation("rdfs:label")
    .with_sanitizer(english_label);

fn english_label(text: &str) -> String {
    format!("\"{}\"@en", text.replace('"', ""))
}

fn proper_noun(kind: &str, class: FixedType) -> Particle {
    Particle::new(kind, pos("NNP").plus()).interpret(move |m| {
        Ok(class.build() + KEYWORD.apply(&m.words().tokens()))
    })
}

fn person() -> Particle {
    proper_noun("Person", IS_PERSON)
}

fn country() -> Particle {
    proper_noun("Country", IS_COUNTRY)
}

/// Optional closing punctuation.
fn question_mark() -> Pattern {
    pos(".").opt()
}

fn what_is() -> Rule {
    let pattern =
        lemma("what") + lemma("be") + pos("DT").opt() + pos("NN").plus().capture("thing");
    Rule::new("what-is", pattern + question_mark(), |m| {
        let words = m.group("thing")?;
        let thing = handle_noun_phrase(words.as_slice(), m.handlers(), false, false)?;
        Ok((DEFINITION_OF.apply(&thing), serde_json::json!("define")))
    })
}

fn who_is() -> Rule {
    Rule::new(
        "who-is",
        lemma("who") + lemma("be") + person() + question_mark(),
        |m| Ok(DEFINITION_OF.apply(&m.interpret("person")?)),
    )
}

fn capital_of() -> Rule {
    let pattern = lemma("what") + lemma("be") + pos("DT").opt() + lemma("capital") + pos("IN");
    Rule::new("capital-of", pattern + country() + question_mark(), |m| {
        Ok(CAPITAL_OF.apply(&m.interpret("country")?))
    })
    .weight(1)
}

fn population_of() -> Rule {
    let how_many = lemma("how") + lemma("many") + lemma("people") + lemma("live") + lemma("in");
    let what_is_the = lemma("what") + lemma("be") + pos("DT").opt() + lemma("population") + pos("IN");
    let pattern = (how_many | what_is_the) + country() + question_mark();
    Rule::new("population-of", pattern, |m| {
        let population: Expression = POPULATION_OF.apply(&m.interpret("country")?);
        Ok((population, serde_json::json!("literal")))
    })
    .weight(1)
}

pub fn rules() -> Result<RuleSet, Error> {
    RuleRegistry::new()
        .with(what_is())
        .with(who_is())
        .with(capital_of())
        .with(population_of())
        .build()
}

pub fn handlers() -> HandlerSet {
    HandlerSet::new().with_keyword(KEYWORD)
}

/// Dispatcher over the demo rules; `settings` pick backend and fuel.
pub fn dispatcher(settings: &Settings) -> Result<Dispatcher, Error> {
    let dispatcher =
        Dispatcher::from_settings(rules()?, PretaggedTagger, settings).handlers(handlers());
    Ok(match settings.backend {
        BackendKind::Dot => {
            dispatcher.render_with(DotRenderer::new().keyword_relation(KEYWORD.relation()))
        }
        BackendKind::Flat | BackendKind::Nested => dispatcher,
    })
}
