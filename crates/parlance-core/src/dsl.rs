//! Expression constructors that rule packs compose.
//!
//! Each constructor is a `const`-constructible value, so a rule pack declares
//! its vocabulary as constants and applies them inside interpretations:
//!
//! ```
//! use parlance_core::dsl::{FixedRelation, FixedType, HasKeyword};
//!
//! const IS_COUNTRY: FixedType = FixedType::new("dbpedia-owl:Country");
//! const CAPITAL_OF: FixedRelation = FixedRelation::new("dbpedia-owl:capital").reversed();
//!
//! let country = IS_COUNTRY.build() + HasKeyword::DEFAULT.apply("Argentina");
//! let capital = CAPITAL_OF.apply(&country);
//! assert_eq!(capital.node_count(), 2);
//! ```

use crate::{Expression, Relation};

/// Relation used by [`FixedType`] unless overridden.
pub const TYPE_RELATION: &str = "rdf:type";

/// Relation used by [`HasKeyword`] unless overridden.
pub const KEYWORD_RELATION: &str = "parlance:Keyword";

/// `head rdf:type <type>`.
#[derive(Clone, Copy, Debug)]
pub struct FixedType {
    type_name: &'static str,
    relation: &'static str,
}

impl FixedType {
    pub const fn new(type_name: &'static str) -> Self {
        Self {
            type_name,
            relation: TYPE_RELATION,
        }
    }

    pub const fn with_relation(mut self, relation: &'static str) -> Self {
        self.relation = relation;
        self
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn relation(&self) -> &'static str {
        self.relation
    }

    pub fn build(&self) -> Expression {
        let mut expression = Expression::new();
        expression.add_data(self.relation, self.type_name);
        expression
    }
}

/// Relates a destination expression to a fresh head.
///
/// `apply` copies the destination and decapitates it, so the result's head is
/// new and linked to the destination's head by the relation.
#[derive(Clone, Copy, Debug)]
pub struct FixedRelation {
    /// `None` is the anonymous "is related to" relation.
    relation: Option<&'static str>,
    reverse: bool,
}

/// `head rdf:type <destination>` where the type is itself a query variable.
pub const HAS_TYPE: FixedRelation = FixedRelation::new(TYPE_RELATION);

/// Generic relation whose predicate is left to the backend.
pub const IS_RELATED_TO: FixedRelation = FixedRelation::anonymous();

impl FixedRelation {
    pub const fn new(relation: &'static str) -> Self {
        Self {
            relation: Some(relation),
            reverse: false,
        }
    }

    pub const fn anonymous() -> Self {
        Self {
            relation: None,
            reverse: false,
        }
    }

    /// Flip the edge direction.
    pub const fn reversed(mut self) -> Self {
        self.reverse = !self.reverse;
        self
    }

    pub fn is_reversed(&self) -> bool {
        self.reverse
    }

    pub fn relation(&self) -> Relation {
        match self.relation {
            Some(name) => Relation::named(name),
            None => Relation::Anonymous,
        }
    }

    pub fn apply(&self, destination: &Expression) -> Expression {
        let mut expression = destination.clone();
        expression.decapitate(self.relation(), self.reverse);
        expression
    }
}

/// `head <relation> "data"`, optionally language-tagged as `"data"@lang`.
#[derive(Clone, Copy, Debug)]
pub struct FixedDataRelation {
    relation: &'static str,
    language: Option<&'static str>,
}

impl FixedDataRelation {
    pub const fn new(relation: &'static str) -> Self {
        Self {
            relation,
            language: None,
        }
    }

    pub const fn language(mut self, language: &'static str) -> Self {
        self.language = Some(language);
        self
    }

    pub fn relation(&self) -> &'static str {
        self.relation
    }

    pub fn apply(&self, data: &str) -> Expression {
        let value = match self.language {
            Some(language) => format!("\"{data}\"@{language}"),
            None => data.to_owned(),
        };
        let mut expression = Expression::new();
        expression.add_data(self.relation, value);
        expression
    }
}

/// Information-retrieval key attached to the head.
///
/// `sanitize` rewrites the raw text before it is stored, so a rule pack can
/// adapt keywords to its database (e.g. add a language tag).
#[derive(Clone, Copy, Debug)]
pub struct HasKeyword {
    relation: &'static str,
    sanitize: fn(&str) -> String,
}

fn keep_keyword(text: &str) -> String {
    text.to_owned()
}

impl HasKeyword {
    pub const DEFAULT: Self = Self::new();

    pub const fn new() -> Self {
        Self {
            relation: KEYWORD_RELATION,
            sanitize: keep_keyword,
        }
    }

    pub const fn with_relation(mut self, relation: &'static str) -> Self {
        self.relation = relation;
        self
    }

    pub const fn with_sanitizer(mut self, sanitize: fn(&str) -> String) -> Self {
        self.sanitize = sanitize;
        self
    }

    pub fn relation(&self) -> &'static str {
        self.relation
    }

    pub fn sanitize(&self, text: &str) -> String {
        (self.sanitize)(text)
    }

    pub fn apply(&self, text: &str) -> Expression {
        let mut expression = Expression::new();
        expression.add_data(self.relation, self.sanitize(text));
        expression
    }
}

impl Default for HasKeyword {
    fn default() -> Self {
        Self::new()
    }
}
