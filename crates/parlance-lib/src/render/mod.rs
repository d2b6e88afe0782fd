//! Code generation backends.
//!
//! A renderer turns an [`Expression`] into a query string plus a description
//! of where the answer sits in the query's result. Renderers are pure: they
//! never mutate the expression and never consult anything but their own
//! options.

mod dot;
mod error;
mod mql;
mod sparql;


pub use dot::DotRenderer;
pub use error::GenerationError;
pub use mql::MqlRenderer;
pub use sparql::SparqlRenderer;

use std::fmt;

use parlance_core::Expression;
use serde::Serialize;

/// Where the answer sits in the result of a rendered query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Target {
    /// Query variable bound to the answer, e.g. `?x1`.
    Variable(String),
    /// Keys to follow from the top object of a nested query.
    Path(Vec<String>),
    /// The output is not a query (graph drawings).
    Unbound,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Variable(name) => f.write_str(name),
            Self::Path(keys) => write!(f, "[{}]", keys.join(", ")),
            Self::Unbound => f.write_str("-"),
        }
    }
}

/// Rendered query and its target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rendered {
    pub target: Target,
    pub query: String,
}

/// Turns expressions into queries of one language.
pub trait QueryRenderer: Send + Sync {
    /// Backend name, as accepted by the `backend` setting.
    fn name(&self) -> &str;

    fn render(&self, expression: &Expression) -> Result<Rendered, GenerationError>;
}

impl<R: QueryRenderer + ?Sized> QueryRenderer for Box<R> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn render(&self, expression: &Expression) -> Result<Rendered, GenerationError> {
        (**self).render(expression)
    }
}
