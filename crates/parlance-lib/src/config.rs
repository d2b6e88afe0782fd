//! Settings read from TOML.
//!
//! ```toml
//! backend = "flat"
//! preamble = "PREFIX rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#>"
//! select_all = false
//! fuel = 1000000
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::render::{DotRenderer, MqlRenderer, QueryRenderer, SparqlRenderer};

pub const DEFAULT_FUEL: u32 = 1_000_000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown backend `{0}`, expected `flat`, `nested` or `dot`")]
    UnknownBackend(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// SPARQL triple patterns.
    #[default]
    Flat,
    /// MQL nested objects.
    Nested,
    /// Graphviz drawing.
    Dot,
}

impl BackendKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::Nested => "nested",
            Self::Dot => "dot",
        }
    }
}

impl FromStr for BackendKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flat" | "sparql" => Ok(Self::Flat),
            "nested" | "mql" => Ok(Self::Nested),
            "dot" => Ok(Self::Dot),
            other => Err(ConfigError::UnknownBackend(other.to_owned())),
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub backend: BackendKind,
    /// Emitted before flat queries, typically prefix declarations.
    pub preamble: String,
    pub select_all: bool,
    /// VM steps allowed per rule attempt.
    pub fuel: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            preamble: String::new(),
            select_all: false,
            fuel: DEFAULT_FUEL,
        }
    }
}

impl Settings {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// The configured backend.
    pub fn renderer(&self) -> Box<dyn QueryRenderer> {
        match self.backend {
            BackendKind::Flat => Box::new(
                SparqlRenderer::new()
                    .preamble(self.preamble.clone())
                    .select_all(self.select_all),
            ),
            BackendKind::Nested => Box::new(MqlRenderer::new()),
            BackendKind::Dot => Box::new(DotRenderer::new()),
        }
    }
}
