use std::slice;

use tracing::debug;

use super::{CompiledRule, Rule};
use crate::Error;

/// Collects rules at startup. Frozen into a [`RuleSet`] before any question
/// is evaluated.
#[derive(Debug, Default)]
pub struct RuleRegistry {
    rules: Vec<Rule>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, rule: Rule) -> &mut Self {
        self.rules.push(rule);
        self
    }

    pub fn with(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Compile every rule and order them by descending weight.
    ///
    /// Rules of equal weight keep their registration order.
    pub fn build(self) -> Result<RuleSet, Error> {
        let mut rules = self
            .rules
            .into_iter()
            .map(|rule| {
                let name = rule.name().to_owned();
                rule.compile().map_err(|source| Error::Compile { rule: name, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        rules.sort_by_key(|rule| std::cmp::Reverse(rule.weight()));
        debug!(count = rules.len(), "rule set built");
        Ok(RuleSet { rules })
    }
}

/// Compiled rules in the order they are tried.
#[derive(Debug, Default)]
pub struct RuleSet {
    rules: Vec<CompiledRule>,
}

impl RuleSet {
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CompiledRule> {
        self.rules.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, CompiledRule> {
        self.rules.iter()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a CompiledRule;
    type IntoIter = slice::Iter<'a, CompiledRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
