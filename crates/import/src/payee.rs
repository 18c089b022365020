use std::collections::BTreeSet;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A mapping rule as it appears in the configuration document: a canonical
/// payee name plus the pattern strings that claim memos for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayeeMapping {
    pub name: String,
    pub patterns: Vec<String>,
}

#[derive(Error, Debug)]
pub enum MappingError {
    #[error("invalid pattern {pattern:?} for payee {payee:?}: {source}")]
    InvalidPattern {
        payee: String,
        pattern: String,
        source: regex::Error,
    },
    #[error("mapping entry with an empty payee name")]
    MissingName,
    #[error("payee {payee:?} has no patterns")]
    NoPatterns { payee: String },
}

/// The compiled form of a [`PayeeMapping`]. Rule order and pattern order are
/// preserved from the configuration.
#[derive(Debug, Clone)]
struct MappingRule {
    name: String,
    patterns: Vec<Regex>,
}

/// The three operations collaborators need from a resolver. Input adapters
/// and the reporting step take any implementation, so tests can substitute
/// a stub for the real [`PayeeResolver`].
pub trait ResolvePayee {
    fn load_mappings(&mut self, mappings: Vec<PayeeMapping>) -> Result<(), MappingError>;
    fn resolve(&mut self, memo: &str) -> String;
    fn unresolved(&self) -> BTreeSet<String>;
}

/// Maps free-text transaction memos to canonical payee names.
///
/// Rules are scanned in load order and the first rule with any matching
/// pattern wins; patterns are case-insensitive and match anywhere in the
/// memo. Memos that no rule claims are accumulated for end-of-run
/// reporting, which is why `resolve` takes `&mut self`.
#[derive(Debug, Default)]
pub struct PayeeResolver {
    mappings: Vec<MappingRule>,
    unresolved: BTreeSet<String>,
}

impl PayeeResolver {
    /// A resolver with no rules; every memo resolves to the empty string
    /// until [`load_mappings`](Self::load_mappings) is called.
    pub fn new() -> Self {
        PayeeResolver::default()
    }

    /// Compiles `mappings` and replaces the current rule table wholesale.
    ///
    /// The swap is atomic: the new table is fully compiled and validated
    /// before it takes effect, so a failed load leaves the previous rules
    /// in place. Previously recorded unresolved memos are kept either way;
    /// they describe historical misses, not the current table.
    pub fn load_mappings(&mut self, mappings: Vec<PayeeMapping>) -> Result<(), MappingError> {
        let mut table = Vec::with_capacity(mappings.len());
        for mapping in mappings {
            if mapping.name.is_empty() {
                return Err(MappingError::MissingName);
            }
            if mapping.patterns.is_empty() {
                return Err(MappingError::NoPatterns {
                    payee: mapping.name,
                });
            }
            let mut patterns = Vec::with_capacity(mapping.patterns.len());
            for pattern in &mapping.patterns {
                let compiled = RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|source| MappingError::InvalidPattern {
                        payee: mapping.name.clone(),
                        pattern: pattern.clone(),
                        source,
                    })?;
                patterns.push(compiled);
            }
            table.push(MappingRule {
                name: mapping.name,
                patterns,
            });
        }

        self.mappings = table;
        tracing::debug!("Loaded {} payee mappings", self.mappings.len());
        Ok(())
    }

    /// Resolves `memo` to a payee name, or to the empty string when no rule
    /// matches. A miss also records the memo verbatim in the unresolved set.
    pub fn resolve(&mut self, memo: &str) -> String {
        for rule in &self.mappings {
            if rule.patterns.iter().any(|pattern| pattern.is_match(memo)) {
                return rule.name.clone();
            }
        }

        tracing::debug!("No payee mapping matched: {memo}");
        self.unresolved.insert(memo.to_string());
        String::new()
    }

    /// A snapshot of the memos that have missed so far. The returned set is
    /// a copy; mutating it does not touch the resolver.
    pub fn unresolved(&self) -> BTreeSet<String> {
        self.unresolved.clone()
    }
}

impl ResolvePayee for PayeeResolver {
    fn load_mappings(&mut self, mappings: Vec<PayeeMapping>) -> Result<(), MappingError> {
        PayeeResolver::load_mappings(self, mappings)
    }

    fn resolve(&mut self, memo: &str) -> String {
        PayeeResolver::resolve(self, memo)
    }

    fn unresolved(&self) -> BTreeSet<String> {
        PayeeResolver::unresolved(self)
    }
}
