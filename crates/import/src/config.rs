use serde::Deserialize;
use thiserror::Error;

use crate::payee::{MappingError, PayeeMapping, PayeeResolver};

/// The shape of the mapping document:
///
/// ```toml
/// [[payee]]
/// name = "Spotify"
/// patterns = ["SPOTIFY"]
/// ```
#[derive(Debug, Deserialize)]
struct MappingDocument {
    #[serde(default, rename = "payee")]
    payees: Vec<PayeeMapping>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to parse payee mappings: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Mapping(#[from] MappingError),
    #[error("failed to render payee mappings: {0}")]
    Render(#[from] toml::ser::Error),
}

/// Deserializes a mapping document, preserving entry order. Reading the
/// document from wherever it lives is the caller's job.
pub fn mappings_from_toml(document: &str) -> Result<Vec<PayeeMapping>, ConfigError> {
    let doc: MappingDocument = toml::from_str(document)?;
    Ok(doc.payees)
}

/// Parses a mapping document and loads it into a fresh resolver.
pub fn resolver_from_toml(document: &str) -> Result<PayeeResolver, ConfigError> {
    let mut resolver = PayeeResolver::new();
    resolver.load_mappings(mappings_from_toml(document)?)?;
    Ok(resolver)
}
