use serde::Serialize;

use crate::config::ConfigError;
use crate::payee::{PayeeMapping, ResolvePayee};

/// The unresolved memos as plain lines for a diagnostic stream, in the
/// resolver's (sorted) set order.
pub fn unresolved_lines(resolver: &impl ResolvePayee) -> Vec<String> {
    resolver.unresolved().into_iter().collect()
}

#[derive(Serialize)]
struct StubDocument {
    payee: Vec<PayeeMapping>,
}

/// Renders every unresolved memo as a `[[payee]]` stub ready to append to
/// the mapping document: the memo becomes a literal (escaped) pattern and
/// the name is left empty for the user to fill in.
///
/// Returns an empty string when every memo resolved.
pub fn unresolved_config_stub(resolver: &impl ResolvePayee) -> Result<String, ConfigError> {
    let unresolved = resolver.unresolved();
    if unresolved.is_empty() {
        return Ok(String::new());
    }

    let doc = StubDocument {
        payee: unresolved
            .into_iter()
            .map(|memo| PayeeMapping {
                name: String::new(),
                patterns: vec![regex::escape(&memo)],
            })
            .collect(),
    };
    Ok(toml::to_string(&doc)?)
}
