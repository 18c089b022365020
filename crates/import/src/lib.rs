pub mod config;
pub mod enrich;
pub mod payee;
pub mod report;

pub use config::{mappings_from_toml, resolver_from_toml, ConfigError};
pub use enrich::{assign_payees, MemoSource};
pub use payee::{MappingError, PayeeMapping, PayeeResolver, ResolvePayee};
pub use report::{unresolved_config_stub, unresolved_lines};
