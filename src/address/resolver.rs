//! Definition of the address resolver contract and the resolver chain.

use regex::Regex;

use super::defs::{Resolution, ResolveError, ResolveResult};
use super::direct::DirectAddressResolver;
use super::nic_match::NicMatchResolver;
use super::nics::NicSource;
use crate::config::AgentConfig;

/// Derives a bind address from agent configuration.
///
/// Each resolver owns one config key. A key which is absent or holds an
/// empty value yields [`Resolution::NotConfigured`] and nothing else runs;
/// otherwise the resolver yields exactly one outcome or an error.
pub trait AddressResolver {
    /// Resolves an address from the given configuration.
    fn resolve(&self, config: &AgentConfig) -> ResolveResult;
}

/// Compiles `pattern` so that a match must cover the whole candidate string,
/// as `"eth.*"` matches `"eth0"` but a bare `"eth"` does not.
pub(crate) fn compile_full_match(
    key: &'static str,
    pattern: &str,
) -> Result<Regex, ResolveError> {
    Regex::new(&format!("^(?:{pattern})$")).map_err(|source| ResolveError::InvalidPattern {
        key,
        pattern: pattern.to_owned(),
        source,
    })
}

/// Consults the address resolvers in order over the same config and
/// interface source and returns the outcome of the first one which
/// found its key configured.
///
/// The direct address resolver is consulted before the NIC-matching one.
/// Returns [`Resolution::NotConfigured`] only if every resolver did.
pub fn resolve_bind_addr<S: NicSource>(config: &AgentConfig, nics: &S) -> ResolveResult {
    let direct = DirectAddressResolver::new(nics);
    let nic_match = NicMatchResolver::new(nics);
    let resolvers: [&dyn AddressResolver; 2] = [&direct, &nic_match];

    for resolver in resolvers {
        match resolver.resolve(config)? {
            Resolution::NotConfigured => continue,
            found => return Ok(found),
        }
    }

    Ok(Resolution::NotConfigured)
}
