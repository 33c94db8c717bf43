//! Definition of the resolver matching interface addresses directly.

use log::debug;

use super::defs::{Resolution, ResolveError, ResolveResult};
use super::nics::NicSource;
use super::resolver::{compile_full_match, AddressResolver};
use crate::config::AgentConfig;

/// Resolves an address from a regular expression matched, in host order,
/// against the textual form of every address of every interface.
///
/// The wildcard values `"*"` and `"0.0.0.0"` select the bind-all outcome
/// before any pattern matching. Otherwise the first address whose text form
/// fully matches wins; if nothing matches, the answer is the loopback
/// address.
pub struct DirectAddressResolver<S: NicSource> {
    /// Supplier of host interfaces and the loopback fallback.
    nics: S,
}

impl<S: NicSource> DirectAddressResolver<S> {
    /// Config key holding the address pattern.
    pub const CONFIG_KEY: &'static str = "address";

    /// Values selecting the bind-all wildcard instead of one interface.
    const WILDCARD_VALUES: [&'static str; 2] = ["*", "0.0.0.0"];

    /// Creates resolver on top of the given interface source.
    pub fn new(nics: S) -> Self {
        Self { nics }
    }
}

impl<S: NicSource> AddressResolver for DirectAddressResolver<S> {
    fn resolve(&self, config: &AgentConfig) -> ResolveResult {
        let Some(value) = config.get_non_empty(Self::CONFIG_KEY) else {
            return Ok(Resolution::NotConfigured);
        };

        if Self::WILDCARD_VALUES.contains(&value) {
            debug!("Wildcard address {:?} configured, binding all interfaces", value);
            return Ok(Resolution::Unspecified);
        }

        let pattern = compile_full_match(Self::CONFIG_KEY, value)?;

        let nics = self
            .nics
            .interfaces()
            .map_err(|source| ResolveError::Enumeration {
                key: Self::CONFIG_KEY,
                source,
            })?;

        for nic in &nics {
            for addr in &nic.addrs {
                if pattern.is_match(&addr.to_string()) {
                    debug!(
                        "Address {} of interface {} matches pattern {:?}",
                        addr, nic.name, value
                    );
                    return Ok(Resolution::Addr(*addr));
                }
            }
        }

        let fallback = self
            .nics
            .loopback()
            .map_err(|source| ResolveError::Loopback { source })?;

        debug!(
            "No interface address matches pattern {:?}, falling back to loopback {}",
            value, fallback
        );

        Ok(Resolution::Addr(fallback))
    }
}
