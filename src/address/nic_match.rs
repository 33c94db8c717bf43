//! Definition of the resolver matching interface names against a pattern.

use log::debug;

use super::defs::{Resolution, ResolveError, ResolveResult};
use super::nics::NicSource;
use super::resolver::{compile_full_match, AddressResolver};
use crate::config::AgentConfig;

/// Resolves an address from a regular expression matched, in host order,
/// against the names of the host's network interfaces.
///
/// The first interface whose full name matches and which has at least one
/// address wins; its first address is the answer. A name match without
/// addresses is skipped. If the scan finds nothing, the answer is the
/// loopback address.
pub struct NicMatchResolver<S: NicSource> {
    /// Supplier of host interfaces and the loopback fallback.
    nics: S,
}

impl<S: NicSource> NicMatchResolver<S> {
    /// Config key holding the interface name pattern.
    pub const CONFIG_KEY: &'static str = "nicmatch";

    /// Creates resolver on top of the given interface source.
    pub fn new(nics: S) -> Self {
        Self { nics }
    }
}

impl<S: NicSource> AddressResolver for NicMatchResolver<S> {
    fn resolve(&self, config: &AgentConfig) -> ResolveResult {
        let Some(value) = config.get_non_empty(Self::CONFIG_KEY) else {
            return Ok(Resolution::NotConfigured);
        };

        // A malformed pattern surfaces as an error, the fallback never hides it.
        let pattern = compile_full_match(Self::CONFIG_KEY, value)?;

        let nics = self
            .nics
            .interfaces()
            .map_err(|source| ResolveError::Enumeration {
                key: Self::CONFIG_KEY,
                source,
            })?;

        for nic in &nics {
            if !pattern.is_match(&nic.name) {
                continue;
            }

            if let Some(addr) = nic.addrs.first() {
                debug!(
                    "Interface {} matches pattern {:?}, selected address {}",
                    nic.name, value, addr
                );
                return Ok(Resolution::Addr(*addr));
            }

            // Name match without addresses, keep scanning.
        }

        let fallback = self
            .nics
            .loopback()
            .map_err(|source| ResolveError::Loopback { source })?;

        debug!(
            "No interface with addresses matches pattern {:?}, falling back to loopback {}",
            value, fallback
        );

        Ok(Resolution::Addr(fallback))
    }
}
