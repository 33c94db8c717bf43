//! Definitions which are used in [address][`super`] submodule.

use std::io;
use std::net::IpAddr;

use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////

/// Represents one network interface as reported by the host:
/// its name and the addresses assigned to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NicDescriptor {
    /// Interface name as reported by the host.
    pub name: String,

    /// Addresses assigned to the interface, in host order.
    /// May be empty.
    pub addrs: Vec<IpAddr>,
}

impl NicDescriptor {
    /// Creates descriptor with the given name and addresses.
    pub fn new(name: impl Into<String>, addrs: Vec<IpAddr>) -> Self {
        Self {
            name: name.into(),
            addrs,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Represents outcome of one address resolution attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The config does not mention the resolver's key, or its value is empty.
    /// No lookup was performed. Not an error: the feature is unused.
    NotConfigured,

    /// Concrete address was selected.
    Addr(IpAddr),

    /// A bind-all wildcard was configured, so no single
    /// address applies: the service should listen on every interface.
    Unspecified,
}

impl Resolution {
    /// Returns the selected address, if the outcome carries one.
    pub fn addr(&self) -> Option<IpAddr> {
        match self {
            Resolution::Addr(addr) => Some(*addr),
            _ => None,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Represents error type of [resolve][`super::resolver::AddressResolver::resolve`] operation.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Configured value does not compile as a regular expression.
    /// An authoring error, never smoothed over by the loopback fallback.
    #[error("error parsing pattern {pattern:?} from config {key:?}: {source}")]
    InvalidPattern {
        /// Config key the pattern was read from.
        key: &'static str,
        /// The offending pattern.
        pattern: String,
        /// Compilation error from the regex engine.
        #[source]
        source: regex::Error,
    },

    /// Host failed to enumerate system NIC information.
    #[error("error enumerate system NIC information for config {key:?}: {source}")]
    Enumeration {
        /// Config key whose resolution required the enumeration.
        key: &'static str,
        /// Underlying host error.
        #[source]
        source: io::Error,
    },

    /// The loopback fallback lookup itself failed.
    #[error("can not lookup loopback interface: {source}")]
    Loopback {
        /// Underlying lookup error.
        #[source]
        source: io::Error,
    },
}

////////////////////////////////////////////////////////////////////////////////

/// Represents result of [resolve][`super::resolver::AddressResolver::resolve`] operation.
pub type ResolveResult = Result<Resolution, ResolveError>;
