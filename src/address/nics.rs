//! Definition of the interface enumeration capability consumed by resolvers.

use std::io;
use std::net::{IpAddr, ToSocketAddrs};

use super::defs::NicDescriptor;

/// Supplies host network interfaces and the loopback fallback address.
///
/// Enumeration is a one-shot snapshot: every call re-reads the host state,
/// nothing is cached between calls. The order of the returned interfaces is
/// the order the host reports and must not be changed by implementations.
pub trait NicSource {
    /// Lists host interfaces in the order the host reports them.
    fn interfaces(&self) -> io::Result<Vec<NicDescriptor>>;

    /// Resolves the local loopback address used as the fallback
    /// when no configured pattern produced a usable address.
    fn loopback(&self) -> io::Result<IpAddr> {
        lookup_loopback()
    }
}

impl<T: NicSource + ?Sized> NicSource for &T {
    fn interfaces(&self) -> io::Result<Vec<NicDescriptor>> {
        (**self).interfaces()
    }

    fn loopback(&self) -> io::Result<IpAddr> {
        (**self).loopback()
    }
}

/// Resolves loopback through the local name lookup for `localhost`.
///
/// The lookup consults the host resolver, so it can fail on hosts
/// with a broken `localhost` entry.
pub(crate) fn lookup_loopback() -> io::Result<IpAddr> {
    // Port is irrelevant for the lookup, any value works.
    ("localhost", 0)
        .to_socket_addrs()?
        .next()
        .map(|sockaddr| sockaddr.ip())
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "got no addresses for localhost".to_owned(),
            )
        })
}
