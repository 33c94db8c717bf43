//! Definition of the manually populated interface source.

use std::io;
use std::net::{IpAddr, Ipv4Addr};

use super::defs::NicDescriptor;
use super::nics::NicSource;

/// Interface source with a manually populated table.
///
/// Counterpart of [`SystemNics`][`super::system_nics::SystemNics`] for
/// environments where the interface layout is known up front, and for tests.
/// Interfaces are reported in insertion order. The loopback fallback answer
/// is `127.0.0.1` unless overridden.
#[derive(Clone, Debug, Default)]
pub struct ManualNics {
    /// Interface table, in insertion order.
    nics: Vec<NicDescriptor>,

    /// Overridden loopback answer, if any.
    loopback: Option<IpAddr>,
}

impl ManualNics {
    /// Creates source from the given interface list.
    pub fn from_list(nics: Vec<NicDescriptor>) -> Self {
        Self {
            nics,
            loopback: None,
        }
    }

    /// Appends one interface to the end of the table.
    pub fn add_nic(&mut self, nic: NicDescriptor) {
        self.nics.push(nic);
    }

    /// Overrides the loopback fallback answer.
    pub fn set_loopback(&mut self, addr: IpAddr) {
        self.loopback = Some(addr);
    }
}

impl NicSource for ManualNics {
    fn interfaces(&self) -> io::Result<Vec<NicDescriptor>> {
        Ok(self.nics.clone())
    }

    fn loopback(&self) -> io::Result<IpAddr> {
        Ok(self
            .loopback
            .unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST)))
    }
}
