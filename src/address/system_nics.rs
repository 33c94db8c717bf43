//! Definition of the system-backed interface source.

use std::io;
use std::net::IpAddr;

use network_interface::{Addr, NetworkInterface, NetworkInterfaceConfig};

use super::defs::NicDescriptor;
use super::nics::NicSource;

/// Enumerates network interfaces through the operating system.
///
/// Stateless handle: every [interfaces][`NicSource::interfaces`] call takes a
/// fresh snapshot of the host state, in the order the host reports.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemNics;

impl NicSource for SystemNics {
    fn interfaces(&self) -> io::Result<Vec<NicDescriptor>> {
        let interfaces = NetworkInterface::show().map_err(io::Error::other)?;

        Ok(interfaces
            .into_iter()
            .map(|interface| {
                let addrs = interface
                    .addr
                    .iter()
                    .map(|addr| match addr {
                        Addr::V4(v4) => IpAddr::V4(v4.ip),
                        Addr::V6(v6) => IpAddr::V6(v6.ip),
                    })
                    .collect();

                NicDescriptor {
                    name: interface.name,
                    addrs,
                }
            })
            .collect())
    }
}
