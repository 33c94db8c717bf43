//! Library for resolving the network address a service should bind
//! or advertise on from declarative key-value configuration.

// Add warnings for missing public and private documentation.
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

pub mod address;

pub mod config;

pub use address::defs::{NicDescriptor, Resolution, ResolveError, ResolveResult};
pub use address::direct::DirectAddressResolver;
pub use address::manual_nics::ManualNics;
pub use address::nic_match::NicMatchResolver;
pub use address::nics::NicSource;
pub use address::resolver::{resolve_bind_addr, AddressResolver};
pub use address::system_nics::SystemNics;
pub use config::AgentConfig;
