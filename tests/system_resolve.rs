use bindaddr::{
    resolve_bind_addr, AddressResolver, AgentConfig, DirectAddressResolver, NicMatchResolver,
    NicSource, Resolution, ResolveError, SystemNics,
};

fn enable_debug_log() {
    let _ = env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

fn nicmatch_config(value: &str) -> AgentConfig {
    let mut config = AgentConfig::new();
    config.set(NicMatchResolver::<SystemNics>::CONFIG_KEY, value);
    config
}

#[test]
fn system_enumeration_lists_loopback() {
    let nics = SystemNics
        .interfaces()
        .expect("Can not enumerate system interfaces");

    assert!(!nics.is_empty());
    assert!(nics
        .iter()
        .any(|nic| nic.addrs.iter().any(|addr| addr.is_loopback())));
}

#[test]
fn matching_own_interface_returns_its_first_address() {
    enable_debug_log();

    let nics = SystemNics
        .interfaces()
        .expect("Can not enumerate system interfaces");

    // First interface with an address is what an exact-name pattern must select.
    let Some(reference) = nics.iter().find(|nic| !nic.addrs.is_empty()) else {
        return;
    };

    let resolver = NicMatchResolver::new(SystemNics);
    let resolution = resolver
        .resolve(&nicmatch_config(&regex::escape(&reference.name)))
        .expect("Can not resolve address");

    assert_eq!(resolution, Resolution::Addr(reference.addrs[0]));
}

#[test]
fn unmatched_pattern_falls_back_to_loopback() {
    enable_debug_log();

    let resolver = NicMatchResolver::new(SystemNics);
    let resolution = resolver
        .resolve(&nicmatch_config("no-such-interface-[0-9]+"))
        .expect("Can not resolve address");

    match resolution {
        Resolution::Addr(addr) => assert!(addr.is_loopback()),
        other => panic!("Unexpected resolution: {:?}", other),
    }
}

#[test]
fn bad_pattern_is_error_before_enumeration() {
    let resolver = NicMatchResolver::new(SystemNics);

    let error = resolver
        .resolve(&nicmatch_config("("))
        .expect_err("Malformed pattern must not resolve");

    assert!(matches!(error, ResolveError::InvalidPattern { .. }));
}

#[test]
fn wildcard_address_binds_all() {
    let mut config = AgentConfig::new();
    config.set(DirectAddressResolver::<SystemNics>::CONFIG_KEY, "0.0.0.0");

    let resolution = resolve_bind_addr(&config, &SystemNics).expect("Can not resolve address");

    assert_eq!(resolution, Resolution::Unspecified);
}

#[test]
fn not_configured_without_keys() {
    let resolution =
        resolve_bind_addr(&AgentConfig::new(), &SystemNics).expect("Can not resolve address");

    assert_eq!(resolution, Resolution::NotConfigured);
}
