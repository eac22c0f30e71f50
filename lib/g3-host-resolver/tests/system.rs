/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ByteDance and/or its affiliates.
 */

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use g3_host_resolver::{HostResolver, HostResolverConfig, ResolveError};

#[test]
fn literal_ipv4() {
    let resolver = HostResolver::new(true);
    assert!(resolver.prefer_ipv4_only());

    let ip = resolver.resolve("127.0.0.1").unwrap();
    assert_eq!(ip, IpAddr::V4(Ipv4Addr::LOCALHOST));
    assert_eq!(resolver.cached("127.0.0.1"), Some(ip));
    assert_eq!(resolver.resolve("127.0.0.1").unwrap(), ip);

    let snap = resolver.get_stats().snapshot();
    assert_eq!(snap.query_total, 2);
    assert_eq!(snap.query_cached, 1);
    assert_eq!(snap.lookup_total, 1);
}

#[test]
fn literal_ipv6_passthrough() {
    let resolver = HostResolver::from_config(HostResolverConfig::default());
    let ip = resolver.resolve("::1").unwrap();
    assert_eq!(ip, IpAddr::V6(Ipv6Addr::LOCALHOST));
}

#[test]
fn literal_ipv6_rejected() {
    let resolver = HostResolver::new(true);
    let e = resolver.resolve("::1").unwrap_err();
    assert!(matches!(e, ResolveError::NoIpv4Available(_)));
    assert_eq!(
        e.rejected_addrs(),
        Some([IpAddr::V6(Ipv6Addr::LOCALHOST)].as_slice())
    );
    assert!(resolver.cached("::1").is_none());

    let snap = resolver.get_stats().snapshot();
    assert_eq!(snap.lookup_total, 2);
    assert_eq!(snap.lookup_retry, 1);
    assert_eq!(snap.no_ipv4, 1);
}
