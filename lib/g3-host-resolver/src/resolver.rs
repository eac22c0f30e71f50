/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ByteDance and/or its affiliates.
 */

use std::net::IpAddr;
use std::sync::Arc;

use log::debug;

use crate::cache::ResolvedCache;
use crate::config::HostResolverConfig;
use crate::error::ResolveError;
use crate::lookup::{HostLookup, SystemLookup};
use crate::stats::ResolverStats;

/// Total lookups allowed for one query when only IPv4 is accepted.
const IPV4_ONLY_LOOKUP_ATTEMPTS: usize = 2;

/// Caching host name resolver.
///
/// Successful results are cached for the lifetime of the resolver and are
/// never evicted. Concurrent queries for the same uncached host may each
/// hit the lookup backend, the first stored address is kept.
pub struct HostResolver<L = SystemLookup> {
    config: HostResolverConfig,
    lookup: L,
    cache: ResolvedCache,
    stats: Arc<ResolverStats>,
}

impl HostResolver<SystemLookup> {
    pub fn new(prefer_ipv4_only: bool) -> Self {
        HostResolver::from_config(HostResolverConfig::new(prefer_ipv4_only))
    }

    pub fn from_config(config: HostResolverConfig) -> Self {
        HostResolver::with_lookup(config, SystemLookup)
    }
}

impl<L: HostLookup> HostResolver<L> {
    pub fn with_lookup(config: HostResolverConfig, lookup: L) -> Self {
        HostResolver {
            config,
            lookup,
            cache: ResolvedCache::default(),
            stats: Arc::new(ResolverStats::default()),
        }
    }

    #[inline]
    pub fn prefer_ipv4_only(&self) -> bool {
        self.config.prefer_ipv4_only
    }

    pub fn get_stats(&self) -> Arc<ResolverStats> {
        Arc::clone(&self.stats)
    }

    /// Get the cached address for `host`, without doing any lookup.
    pub fn cached(&self, host: &str) -> Option<IpAddr> {
        self.cache.get(host)
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Resolve `host` to a single address.
    ///
    /// The host string is passed to the lookup backend as is.
    pub fn resolve(&self, host: &str) -> Result<IpAddr, ResolveError> {
        self.stats.add_query_total();
        if let Some(ip) = self.cache.get(host) {
            self.stats.add_query_cached();
            debug!("host {host} resolved to {ip} from cache");
            return Ok(ip);
        }

        let r = if self.config.prefer_ipv4_only {
            self.lookup_ipv4(host)
        } else {
            self.lookup_first(host)
        };
        match r {
            Ok(ip) => {
                if self.cache.insert(host, ip) {
                    self.stats.set_cache_length(self.cache.len());
                }
                Ok(ip)
            }
            Err(e) => {
                debug!("failed to resolve host {host}: {e}");
                self.stats.add_error(&e);
                Err(e)
            }
        }
    }

    fn lookup_first(&self, host: &str) -> Result<IpAddr, ResolveError> {
        self.stats.add_lookup_total();
        let ips = self.lookup.lookup(host)?;
        let ip = ips.first().copied().ok_or(ResolveError::EmptyRecord)?;
        debug!(
            "host {host} resolved to {ip}, the first of {} addresses",
            ips.len()
        );
        Ok(ip)
    }

    fn lookup_ipv4(&self, host: &str) -> Result<IpAddr, ResolveError> {
        let mut rejected = Vec::new();
        for attempt in 1..=IPV4_ONLY_LOOKUP_ATTEMPTS {
            if attempt > 1 {
                self.stats.add_lookup_retry();
                debug!("no ipv4 address found for host {host}, retry lookup");
            }
            self.stats.add_lookup_total();
            let ips = self.lookup.lookup(host)?;
            if let Some(ip) = select_last_ipv4(&ips) {
                debug!("host {host} resolved to ipv4 address {ip} at attempt {attempt}");
                return Ok(ip);
            }
            rejected = ips;
        }
        Err(ResolveError::no_ipv4_available(rejected))
    }
}

/// Scan the whole list and keep the last address representable as IPv4.
///
/// IPv4-mapped IPv6 addresses match and are returned in their IPv4 form.
fn select_last_ipv4(ips: &[IpAddr]) -> Option<IpAddr> {
    let mut selected = None;
    for ip in ips {
        match ip {
            IpAddr::V4(v4) => selected = Some(IpAddr::V4(*v4)),
            IpAddr::V6(v6) => {
                if let Some(v4) = v6.to_ipv4_mapped() {
                    selected = Some(IpAddr::V4(v4));
                }
            }
        }
    }
    selected
}
