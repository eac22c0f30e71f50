/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ByteDance and/or its affiliates.
 */

use std::net::{IpAddr, ToSocketAddrs};
use std::sync::Arc;

use log::trace;

use crate::error::HostLookupError;

/// The name resolution primitive used by [`crate::HostResolver`].
///
/// Returns every address currently bound to `host`, in whatever order the
/// provider chooses. The call is allowed to block.
pub trait HostLookup: Send + Sync {
    fn lookup(&self, host: &str) -> Result<Vec<IpAddr>, HostLookupError>;
}

impl<T: HostLookup + ?Sized> HostLookup for Arc<T> {
    fn lookup(&self, host: &str) -> Result<Vec<IpAddr>, HostLookupError> {
        (**self).lookup(host)
    }
}

impl<T: HostLookup + ?Sized> HostLookup for &T {
    fn lookup(&self, host: &str) -> Result<Vec<IpAddr>, HostLookupError> {
        (**self).lookup(host)
    }
}

/// Lookup through the platform resolver (getaddrinfo).
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemLookup;

impl HostLookup for SystemLookup {
    fn lookup(&self, host: &str) -> Result<Vec<IpAddr>, HostLookupError> {
        let addrs = (host, 0).to_socket_addrs()?;

        // getaddrinfo returns one entry per socket type
        let mut ips: Vec<IpAddr> = Vec::new();
        for addr in addrs {
            let ip = addr.ip();
            if !ips.contains(&ip) {
                ips.push(ip);
            }
        }
        trace!("system lookup of {host} returned {} addresses", ips.len());
        Ok(ips)
    }
}
