/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ByteDance and/or its affiliates.
 */

#[cfg(feature = "yaml")]
mod yaml;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct HostResolverConfig {
    pub(crate) prefer_ipv4_only: bool,
}

impl HostResolverConfig {
    pub fn new(prefer_ipv4_only: bool) -> Self {
        HostResolverConfig { prefer_ipv4_only }
    }

    /// Only select IPv4 addresses, with one extra lookup if the first
    /// result has none.
    pub fn set_prefer_ipv4_only(&mut self, enable: bool) {
        self.prefer_ipv4_only = enable;
    }

    #[inline]
    pub fn prefer_ipv4_only(&self) -> bool {
        self.prefer_ipv4_only
    }
}
