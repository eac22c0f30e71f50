/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ByteDance and/or its affiliates.
 */

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::net::IpAddr;
use std::sync::{Arc, PoisonError, RwLock};

const RESOLVER_CACHE_INITIAL_CAPACITY: usize = 10;

/// Insert only host to address map, shared by all callers of one resolver.
pub(crate) struct ResolvedCache {
    inner: RwLock<HashMap<Arc<str>, IpAddr, ahash::RandomState>>,
}

impl Default for ResolvedCache {
    fn default() -> Self {
        ResolvedCache {
            inner: RwLock::new(HashMap::with_capacity_and_hasher(
                RESOLVER_CACHE_INITIAL_CAPACITY,
                ahash::RandomState::new(),
            )),
        }
    }
}

impl ResolvedCache {
    pub(crate) fn get(&self, host: &str) -> Option<IpAddr> {
        // a single map insert can not leave a poisoned map half written
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        map.get(host).copied()
    }

    /// Returns false if the host was already present, the old entry is kept.
    pub(crate) fn insert(&self, host: &str, ip: IpAddr) -> bool {
        let mut map = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        match map.entry(Arc::from(host)) {
            Entry::Occupied(_) => false,
            Entry::Vacant(v) => {
                v.insert(ip);
                true
            }
        }
    }

    pub(crate) fn len(&self) -> usize {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        map.len()
    }
}
