/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ByteDance and/or its affiliates.
 */

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use super::{HostLookupError, ResolveError};

#[derive(Default)]
pub struct ResolverStats {
    query_total: AtomicU64,
    query_cached: AtomicU64,
    lookup_total: AtomicU64,
    lookup_retry: AtomicU64,
    lookup_timeout: AtomicU64,
    lookup_not_found: AtomicU64,
    lookup_failed: AtomicU64,
    no_ipv4: AtomicU64,
    empty_record: AtomicU64,
    len_cache: AtomicUsize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolverSnapshot {
    pub query_total: u64,
    pub query_cached: u64,
    pub lookup_total: u64,
    pub lookup_retry: u64,
    pub lookup_timeout: u64,
    pub lookup_not_found: u64,
    pub lookup_failed: u64,
    pub no_ipv4: u64,
    pub empty_record: u64,
    pub len_cache: usize,
}

impl ResolverStats {
    pub fn snapshot(&self) -> ResolverSnapshot {
        ResolverSnapshot {
            query_total: self.query_total.load(Ordering::Relaxed),
            query_cached: self.query_cached.load(Ordering::Relaxed),
            lookup_total: self.lookup_total.load(Ordering::Relaxed),
            lookup_retry: self.lookup_retry.load(Ordering::Relaxed),
            lookup_timeout: self.lookup_timeout.load(Ordering::Relaxed),
            lookup_not_found: self.lookup_not_found.load(Ordering::Relaxed),
            lookup_failed: self.lookup_failed.load(Ordering::Relaxed),
            no_ipv4: self.no_ipv4.load(Ordering::Relaxed),
            empty_record: self.empty_record.load(Ordering::Relaxed),
            len_cache: self.len_cache.load(Ordering::Relaxed),
        }
    }

    pub(crate) fn add_query_total(&self) {
        self.query_total.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn add_query_cached(&self) {
        self.query_cached.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn add_lookup_total(&self) {
        self.lookup_total.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn add_lookup_retry(&self) {
        self.lookup_retry.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn set_cache_length(&self, value: usize) {
        self.len_cache.store(value, Ordering::Relaxed);
    }

    fn add_lookup_error(&self, e: &HostLookupError) {
        match e {
            HostLookupError::Timeout => self.lookup_timeout.fetch_add(1, Ordering::Relaxed),
            HostLookupError::NotFound => self.lookup_not_found.fetch_add(1, Ordering::Relaxed),
            _ => self.lookup_failed.fetch_add(1, Ordering::Relaxed),
        };
    }

    pub(crate) fn add_error(&self, e: &ResolveError) {
        match e {
            ResolveError::LookupFailed(e) => self.add_lookup_error(e),
            ResolveError::NoIpv4Available(_) => {
                self.no_ipv4.fetch_add(1, Ordering::Relaxed);
            }
            ResolveError::EmptyRecord => {
                self.empty_record.fetch_add(1, Ordering::Relaxed);
            }
            ResolveError::FromLocal(_) => {}
        }
    }
}
