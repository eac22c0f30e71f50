/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ByteDance and/or its affiliates.
 */

use std::net::IpAddr;
use std::sync::Arc;

use log::warn;

use crate::error::{ResolveError, ResolveLocalError};
use crate::lookup::{HostLookup, SystemLookup};
use crate::resolver::HostResolver;
use crate::stats::ResolverStats;

/// Async access to a shared [`HostResolver`].
///
/// Cache hits are answered in place, lookups run on the blocking thread pool
/// of the current tokio runtime.
pub struct HostResolverHandle<L = SystemLookup> {
    inner: Arc<HostResolver<L>>,
}

impl<L> Clone for HostResolverHandle<L> {
    fn clone(&self) -> Self {
        HostResolverHandle {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<L> PartialEq for HostResolverHandle<L> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<L: HostLookup + 'static> HostResolverHandle<L> {
    pub fn new(resolver: HostResolver<L>) -> Self {
        HostResolverHandle {
            inner: Arc::new(resolver),
        }
    }

    pub fn resolver(&self) -> &HostResolver<L> {
        &self.inner
    }

    pub fn get_stats(&self) -> Arc<ResolverStats> {
        self.inner.get_stats()
    }

    pub async fn resolve(&self, host: &str) -> Result<IpAddr, ResolveError> {
        if self.inner.cached(host).is_some() {
            return self.inner.resolve(host);
        }

        let resolver = Arc::clone(&self.inner);
        let host = host.to_string();
        match tokio::task::spawn_blocking(move || resolver.resolve(&host)).await {
            Ok(r) => r,
            Err(e) => {
                warn!("blocking resolve task failed: {e}");
                Err(ResolveLocalError::TaskJoinFailed.into())
            }
        }
    }
}
