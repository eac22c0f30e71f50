/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ByteDance and/or its affiliates.
 */

mod cache;
mod config;
mod error;
mod lookup;
mod resolver;
mod stats;

#[cfg(feature = "rt")]
mod handle;

pub use config::HostResolverConfig;
pub use error::{HostLookupError, RejectedAddrs, ResolveError, ResolveLocalError};
pub use lookup::{HostLookup, SystemLookup};
pub use resolver::HostResolver;
pub use stats::{ResolverSnapshot, ResolverStats};

#[cfg(feature = "rt")]
pub use handle::HostResolverHandle;
