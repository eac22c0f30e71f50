/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ByteDance and/or its affiliates.
 */

use std::fmt;
use std::io;
use std::net::IpAddr;

use thiserror::Error;

/// Failure of the underlying lookup primitive.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostLookupError {
    #[error("malformed host name")]
    BadName,
    #[error("host name not found")]
    NotFound,
    #[error("timeout while resolving host name")]
    Timeout,
    #[error("name server unreachable")]
    Unreachable,
    #[error("internal error: {0}")]
    Internal(String),
}

impl HostLookupError {
    pub fn get_type(&self) -> &str {
        match self {
            HostLookupError::BadName => "BadName",
            HostLookupError::NotFound => "NotFound",
            HostLookupError::Timeout => "Timeout",
            HostLookupError::Unreachable => "Unreachable",
            HostLookupError::Internal(_) => "InternalError",
        }
    }
}

impl From<io::Error> for HostLookupError {
    fn from(e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::TimedOut => HostLookupError::Timeout,
            io::ErrorKind::NotFound => HostLookupError::NotFound,
            io::ErrorKind::InvalidInput => HostLookupError::BadName,
            io::ErrorKind::HostUnreachable | io::ErrorKind::NetworkUnreachable => {
                HostLookupError::Unreachable
            }
            _ => HostLookupError::Internal(e.to_string()),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveLocalError {
    #[error("blocking resolve task failed to complete")]
    TaskJoinFailed,
}

impl ResolveLocalError {
    pub fn get_type(&self) -> &str {
        match self {
            ResolveLocalError::TaskJoinFailed => "TaskJoinFailed",
        }
    }
}

/// Addresses rejected by the address family policy, printed comma separated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedAddrs(pub Vec<IpAddr>);

impl fmt::Display for RejectedAddrs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.0.iter();
        if let Some(first) = iter.next() {
            write!(f, "{first}")?;
            for ip in iter {
                write!(f, ", {ip}")?;
            }
        }
        Ok(())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("lookup failed: {0}")]
    LookupFailed(#[from] HostLookupError),
    #[error("no ipv4 address available, found: [{0}]")]
    NoIpv4Available(RejectedAddrs),
    #[error("no address found in lookup result")]
    EmptyRecord,
    #[error("local error: {0}")]
    FromLocal(#[from] ResolveLocalError),
}

impl ResolveError {
    pub(crate) fn no_ipv4_available(rejected: Vec<IpAddr>) -> Self {
        ResolveError::NoIpv4Available(RejectedAddrs(rejected))
    }

    pub fn get_type(&self) -> &str {
        match self {
            ResolveError::LookupFailed(_) => "LookupFailed",
            ResolveError::NoIpv4Available(_) => "NoIpv4Available",
            ResolveError::EmptyRecord => "EmptyRecord",
            ResolveError::FromLocal(_) => "LocalError",
        }
    }

    pub fn get_subtype(&self) -> &str {
        match self {
            ResolveError::LookupFailed(e) => e.get_type(),
            ResolveError::NoIpv4Available(_) => "",
            ResolveError::EmptyRecord => "",
            ResolveError::FromLocal(e) => e.get_type(),
        }
    }

    /// The addresses seen but rejected when no IPv4 address was available.
    pub fn rejected_addrs(&self) -> Option<&[IpAddr]> {
        match self {
            ResolveError::NoIpv4Available(r) => Some(&r.0),
            _ => None,
        }
    }
}
