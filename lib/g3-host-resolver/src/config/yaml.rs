/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ByteDance and/or its affiliates.
 */

use anyhow::{Context, anyhow};
use yaml_rust::Yaml;

use super::HostResolverConfig;

fn normalize_key(raw: &str) -> String {
    raw.to_lowercase().replace('-', "_")
}

fn as_bool(v: &Yaml) -> anyhow::Result<bool> {
    match v {
        Yaml::String(s) => match s.to_lowercase().as_str() {
            "on" | "true" | "yes" | "1" => Ok(true),
            "off" | "false" | "no" | "0" => Ok(false),
            _ => Err(anyhow!("invalid yaml string value for 'bool': {s}")),
        },
        Yaml::Boolean(value) => Ok(*value),
        Yaml::Integer(i) => Ok(*i != 0),
        _ => Err(anyhow!(
            "yaml value type for 'bool' should be 'boolean' / 'string' / 'integer'"
        )),
    }
}

impl HostResolverConfig {
    pub fn set_by_yaml_kv(&mut self, k: &str, v: &Yaml) -> anyhow::Result<()> {
        match normalize_key(k).as_str() {
            "prefer_ipv4_only" | "ipv4_only" | "disable_ipv6" => {
                self.prefer_ipv4_only =
                    as_bool(v).context(format!("invalid bool value for key {k}"))?;
                Ok(())
            }
            _ => Err(anyhow!("invalid key {k}")),
        }
    }

    pub fn parse_yaml(v: &Yaml) -> anyhow::Result<Self> {
        let mut config = HostResolverConfig::default();
        match v {
            Yaml::Hash(map) => {
                for (k, v) in map.iter() {
                    let Yaml::String(key) = k else {
                        return Err(anyhow!("key in hash should be string"));
                    };
                    config
                        .set_by_yaml_kv(key, v)
                        .context(format!("failed to parse value of key {key}"))?;
                }
                Ok(config)
            }
            Yaml::Boolean(_) | Yaml::String(_) => {
                config.prefer_ipv4_only = as_bool(v)?;
                Ok(config)
            }
            _ => Err(anyhow!("invalid yaml value type for host resolver config")),
        }
    }
}
