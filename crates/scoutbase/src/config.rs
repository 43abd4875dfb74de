// SPDX-FileCopyrightText: 2026 Scoutbase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered configuration for the Scoutbase binary.
//!
//! Merge order (later overrides earlier): compiled defaults,
//! `/etc/scoutbase/scoutbase.toml`, `~/.config/scoutbase/scoutbase.toml`,
//! `./scoutbase.toml`, then `SCOUTBASE_*` environment variables. Unknown
//! keys are rejected at load time.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use scoutbase_core::error::ScoutbaseError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ScoutbaseConfig {
    /// Process identity and logging.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Messaging session behavior.
    #[serde(default)]
    pub messaging: MessagingConfig,

    /// Hosted backend endpoint.
    #[serde(default)]
    pub backend: BackendConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name of this process.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_agent_name() -> String {
    "scoutbase".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MessagingConfig {
    /// Milliseconds between a sent message and the scripted reply.
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,

    /// Whether the in-memory store sleeps to imitate network latency.
    #[serde(default = "default_simulate_latency")]
    pub simulate_latency: bool,
}

impl Default for MessagingConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_reply_delay_ms(),
            simulate_latency: default_simulate_latency(),
        }
    }
}

fn default_reply_delay_ms() -> u64 {
    2000
}

fn default_simulate_latency() -> bool {
    true
}

/// Hosted backend endpoint. Both fields empty means demo-only operation.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BackendConfig {
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub anon_key: Option<String>,
}

/// Load configuration from the standard hierarchy with env var overrides.
pub fn load_config() -> Result<ScoutbaseConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string over the compiled defaults.
pub fn load_config_from_str(toml_content: &str) -> Result<ScoutbaseConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ScoutbaseConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(ScoutbaseConfig::default()))
        .merge(Toml::file("/etc/scoutbase/scoutbase.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("scoutbase/scoutbase.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("scoutbase.toml"))
        .merge(env_provider())
}

/// `Env::map()` rather than `Env::split("_")`: key names themselves contain
/// underscores, so SCOUTBASE_MESSAGING_REPLY_DELAY_MS must map to
/// `messaging.reply_delay_ms`, not `messaging.reply.delay.ms`.
fn env_provider() -> Env {
    Env::prefixed("SCOUTBASE_").map(|key| {
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("agent_", "agent.", 1)
            .replacen("messaging_", "messaging.", 1)
            .replacen("backend_", "backend.", 1);
        mapped.into()
    })
}

/// Cross-field checks figment cannot express.
pub fn validate(config: &ScoutbaseConfig) -> Result<(), ScoutbaseError> {
    const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
    if !LEVELS.contains(&config.agent.log_level.as_str()) {
        return Err(ScoutbaseError::Config(format!(
            "agent.log_level must be one of {LEVELS:?}, got {:?}",
            config.agent.log_level
        )));
    }
    if config.messaging.reply_delay_ms == 0 {
        return Err(ScoutbaseError::Config(
            "messaging.reply_delay_ms must be at least 1".into(),
        ));
    }
    if config.backend.url.is_some() != config.backend.anon_key.is_some() {
        return Err(ScoutbaseError::Config(
            "backend.url and backend.anon_key must be set together".into(),
        ));
    }
    Ok(())
}
