//! # Pawsbot Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module implements configuration loading, merging and validation.
//! Settings control how the chat front-end presents the selector's replies
//! (bot name, greeting, typing delay) and which rule table it uses.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. An explicit `--config <FILE>` (replaces discovery entirely)
//! 2. Project-specific `.pawsbot.toml` in current directory or ancestors
//! 3. User-specific `<config dir>/pawsbot/config.toml`
//! 4. Default values defined in the code
//!
//! Command-line flags are applied on top by the command handlers.
//!
//! ## Examples
//!
//! ```toml
//! [chat]
//! bot_name = "Pawsley"
//! greeting = "Hi there! Ask me about sizes or shipping."
//!
//! [chat.delay]
//! min_ms = 600
//! max_ms = 1400
//!
//! [rules]
//! file = "~/pawsbot/rules.toml"
//! ```
//!
use crate::conversation::DelayPolicy;
use crate::core::error::{PawsbotError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// The effective configuration after every layer has been applied.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Config {
    pub chat: ChatConfig,
    pub rules: RulesConfig,
}

/// Presentation settings for the chat front-end.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatConfig {
    /// Name shown in front of bot replies.
    pub bot_name: String,
    /// First bot message of every chat session. Empty disables it.
    pub greeting: String,
    /// Pause before each reply is shown.
    pub delay: DelayPolicy,
}

/// Where the rule table comes from.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RulesConfig {
    /// Custom rule table, already `~`-expanded and made relative to the
    /// config file that named it. Unset means the built-in table.
    pub file: Option<String>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            bot_name: default_bot_name(),
            greeting: default_greeting(),
            delay: DelayPolicy::default(),
        }
    }
}

fn default_bot_name() -> String {
    "Pawsley".to_string()
}
fn default_greeting() -> String {
    "Hi there! I'm Pawsley, your style assistant. Ask me about sizes, shipping, colors or outfit ideas."
        .to_string()
}

/// One configuration file as written on disk. A field left out of the file
/// stays `None`, so the layer below (or the default) shows through.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct ConfigLayer {
    #[serde(default)]
    chat: ChatLayer,
    #[serde(default)]
    rules: RulesLayer,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct ChatLayer {
    bot_name: Option<String>,
    greeting: Option<String>,
    delay: Option<DelayLayer>,
}

#[derive(Deserialize, Debug, Default, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields)]
struct DelayLayer {
    min_ms: Option<u64>,
    max_ms: Option<u64>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct RulesLayer {
    file: Option<String>,
}

impl ConfigLayer {
    /// Fills every field `self` leaves unset from `lower`.
    fn over(self, lower: ConfigLayer) -> ConfigLayer {
        let delay = match (self.chat.delay, lower.chat.delay) {
            (Some(high), Some(low)) => Some(DelayLayer {
                min_ms: high.min_ms.or(low.min_ms),
                max_ms: high.max_ms.or(low.max_ms),
            }),
            (high, low) => high.or(low),
        };
        ConfigLayer {
            chat: ChatLayer {
                bot_name: self.chat.bot_name.or(lower.chat.bot_name),
                greeting: self.chat.greeting.or(lower.chat.greeting),
                delay,
            },
            rules: RulesLayer {
                file: self.rules.file.or(lower.rules.file),
            },
        }
    }

    fn into_config(self) -> Config {
        let defaults = ChatConfig::default();
        let delay = self.chat.delay.unwrap_or_default();
        Config {
            chat: ChatConfig {
                bot_name: self.chat.bot_name.unwrap_or(defaults.bot_name),
                greeting: self.chat.greeting.unwrap_or(defaults.greeting),
                delay: DelayPolicy {
                    min_ms: delay.min_ms.unwrap_or(defaults.delay.min_ms),
                    max_ms: delay.max_ms.unwrap_or(defaults.delay.max_ms),
                },
            },
            rules: RulesConfig {
                file: self.rules.file,
            },
        }
    }
}

const PROJECT_CONFIG_FILENAME: &str = ".pawsbot.toml";

/// Loads configuration from `explicit` if given, otherwise from the user and
/// project config files.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let config = match explicit {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            load_config_from_path(path)?.into_config()
        }
        None => {
            let user_config = load_user_config()?;
            let current_dir = std::env::current_dir().context("Failed to get current directory")?;
            let project_config = load_project_config(&current_dir)?;
            merge_configs(user_config, project_config)
        }
    };
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<ConfigLayer>> {
    if let Some(proj_dirs) = ProjectDirs::from("shop", "Pawsbot", "pawsbot") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config(start: &Path) -> Result<Option<ConfigLayer>> {
    if let Some(project_config_path) = find_project_config_path(start) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.pawsbot.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

/// Walks from `start` towards the root looking for `.pawsbot.toml`,
/// stopping at the first directory containing `.git`.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

/// Parses one config file. A relative `[rules] file` is resolved against the
/// directory holding that config file, not the process working directory.
fn load_config_from_path(path: &Path) -> Result<ConfigLayer> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    let mut layer: ConfigLayer = toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))?;
    if let Some(file) = layer.rules.file.as_mut() {
        *file = resolve_rule_table_path(file, path.parent());
        debug!("Resolved rule table path: {}", file);
    }
    Ok(layer)
}

/// Project values win over user values field by field; anything neither
/// file sets takes the built-in default.
fn merge_configs(user: Option<ConfigLayer>, project: Option<ConfigLayer>) -> Config {
    project
        .unwrap_or_default()
        .over(user.unwrap_or_default())
        .into_config()
}

/// Expands `~` and anchors a relative path at `base`.
fn resolve_rule_table_path(file: &str, base: Option<&Path>) -> String {
    let expanded = PathBuf::from(shellexpand::tilde(file).into_owned());
    match base {
        Some(base) if expanded.is_relative() => base.join(expanded).to_string_lossy().into_owned(),
        _ => expanded.to_string_lossy().into_owned(),
    }
}

fn validate_config(config: &Config) -> Result<()> {
    debug!("Validating final configuration...");
    if config.chat.bot_name.trim().is_empty() {
        return Err(anyhow!(PawsbotError::Config(
            "chat.bot_name cannot be empty.".to_string()
        )));
    }
    config.chat.delay.validate()?;
    debug!("Configuration validation successful.");
    Ok(())
}

/// Checks that a rule table path names an existing regular file.
///
/// Called for the table actually in use, after `--rules` has had its say, so
/// a stale `[rules] file` never blocks an explicit override.
pub fn check_rule_table_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(anyhow!(PawsbotError::Config(format!(
            "Rule table '{}' does not exist.",
            path.display()
        ))));
    }
    if !path.is_file() {
        return Err(anyhow!(PawsbotError::Config(format!(
            "Rule table '{}' exists but is not a file.",
            path.display()
        ))));
    }
    Ok(())
}
