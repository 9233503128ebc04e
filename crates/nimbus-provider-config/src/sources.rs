// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: defaults, TOML files and environment variables.

use std::collections::HashMap;
use std::path::PathBuf;

use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::ProviderConfigLayer;
use crate::sections::{
	EndpointsConfigLayer, FinderConfigLayer, IgnoreTagsConfigLayer, LoggingConfigLayer,
	ProviderSectionLayer, RetryConfigLayer, TimeoutsConfigLayer,
};

/// Where a layer came from. Later layers win when merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	SystemFile = 20,
	UserFile = 30,
	ExplicitFile = 40,
	Environment = 50,
}

pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<ProviderConfigLayer, ConfigError>;
}

pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<ProviderConfigLayer, ConfigError> {
		Ok(ProviderConfigLayer::default())
	}
}

/// TOML file configuration source. A missing file is an empty layer.
pub struct TomlSource {
	path: PathBuf,
	precedence: Precedence,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			precedence: Precedence::ExplicitFile,
		}
	}

	pub fn system() -> Self {
		Self {
			path: PathBuf::from("/etc/nimbus/provider.toml"),
			precedence: Precedence::SystemFile,
		}
	}

	/// `$XDG_CONFIG_HOME/nimbus/provider.toml`, or `~/.config/...` when unset.
	pub fn user() -> Option<Self> {
		let config_home = std::env::var_os("XDG_CONFIG_HOME")
			.map(PathBuf::from)
			.or_else(|| dirs::home_dir().map(|home| home.join(".config")))?;
		Some(Self {
			path: config_home.join("nimbus").join("provider.toml"),
			precedence: Precedence::UserFile,
		})
	}

	pub fn path(&self) -> &std::path::Path {
		&self.path
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"file"
	}

	fn precedence(&self) -> Precedence {
		self.precedence
	}

	fn load(&self) -> Result<ProviderConfigLayer, ConfigError> {
		let content = match std::fs::read_to_string(&self.path) {
			Ok(content) => content,
			Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
				trace!(path = %self.path.display(), "no config file");
				return Ok(ProviderConfigLayer::default());
			}
			Err(source) => {
				return Err(ConfigError::FileRead {
					path: self.path.clone(),
					source,
				})
			}
		};

		debug!(path = %self.path.display(), precedence = ?self.precedence, "read config file");
		toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
			path: self.path.clone(),
			source,
		})
	}
}

/// Environment variable source.
///
/// Convention: `NIMBUS_<SECTION>_<FIELD>`. The region also falls back to
/// `AWS_REGION` and then `AWS_DEFAULT_REGION`.
#[derive(Default)]
pub struct EnvSource {
	vars: Option<HashMap<String, String>>,
}

impl EnvSource {
	/// Read from the process environment.
	pub fn new() -> Self {
		Self::default()
	}

	/// Read from a fixed set of variables instead of the process environment.
	pub fn from_vars<I, K, V>(vars: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		Self {
			vars: Some(
				vars.into_iter()
					.map(|(k, v)| (k.into(), v.into()))
					.collect(),
			),
		}
	}

	fn var(&self, name: &str) -> Option<String> {
		let value = match &self.vars {
			Some(vars) => vars.get(name).cloned(),
			None => std::env::var(name).ok(),
		};
		value.filter(|s| !s.is_empty())
	}

	fn bool(&self, name: &str) -> Option<bool> {
		self.var(name)
			.map(|v| v.eq_ignore_ascii_case("true") || v == "1")
	}

	fn parsed<T: std::str::FromStr>(&self, name: &str, kind: &str) -> Result<Option<T>, ConfigError> {
		match self.var(name) {
			Some(v) => v.parse().map(Some).map_err(|_| ConfigError::InvalidValue {
				key: name.to_string(),
				message: format!("invalid {kind} value '{v}'"),
			}),
			None => Ok(None),
		}
	}

	fn list(&self, name: &str) -> Option<Vec<String>> {
		self.var(name).map(|s| {
			s.split(',')
				.map(|s| s.trim().to_string())
				.filter(|s| !s.is_empty())
				.collect()
		})
	}

	fn load_provider(&self) -> ProviderSectionLayer {
		ProviderSectionLayer {
			region: self
				.var("NIMBUS_REGION")
				.or_else(|| self.var("AWS_REGION"))
				.or_else(|| self.var("AWS_DEFAULT_REGION")),
			partition: self.var("NIMBUS_PARTITION"),
			account_id: self.var("NIMBUS_ACCOUNT_ID"),
		}
	}

	fn load_ignore_tags(&self) -> IgnoreTagsConfigLayer {
		IgnoreTagsConfigLayer {
			keys: self.list("NIMBUS_IGNORE_TAGS_KEYS"),
			key_prefixes: self.list("NIMBUS_IGNORE_TAGS_KEY_PREFIXES"),
		}
	}

	fn load_timeouts(&self) -> Result<TimeoutsConfigLayer, ConfigError> {
		Ok(TimeoutsConfigLayer {
			read_secs: self.parsed("NIMBUS_READ_TIMEOUT_SECS", "u64")?,
		})
	}

	fn load_endpoints(&self) -> EndpointsConfigLayer {
		EndpointsConfigLayer {
			ec2: self.var("NIMBUS_ENDPOINT_EC2"),
			sesv2: self.var("NIMBUS_ENDPOINT_SESV2"),
		}
	}

	fn load_retry(&self) -> Result<RetryConfigLayer, ConfigError> {
		Ok(RetryConfigLayer {
			max_attempts: self.parsed("NIMBUS_RETRY_MAX_ATTEMPTS", "u32")?,
			base_delay_ms: self.parsed("NIMBUS_RETRY_BASE_DELAY_MS", "u64")?,
			max_delay_ms: self.parsed("NIMBUS_RETRY_MAX_DELAY_MS", "u64")?,
		})
	}

	fn load_finder(&self) -> Result<FinderConfigLayer, ConfigError> {
		Ok(FinderConfigLayer {
			max_records: self.parsed("NIMBUS_FINDER_MAX_RECORDS", "usize")?,
		})
	}

	fn load_logging(&self) -> LoggingConfigLayer {
		LoggingConfigLayer {
			level: self.var("NIMBUS_LOG_LEVEL"),
			json: self.bool("NIMBUS_LOG_JSON"),
		}
	}
}

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<ProviderConfigLayer, ConfigError> {
		trace!("reading NIMBUS_* environment");
		Ok(ProviderConfigLayer {
			provider: Some(self.load_provider()),
			ignore_tags: Some(self.load_ignore_tags()),
			timeouts: Some(self.load_timeouts()?),
			endpoints: Some(self.load_endpoints()),
			retry: Some(self.load_retry()?),
			finder: Some(self.load_finder()?),
			logging: Some(self.load_logging()),
		})
	}
}
