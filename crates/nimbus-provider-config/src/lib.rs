// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Provider settings merged from defaults, TOML files and `NIMBUS_*`
//! environment variables, then validated into a [`ProviderConfig`].
//!
//! ```ignore
//! let config = nimbus_provider_config::load_config()?;
//! assert!(!config.provider.region.is_empty());
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::ProviderConfigLayer;
pub use nimbus_common_http::RetryConfig;
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use tracing::{debug, info};

/// Fully resolved provider configuration.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
	pub provider: ProviderSection,
	pub ignore_tags: IgnoreTagsConfig,
	pub timeouts: TimeoutsConfig,
	pub endpoints: EndpointsConfig,
	pub retry: RetryConfig,
	pub finder: FinderConfig,
	pub logging: LoggingConfig,
}

impl ProviderConfig {
	/// Minimal configuration for `region`, everything else defaulted.
	pub fn for_region(region: impl Into<String>) -> Result<Self, ConfigError> {
		finalize(ProviderConfigLayer {
			provider: Some(ProviderSectionLayer {
				region: Some(region.into()),
				..Default::default()
			}),
			..Default::default()
		})
	}
}

/// Defaults, `/etc/nimbus/provider.toml`, the user file under
/// `$XDG_CONFIG_HOME/nimbus/`, then the environment. Each later source
/// overrides the earlier ones.
pub fn load_config() -> Result<ProviderConfig, ConfigError> {
	load_from_sources(standard_sources(None))
}

/// As [`load_config`], with `config_path` layered above the system and
/// user files and below the environment.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<ProviderConfig, ConfigError> {
	load_from_sources(standard_sources(Some(config_path.into())))
}

fn standard_sources(explicit: Option<std::path::PathBuf>) -> Vec<Box<dyn ConfigSource>> {
	let files = std::iter::once(Some(TomlSource::system()))
		.chain([TomlSource::user(), explicit.map(TomlSource::new)])
		.flatten()
		.map(|f| Box::new(f) as Box<dyn ConfigSource>);

	std::iter::once(Box::new(DefaultsSource) as Box<dyn ConfigSource>)
		.chain(files)
		.chain(std::iter::once(Box::new(EnvSource::new()) as Box<dyn ConfigSource>))
		.collect()
}

/// Merge `sources` in precedence order and resolve the result.
pub fn load_from_sources(
	mut sources: Vec<Box<dyn ConfigSource>>,
) -> Result<ProviderConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = ProviderConfigLayer::default();
	for source in &sources {
		debug!(source = source.name(), precedence = ?source.precedence(), "merging config layer");
		merged.merge(source.load()?);
	}
	finalize(merged)
}

fn finalize(layer: ProviderConfigLayer) -> Result<ProviderConfig, ConfigError> {
	let provider = layer.provider.unwrap_or_default().finalize()?;
	let ignore_tags = layer.ignore_tags.unwrap_or_default().finalize();
	let timeouts = layer.timeouts.unwrap_or_default().finalize()?;
	let endpoints = layer.endpoints.unwrap_or_default().finalize()?;
	let retry = layer.retry.unwrap_or_default().finalize()?;
	let finder = layer.finder.unwrap_or_default().finalize();
	let logging = layer.logging.unwrap_or_default().finalize();

	info!(
		region = %provider.region,
		partition = %provider.partition,
		account_configured = provider.account_id.is_some(),
		ignored_tag_keys = ignore_tags.keys.len(),
		ignored_tag_prefixes = ignore_tags.key_prefixes.len(),
		endpoint_overrides = endpoints.overrides.len(),
		max_records = ?finder.max_records,
		"Provider configuration loaded"
	);

	Ok(ProviderConfig {
		provider,
		ignore_tags,
		timeouts,
		endpoints,
		retry,
		finder,
		logging,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	fn toml_file(content: &str) -> tempfile::NamedTempFile {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		file.write_all(content.as_bytes()).unwrap();
		file
	}

	#[test]
	fn test_for_region_defaults() {
		let config = ProviderConfig::for_region("us-east-1").unwrap();
		assert_eq!(config.provider.region, "us-east-1");
		assert_eq!(config.provider.partition, "aws");
		assert!(config.timeouts.read.is_none());
		assert!(config.finder.max_records.is_none());
		assert!(config.endpoints.overrides.is_empty());
	}

	#[test]
	fn test_missing_region_fails() {
		let err = load_from_sources(vec![Box::new(DefaultsSource)]).unwrap_err();
		assert!(matches!(err, ConfigError::MissingRequired { .. }));
	}

	#[test]
	fn test_environment_overrides_file() {
		let file = toml_file(
			"[provider]\nregion = \"us-west-2\"\n\n[finder]\nmax_records = 100\n",
		);
		let config = load_from_sources(vec![
			Box::new(EnvSource::from_vars([("NIMBUS_REGION", "eu-west-1")])),
			Box::new(TomlSource::new(file.path())),
			Box::new(DefaultsSource),
		])
		.unwrap();

		assert_eq!(config.provider.region, "eu-west-1");
		assert_eq!(config.finder.max_records, Some(100));
	}

	#[test]
	fn test_explicit_file_overrides_user_file() {
		let user = toml_file("[provider]\nregion = \"us-west-1\"\naccount_id = \"111111111111\"\n");
		let explicit = toml_file("[provider]\nregion = \"us-west-2\"\n");

		let config = load_from_sources(vec![
			Box::new(TomlSource::new(explicit.path())),
			Box::new(UserFile(TomlSource::new(user.path()))),
			Box::new(EnvSource::from_vars(Vec::<(String, String)>::new())),
		])
		.unwrap();

		assert_eq!(config.provider.region, "us-west-2");
		assert_eq!(config.provider.account_id.as_deref(), Some("111111111111"));
	}

	struct UserFile(TomlSource);

	impl ConfigSource for UserFile {
		fn name(&self) -> &'static str {
			"user-file"
		}

		fn precedence(&self) -> Precedence {
			Precedence::UserFile
		}

		fn load(&self) -> Result<ProviderConfigLayer, ConfigError> {
			self.0.load()
		}
	}
}
