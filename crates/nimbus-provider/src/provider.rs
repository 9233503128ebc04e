// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use nimbus_finder::CancellationToken;
use nimbus_provider_config::ProviderConfig;
use nimbus_provider_core::{
	apply_transparent_tags, ProviderContext, ReadError, Registry, ServicePackage,
};
use nimbus_schema::{AttributeMap, IgnoreConfig, ResourceData, Schema, State};
use nimbus_service_ec2::Ec2ServicePackage;
use nimbus_service_sesv2::Sesv2ServicePackage;
use tracing::{debug, info, instrument, warn};

use crate::error::ProviderError;

/// Every service package the provider serves.
pub fn service_packages() -> Vec<Box<dyn ServicePackage>> {
	vec![Box::new(Ec2ServicePackage), Box::new(Sesv2ServicePackage)]
}

/// A registry holding every service package.
pub fn default_registry() -> Result<Registry, ProviderError> {
	let mut registry = Registry::new();
	for package in service_packages() {
		registry.register(package.as_ref())?;
	}
	Ok(registry)
}

/// Translate resolved configuration into the context handed to handlers.
pub fn context_from_config(config: &ProviderConfig) -> Result<ProviderContext, ProviderError> {
	let http = nimbus_common_http::new_client()?;
	let ignore = IgnoreConfig::new(
		config.ignore_tags.keys.iter().cloned(),
		config.ignore_tags.key_prefixes.iter().cloned(),
	);

	let mut ctx = ProviderContext::new(config.provider.region.clone(), http)
		.with_partition(config.provider.partition.clone())
		.with_ignore_tags(ignore)
		.with_retry(config.retry.clone());
	if let Some(account_id) = &config.provider.account_id {
		ctx = ctx.with_account_id(account_id.clone());
	}
	for (service, url) in &config.endpoints.overrides {
		ctx = ctx.with_endpoint(service.clone(), url.clone());
	}
	if let Some(timeout) = config.timeouts.read {
		ctx = ctx.with_read_timeout(timeout);
	}
	if let Some(max_records) = config.finder.max_records {
		ctx = ctx.with_max_records(max_records);
	}
	Ok(ctx)
}

pub struct Provider {
	ctx: ProviderContext,
	registry: Registry,
}

impl Provider {
	pub fn new(ctx: ProviderContext, registry: Registry) -> Self {
		Self { ctx, registry }
	}

	pub fn configure(config: &ProviderConfig) -> Result<Self, ProviderError> {
		let ctx = context_from_config(config)?;
		let registry = default_registry()?;
		info!(
			region = %ctx.region,
			data_sources = registry.data_source_types().len(),
			resources = registry.resource_types().len(),
			"provider configured"
		);
		Ok(Self::new(ctx, registry))
	}

	pub fn context(&self) -> &ProviderContext {
		&self.ctx
	}

	pub fn registry(&self) -> &Registry {
		&self.registry
	}

	pub fn data_source_types(&self) -> Vec<&str> {
		self.registry.data_source_types()
	}

	pub fn resource_types(&self) -> Vec<&str> {
		self.registry.resource_types()
	}

	/// The schema of a data source, or of a resource when no data source has
	/// that type name.
	pub fn schema(&self, type_name: &str) -> Option<Schema> {
		if let Some(ds) = self.registry.data_source(type_name) {
			return Some(ds.handler.schema());
		}
		self.registry.resource(type_name).map(|r| r.handler.schema())
	}

	pub async fn read_data_source(
		&self,
		type_name: &str,
		config: AttributeMap,
	) -> Result<State, ProviderError> {
		self.read(type_name, config, None).await
	}

	pub async fn read_data_source_with_cancel(
		&self,
		type_name: &str,
		config: AttributeMap,
		cancellation: CancellationToken,
	) -> Result<State, ProviderError> {
		self.read(type_name, config, Some(cancellation)).await
	}

	#[instrument(skip(self, config, cancellation), fields(region = %self.ctx.region))]
	async fn read(
		&self,
		type_name: &str,
		config: AttributeMap,
		cancellation: Option<CancellationToken>,
	) -> Result<State, ProviderError> {
		let registered = self
			.registry
			.data_source(type_name)
			.ok_or_else(|| ProviderError::UnknownDataSource(type_name.to_string()))?;
		let handler = registered.handler.as_ref();
		let kind = registered.name.unwrap_or(type_name);

		let mut data = ResourceData::new(handler.schema(), config).map_err(|source| {
			ProviderError::InvalidInput {
				type_name: type_name.to_string(),
				source,
			}
		})?;

		let default_timeout = handler.default_read_timeout();
		let deadline = self.ctx.read_timeout_for(default_timeout);
		let options = self.ctx.read_options(default_timeout, cancellation.clone());
		debug!(?deadline, "reading data source");

		let bounded = async {
			let read = handler.read(&self.ctx, &mut data, &options);
			match deadline {
				Some(after) => tokio::time::timeout(after, read)
					.await
					.unwrap_or_else(|_| {
						Err(ReadError::Timeout {
							kind: kind.to_string(),
							after,
						})
					}),
				None => read.await,
			}
		};
		let outcome = match &cancellation {
			Some(token) => tokio::select! {
				biased;
				_ = token.cancelled() => Err(ReadError::Cancelled { kind: kind.to_string() }),
				outcome = bounded => outcome,
			},
			None => bounded.await,
		};
		if let Err(e) = outcome {
			warn!(error = %e, "data source read failed");
			return Err(e.into());
		}

		apply_transparent_tags(&mut data, registered.tags.as_ref(), &self.ctx.ignore_tags)
			.map_err(ReadError::from)?;
		Ok(data.into_state().map_err(ReadError::from)?)
	}
}
