// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use nimbus_provider_config::ConfigError;
use nimbus_provider_core::{ReadError, RegistryError};
use nimbus_schema::SchemaError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
	#[error("configuration error: {0}")]
	Config(#[from] ConfigError),

	#[error("registration error: {0}")]
	Registry(#[from] RegistryError),

	#[error("failed to build HTTP client: {0}")]
	Http(#[from] reqwest::Error),

	#[error("unknown data source type: {0}")]
	UnknownDataSource(String),

	#[error("unknown type: {0}")]
	UnknownType(String),

	#[error("invalid configuration for {type_name}: {source}")]
	InvalidInput {
		type_name: String,
		#[source]
		source: SchemaError,
	},

	#[error(transparent)]
	Read(#[from] ReadError),

	#[error("failed to initialize logging: {0}")]
	Logging(String),
}

impl ProviderError {
	pub fn read_error(&self) -> Option<&ReadError> {
		match self {
			ProviderError::Read(e) => Some(e),
			_ => None,
		}
	}
}
