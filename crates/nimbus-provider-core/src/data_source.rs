// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::time::Duration;

use async_trait::async_trait;
use nimbus_finder::ReadOptions;
use nimbus_schema::{ResourceData, Schema};

use crate::context::ProviderContext;
use crate::error::ReadError;

/// A read-only data source.
///
/// `read` receives input already validated against [`DataSource::schema`] and
/// must either set an identity on `data` or fail.
#[async_trait]
pub trait DataSource: Send + Sync {
	fn schema(&self) -> Schema;

	/// Upper bound for one read, unless the provider overrides it.
	fn default_read_timeout(&self) -> Option<Duration> {
		None
	}

	async fn read(
		&self,
		ctx: &ProviderContext,
		data: &mut ResourceData,
		options: &ReadOptions,
	) -> Result<(), ReadError>;
}

/// A managed resource. Only the schema is declared; lifecycle operations
/// live outside this crate.
pub trait Resource: Send + Sync {
	fn schema(&self) -> Schema;
}

pub type DataSourceFactory = fn() -> Box<dyn DataSource>;
pub type ResourceFactory = fn() -> Box<dyn Resource>;
