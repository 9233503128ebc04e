// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::collections::BTreeMap;
use std::time::Duration;

use nimbus_common_http::RetryConfig;
use nimbus_finder::{CancellationToken, ReadOptions};
use nimbus_schema::IgnoreConfig;

pub const DEFAULT_PARTITION: &str = "aws";

/// Everything a data source needs from the configured provider.
///
/// Built once by the provider and shared read-only across reads.
#[derive(Debug, Clone)]
pub struct ProviderContext {
	pub region: String,
	pub partition: String,
	pub account_id: Option<String>,
	pub ignore_tags: IgnoreConfig,
	pub http: reqwest::Client,
	/// Base URL overrides keyed by service package name.
	pub endpoints: BTreeMap<String, String>,
	pub retry: RetryConfig,
	/// Replaces each data source's default read timeout when set.
	pub read_timeout: Option<Duration>,
	pub max_records: Option<usize>,
}

impl ProviderContext {
	pub fn new(region: impl Into<String>, http: reqwest::Client) -> Self {
		Self {
			region: region.into(),
			partition: DEFAULT_PARTITION.to_string(),
			account_id: None,
			ignore_tags: IgnoreConfig::default(),
			http,
			endpoints: BTreeMap::new(),
			retry: RetryConfig::default(),
			read_timeout: None,
			max_records: None,
		}
	}

	pub fn with_partition(mut self, partition: impl Into<String>) -> Self {
		self.partition = partition.into();
		self
	}

	pub fn with_account_id(mut self, account_id: impl Into<String>) -> Self {
		self.account_id = Some(account_id.into());
		self
	}

	pub fn with_ignore_tags(mut self, ignore_tags: IgnoreConfig) -> Self {
		self.ignore_tags = ignore_tags;
		self
	}

	pub fn with_endpoint(mut self, service: impl Into<String>, url: impl Into<String>) -> Self {
		self.endpoints.insert(service.into(), url.into());
		self
	}

	pub fn with_retry(mut self, retry: RetryConfig) -> Self {
		self.retry = retry;
		self
	}

	pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
		self.read_timeout = Some(timeout);
		self
	}

	pub fn with_max_records(mut self, max_records: usize) -> Self {
		self.max_records = Some(max_records);
		self
	}

	/// Base URL for `service`: the configured override, or the regional
	/// endpoint `https://{host_prefix}.{region}.amazonaws.com`.
	pub fn endpoint(&self, service: &str, host_prefix: &str) -> String {
		match self.endpoints.get(service) {
			Some(url) => url.trim_end_matches('/').to_string(),
			None => format!("https://{host_prefix}.{}.amazonaws.com", self.region),
		}
	}

	/// `arn:{partition}:{service}:{region}:{account}:{resource}`, when the
	/// account is known.
	pub fn regional_arn(&self, service: &str, resource: &str) -> Option<String> {
		let account = self.account_id.as_deref().filter(|a| !a.is_empty())?;
		Some(format!(
			"arn:{}:{service}:{}:{account}:{resource}",
			self.partition, self.region
		))
	}

	/// The effective deadline for a data source with the given default.
	pub fn read_timeout_for(&self, default: Option<Duration>) -> Option<Duration> {
		self.read_timeout.or(default)
	}

	pub fn read_options(
		&self,
		default_timeout: Option<Duration>,
		cancellation: Option<CancellationToken>,
	) -> ReadOptions {
		ReadOptions {
			timeout: self.read_timeout_for(default_timeout),
			cancellation,
			max_records: self.max_records,
		}
	}
}
