// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! EC2 API client (JSON 1.1 protocol).

use async_trait::async_trait;
use nimbus_common_http::{retry, RetryConfig};
use nimbus_provider_core::ProviderContext;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error, instrument, trace};

use crate::error::Ec2Error;
use crate::types::{DescribeIpamsInput, DescribeIpamsOutput};

pub const SERVICE_NAME: &str = "ec2";
const HOST_PREFIX: &str = "ec2";
const CONTENT_TYPE: &str = "application/x-amz-json-1.1";
const TARGET_PREFIX: &str = "AmazonEC2";

/// The EC2 operations the data sources need.
#[async_trait]
pub trait Ec2Api: Send + Sync {
	async fn describe_ipams(&self, input: &DescribeIpamsInput) -> Result<DescribeIpamsOutput, Ec2Error>;
}

#[derive(Debug, Clone)]
pub struct Ec2Client {
	http_client: Client,
	base_url: String,
	retry_config: RetryConfig,
}

#[derive(Debug, Deserialize)]
struct ErrorDocument {
	#[serde(rename = "__type", default)]
	error_type: Option<String>,
	#[serde(alias = "Message", default)]
	message: Option<String>,
}

impl Ec2Client {
	pub fn new(http_client: Client, base_url: impl Into<String>) -> Self {
		Self {
			http_client,
			base_url: base_url.into(),
			retry_config: RetryConfig::default(),
		}
	}

	/// Client for the context's region, endpoint override and retry policy.
	pub fn from_context(ctx: &ProviderContext) -> Self {
		Self::new(ctx.http.clone(), ctx.endpoint(SERVICE_NAME, HOST_PREFIX))
			.with_retry_config(ctx.retry.clone())
	}

	pub fn with_retry_config(mut self, config: RetryConfig) -> Self {
		self.retry_config = config;
		self
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	async fn describe_ipams_inner(
		&self,
		input: &DescribeIpamsInput,
	) -> Result<DescribeIpamsOutput, Ec2Error> {
		let url = format!("{}/", self.base_url.trim_end_matches('/'));
		debug!(url = %url, "Sending DescribeIpams request");
		trace!(?input, "DescribeIpams input");

		let response = self
			.http_client
			.post(&url)
			.header(reqwest::header::CONTENT_TYPE, CONTENT_TYPE)
			.header("X-Amz-Target", format!("{TARGET_PREFIX}.DescribeIpams"))
			.json(input)
			.send()
			.await
			.map_err(|e| {
				error!(error = %e, "Network error during EC2 request");
				Ec2Error::Network(e)
			})?;

		let status = response.status();
		debug!(status = %status, "Received response from EC2");

		let body = response.text().await.map_err(Ec2Error::Network)?;

		if !status.is_success() {
			let err = decode_error(status.as_u16(), &body);
			if !matches!(&err, Ec2Error::Api { code, .. } if code.ends_with(".NotFound")) {
				error!(status = status.as_u16(), error = %err, "EC2 API error");
			}
			return Err(err);
		}

		trace!(body = %body, "Response body");
		serde_json::from_str(&body).map_err(|e| {
			error!(error = %e, "Failed to parse DescribeIpams response");
			Ec2Error::InvalidResponse(format!("JSON parse error: {e}"))
		})
	}
}

#[async_trait]
impl Ec2Api for Ec2Client {
	#[instrument(skip(self, input), fields(ids = input.ipam_ids.len(), filters = input.filters.len()))]
	async fn describe_ipams(&self, input: &DescribeIpamsInput) -> Result<DescribeIpamsOutput, Ec2Error> {
		retry(&self.retry_config, || self.describe_ipams_inner(input)).await
	}
}

/// Decode an error document; `__type` may carry a `namespace#Code` shape.
fn decode_error(status: u16, body: &str) -> Ec2Error {
	let document: Option<ErrorDocument> = serde_json::from_str(body).ok();
	let (code, message) = match document {
		Some(doc) => (
			doc.error_type
				.map(|t| t.rsplit('#').next().unwrap_or_default().to_string())
				.unwrap_or_else(|| format!("HTTP{status}")),
			doc.message.unwrap_or_default(),
		),
		None => (format!("HTTP{status}"), body.to_string()),
	};
	Ec2Error::Api {
		status,
		code,
		message,
	}
}
