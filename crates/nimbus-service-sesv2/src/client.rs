// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! SESv2 API client (REST-JSON protocol).

use async_trait::async_trait;
use nimbus_common_http::{retry, RetryConfig};
use nimbus_provider_core::ProviderContext;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, error, instrument, trace};

use crate::error::Sesv2Error;
use crate::types::{
	DedicatedIpPool, GetDedicatedIpPoolOutput, GetDedicatedIpsOutput, ListTagsForResourceOutput,
	Tag,
};

pub const SERVICE_NAME: &str = "sesv2";
const HOST_PREFIX: &str = "email";
const ERROR_TYPE_HEADER: &str = "x-amzn-ErrorType";

#[async_trait]
pub trait Sesv2Api: Send + Sync {
	async fn get_dedicated_ip_pool(&self, pool_name: &str) -> Result<DedicatedIpPool, Sesv2Error>;

	async fn list_dedicated_ips(
		&self,
		pool_name: &str,
		next_token: Option<&str>,
		page_size: Option<i32>,
	) -> Result<GetDedicatedIpsOutput, Sesv2Error>;

	async fn list_tags_for_resource(&self, resource_arn: &str) -> Result<Vec<Tag>, Sesv2Error>;
}

#[derive(Debug, Clone)]
pub struct Sesv2Client {
	http_client: Client,
	base_url: String,
	retry_config: RetryConfig,
}

#[derive(Debug, Deserialize)]
struct ErrorDocument {
	#[serde(rename = "__type", alias = "code", default)]
	error_type: Option<String>,
	#[serde(alias = "Message", default)]
	message: Option<String>,
}

impl Sesv2Client {
	pub fn new(http_client: Client, base_url: impl Into<String>) -> Self {
		Self {
			http_client,
			base_url: base_url.into(),
			retry_config: RetryConfig::default(),
		}
	}

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

	/// `{base}/v2/email/{segments...}` with each segment percent-encoded.
	fn url(&self, segments: &[&str]) -> Result<Url, Sesv2Error> {
		let mut url = Url::parse(&self.base_url)
			.map_err(|e| Sesv2Error::InvalidEndpoint(format!("{}: {e}", self.base_url)))?;
		url.path_segments_mut()
			.map_err(|_| Sesv2Error::InvalidEndpoint(self.base_url.clone()))?
			.pop_if_empty()
			.extend(["v2", "email"])
			.extend(segments);
		Ok(url)
	}

	async fn get_json<T: DeserializeOwned>(
		&self,
		url: Url,
		query: &[(&str, String)],
	) -> Result<T, Sesv2Error> {
		debug!(url = %url, "Sending SESv2 request");

		let response = self
			.http_client
			.get(url)
			.query(query)
			.send()
			.await
			.map_err(|e| {
				error!(error = %e, "Network error during SESv2 request");
				Sesv2Error::Network(e)
			})?;

		let status = response.status();
		let error_type = response
			.headers()
			.get(ERROR_TYPE_HEADER)
			.and_then(|v| v.to_str().ok())
			.map(str::to_string);
		debug!(status = %status, "Received response from SESv2");

		let body = response.text().await.map_err(Sesv2Error::Network)?;

		if !status.is_success() {
			let err = decode_error(status.as_u16(), error_type.as_deref(), &body);
			if err.code() != Some("NotFoundException") {
				error!(status = status.as_u16(), error = %err, "SESv2 API error");
			}
			return Err(err);
		}

		trace!(body = %body, "Response body");
		serde_json::from_str(&body).map_err(|e| {
			error!(error = %e, "Failed to parse SESv2 response");
			Sesv2Error::InvalidResponse(format!("JSON parse error: {e}"))
		})
	}
}

#[async_trait]
impl Sesv2Api for Sesv2Client {
	#[instrument(skip(self))]
	async fn get_dedicated_ip_pool(&self, pool_name: &str) -> Result<DedicatedIpPool, Sesv2Error> {
		let url = self.url(&["dedicated-ip-pools", pool_name])?;
		let output: GetDedicatedIpPoolOutput =
			retry(&self.retry_config, || self.get_json(url.clone(), &[])).await?;
		output
			.dedicated_ip_pool
			.ok_or_else(|| Sesv2Error::InvalidResponse("missing DedicatedIpPool".to_string()))
	}

	#[instrument(skip(self))]
	async fn list_dedicated_ips(
		&self,
		pool_name: &str,
		next_token: Option<&str>,
		page_size: Option<i32>,
	) -> Result<GetDedicatedIpsOutput, Sesv2Error> {
		let url = self.url(&["dedicated-ips"])?;
		let mut query = vec![("PoolName", pool_name.to_string())];
		if let Some(token) = next_token {
			query.push(("NextToken", token.to_string()));
		}
		if let Some(size) = page_size {
			query.push(("PageSize", size.to_string()));
		}
		retry(&self.retry_config, || self.get_json(url.clone(), &query)).await
	}

	#[instrument(skip(self))]
	async fn list_tags_for_resource(&self, resource_arn: &str) -> Result<Vec<Tag>, Sesv2Error> {
		let url = self.url(&["tags"])?;
		let query = [("ResourceArn", resource_arn.to_string())];
		let output: ListTagsForResourceOutput =
			retry(&self.retry_config, || self.get_json(url.clone(), &query)).await?;
		Ok(output.tags)
	}
}

/// The error code comes from `x-amzn-ErrorType` (`Code:uri` form) or the
/// body's `__type`/`code`.
fn decode_error(status: u16, error_type: Option<&str>, body: &str) -> Sesv2Error {
	let document: Option<ErrorDocument> = serde_json::from_str(body).ok();
	let from_header = error_type
		.and_then(|t| t.split(':').next())
		.filter(|t| !t.is_empty())
		.map(str::to_string);
	let from_body = document
		.as_ref()
		.and_then(|d| d.error_type.as_deref())
		.map(|t| t.rsplit('#').next().unwrap_or_default().to_string());

	let code = from_header
		.or(from_body)
		.unwrap_or_else(|| format!("HTTP{status}"));
	let message = match document {
		Some(doc) => doc.message.unwrap_or_default(),
		None => body.to_string(),
	};
	Sesv2Error::Api {
		status,
		code,
		message,
	}
}
