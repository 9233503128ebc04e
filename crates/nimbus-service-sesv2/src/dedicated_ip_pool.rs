// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! `aws_sesv2_dedicated_ip_pool`: a pool, its addresses and its tags.

use async_trait::async_trait;
use nimbus_finder::ReadOptions;
use nimbus_provider_core::{DataSource, ProviderContext, ReadError};
use nimbus_schema::{flatten_all, tags_schema_computed, Attribute, ResourceData, Schema};
use tracing::{debug, instrument, warn};

use crate::client::{Sesv2Api, Sesv2Client};
use crate::finder::{find_dedicated_ip_pool, find_dedicated_ips};
use crate::flatten::key_value_tags;
use crate::types::ScalingMode;

pub const TYPE_NAME: &str = "aws_sesv2_dedicated_ip_pool";
/// Display name shared by handler errors and the registration.
pub const KIND: &str = "SESv2 Dedicated IP Pool";
const ARN_SERVICE: &str = "ses";

pub struct DedicatedIpPoolDataSource;

pub fn new() -> Box<dyn DataSource> {
	Box::new(DedicatedIpPoolDataSource)
}

pub fn dedicated_ip_schema() -> Schema {
	Schema::new()
		.attribute("ip", Attribute::string().computed())
		.attribute("warmup_percentage", Attribute::int().computed())
		.attribute("warmup_status", Attribute::string().computed())
}

pub fn schema() -> Schema {
	Schema::new()
		.attribute("arn", Attribute::string().computed())
		.attribute(
			"dedicated_ips",
			Attribute::block_list(dedicated_ip_schema()).computed(),
		)
		.attribute("pool_name", Attribute::string().required())
		.attribute("scaling_mode", Attribute::string().computed())
		.attribute("tags", tags_schema_computed())
}

#[async_trait]
impl DataSource for DedicatedIpPoolDataSource {
	fn schema(&self) -> Schema {
		schema()
	}

	async fn read(
		&self,
		ctx: &ProviderContext,
		data: &mut ResourceData,
		options: &ReadOptions,
	) -> Result<(), ReadError> {
		read(&Sesv2Client::from_context(ctx), ctx, data, options).await
	}
}

#[instrument(skip_all, fields(data_source = TYPE_NAME))]
pub async fn read<A: Sesv2Api + ?Sized>(
	api: &A,
	ctx: &ProviderContext,
	data: &mut ResourceData,
	options: &ReadOptions,
) -> Result<(), ReadError> {
	let name = data.get_str("pool_name").to_string();

	let pool = find_dedicated_ip_pool(api, &name, options)
		.await
		.map_err(|e| ReadError::singular(KIND, e))?;
	let ips = find_dedicated_ips(api, &name, options)
		.await
		.map_err(|e| ReadError::collection(KIND, e))?;
	debug!(pool = %name, ips = ips.len(), "found dedicated IP pool");

	data.set_id(pool.pool_name.clone().unwrap_or_else(|| name.clone()));
	data.set("scaling_mode", pool.scaling_mode.as_ref().map(ScalingMode::as_str))?;
	data.set("dedicated_ips", flatten_all(&ips, &ctx.ignore_tags))?;

	match ctx.regional_arn(ARN_SERVICE, &format!("dedicated-ip-pool/{name}")) {
		Some(arn) => {
			let tags = api
				.list_tags_for_resource(&arn)
				.await
				.map_err(|e| ReadError::upstream(KIND, e))?;
			data.set("arn", arn)?;
			data.set("tags", key_value_tags(&tags).filtered(&ctx.ignore_tags))?;
		}
		None => warn!(pool = %name, "account ID not configured; skipping arn and tags"),
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::finder::tests::{ip, FakeSesv2};
	use crate::types::{GetDedicatedIpsOutput, Tag, WarmupStatus};
	use nimbus_schema::{AttributeMap, IgnoreConfig, Value};

	const ARN: &str = "arn:aws:ses:us-east-1:123456789012:dedicated-ip-pool/marketing";

	fn ctx() -> ProviderContext {
		ProviderContext::new("us-east-1", reqwest::Client::new()).with_account_id("123456789012")
	}

	fn data(name: &str) -> ResourceData {
		let mut config = AttributeMap::new();
		config.insert("pool_name".to_string(), name.into());
		ResourceData::new(schema(), config).unwrap()
	}

	fn fake() -> FakeSesv2 {
		let mut api = FakeSesv2::with_pool("marketing", ScalingMode::Standard).with_ip_pages(vec![
			GetDedicatedIpsOutput {
				dedicated_ips: vec![ip("192.0.2.1", WarmupStatus::Done, 100)],
				next_token: None,
			},
		]);
		api.tags.insert(
			ARN.to_string(),
			vec![
				Tag {
					key: "team".to_string(),
					value: "growth".to_string(),
				},
				Tag {
					key: "aws:cloudformation:stack-name".to_string(),
					value: "s".to_string(),
				},
			],
		);
		api
	}

	#[tokio::test]
	async fn reads_pool_ips_arn_and_tags() {
		let api = fake();
		let mut d = data("marketing");
		read(&api, &ctx(), &mut d, &ReadOptions::default()).await.unwrap();

		assert_eq!(d.id(), Some("marketing"));
		assert_eq!(d.get_str("scaling_mode"), "STANDARD");
		assert_eq!(d.get_str("arn"), ARN);
		let ips = d.get_list("dedicated_ips");
		assert_eq!(ips.len(), 1);
		assert_eq!(ips[0].as_map().unwrap()["ip"], Value::from("192.0.2.1"));

		let tags = d.get("tags").and_then(Value::as_map).unwrap();
		assert_eq!(tags.keys().collect::<Vec<_>>(), vec!["team"]);
		assert_eq!(*api.tag_requests.lock().unwrap(), vec![ARN.to_string()]);
	}

	#[tokio::test]
	async fn provider_ignore_policy_applies_to_tags() {
		let api = fake();
		let ctx = ctx().with_ignore_tags(IgnoreConfig::new(["team"], Vec::<String>::new()));
		let mut d = data("marketing");
		read(&api, &ctx, &mut d, &ReadOptions::default()).await.unwrap();
		assert!(d.get("tags").and_then(Value::as_map).unwrap().is_empty());
	}

	#[tokio::test]
	async fn missing_pool_is_not_found() {
		let api = fake();
		let mut d = data("transactional");
		let err = read(&api, &ctx(), &mut d, &ReadOptions::default()).await.unwrap_err();
		assert!(err.is_not_found());
		assert_eq!(err.to_string(), "no matching SESv2 Dedicated IP Pool found");
		assert!(d.id().is_none());
	}

	#[tokio::test]
	async fn empty_pool_name_is_not_found() {
		let api = fake();
		let mut d = data("");
		let err = read(&api, &ctx(), &mut d, &ReadOptions::default()).await.unwrap_err();
		assert_eq!(err.to_string(), "no matching SESv2 Dedicated IP Pool found");
		assert!(api.pool_requests.lock().unwrap().is_empty());
		assert!(api.ip_requests.lock().unwrap().is_empty());
	}

	#[tokio::test]
	async fn without_account_id_arn_and_tags_are_skipped() {
		let api = fake();
		let ctx = ProviderContext::new("us-east-1", reqwest::Client::new());
		let mut d = data("marketing");
		read(&api, &ctx, &mut d, &ReadOptions::default()).await.unwrap();

		assert_eq!(d.get_str("arn"), "");
		assert!(api.tag_requests.lock().unwrap().is_empty());
	}

	#[tokio::test]
	async fn tag_listing_failure_fails_the_read() {
		let mut api = fake();
		api.tag_error = Some(403);
		let mut d = data("marketing");
		let err = read(&api, &ctx(), &mut d, &ReadOptions::default()).await.unwrap_err();
		assert!(err.to_string().starts_with("reading SESv2 Dedicated IP Pool: "));
	}
}
