// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! `aws_vpc_ipams`: every IPAM matching the filters.

use async_trait::async_trait;
use nimbus_finder::{Query, ReadOptions};
use nimbus_provider_core::{DataSource, ProviderContext, ReadError};
use nimbus_schema::{flatten_all, tags_schema_computed, Attribute, ResourceData, Schema};
use tracing::{debug, instrument};

use crate::client::{Ec2Api, Ec2Client};
use crate::filters::{custom_filters_schema, new_custom_filter_list};
use crate::finder::find_ipams;

pub const TYPE_NAME: &str = "aws_vpc_ipams";
const KIND: &str = "IPAMs";

pub struct IpamsDataSource;

pub fn new() -> Box<dyn DataSource> {
	Box::new(IpamsDataSource)
}

/// One element of `ipams`. `ipam_id` is declared but never populated; the
/// identifier is reported as `id`.
pub fn ipam_element_schema() -> Schema {
	Schema::new()
		.attribute("default_resource_discovery_association_id", Attribute::string().computed())
		.attribute("default_resource_discovery_id", Attribute::string().computed())
		.attribute("enable_private_gua", Attribute::bool().computed())
		.attribute("ipam_id", Attribute::string().optional())
		.attribute("ipam_region", Attribute::string().computed())
		.attribute("arn", Attribute::string().computed())
		.attribute("description", Attribute::string().computed())
		.attribute("id", Attribute::string().computed())
		.attribute("owner_id", Attribute::string().computed())
		.attribute("public_default_scope_id", Attribute::string().computed())
		.attribute("private_default_scope_id", Attribute::string().computed())
		.attribute("resource_discovery_association_count", Attribute::int().computed())
		.attribute("scope_count", Attribute::int().computed())
		.attribute("tier", Attribute::string().computed())
		.attribute("state", Attribute::string().computed())
		.attribute("tags", tags_schema_computed())
}

pub fn schema() -> Schema {
	Schema::new()
		.attribute("filter", custom_filters_schema())
		.attribute("ipams", Attribute::block_set(ipam_element_schema()).computed())
}

#[async_trait]
impl DataSource for IpamsDataSource {
	fn schema(&self) -> Schema {
		schema()
	}

	async fn read(
		&self,
		ctx: &ProviderContext,
		data: &mut ResourceData,
		options: &ReadOptions,
	) -> Result<(), ReadError> {
		read(&Ec2Client::from_context(ctx), ctx, data, options).await
	}
}

#[instrument(skip_all, fields(data_source = TYPE_NAME, region = %ctx.region))]
pub async fn read<A: Ec2Api + ?Sized>(
	api: &A,
	ctx: &ProviderContext,
	data: &mut ResourceData,
	options: &ReadOptions,
) -> Result<(), ReadError> {
	let query = Query::new().with_filters(new_custom_filter_list(data.get_list("filter")));

	let ipams = find_ipams(api, &query, options)
		.await
		.map_err(|e| ReadError::collection(KIND, e))?;

	debug!(count = ipams.len(), "listed IPAMs");
	data.set_id(ctx.region.clone());
	data.set("ipams", flatten_all(&ipams, &ctx.ignore_tags))?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::finder::tests::{ipam, FakeEc2};
	use crate::types::Tag;
	use nimbus_schema::{AttributeMap, IgnoreConfig, Value};

	fn ctx() -> ProviderContext {
		ProviderContext::new("us-west-2", reqwest::Client::new())
	}

	fn filter(name: &str, value: &str) -> Value {
		let mut m = AttributeMap::new();
		m.insert("name".to_string(), name.into());
		m.insert("values".to_string(), Value::List(vec![value.into()]));
		Value::List(vec![Value::Map(m)])
	}

	fn data_with_filter(name: &str, value: &str) -> ResourceData {
		let mut config = AttributeMap::new();
		config.insert("filter".to_string(), filter(name, value));
		ResourceData::new(schema(), config).unwrap()
	}

	#[tokio::test]
	async fn zero_matches_is_empty_collection_with_region_identity() {
		let api = FakeEc2::single(vec![]);
		let mut d = data_with_filter("description", "*none*");
		read(&api, &ctx(), &mut d, &ReadOptions::default()).await.unwrap();

		assert_eq!(d.id(), Some("us-west-2"));
		assert_eq!(d.get_list("ipams").len(), 0);
		let input = &api.inputs.lock().unwrap()[0];
		assert_eq!(input.filters[0].values, vec!["*none*"]);
		assert!(input.ipam_ids.is_empty());
	}

	#[tokio::test]
	async fn every_match_is_flattened() {
		let api = FakeEc2::single(vec![ipam("ipam-1", "Some thing"), ipam("ipam-2", "Some other")]);
		let mut d = data_with_filter("description", "*Some*");
		read(&api, &ctx(), &mut d, &ReadOptions::default()).await.unwrap();

		let ipams = d.get_list("ipams");
		assert_eq!(ipams.len(), 2);
		let first = ipams[0].as_map().unwrap();
		assert_eq!(first["id"], Value::from("ipam-1"));
		assert!(!first.contains_key("ipam_id"));
	}

	#[tokio::test]
	async fn collection_applies_provider_ignore_policy() {
		let mut record = ipam("ipam-1", "a");
		record.tags = Some(vec![
			Tag {
				key: Some("Name".to_string()),
				value: Some("a".to_string()),
			},
			Tag {
				key: Some("Owner".to_string()),
				value: Some("net".to_string()),
			},
		]);
		let api = FakeEc2::single(vec![record]);
		let ctx = ctx().with_ignore_tags(IgnoreConfig::new(["Owner"], Vec::<String>::new()));
		let mut d = ResourceData::new(schema(), AttributeMap::new()).unwrap();
		read(&api, &ctx, &mut d, &ReadOptions::default()).await.unwrap();

		let tags = d.get_list("ipams")[0].as_map().unwrap()["tags"].clone();
		assert_eq!(tags.as_map().unwrap().keys().collect::<Vec<_>>(), vec!["Name"]);
	}

	#[tokio::test]
	async fn unrecognised_tier_is_written_verbatim() {
		let mut record = ipam("ipam-1", "a");
		record.tier = Some("enterprise".into());
		record.state = Some("restore-complete".into());
		let api = FakeEc2::single(vec![record]);
		let mut d = ResourceData::new(schema(), AttributeMap::new()).unwrap();
		read(&api, &ctx(), &mut d, &ReadOptions::default()).await.unwrap();

		let first = d.get_list("ipams")[0].as_map().unwrap().clone();
		assert_eq!(first["tier"], Value::from("enterprise"));
		assert_eq!(first["state"], Value::from("restore-complete"));
	}

	#[tokio::test]
	async fn no_filters_sends_none() {
		let api = FakeEc2::single(vec![]);
		let mut d = ResourceData::new(schema(), AttributeMap::new()).unwrap();
		read(&api, &ctx(), &mut d, &ReadOptions::default()).await.unwrap();
		assert!(api.inputs.lock().unwrap()[0].filters.is_empty());
	}
}
