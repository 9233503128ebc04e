// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! `aws_vpc_ipam`: one IPAM by identifier and/or filters.

use std::time::Duration;

use async_trait::async_trait;
use nimbus_finder::{Query, ReadOptions};
use nimbus_provider_core::{DataSource, ProviderContext, ReadError};
use nimbus_schema::{tags_schema_computed, Attribute, ResourceData, Schema, Value};
use tracing::{debug, instrument};

use crate::client::{Ec2Api, Ec2Client};
use crate::filters::{custom_filters_schema, new_custom_filter_list};
use crate::finder::find_ipam;
use crate::flatten::key_value_tags;
use crate::types::{IpamState, IpamTier};

pub const TYPE_NAME: &str = "aws_vpc_ipam";
const KIND: &str = "IPAM";
const READ_TIMEOUT: Duration = Duration::from_secs(20 * 60);

pub struct IpamDataSource;

pub fn new() -> Box<dyn DataSource> {
	Box::new(IpamDataSource)
}

pub fn schema() -> Schema {
	Schema::new()
		.attribute("default_resource_discovery_association_id", Attribute::string().computed())
		.attribute("default_resource_discovery_id", Attribute::string().computed())
		.attribute("enable_private_gua", Attribute::bool().computed())
		.attribute("ipam_id", Attribute::string().optional())
		.attribute("ipam_region", Attribute::string().computed())
		.attribute("arn", Attribute::string().computed())
		.attribute("description", Attribute::string().computed())
		.attribute("id", Attribute::string().computed())
		.attribute("filter", custom_filters_schema())
		.attribute("owner_id", Attribute::string().computed())
		.attribute("public_default_scope_id", Attribute::string().computed())
		.attribute("private_default_scope_id", Attribute::string().computed())
		.attribute("resource_discovery_association_count", Attribute::int().computed())
		.attribute("scope_count", Attribute::int().computed())
		.attribute("tier", Attribute::string().computed())
		.attribute("state", Attribute::string().computed())
		.attribute("tags", tags_schema_computed())
}

#[async_trait]
impl DataSource for IpamDataSource {
	fn schema(&self) -> Schema {
		schema()
	}

	fn default_read_timeout(&self) -> Option<Duration> {
		Some(READ_TIMEOUT)
	}

	async fn read(
		&self,
		ctx: &ProviderContext,
		data: &mut ResourceData,
		options: &ReadOptions,
	) -> Result<(), ReadError> {
		read(&Ec2Client::from_context(ctx), data, options).await
	}
}

#[instrument(skip_all, fields(data_source = TYPE_NAME))]
pub async fn read<A: Ec2Api + ?Sized>(
	api: &A,
	data: &mut ResourceData,
	options: &ReadOptions,
) -> Result<(), ReadError> {
	let mut query = Query::new();
	if let Some(id) = data.get_ok("ipam_id").and_then(Value::as_str) {
		query = query.with_id(id);
	}
	let query = query.with_filters(new_custom_filter_list(data.get_list("filter")));

	let ipam = find_ipam(api, &query, options)
		.await
		.map_err(|e| ReadError::singular(KIND, e))?;

	debug!(ipam_id = ?ipam.ipam_id, "found IPAM");
	data.set_id(ipam.ipam_id.clone().unwrap_or_default());
	data.set(
		"default_resource_discovery_association_id",
		ipam.default_resource_discovery_association_id,
	)?;
	data.set("default_resource_discovery_id", ipam.default_resource_discovery_id)?;
	data.set("enable_private_gua", ipam.enable_private_gua)?;
	data.set("ipam_region", ipam.ipam_region)?;
	data.set("arn", ipam.ipam_arn)?;
	data.set("owner_id", ipam.owner_id)?;
	data.set("description", ipam.description)?;
	data.set("public_default_scope_id", ipam.public_default_scope_id)?;
	data.set("private_default_scope_id", ipam.private_default_scope_id)?;
	data.set(
		"resource_discovery_association_count",
		ipam.resource_discovery_association_count,
	)?;
	data.set("scope_count", ipam.scope_count)?;
	data.set("tier", ipam.tier.as_ref().map(IpamTier::as_str))?;
	data.set("state", ipam.state.as_ref().map(IpamState::as_str))?;

	data.set_tags_out(key_value_tags(ipam.tags.as_deref().unwrap_or_default()));
	Ok(())
}
