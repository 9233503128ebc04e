// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Wire types for `DescribeIpams`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeIpamsInput {
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub ipam_ids: Vec<String>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub filters: Vec<Filter>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub max_results: Option<i32>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeIpamsOutput {
	#[serde(default)]
	pub ipams: Vec<Ipam>,
	#[serde(default)]
	pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Filter {
	pub name: String,
	#[serde(default)]
	pub values: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
	#[serde(default)]
	pub key: Option<String>,
	#[serde(default)]
	pub value: Option<String>,
}

/// An IP address manager. Every field is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Ipam {
	pub ipam_id: Option<String>,
	pub ipam_arn: Option<String>,
	pub ipam_region: Option<String>,
	pub description: Option<String>,
	pub owner_id: Option<String>,
	pub public_default_scope_id: Option<String>,
	pub private_default_scope_id: Option<String>,
	pub default_resource_discovery_id: Option<String>,
	pub default_resource_discovery_association_id: Option<String>,
	pub resource_discovery_association_count: Option<i32>,
	pub scope_count: Option<i32>,
	pub enable_private_gua: Option<bool>,
	pub tier: Option<IpamTier>,
	pub state: Option<IpamState>,
	pub tags: Option<Vec<Tag>>,
}

nimbus_common_http::wire_enum! {
	pub enum IpamTier {
		Free = "free",
		Advanced = "advanced",
	}
}

nimbus_common_http::wire_enum! {
	pub enum IpamState {
		CreateInProgress = "create-in-progress",
		CreateComplete = "create-complete",
		CreateFailed = "create-failed",
		ModifyInProgress = "modify-in-progress",
		ModifyComplete = "modify-complete",
		ModifyFailed = "modify-failed",
		DeleteInProgress = "delete-in-progress",
		DeleteComplete = "delete-complete",
		DeleteFailed = "delete-failed",
		IsolateInProgress = "isolate-in-progress",
		IsolateComplete = "isolate-complete",
		RestoreInProgress = "restore-in-progress",
	}
}
