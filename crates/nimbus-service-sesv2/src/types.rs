// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Wire types for the SESv2 dedicated IP and tagging operations.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DedicatedIpPool {
	pub pool_name: Option<String>,
	pub scaling_mode: Option<ScalingMode>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetDedicatedIpPoolOutput {
	pub dedicated_ip_pool: Option<DedicatedIpPool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DedicatedIp {
	pub ip: Option<String>,
	pub warmup_status: Option<WarmupStatus>,
	pub warmup_percentage: Option<i32>,
	pub pool_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetDedicatedIpsOutput {
	pub dedicated_ips: Vec<DedicatedIp>,
	pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
	pub key: String,
	#[serde(default)]
	pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListTagsForResourceOutput {
	pub tags: Vec<Tag>,
}

nimbus_common_http::wire_enum! {
	pub enum ScalingMode {
		Standard = "STANDARD",
		Managed = "MANAGED",
	}
}

nimbus_common_http::wire_enum! {
	pub enum WarmupStatus {
		InProgress = "IN_PROGRESS",
		Done = "DONE",
		NotApplicable = "NOT_APPLICABLE",
	}
}
