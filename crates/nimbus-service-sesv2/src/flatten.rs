// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use nimbus_schema::{AttributeMap, Flatten, IgnoreConfig, KeyValueTags, Value};

use crate::types::{DedicatedIp, Tag, WarmupStatus};

pub fn key_value_tags(tags: &[Tag]) -> KeyValueTags {
	tags.iter()
		.map(|t| (t.key.clone(), t.value.clone()))
		.collect()
}

impl Flatten for DedicatedIp {
	fn flatten(&self, _ignore: &IgnoreConfig) -> AttributeMap {
		let mut m = AttributeMap::new();
		m.insert(
			"ip".to_string(),
			Value::from(self.ip.clone().unwrap_or_default()),
		);
		m.insert(
			"warmup_percentage".to_string(),
			Value::from(self.warmup_percentage.unwrap_or_default()),
		);
		m.insert(
			"warmup_status".to_string(),
			Value::from(self.warmup_status.as_ref().map(WarmupStatus::as_str).unwrap_or_default()),
		);
		m
	}
}
