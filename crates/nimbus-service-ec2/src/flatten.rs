// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use nimbus_schema::{AttributeMap, Flatten, IgnoreConfig, KeyValueTags, Value};

use crate::types::{Ipam, IpamState, IpamTier, Tag};

/// Tags as a key/value map. Entries without a key are dropped; a missing
/// value reads as `""`.
pub fn key_value_tags(tags: &[Tag]) -> KeyValueTags {
	tags.iter()
		.filter_map(|t| {
			let key = t.key.clone()?;
			Some((key, t.value.clone().unwrap_or_default()))
		})
		.collect()
}

impl Flatten for Ipam {
	fn flatten(&self, ignore: &IgnoreConfig) -> AttributeMap {
		let string = |v: &Option<String>| Value::String(v.clone().unwrap_or_default());

		let mut m = AttributeMap::new();
		m.insert("arn".to_string(), string(&self.ipam_arn));
		m.insert("description".to_string(), string(&self.description));
		m.insert("id".to_string(), string(&self.ipam_id));
		m.insert(
			"default_resource_discovery_association_id".to_string(),
			string(&self.default_resource_discovery_association_id),
		);
		m.insert(
			"default_resource_discovery_id".to_string(),
			string(&self.default_resource_discovery_id),
		);
		m.insert(
			"enable_private_gua".to_string(),
			Value::Bool(self.enable_private_gua.unwrap_or_default()),
		);
		m.insert("ipam_region".to_string(), string(&self.ipam_region));
		m.insert("owner_id".to_string(), string(&self.owner_id));
		m.insert(
			"public_default_scope_id".to_string(),
			string(&self.public_default_scope_id),
		);
		m.insert(
			"private_default_scope_id".to_string(),
			string(&self.private_default_scope_id),
		);
		m.insert(
			"resource_discovery_association_count".to_string(),
			Value::from(self.resource_discovery_association_count.unwrap_or_default()),
		);
		m.insert(
			"scope_count".to_string(),
			Value::from(self.scope_count.unwrap_or_default()),
		);
		m.insert(
			"tier".to_string(),
			Value::from(self.tier.as_ref().map(IpamTier::as_str).unwrap_or_default()),
		);
		m.insert(
			"state".to_string(),
			Value::from(self.state.as_ref().map(IpamState::as_str).unwrap_or_default()),
		);
		if let Some(tags) = &self.tags {
			m.insert(
				"tags".to_string(),
				key_value_tags(tags).filtered(ignore).into(),
			);
		}
		m
	}
}

/// Rebuild an [`Ipam`] from its flattened block. Zero values read back as
/// absent.
pub fn expand_ipam(block: &AttributeMap) -> Ipam {
	let string = |key: &str| {
		block
			.get(key)
			.and_then(Value::as_str)
			.filter(|s| !s.is_empty())
			.map(str::to_string)
	};
	let int = |key: &str| {
		block
			.get(key)
			.and_then(Value::as_int)
			.and_then(|i| i32::try_from(i).ok())
	};

	Ipam {
		ipam_id: string("id"),
		ipam_arn: string("arn"),
		ipam_region: string("ipam_region"),
		description: string("description"),
		owner_id: string("owner_id"),
		public_default_scope_id: string("public_default_scope_id"),
		private_default_scope_id: string("private_default_scope_id"),
		default_resource_discovery_id: string("default_resource_discovery_id"),
		default_resource_discovery_association_id: string(
			"default_resource_discovery_association_id",
		),
		resource_discovery_association_count: int("resource_discovery_association_count"),
		scope_count: int("scope_count"),
		enable_private_gua: block.get("enable_private_gua").and_then(Value::as_bool),
		tier: string("tier").and_then(|s| s.parse().ok()),
		state: string("state").and_then(|s| s.parse().ok()),
		tags: block.get("tags").and_then(Value::as_map).map(|tags| {
			tags.iter()
				.map(|(k, v)| Tag {
					key: Some(k.clone()),
					value: v.as_str().map(str::to_string),
				})
				.collect()
		}),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ipams::ipam_element_schema;
	use proptest::prelude::*;

	fn full_ipam() -> Ipam {
		Ipam {
			ipam_id: Some("ipam-0123".to_string()),
			ipam_arn: Some("arn:aws:ec2::123456789012:ipam/ipam-0123".to_string()),
			ipam_region: Some("us-west-2".to_string()),
			description: Some("prod".to_string()),
			owner_id: Some("123456789012".to_string()),
			scope_count: Some(2),
			tier: Some(IpamTier::Advanced),
			state: Some(IpamState::CreateComplete),
			enable_private_gua: Some(true),
			tags: Some(vec![
				Tag {
					key: Some("Name".to_string()),
					value: Some("prod".to_string()),
				},
				Tag {
					key: Some("aws:cloudformation:stack-id".to_string()),
					value: Some("x".to_string()),
				},
			]),
			..Default::default()
		}
	}

	#[test]
	fn absent_fields_flatten_to_zero_values() {
		let m = Ipam::default().flatten(&IgnoreConfig::default());
		assert_eq!(m["description"], Value::from(""));
		assert_eq!(m["enable_private_gua"], Value::Bool(false));
		assert_eq!(m["scope_count"], Value::Int(0));
		assert_eq!(m["tier"], Value::from(""));
		assert!(!m.contains_key("tags"));
		assert!(!m.contains_key("ipam_id"));
	}

	#[test]
	fn identifier_goes_to_id_and_tags_are_filtered() {
		let m = full_ipam().flatten(&IgnoreConfig::default());
		assert_eq!(m["id"], Value::from("ipam-0123"));
		assert_eq!(m["tier"], Value::from("advanced"));
		assert_eq!(m["state"], Value::from("create-complete"));
		let tags = m["tags"].as_map().unwrap();
		assert_eq!(tags.len(), 1);
		assert_eq!(tags["Name"], Value::from("prod"));
	}

	#[test]
	fn flattened_block_matches_element_schema() {
		let schema = ipam_element_schema();
		let m = full_ipam().flatten(&IgnoreConfig::default());
		for key in m.keys() {
			assert!(schema.contains(key), "{key} is not declared");
		}
		assert!(schema.check_map_root(&m).is_ok());
	}

	fn arb_opt_string() -> impl Strategy<Value = Option<String>> {
		proptest::option::of("[a-z0-9-]{0,12}")
	}

	prop_compose! {
		fn arb_ipam()(
			ids in (arb_opt_string(), arb_opt_string(), arb_opt_string(), arb_opt_string()),
			more in (arb_opt_string(), arb_opt_string(), arb_opt_string(), arb_opt_string()),
			counts in (proptest::option::of(0i32..1000), proptest::option::of(0i32..1000)),
			gua in proptest::option::of(any::<bool>()),
			tier in proptest::option::of(proptest::sample::select(IpamTier::known())),
			state in proptest::option::of(proptest::sample::select(IpamState::known())),
			tags in proptest::option::of(proptest::collection::btree_map("(aws:)?[a-z]{1,6}", "[a-z]{0,6}", 0..5)),
		) -> Ipam {
			Ipam {
				ipam_id: ids.0,
				ipam_arn: ids.1,
				ipam_region: ids.2,
				description: ids.3,
				owner_id: more.0,
				public_default_scope_id: more.1,
				private_default_scope_id: more.2,
				default_resource_discovery_id: more.3,
				default_resource_discovery_association_id: None,
				resource_discovery_association_count: counts.0,
				scope_count: counts.1,
				enable_private_gua: gua,
				tier,
				state,
				tags: tags.map(|t| t.into_iter().map(|(k, v)| Tag { key: Some(k), value: Some(v) }).collect()),
			}
		}
	}

	proptest! {
		#[test]
		fn flatten_expand_round_trip(ipam in arb_ipam()) {
			let ignore = IgnoreConfig::new(Vec::<String>::new(), ["x"]);
			let flat = ipam.flatten(&ignore);
			prop_assert_eq!(expand_ipam(&flat).flatten(&ignore), flat);
		}

		#[test]
		fn ignored_tags_never_flatten(ipam in arb_ipam(), ignored in "[a-z]{1,6}") {
			let ignore = IgnoreConfig::new([ignored.clone()], Vec::<String>::new());
			let flat = ipam.flatten(&ignore);
			if let Some(tags) = flat.get("tags").and_then(Value::as_map) {
				prop_assert!(!tags.contains_key(&ignored));
				prop_assert!(tags.keys().all(|k| !k.starts_with("aws:")));
			}
		}
	}
}
