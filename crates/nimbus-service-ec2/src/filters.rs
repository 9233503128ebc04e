// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use nimbus_finder::Filter;
use nimbus_schema::{Attribute, Schema, Value};

use crate::types;

/// The `filter` block shared by EC2 data sources: any number of
/// `{ name, values }` pairs, passed through to the API unvalidated.
pub fn custom_filters_schema() -> Attribute {
	Attribute::block_set(
		Schema::new()
			.attribute("name", Attribute::string().required())
			.attribute("values", Attribute::string_set().required()),
	)
	.optional()
}

/// Convert configured `filter` blocks into finder filters, preserving order.
/// Blocks without a name are skipped.
pub fn new_custom_filter_list(blocks: &[Value]) -> Vec<Filter> {
	blocks
		.iter()
		.filter_map(Value::as_map)
		.filter_map(|block| {
			let name = block.get("name").and_then(Value::as_str)?;
			if name.is_empty() {
				return None;
			}
			let values = block
				.get("values")
				.and_then(Value::as_list)
				.unwrap_or_default()
				.iter()
				.filter_map(Value::as_str);
			Some(Filter::new(name, values))
		})
		.collect()
}

pub(crate) fn to_wire(filters: &[Filter]) -> Vec<types::Filter> {
	filters
		.iter()
		.map(|f| types::Filter {
			name: f.name.clone(),
			values: f.values.clone(),
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use nimbus_schema::AttributeMap;
	use proptest::prelude::*;

	fn block(name: &str, values: &[&str]) -> Value {
		let mut m = AttributeMap::new();
		m.insert("name".to_string(), name.into());
		m.insert(
			"values".to_string(),
			Value::List(values.iter().map(|v| Value::from(*v)).collect()),
		);
		Value::Map(m)
	}

	#[test]
	fn converts_blocks_in_order() {
		let filters = new_custom_filter_list(&[
			block("description", &["*Some*"]),
			block("tag:Env", &["prod", "stage"]),
		]);
		assert_eq!(
			filters,
			vec![
				Filter::new("description", ["*Some*"]),
				Filter::new("tag:Env", ["prod", "stage"]),
			]
		);
	}

	#[test]
	fn skips_unnamed_blocks() {
		assert!(new_custom_filter_list(&[block("", &["x"]), Value::Null]).is_empty());
	}

	#[test]
	fn schema_accepts_configured_blocks() {
		let schema = Schema::new().attribute("filter", custom_filters_schema());
		let value = Value::List(vec![block("description", &["*none*"])]);
		assert!(schema.check_value("filter", &value).is_ok());
	}

	proptest! {
		#[test]
		fn conversion_keeps_every_name_and_value(
			pairs in proptest::collection::vec(
				("[a-z:-]{1,12}", proptest::collection::vec("[ -~]{0,8}", 0..4)),
				0..6,
			)
		) {
			let blocks: Vec<Value> = pairs
				.iter()
				.map(|(n, vs)| block(n, &vs.iter().map(String::as_str).collect::<Vec<_>>()))
				.collect();
			let filters = new_custom_filter_list(&blocks);
			prop_assert_eq!(filters.len(), pairs.len());
			for (filter, (name, values)) in filters.iter().zip(&pairs) {
				prop_assert_eq!(&filter.name, name);
				prop_assert_eq!(&filter.values, values);
			}
			let wire = to_wire(&filters);
			prop_assert_eq!(wire.len(), filters.len());
		}
	}
}
