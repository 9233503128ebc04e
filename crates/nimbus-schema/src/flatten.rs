// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use crate::tags::IgnoreConfig;
use crate::value::{AttributeMap, Value};

/// Conversion of an API record into a nested attribute block.
///
/// Implementations read every field through a zero-value accessor, so absent
/// strings become `""`, absent booleans `false` and absent counts `0`. The
/// `tags` key is only present when the record carried tags.
pub trait Flatten {
	fn flatten(&self, ignore: &IgnoreConfig) -> AttributeMap;
}

/// Flatten every record, preserving order.
pub fn flatten_all<T: Flatten>(records: &[T], ignore: &IgnoreConfig) -> Vec<Value> {
	records
		.iter()
		.map(|record| Value::Map(record.flatten(ignore)))
		.collect()
}
