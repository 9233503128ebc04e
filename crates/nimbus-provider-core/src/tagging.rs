// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use nimbus_schema::{IgnoreConfig, ResourceData, SchemaError};
use tracing::trace;

use crate::registry::ResourceTags;

pub const TAGS_ATTRIBUTE: &str = "tags";

/// Write the tags a handler collected into `tags`, after dropping
/// system-reserved and ignored keys.
///
/// Only applies to registrations that carry tag metadata and whose schema
/// declares a `tags` attribute. Handlers that never call
/// [`ResourceData::set_tags_out`] are left untouched.
pub fn apply_transparent_tags(
	data: &mut ResourceData,
	tags: Option<&ResourceTags>,
	ignore: &IgnoreConfig,
) -> Result<(), SchemaError> {
	if tags.is_none() || !data.schema().contains(TAGS_ATTRIBUTE) {
		return Ok(());
	}
	let Some(raw) = data.take_tags_out() else {
		return Ok(());
	};

	let filtered = raw.filtered(ignore);
	trace!(count = filtered.len(), "writing transparent tags");
	data.set(TAGS_ATTRIBUTE, filtered)
}
