// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration layer for merging from multiple sources.

use serde::Deserialize;

use crate::sections::{
	EndpointsConfigLayer, FinderConfigLayer, IgnoreTagsConfigLayer, LoggingConfigLayer,
	ProviderSectionLayer, RetryConfigLayer, TimeoutsConfigLayer,
};

/// Provider configuration layer - all fields are Option for merging.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderConfigLayer {
	#[serde(default)]
	pub provider: Option<ProviderSectionLayer>,
	#[serde(default)]
	pub ignore_tags: Option<IgnoreTagsConfigLayer>,
	#[serde(default)]
	pub timeouts: Option<TimeoutsConfigLayer>,
	#[serde(default)]
	pub endpoints: Option<EndpointsConfigLayer>,
	#[serde(default)]
	pub retry: Option<RetryConfigLayer>,
	#[serde(default)]
	pub finder: Option<FinderConfigLayer>,
	#[serde(default)]
	pub logging: Option<LoggingConfigLayer>,
}

impl ProviderConfigLayer {
	/// Merge another layer into this one. Other layer takes precedence.
	pub fn merge(&mut self, other: ProviderConfigLayer) {
		merge_option(&mut self.provider, other.provider, ProviderSectionLayer::merge);
		merge_option(
			&mut self.ignore_tags,
			other.ignore_tags,
			IgnoreTagsConfigLayer::merge,
		);
		merge_option(&mut self.timeouts, other.timeouts, TimeoutsConfigLayer::merge);
		merge_option(&mut self.endpoints, other.endpoints, EndpointsConfigLayer::merge);
		merge_option(&mut self.retry, other.retry, RetryConfigLayer::merge);
		merge_option(&mut self.finder, other.finder, FinderConfigLayer::merge);
		merge_option(&mut self.logging, other.logging, LoggingConfigLayer::merge);
	}
}

fn merge_option<T, F>(target: &mut Option<T>, source: Option<T>, merge_fn: F)
where
	F: FnOnce(&mut T, T),
{
	match (target.as_mut(), source) {
		(Some(t), Some(s)) => merge_fn(t, s),
		(None, Some(s)) => *target = Some(s),
		_ => {}
	}
}
