// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Tag keys the provider drops from every read.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct IgnoreTagsConfigLayer {
	pub keys: Option<Vec<String>>,
	pub key_prefixes: Option<Vec<String>>,
}

impl IgnoreTagsConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.keys.is_some() {
			self.keys = other.keys;
		}
		if other.key_prefixes.is_some() {
			self.key_prefixes = other.key_prefixes;
		}
	}

	pub fn finalize(self) -> IgnoreTagsConfig {
		IgnoreTagsConfig {
			keys: clean(self.keys),
			key_prefixes: clean(self.key_prefixes),
		}
	}
}

fn clean(values: Option<Vec<String>>) -> Vec<String> {
	values
		.unwrap_or_default()
		.into_iter()
		.map(|v| v.trim().to_string())
		.filter(|v| !v.is_empty())
		.collect()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct IgnoreTagsConfig {
	pub keys: Vec<String>,
	pub key_prefixes: Vec<String>,
}
