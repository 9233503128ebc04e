// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::collections::{BTreeMap, BTreeSet};

use crate::value::Value;

/// Keys with this prefix are reserved by the cloud and never surfaced.
pub const AWS_TAG_KEY_PREFIX: &str = "aws:";

/// Tag keys the user has asked the provider to ignore.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreConfig {
	pub keys: BTreeSet<String>,
	pub key_prefixes: BTreeSet<String>,
}

impl IgnoreConfig {
	pub fn new<K, P>(keys: K, key_prefixes: P) -> Self
	where
		K: IntoIterator,
		K::Item: Into<String>,
		P: IntoIterator,
		P::Item: Into<String>,
	{
		Self {
			keys: keys.into_iter().map(Into::into).collect(),
			key_prefixes: key_prefixes.into_iter().map(Into::into).collect(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.keys.is_empty() && self.key_prefixes.is_empty()
	}

	pub fn ignores(&self, key: &str) -> bool {
		self.keys.contains(key) || self.key_prefixes.iter().any(|p| key.starts_with(p.as_str()))
	}
}

/// A tag set keyed by tag key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyValueTags(BTreeMap<String, String>);

impl KeyValueTags {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn get(&self, key: &str) -> Option<&str> {
		self.0.get(key).map(String::as_str)
	}

	/// Drop system-reserved `aws:` keys.
	pub fn ignore_aws(self) -> Self {
		Self(
			self.0
				.into_iter()
				.filter(|(k, _)| !k.starts_with(AWS_TAG_KEY_PREFIX))
				.collect(),
		)
	}

	/// Drop keys matched by the user's ignore configuration.
	pub fn ignore_config(self, ignore: &IgnoreConfig) -> Self {
		if ignore.is_empty() {
			return self;
		}
		Self(self.0.into_iter().filter(|(k, _)| !ignore.ignores(k)).collect())
	}

	/// System keys first, then user-ignored keys.
	pub fn filtered(self, ignore: &IgnoreConfig) -> Self {
		self.ignore_aws().ignore_config(ignore)
	}

	pub fn map(&self) -> &BTreeMap<String, String> {
		&self.0
	}

	pub fn into_map(self) -> BTreeMap<String, String> {
		self.0
	}
}

impl<K, V> FromIterator<(K, V)> for KeyValueTags
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
	}
}

impl From<BTreeMap<String, String>> for KeyValueTags {
	fn from(map: BTreeMap<String, String>) -> Self {
		Self(map)
	}
}

impl From<KeyValueTags> for Value {
	fn from(tags: KeyValueTags) -> Self {
		Value::from(tags.0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn tags() -> KeyValueTags {
		[
			("Name", "prod-ipam"),
			("aws:cloudformation:stack-name", "net"),
			("team", "network"),
			("internal:owner", "ops"),
		]
		.into_iter()
		.collect()
	}

	#[test]
	fn ignore_aws_drops_reserved_keys() {
		let filtered = tags().ignore_aws();
		assert_eq!(filtered.len(), 3);
		assert!(filtered.get("aws:cloudformation:stack-name").is_none());
	}

	#[test]
	fn ignore_config_drops_keys_and_prefixes() {
		let ignore = IgnoreConfig::new(["team"], ["internal:"]);
		let filtered = tags().filtered(&ignore);
		assert_eq!(filtered.map().keys().collect::<Vec<_>>(), vec!["Name"]);
	}

	#[test]
	fn empty_ignore_config_keeps_everything_but_aws() {
		let filtered = tags().filtered(&IgnoreConfig::default());
		assert_eq!(filtered.len(), 3);
	}

	#[test]
	fn converts_to_string_map_value() {
		let value: Value = KeyValueTags::from_iter([("Name", "a")]).into();
		assert_eq!(value.as_map().unwrap()["Name"].as_str(), Some("a"));
	}

	proptest! {
		#[test]
		fn filtered_never_contains_reserved_or_ignored(
			keys in proptest::collection::vec("(aws:|x-|)[a-z]{1,6}", 0..20),
			ignored in proptest::collection::btree_set("[a-z]{1,6}", 0..4),
		) {
			let ignore = IgnoreConfig::new(ignored.clone(), ["x-"]);
			let tags: KeyValueTags = keys.iter().map(|k| (k.clone(), "v".to_string())).collect();
			let filtered = tags.filtered(&ignore);

			for key in filtered.map().keys() {
				prop_assert!(!key.starts_with(AWS_TAG_KEY_PREFIX));
				prop_assert!(!key.starts_with("x-"));
				prop_assert!(!ignored.contains(key));
			}
		}

		#[test]
		fn filtering_is_idempotent(keys in proptest::collection::vec("(aws:|)[a-z]{1,4}", 0..20)) {
			let ignore = IgnoreConfig::new(["ab"], Vec::<String>::new());
			let tags: KeyValueTags = keys.iter().map(|k| (k.clone(), k.clone())).collect();
			let once = tags.filtered(&ignore);
			let twice = once.clone().filtered(&ignore);
			prop_assert_eq!(once, twice);
		}
	}
}
