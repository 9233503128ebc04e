// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Query and filter types.

use std::fmt;

/// A server-side predicate: match records whose field `name` is one of `values`.
///
/// Filters are combined with AND across names and OR within one filter's
/// values. That contract belongs to the listing API; filters are never
/// evaluated locally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
	pub name: String,
	pub values: Vec<String>,
}

impl Filter {
	pub fn new<I, V>(name: impl Into<String>, values: I) -> Self
	where
		I: IntoIterator<Item = V>,
		V: Into<String>,
	{
		Self {
			name: name.into(),
			values: values.into_iter().map(Into::into).collect(),
		}
	}
}

impl fmt::Display for Filter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}=[{}]", self.name, self.values.join(", "))
	}
}

/// A read request: optional exact identifiers plus ordered filters.
///
/// An empty query lists everything the caller can see.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
	ids: Vec<String>,
	filters: Vec<Filter>,
}

impl Query {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_id(mut self, id: impl Into<String>) -> Self {
		self.ids.push(id.into());
		self
	}

	pub fn with_filter(mut self, filter: Filter) -> Self {
		self.filters.push(filter);
		self
	}

	pub fn with_filters(mut self, filters: impl IntoIterator<Item = Filter>) -> Self {
		self.filters.extend(filters);
		self
	}

	pub fn ids(&self) -> &[String] {
		&self.ids
	}

	pub fn filters(&self) -> &[Filter] {
		&self.filters
	}

	pub fn is_empty(&self) -> bool {
		self.ids.is_empty() && self.filters.is_empty()
	}
}

impl fmt::Display for Query {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.is_empty() {
			return f.write_str("all records");
		}

		let mut parts = Vec::new();
		if !self.ids.is_empty() {
			parts.push(format!("ids=[{}]", self.ids.join(", ")));
		}
		if !self.filters.is_empty() {
			let filters: Vec<String> = self.filters.iter().map(ToString::to_string).collect();
			parts.push(format!("filters=[{}]", filters.join(", ")));
		}
		f.write_str(&parts.join(" "))
	}
}
