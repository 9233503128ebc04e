// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Attribute schemas and state values for Nimbus data sources.
//!
//! - [`Schema`] / [`Attribute`]: declared attribute types and flags
//! - [`Value`] / [`AttributeMap`]: the attribute representation written to state
//! - [`ResourceData`]: the per-read handle a handler reads input from and writes output to
//! - [`KeyValueTags`] / [`IgnoreConfig`]: tag maps and the tag ignore policy
//! - [`Flatten`]: projection of an API record into an [`AttributeMap`]

pub mod data;
pub mod error;
pub mod flatten;
pub mod schema;
pub mod tags;
pub mod value;

pub use data::{ResourceData, State};
pub use error::SchemaError;
pub use flatten::{flatten_all, Flatten};
pub use schema::{
	tags_all_schema, tags_schema, tags_schema_computed, Attribute, AttributeType, Element, Schema,
};
pub use tags::{IgnoreConfig, KeyValueTags, AWS_TAG_KEY_PREFIX};
pub use value::{AttributeMap, Value};
