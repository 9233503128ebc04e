// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::SchemaError;
use crate::schema::Schema;
use crate::tags::KeyValueTags;
use crate::value::{AttributeMap, Value};

/// The per-read handle a handler reads its input from and writes its output to.
///
/// Every write is checked against the declared schema, so a handler cannot
/// put a value of the wrong type, or an undeclared attribute, into state.
#[derive(Debug, Clone)]
pub struct ResourceData {
	schema: Schema,
	config: AttributeMap,
	state: AttributeMap,
	id: Option<String>,
	tags_out: Option<KeyValueTags>,
}

impl ResourceData {
	/// Validate `config` against `schema` and wrap it for a read.
	pub fn new(schema: Schema, config: AttributeMap) -> Result<Self, SchemaError> {
		schema.validate_config(&config)?;
		Ok(Self {
			schema,
			config,
			state: AttributeMap::new(),
			id: None,
			tags_out: None,
		})
	}

	pub fn schema(&self) -> &Schema {
		&self.schema
	}

	/// Current value of `key`: written state wins over configuration.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.state
			.get(key)
			.or_else(|| self.config.get(key))
			.filter(|v| !v.is_null())
	}

	/// Like [`ResourceData::get`], but treats zero values as unset.
	pub fn get_ok(&self, key: &str) -> Option<&Value> {
		self.get(key).filter(|v| !v.is_zero())
	}

	pub fn get_str(&self, key: &str) -> &str {
		self.get(key).and_then(Value::as_str).unwrap_or_default()
	}

	pub fn get_list(&self, key: &str) -> &[Value] {
		self.get(key).and_then(Value::as_list).unwrap_or_default()
	}

	/// Write one attribute. Null is stored as the declared type's zero value.
	pub fn set(&mut self, key: &str, value: impl Into<Value>) -> Result<(), SchemaError> {
		let value = value.into();
		self.schema.check_value(key, &value)?;

		let value = if value.is_null() {
			self.schema
				.get(key)
				.map(|attr| attr.ty.zero_value())
				.unwrap_or_default()
		} else {
			value
		};

		trace!(attribute = key, kind = value.type_name(), "set attribute");
		self.state.insert(key.to_string(), value);
		Ok(())
	}

	/// Set the output identity. An empty identifier clears it.
	pub fn set_id(&mut self, id: impl Into<String>) {
		let id = id.into();
		self.id = if id.is_empty() { None } else { Some(id) };
	}

	pub fn id(&self) -> Option<&str> {
		self.id.as_deref()
	}

	/// Hand the record's raw tags to the provider, which filters and writes
	/// them after the read when the registration carries tag metadata.
	pub fn set_tags_out(&mut self, tags: KeyValueTags) {
		self.tags_out = Some(tags);
	}

	pub fn take_tags_out(&mut self) -> Option<KeyValueTags> {
		self.tags_out.take()
	}

	/// Finish the read. Fails when no identity was set.
	///
	/// Every declared attribute appears in the result; attributes neither
	/// configured nor written are null.
	pub fn into_state(self) -> Result<State, SchemaError> {
		let id = self.id.ok_or(SchemaError::MissingId)?;

		let mut attributes = AttributeMap::new();
		for (name, _) in self.schema.iter() {
			let value = self
				.state
				.get(name)
				.or_else(|| self.config.get(name))
				.cloned()
				.unwrap_or_default();
			attributes.insert(name.to_string(), value);
		}
		if self.schema.contains("id") {
			attributes.insert("id".to_string(), Value::String(id.clone()));
		}

		Ok(State { id, attributes })
	}
}

/// The outcome of a successful read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
	pub id: String,
	pub attributes: AttributeMap,
}

impl State {
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.attributes.get(key)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::schema::{tags_schema_computed, Attribute};

	fn schema() -> Schema {
		Schema::new()
			.attribute("id", Attribute::string().computed())
			.attribute("ipam_id", Attribute::string().optional())
			.attribute("description", Attribute::string().computed())
			.attribute("scope_count", Attribute::int().computed())
			.attribute("tags", tags_schema_computed())
	}

	fn config(pairs: &[(&str, &str)]) -> AttributeMap {
		pairs
			.iter()
			.map(|(k, v)| (k.to_string(), Value::from(*v)))
			.collect()
	}

	#[test]
	fn new_validates_config() {
		let err = ResourceData::new(schema(), config(&[("description", "x")])).unwrap_err();
		assert_eq!(
			err,
			SchemaError::NotConfigurable {
				name: "description".to_string()
			}
		);
	}

	#[test]
	fn get_prefers_written_state() {
		let mut d = ResourceData::new(schema(), config(&[("ipam_id", "ipam-1")])).unwrap();
		assert_eq!(d.get_str("ipam_id"), "ipam-1");
		d.set("ipam_id", "ipam-2").unwrap();
		assert_eq!(d.get_str("ipam_id"), "ipam-2");
	}

	#[test]
	fn get_ok_skips_zero_values() {
		let d = ResourceData::new(schema(), config(&[("ipam_id", "")])).unwrap();
		assert!(d.get("ipam_id").is_some());
		assert!(d.get_ok("ipam_id").is_none());
	}

	#[test]
	fn set_rejects_wrong_type_and_unknown_names() {
		let mut d = ResourceData::new(schema(), AttributeMap::new()).unwrap();
		assert!(matches!(
			d.set("scope_count", "2"),
			Err(SchemaError::TypeMismatch { .. })
		));
		assert!(matches!(
			d.set("scopeCount", 2i64),
			Err(SchemaError::UnknownAttribute { .. })
		));
	}

	#[test]
	fn set_null_stores_zero_value() {
		let mut d = ResourceData::new(schema(), AttributeMap::new()).unwrap();
		d.set("description", Option::<String>::None).unwrap();
		d.set("scope_count", Value::Null).unwrap();
		d.set_id("ipam-1");
		let state = d.into_state().unwrap();
		assert_eq!(state.get("description"), Some(&Value::from("")));
		assert_eq!(state.get("scope_count"), Some(&Value::Int(0)));
	}

	#[test]
	fn into_state_requires_id() {
		let d = ResourceData::new(schema(), AttributeMap::new()).unwrap();
		assert_eq!(d.into_state().unwrap_err(), SchemaError::MissingId);
	}

	#[test]
	fn empty_id_clears_identity() {
		let mut d = ResourceData::new(schema(), AttributeMap::new()).unwrap();
		d.set_id("ipam-1");
		d.set_id("");
		assert!(d.id().is_none());
	}

	#[test]
	fn into_state_fills_every_declared_attribute() {
		let mut d = ResourceData::new(schema(), config(&[("ipam_id", "ipam-0123")])).unwrap();
		d.set("description", "prod").unwrap();
		d.set_id("ipam-0123");

		let state = d.into_state().unwrap();
		assert_eq!(state.id, "ipam-0123");
		assert_eq!(state.get("id"), Some(&Value::from("ipam-0123")));
		assert_eq!(state.get("ipam_id"), Some(&Value::from("ipam-0123")));
		assert_eq!(state.get("description"), Some(&Value::from("prod")));
		assert_eq!(state.get("tags"), Some(&Value::Null));
		assert_eq!(state.attributes.len(), 5);
	}

	#[test]
	fn tags_out_is_taken_once() {
		let mut d = ResourceData::new(schema(), AttributeMap::new()).unwrap();
		d.set_tags_out([("Name", "a")].into_iter().collect());
		assert!(d.take_tags_out().is_some());
		assert!(d.take_tags_out().is_none());
	}
}
