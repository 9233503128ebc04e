// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Declared attribute types.
//!
//! The declared type and flags of every attribute are a compatibility surface
//! with previously persisted state: names and types written by a handler must
//! match the declaration exactly.

use std::collections::BTreeMap;

use crate::error::SchemaError;
use crate::value::{AttributeMap, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum AttributeType {
	String,
	Bool,
	Int,
	Map(Box<AttributeType>),
	List(Box<Element>),
	Set(Box<Element>),
}

/// Element of a list or set: a plain value or a nested block.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
	Value(AttributeType),
	Block(Schema),
}

impl AttributeType {
	pub fn name(&self) -> String {
		match self {
			AttributeType::String => "string".to_string(),
			AttributeType::Bool => "bool".to_string(),
			AttributeType::Int => "int".to_string(),
			AttributeType::Map(inner) => format!("map of {}", inner.name()),
			AttributeType::List(elem) => format!("list of {}", elem.name()),
			AttributeType::Set(elem) => format!("set of {}", elem.name()),
		}
	}

	/// The value an absent attribute of this type reads as.
	pub fn zero_value(&self) -> Value {
		match self {
			AttributeType::String => Value::String(String::new()),
			AttributeType::Bool => Value::Bool(false),
			AttributeType::Int => Value::Int(0),
			AttributeType::Map(_) => Value::Map(AttributeMap::new()),
			AttributeType::List(_) | AttributeType::Set(_) => Value::List(Vec::new()),
		}
	}

	/// Check `value` against this type. Null is accepted everywhere.
	pub fn check(&self, path: &str, value: &Value) -> Result<(), SchemaError> {
		let mismatch = || SchemaError::TypeMismatch {
			path: path.to_string(),
			expected: self.name(),
			actual: value.type_name(),
		};

		match (self, value) {
			(_, Value::Null) => Ok(()),
			(AttributeType::String, Value::String(_)) => Ok(()),
			(AttributeType::Bool, Value::Bool(_)) => Ok(()),
			(AttributeType::Int, Value::Int(_)) => Ok(()),
			(AttributeType::Map(inner), Value::Map(entries)) => {
				for (key, entry) in entries {
					inner.check(&format!("{path}.{key}"), entry)?;
				}
				Ok(())
			}
			(AttributeType::List(elem), Value::List(items))
			| (AttributeType::Set(elem), Value::List(items)) => {
				for (index, item) in items.iter().enumerate() {
					elem.check(&format!("{path}.{index}"), item)?;
				}
				Ok(())
			}
			_ => Err(mismatch()),
		}
	}
}

impl Element {
	fn name(&self) -> String {
		match self {
			Element::Value(ty) => ty.name(),
			Element::Block(_) => "object".to_string(),
		}
	}

	fn check(&self, path: &str, value: &Value) -> Result<(), SchemaError> {
		match (self, value) {
			(Element::Value(ty), _) => ty.check(path, value),
			(Element::Block(_), Value::Null) => Ok(()),
			(Element::Block(schema), Value::Map(block)) => schema.check_map(path, block),
			(Element::Block(_), other) => Err(SchemaError::TypeMismatch {
				path: path.to_string(),
				expected: "object".to_string(),
				actual: other.type_name(),
			}),
		}
	}
}

/// One declared attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
	pub ty: AttributeType,
	pub required: bool,
	pub optional: bool,
	pub computed: bool,
	pub sensitive: bool,
	pub max_items: Option<usize>,
	pub description: Option<String>,
}

impl Attribute {
	pub fn new(ty: AttributeType) -> Self {
		Self {
			ty,
			required: false,
			optional: false,
			computed: false,
			sensitive: false,
			max_items: None,
			description: None,
		}
	}

	pub fn string() -> Self {
		Self::new(AttributeType::String)
	}

	pub fn bool() -> Self {
		Self::new(AttributeType::Bool)
	}

	pub fn int() -> Self {
		Self::new(AttributeType::Int)
	}

	pub fn string_map() -> Self {
		Self::new(AttributeType::Map(Box::new(AttributeType::String)))
	}

	pub fn string_set() -> Self {
		Self::new(AttributeType::Set(Box::new(Element::Value(AttributeType::String))))
	}

	pub fn string_list() -> Self {
		Self::new(AttributeType::List(Box::new(Element::Value(AttributeType::String))))
	}

	pub fn block_list(schema: Schema) -> Self {
		Self::new(AttributeType::List(Box::new(Element::Block(schema))))
	}

	pub fn block_set(schema: Schema) -> Self {
		Self::new(AttributeType::Set(Box::new(Element::Block(schema))))
	}

	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	pub fn optional(mut self) -> Self {
		self.optional = true;
		self
	}

	pub fn computed(mut self) -> Self {
		self.computed = true;
		self
	}

	pub fn sensitive(mut self) -> Self {
		self.sensitive = true;
		self
	}

	pub fn max_items(mut self, max: usize) -> Self {
		self.max_items = Some(max);
		self
	}

	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	/// Whether users may supply this attribute in configuration.
	pub fn is_configurable(&self) -> bool {
		self.required || self.optional
	}

	fn check(&self, path: &str, value: &Value) -> Result<(), SchemaError> {
		self.ty.check(path, value)?;

		if let (Some(max), Value::List(items)) = (self.max_items, value) {
			if items.len() > max {
				return Err(SchemaError::TooManyItems {
					path: path.to_string(),
					max,
					actual: items.len(),
				});
			}
		}
		Ok(())
	}
}

/// Read-only tag map on data sources.
pub fn tags_schema_computed() -> Attribute {
	Attribute::string_map().computed()
}

/// User-settable tag map on resources.
pub fn tags_schema() -> Attribute {
	Attribute::string_map().optional()
}

/// Effective tags (configured plus provider defaults) on resources.
pub fn tags_all_schema() -> Attribute {
	Attribute::string_map().optional().computed()
}

/// A named set of attributes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
	attributes: BTreeMap<String, Attribute>,
}

impl Schema {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn attribute(mut self, name: impl Into<String>, attribute: Attribute) -> Self {
		self.attributes.insert(name.into(), attribute);
		self
	}

	pub fn get(&self, name: &str) -> Option<&Attribute> {
		self.attributes.get(name)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.attributes.contains_key(name)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &Attribute)> {
		self.attributes.iter().map(|(k, v)| (k.as_str(), v))
	}

	pub fn len(&self) -> usize {
		self.attributes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.attributes.is_empty()
	}

	/// Validate one value for attribute `name`.
	pub fn check_value(&self, name: &str, value: &Value) -> Result<(), SchemaError> {
		let attribute = self.get(name).ok_or_else(|| SchemaError::UnknownAttribute {
			name: name.to_string(),
		})?;
		attribute.check(name, value)
	}

	/// Validate user configuration: only configurable attributes, every
	/// required attribute present, every value well typed.
	pub fn validate_config(&self, config: &AttributeMap) -> Result<(), SchemaError> {
		for (name, value) in config {
			let attribute = self.get(name).ok_or_else(|| SchemaError::UnknownAttribute {
				name: name.clone(),
			})?;
			if !attribute.is_configurable() && !value.is_null() {
				return Err(SchemaError::NotConfigurable { name: name.clone() });
			}
			attribute.check(name, value)?;
		}

		for (name, attribute) in self.iter() {
			if attribute.required && config.get(name).map_or(true, Value::is_null) {
				return Err(SchemaError::MissingRequired {
					name: name.to_string(),
				});
			}
		}
		Ok(())
	}

	fn check_map(&self, path: &str, block: &AttributeMap) -> Result<(), SchemaError> {
		for (name, value) in block {
			let attribute = self.get(name).ok_or_else(|| SchemaError::UnknownAttribute {
				name: format!("{path}.{name}"),
			})?;
			attribute.check(&format!("{path}.{name}"), value)?;
		}
		Ok(())
	}

	/// Validate a whole attribute map (e.g. a flattened record) against this schema.
	pub fn check_map_root(&self, block: &AttributeMap) -> Result<(), SchemaError> {
		for (name, value) in block {
			self.check_value(name, value)?;
		}
		Ok(())
	}
}
