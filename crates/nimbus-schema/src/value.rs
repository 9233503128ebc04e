// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Attribute name to value, ordered by name.
pub type AttributeMap = BTreeMap<String, Value>;

/// An attribute value as stored in configuration and state.
///
/// Sets are carried as [`Value::List`]; ordering is not significant for them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
	#[default]
	Null,
	Bool(bool),
	Int(i64),
	String(String),
	List(Vec<Value>),
	Map(AttributeMap),
}

impl Value {
	pub fn is_null(&self) -> bool {
		matches!(self, Value::Null)
	}

	/// Null, `""`, `false`, `0` and empty collections.
	pub fn is_zero(&self) -> bool {
		match self {
			Value::Null => true,
			Value::Bool(b) => !b,
			Value::Int(i) => *i == 0,
			Value::String(s) => s.is_empty(),
			Value::List(l) => l.is_empty(),
			Value::Map(m) => m.is_empty(),
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			Value::String(s) => Some(s),
			_ => None,
		}
	}

	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Value::Bool(b) => Some(*b),
			_ => None,
		}
	}

	pub fn as_int(&self) -> Option<i64> {
		match self {
			Value::Int(i) => Some(*i),
			_ => None,
		}
	}

	pub fn as_list(&self) -> Option<&[Value]> {
		match self {
			Value::List(l) => Some(l),
			_ => None,
		}
	}

	pub fn as_map(&self) -> Option<&AttributeMap> {
		match self {
			Value::Map(m) => Some(m),
			_ => None,
		}
	}

	pub fn type_name(&self) -> &'static str {
		match self {
			Value::Null => "null",
			Value::Bool(_) => "bool",
			Value::Int(_) => "int",
			Value::String(_) => "string",
			Value::List(_) => "list",
			Value::Map(_) => "map",
		}
	}
}

impl From<&str> for Value {
	fn from(s: &str) -> Self {
		Value::String(s.to_string())
	}
}

impl From<String> for Value {
	fn from(s: String) -> Self {
		Value::String(s)
	}
}

impl From<&String> for Value {
	fn from(s: &String) -> Self {
		Value::String(s.clone())
	}
}

impl From<bool> for Value {
	fn from(b: bool) -> Self {
		Value::Bool(b)
	}
}

impl From<i64> for Value {
	fn from(i: i64) -> Self {
		Value::Int(i)
	}
}

impl From<i32> for Value {
	fn from(i: i32) -> Self {
		Value::Int(i64::from(i))
	}
}

impl From<Vec<Value>> for Value {
	fn from(l: Vec<Value>) -> Self {
		Value::List(l)
	}
}

impl From<AttributeMap> for Value {
	fn from(m: AttributeMap) -> Self {
		Value::Map(m)
	}
}

impl From<BTreeMap<String, String>> for Value {
	fn from(m: BTreeMap<String, String>) -> Self {
		Value::Map(m.into_iter().map(|(k, v)| (k, Value::String(v))).collect())
	}
}

impl<T> From<Option<T>> for Value
where
	T: Into<Value>,
{
	fn from(v: Option<T>) -> Self {
		v.map(Into::into).unwrap_or(Value::Null)
	}
}
