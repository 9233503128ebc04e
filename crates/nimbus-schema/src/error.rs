// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use thiserror::Error;

/// Errors raised when configuration or state does not fit the declared schema.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
	#[error("unsupported attribute: {name}")]
	UnknownAttribute { name: String },

	#[error("{path}: expected {expected}, got {actual}")]
	TypeMismatch {
		path: String,
		expected: String,
		actual: &'static str,
	},

	#[error("missing required attribute: {name}")]
	MissingRequired { name: String },

	#[error("attribute {name} is read-only and cannot be configured")]
	NotConfigurable { name: String },

	#[error("{path}: at most {max} items allowed, got {actual}")]
	TooManyItems {
		path: String,
		max: usize,
		actual: usize,
	},

	#[error("no identifier was set for the result")]
	MissingId,
}
