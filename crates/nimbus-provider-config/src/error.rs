// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// A setting with no default was left unset by every source.
	#[error("{key} is not set; {hint}")]
	MissingRequired { key: &'static str, hint: &'static str },

	#[error("invalid {key}: {message}")]
	InvalidValue { key: String, message: String },

	#[error("cannot parse {path}: {source}")]
	TomlParse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("cannot read {path}: {source}")]
	FileRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// Two settings that are valid alone but contradict each other.
	#[error("conflicting settings: {0}")]
	Conflict(String),
}
