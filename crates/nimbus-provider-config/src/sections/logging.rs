// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde::{Deserialize, Serialize};

/// HTTP internals stay quiet unless asked for.
pub const DEFAULT_LOG_LEVEL: &str = "info,reqwest=warn,hyper=warn,hyper_util=warn";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfigLayer {
	pub level: Option<String>,
	pub json: Option<bool>,
}

impl LoggingConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.level.is_some() {
			self.level = other.level;
		}
		if other.json.is_some() {
			self.json = other.json;
		}
	}

	/// A blank level falls back to the default filter.
	pub fn finalize(self) -> LoggingConfig {
		LoggingConfig {
			level: self
				.level
				.map(|l| l.trim().to_string())
				.filter(|l| !l.is_empty())
				.unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
			json: self.json.unwrap_or_default(),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
	/// An `EnvFilter` directive string.
	pub level: String,
	pub json: bool,
}

impl Default for LoggingConfig {
	fn default() -> Self {
		LoggingConfigLayer::default().finalize()
	}
}
