// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Retry policy for the service clients.

use std::time::Duration;

use nimbus_common_http::RetryConfig;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RetryConfigLayer {
	pub max_attempts: Option<u32>,
	pub base_delay_ms: Option<u64>,
	pub max_delay_ms: Option<u64>,
}

impl RetryConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.max_attempts.is_some() {
			self.max_attempts = other.max_attempts;
		}
		if other.base_delay_ms.is_some() {
			self.base_delay_ms = other.base_delay_ms;
		}
		if other.max_delay_ms.is_some() {
			self.max_delay_ms = other.max_delay_ms;
		}
	}

	pub fn finalize(self) -> Result<RetryConfig, ConfigError> {
		let defaults = RetryConfig::default();
		let config = RetryConfig {
			max_attempts: self.max_attempts.unwrap_or(defaults.max_attempts),
			base_delay: self
				.base_delay_ms
				.map(Duration::from_millis)
				.unwrap_or(defaults.base_delay),
			max_delay: self
				.max_delay_ms
				.map(Duration::from_millis)
				.unwrap_or(defaults.max_delay),
			..defaults
		};

		if config.max_attempts == 0 {
			return Err(ConfigError::InvalidValue {
				key: "retry.max_attempts".to_string(),
				message: "must be at least 1".to_string(),
			});
		}
		if config.base_delay > config.max_delay {
			return Err(ConfigError::Conflict(format!(
				"retry.base_delay_ms ({}) exceeds retry.max_delay_ms ({})",
				config.base_delay.as_millis(),
				config.max_delay.as_millis()
			)));
		}
		Ok(config)
	}
}
