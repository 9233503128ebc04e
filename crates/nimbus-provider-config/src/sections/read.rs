// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Read bounds: the `timeouts` and `finder` sections.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TimeoutsConfigLayer {
	pub read_secs: Option<u64>,
}

impl TimeoutsConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.read_secs.is_some() {
			self.read_secs = other.read_secs;
		}
	}

	pub fn finalize(self) -> Result<TimeoutsConfig, ConfigError> {
		if self.read_secs == Some(0) {
			return Err(ConfigError::InvalidValue {
				key: "timeouts.read_secs".to_string(),
				message: "must be greater than zero".to_string(),
			});
		}
		Ok(TimeoutsConfig {
			read: self.read_secs.map(Duration::from_secs),
		})
	}
}

/// `read` replaces every data source's own default when set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeoutsConfig {
	pub read: Option<Duration>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FinderConfigLayer {
	pub max_records: Option<usize>,
}

impl FinderConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.max_records.is_some() {
			self.max_records = other.max_records;
		}
	}

	pub fn finalize(self) -> FinderConfig {
		FinderConfig {
			max_records: self.max_records.filter(|m| *m > 0),
		}
	}
}

/// Pagination is unbounded unless `max_records` is set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FinderConfig {
	pub max_records: Option<usize>,
}
