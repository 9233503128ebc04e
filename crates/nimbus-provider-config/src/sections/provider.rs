// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Provider identity: region, partition and account.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_PARTITION: &str = "aws";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProviderSectionLayer {
	pub region: Option<String>,
	pub partition: Option<String>,
	pub account_id: Option<String>,
}

impl ProviderSectionLayer {
	pub fn merge(&mut self, other: Self) {
		if other.region.is_some() {
			self.region = other.region;
		}
		if other.partition.is_some() {
			self.partition = other.partition;
		}
		if other.account_id.is_some() {
			self.account_id = other.account_id;
		}
	}

	pub fn finalize(self) -> Result<ProviderSection, ConfigError> {
		let region = self
			.region
			.filter(|r| !r.trim().is_empty())
			.ok_or_else(|| ConfigError::MissingRequired {
				key: "provider.region",
				hint: "set it in provider.toml, NIMBUS_REGION or AWS_REGION",
			})?;

		if !region
			.chars()
			.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
		{
			return Err(ConfigError::InvalidValue {
				key: "provider.region".to_string(),
				message: format!("'{region}' is not a region name"),
			});
		}

		Ok(ProviderSection {
			region,
			partition: self
				.partition
				.filter(|p| !p.is_empty())
				.unwrap_or_else(|| DEFAULT_PARTITION.to_string()),
			account_id: self.account_id.filter(|a| !a.is_empty()),
		})
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProviderSection {
	pub region: String,
	pub partition: String,
	pub account_id: Option<String>,
}
