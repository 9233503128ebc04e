// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Per-service base URL overrides.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EndpointsConfigLayer {
	pub ec2: Option<String>,
	pub sesv2: Option<String>,
}

impl EndpointsConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.ec2.is_some() {
			self.ec2 = other.ec2;
		}
		if other.sesv2.is_some() {
			self.sesv2 = other.sesv2;
		}
	}

	pub fn finalize(self) -> Result<EndpointsConfig, ConfigError> {
		let mut overrides = BTreeMap::new();
		for (service, url) in [("ec2", self.ec2), ("sesv2", self.sesv2)] {
			let Some(url) = url.filter(|u| !u.is_empty()) else {
				continue;
			};
			if !(url.starts_with("http://") || url.starts_with("https://")) {
				return Err(ConfigError::InvalidValue {
					key: format!("endpoints.{service}"),
					message: format!("'{url}' must start with http:// or https://"),
				});
			}
			overrides.insert(service.to_string(), url);
		}
		Ok(EndpointsConfig { overrides })
	}
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EndpointsConfig {
	/// Service package name to base URL.
	pub overrides: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_overrides_keyed_by_service() {
		let config = EndpointsConfigLayer {
			ec2: Some("http://localhost:4566".to_string()),
			sesv2: None,
		}
		.finalize()
		.unwrap();
		assert_eq!(
			config.overrides.get("ec2").map(String::as_str),
			Some("http://localhost:4566")
		);
		assert!(!config.overrides.contains_key("sesv2"));
	}

	#[test]
	fn test_rejects_url_without_scheme() {
		let err = EndpointsConfigLayer {
			ec2: None,
			sesv2: Some("email.local".to_string()),
		}
		.finalize()
		.unwrap_err();
		assert!(err.to_string().contains("endpoints.sesv2"));
	}
}
