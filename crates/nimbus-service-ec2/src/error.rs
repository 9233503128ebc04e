// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for the EC2 API client.

use nimbus_common_http::RetryableError;
use thiserror::Error;

const THROTTLING_CODES: &[&str] = &[
	"Throttling",
	"ThrottlingException",
	"RequestLimitExceeded",
	"RequestThrottled",
	"RequestThrottledException",
	"ServiceUnavailable",
	"InternalError",
];

const IPAM_NOT_FOUND: &str = "InvalidIpamId.NotFound";

#[derive(Debug, Error)]
pub enum Ec2Error {
	/// Network-level error during HTTP communication.
	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),

	/// EC2 returned an error document.
	#[error("{code}: {message}")]
	Api {
		status: u16,
		code: String,
		message: String,
	},

	/// Unparseable response body.
	#[error("Invalid response from EC2: {0}")]
	InvalidResponse(String),
}

impl Ec2Error {
	pub fn code(&self) -> Option<&str> {
		match self {
			Ec2Error::Api { code, .. } => Some(code),
			_ => None,
		}
	}

	/// Only an unknown IPAM identifier; other `*.NotFound` codes are failures.
	pub fn is_not_found(&self) -> bool {
		self.code() == Some(IPAM_NOT_FOUND)
	}

	pub fn is_throttling(&self) -> bool {
		self.code().is_some_and(|c| THROTTLING_CODES.contains(&c))
	}
}

impl RetryableError for Ec2Error {
	fn is_retryable(&self) -> bool {
		match self {
			Ec2Error::Network(e) => e.is_retryable(),
			Ec2Error::Api { status, .. } => {
				self.is_throttling() || *status == 429 || *status >= 500
			}
			Ec2Error::InvalidResponse(_) => false,
		}
	}
}
