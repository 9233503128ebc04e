// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use nimbus_common_http::RetryableError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Sesv2Error {
	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),

	#[error("{code}: {message}")]
	Api {
		status: u16,
		code: String,
		message: String,
	},

	#[error("Invalid response from SESv2: {0}")]
	InvalidResponse(String),

	#[error("Invalid SESv2 endpoint: {0}")]
	InvalidEndpoint(String),
}

impl Sesv2Error {
	pub fn code(&self) -> Option<&str> {
		match self {
			Sesv2Error::Api { code, .. } => Some(code),
			_ => None,
		}
	}

	pub fn is_not_found(&self) -> bool {
		self.code() == Some("NotFoundException")
	}

	pub fn is_throttling(&self) -> bool {
		matches!(self.code(), Some("TooManyRequestsException" | "ThrottlingException"))
	}
}

impl RetryableError for Sesv2Error {
	fn is_retryable(&self) -> bool {
		match self {
			Sesv2Error::Network(e) => e.is_retryable(),
			Sesv2Error::Api { status, .. } => {
				self.is_throttling() || *status == 429 || *status >= 500
			}
			Sesv2Error::InvalidResponse(_) | Sesv2Error::InvalidEndpoint(_) => false,
		}
	}
}
