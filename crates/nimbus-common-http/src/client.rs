// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Unreachable endpoints fail fast; whole-read deadlines are enforced above
/// the client.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// The client shared by every service package.
pub fn new_client() -> Result<Client, reqwest::Error> {
	builder().build()
}

/// A builder preset with the Nimbus User-Agent and connect timeout, for
/// callers that need further customization.
pub fn builder() -> ClientBuilder {
	Client::builder()
		.user_agent(user_agent())
		.connect_timeout(CONNECT_TIMEOUT)
}

/// `nimbus/{version} ({os}-{arch})`
pub fn user_agent() -> String {
	format!(
		"nimbus/{} ({}-{})",
		env!("CARGO_PKG_VERSION"),
		std::env::consts::OS,
		std::env::consts::ARCH
	)
}
