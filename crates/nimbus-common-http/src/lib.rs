// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP utilities for Nimbus service clients.
//!
//! This crate provides:
//! - A pre-configured HTTP client with consistent User-Agent header
//! - Retry logic with exponential backoff for transient failures
//! - [`wire_enum!`] for string enums that tolerate values added upstream

mod client;
mod retry;
mod wire;

pub use client::{builder, new_client, user_agent};
pub use retry::{is_retryable_status, retry, RetryConfig, RetryableError};
