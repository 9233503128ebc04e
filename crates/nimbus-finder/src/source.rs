// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use async_trait::async_trait;

use crate::query::Query;

/// One page of records from a listing call.
#[derive(Debug, Clone)]
pub struct Page<T> {
	pub items: Vec<T>,
	/// Continuation token; `None` (or empty) marks the last page.
	pub next_token: Option<String>,
}

impl<T> Page<T> {
	pub fn new(items: Vec<T>, next_token: Option<String>) -> Self {
		Self { items, next_token }
	}

	/// A page with no continuation.
	pub fn last(items: Vec<T>) -> Self {
		Self::new(items, None)
	}
}

/// A listing capability: translate a [`Query`] into one native list call.
///
/// Implementations wrap a service client. They own retries for transient
/// failures; the finder calls each page exactly once.
#[async_trait]
pub trait ListingSource: Send + Sync {
	type Record: Send;
	type Error: std::error::Error + Send + Sync + 'static;

	/// Fetch the page following `next_token` (`None` for the first page).
	async fn list_page(
		&self,
		query: &Query,
		next_token: Option<String>,
	) -> Result<Page<Self::Record>, Self::Error>;

	/// Whether `error` means "the requested identifier does not exist".
	///
	/// Such an error on the first page resolves to an empty result set.
	fn is_not_found(&self, _error: &Self::Error) -> bool {
		false
	}
}
