// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::time::Duration;

use thiserror::Error;

/// Errors from resolving a query against a listing source.
///
/// `E` is the listing source's own error type, carried unchanged in
/// [`FindError::Upstream`].
#[derive(Debug, Error)]
pub enum FindError<E>
where
	E: std::error::Error + 'static,
{
	/// A singular query matched nothing.
	#[error("no records matched query ({query})")]
	NotFound { query: String },

	/// A singular query matched more than one record.
	#[error("query ({query}) matched {count} records, expected exactly one")]
	MultipleResultsFound { count: usize, query: String },

	/// The listing call failed.
	#[error("listing failed for query ({query}): {source}")]
	Upstream {
		query: String,
		#[source]
		source: E,
	},

	#[error("query ({query}) timed out after {after:?}")]
	Timeout { query: String, after: Duration },

	#[error("query ({query}) was cancelled")]
	Cancelled { query: String },

	/// More records than the configured cap were returned.
	#[error("query ({query}) returned more than {limit} records")]
	LimitExceeded { limit: usize, query: String },
}

impl<E> FindError<E>
where
	E: std::error::Error + 'static,
{
	pub fn is_not_found(&self) -> bool {
		matches!(self, FindError::NotFound { .. })
	}

	pub fn is_multiple_results(&self) -> bool {
		matches!(self, FindError::MultipleResultsFound { .. })
	}

	/// The number of matches for an ambiguous singular query.
	pub fn count(&self) -> Option<usize> {
		match self {
			FindError::MultipleResultsFound { count, .. } => Some(*count),
			_ => None,
		}
	}

	/// The rendered query this error belongs to.
	pub fn query(&self) -> &str {
		match self {
			FindError::NotFound { query }
			| FindError::MultipleResultsFound { query, .. }
			| FindError::Upstream { query, .. }
			| FindError::Timeout { query, .. }
			| FindError::Cancelled { query }
			| FindError::LimitExceeded { query, .. } => query,
		}
	}

	/// The listing source's error, if this is an upstream failure.
	pub fn upstream(&self) -> Option<&E> {
		match self {
			FindError::Upstream { source, .. } => Some(source),
			_ => None,
		}
	}
}
