// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::time::Duration;

use nimbus_finder::FindError;
use nimbus_schema::SchemaError;
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// User-facing failure of a data source read.
#[derive(Debug, Error)]
pub enum ReadError {
	#[error("no matching {kind} found")]
	NotFound { kind: String },

	#[error(
		"multiple {kind} matched; use additional constraints to reduce matches to a single {kind}"
	)]
	MultipleResults { kind: String, count: usize },

	#[error("reading {kind}: {source}")]
	Upstream {
		kind: String,
		#[source]
		source: BoxError,
	},

	#[error("reading {kind}: timed out after {after:?}")]
	Timeout { kind: String, after: Duration },

	#[error("reading {kind}: cancelled")]
	Cancelled { kind: String },

	#[error("reading {kind}: more than {limit} records returned")]
	LimitExceeded { kind: String, limit: usize },

	#[error(transparent)]
	Schema(#[from] SchemaError),
}

impl ReadError {
	/// Map the outcome of a singular lookup.
	pub fn singular<E>(kind: &str, err: FindError<E>) -> Self
	where
		E: std::error::Error + Send + Sync + 'static,
	{
		match err {
			FindError::NotFound { .. } => ReadError::NotFound {
				kind: kind.to_string(),
			},
			FindError::MultipleResultsFound { count, .. } => ReadError::MultipleResults {
				kind: kind.to_string(),
				count,
			},
			other => Self::bounded(kind, other),
		}
	}

	/// Map the outcome of a collection lookup. Cardinality errors never
	/// originate from `find_all`, so every remaining failure is upstream.
	pub fn collection<E>(kind: &str, err: FindError<E>) -> Self
	where
		E: std::error::Error + Send + Sync + 'static,
	{
		Self::bounded(kind, err)
	}

	pub fn upstream(kind: &str, source: impl Into<BoxError>) -> Self {
		ReadError::Upstream {
			kind: kind.to_string(),
			source: source.into(),
		}
	}

	fn bounded<E>(kind: &str, err: FindError<E>) -> Self
	where
		E: std::error::Error + Send + Sync + 'static,
	{
		let kind = kind.to_string();
		match err {
			FindError::Timeout { after, .. } => ReadError::Timeout { kind, after },
			FindError::Cancelled { .. } => ReadError::Cancelled { kind },
			FindError::LimitExceeded { limit, .. } => ReadError::LimitExceeded { kind, limit },
			other => ReadError::Upstream {
				kind,
				source: Box::new(other),
			},
		}
	}

	pub fn is_not_found(&self) -> bool {
		matches!(self, ReadError::NotFound { .. })
	}

	pub fn is_timeout(&self) -> bool {
		matches!(self, ReadError::Timeout { .. })
	}

	pub fn is_cancelled(&self) -> bool {
		matches!(self, ReadError::Cancelled { .. })
	}

	pub fn count(&self) -> Option<usize> {
		match self {
			ReadError::MultipleResults { count, .. } => Some(*count),
			_ => None,
		}
	}
}
