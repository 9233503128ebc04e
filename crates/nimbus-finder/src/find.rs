// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Singular and collection resolution over a [`ListingSource`].

use std::future::Future;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument, trace, warn};

use crate::error::FindError;
use crate::query::Query;
use crate::source::ListingSource;

/// Per-read bounds: deadline, cancellation and an optional record cap.
#[derive(Debug, Clone, Default)]
pub struct ReadOptions {
	pub timeout: Option<Duration>,
	pub cancellation: Option<CancellationToken>,
	/// Unbounded when `None`.
	pub max_records: Option<usize>,
}

impl ReadOptions {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = Some(timeout);
		self
	}

	pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
		self.cancellation = Some(token);
		self
	}

	pub fn with_max_records(mut self, max_records: usize) -> Self {
		self.max_records = Some(max_records);
		self
	}
}

/// List every record matching `query`, draining all pages.
///
/// Zero matches is an empty `Vec`, never an error.
#[instrument(skip(source, query, options), fields(query = %query))]
pub async fn find_all<S>(
	source: &S,
	query: &Query,
	options: &ReadOptions,
) -> Result<Vec<S::Record>, FindError<S::Error>>
where
	S: ListingSource + ?Sized,
{
	bounded(query, options, collect_pages(source, query, options.max_records)).await
}

/// Like [`find_all`], keeping only records accepted by `predicate`.
///
/// The predicate runs after every page has been collected.
pub async fn find_all_where<S, P>(
	source: &S,
	query: &Query,
	options: &ReadOptions,
	predicate: P,
) -> Result<Vec<S::Record>, FindError<S::Error>>
where
	S: ListingSource + ?Sized,
	P: Fn(&S::Record) -> bool,
{
	let records = find_all(source, query, options).await?;
	Ok(records.into_iter().filter(|r| predicate(r)).collect())
}

/// Resolve `query` to exactly one record.
///
/// All pages are drained before the cardinality check, so a record on a
/// later page still makes the result ambiguous.
pub async fn find_one<S>(
	source: &S,
	query: &Query,
	options: &ReadOptions,
) -> Result<S::Record, FindError<S::Error>>
where
	S: ListingSource + ?Sized,
{
	let records = find_all(source, query, options).await?;
	single_result(records, query)
}

/// Like [`find_one`], with a client-side predicate applied before the
/// cardinality check.
pub async fn find_one_where<S, P>(
	source: &S,
	query: &Query,
	options: &ReadOptions,
	predicate: P,
) -> Result<S::Record, FindError<S::Error>>
where
	S: ListingSource + ?Sized,
	P: Fn(&S::Record) -> bool,
{
	let records = find_all_where(source, query, options, predicate).await?;
	single_result(records, query)
}

/// Cardinality check: exactly one record, or `NotFound` / `MultipleResultsFound`.
pub fn single_result<T, E>(records: Vec<T>, query: &Query) -> Result<T, FindError<E>>
where
	E: std::error::Error + 'static,
{
	match records.len() {
		0 => Err(FindError::NotFound {
			query: query.to_string(),
		}),
		1 => records.into_iter().next().ok_or_else(|| FindError::NotFound {
			query: query.to_string(),
		}),
		count => Err(FindError::MultipleResultsFound {
			count,
			query: query.to_string(),
		}),
	}
}

async fn bounded<T, E, F>(query: &Query, options: &ReadOptions, work: F) -> Result<T, FindError<E>>
where
	E: std::error::Error + 'static,
	F: Future<Output = Result<T, FindError<E>>>,
{
	let timed = async {
		match options.timeout {
			Some(after) => match tokio::time::timeout(after, work).await {
				Ok(result) => result,
				Err(_) => {
					warn!(timeout_ms = after.as_millis(), "read deadline exceeded");
					Err(FindError::Timeout {
						query: query.to_string(),
						after,
					})
				}
			},
			None => work.await,
		}
	};

	match &options.cancellation {
		Some(token) => {
			tokio::select! {
				biased;
				_ = token.cancelled() => {
					debug!("read cancelled");
					Err(FindError::Cancelled { query: query.to_string() })
				}
				result = timed => result,
			}
		}
		None => timed.await,
	}
}

async fn collect_pages<S>(
	source: &S,
	query: &Query,
	max_records: Option<usize>,
) -> Result<Vec<S::Record>, FindError<S::Error>>
where
	S: ListingSource + ?Sized,
{
	let mut records = Vec::new();
	let mut next_token: Option<String> = None;
	let mut pages = 0usize;

	loop {
		let requested = next_token.clone();
		let page = match source.list_page(query, next_token.take()).await {
			Ok(page) => page,
			Err(err) if pages == 0 && source.is_not_found(&err) => {
				debug!(error = %err, "listing reported identifier not found");
				return Ok(Vec::new());
			}
			Err(err) => {
				return Err(FindError::Upstream {
					query: query.to_string(),
					source: err,
				});
			}
		};

		pages += 1;
		trace!(page = pages, items = page.items.len(), "received page");
		records.extend(page.items);

		if let Some(limit) = max_records {
			if records.len() > limit {
				return Err(FindError::LimitExceeded {
					limit,
					query: query.to_string(),
				});
			}
		}

		match page.next_token {
			Some(token) if token.is_empty() => break,
			Some(token) if requested.as_deref() == Some(token.as_str()) => {
				warn!(token = %token, "listing returned a repeated continuation token, stopping");
				break;
			}
			Some(token) => next_token = Some(token),
			None => break,
		}
	}

	debug!(pages, count = records.len(), "listing exhausted");
	Ok(records)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::query::Filter;
	use crate::source::Page;
	use async_trait::async_trait;
	use std::sync::atomic::{AtomicUsize, Ordering};
	use std::sync::Mutex;

	#[derive(Debug, thiserror::Error)]
	enum MockError {
		#[error("throttled")]
		Throttled,
		#[error("identifier not found")]
		Missing,
	}

	/// Serves fixed pages; token `"<n>"` selects page `n`.
	struct PagedSource {
		pages: Vec<Vec<&'static str>>,
		calls: AtomicUsize,
		seen_queries: Mutex<Vec<Query>>,
		fail_on_page: Option<(usize, fn() -> MockError)>,
		delay: Option<Duration>,
	}

	impl PagedSource {
		fn new(pages: Vec<Vec<&'static str>>) -> Self {
			Self {
				pages,
				calls: AtomicUsize::new(0),
				seen_queries: Mutex::new(Vec::new()),
				fail_on_page: None,
				delay: None,
			}
		}

		fn failing_on(mut self, page: usize, err: fn() -> MockError) -> Self {
			self.fail_on_page = Some((page, err));
			self
		}

		fn slow(mut self, delay: Duration) -> Self {
			self.delay = Some(delay);
			self
		}

		fn calls(&self) -> usize {
			self.calls.load(Ordering::SeqCst)
		}
	}

	#[async_trait]
	impl ListingSource for PagedSource {
		type Record = &'static str;
		type Error = MockError;

		async fn list_page(
			&self,
			query: &Query,
			next_token: Option<String>,
		) -> Result<Page<&'static str>, MockError> {
			self.calls.fetch_add(1, Ordering::SeqCst);
			self.seen_queries.lock().unwrap().push(query.clone());
			if let Some(delay) = self.delay {
				tokio::time::sleep(delay).await;
			}

			let index: usize = next_token.map(|t| t.parse().unwrap()).unwrap_or(0);
			if let Some((page, err)) = self.fail_on_page {
				if page == index {
					return Err(err());
				}
			}

			let items = self.pages.get(index).cloned().unwrap_or_default();
			let next = (index + 1 < self.pages.len()).then(|| (index + 1).to_string());
			Ok(Page::new(items, next))
		}

		fn is_not_found(&self, error: &MockError) -> bool {
			matches!(error, MockError::Missing)
		}
	}

	#[tokio::test]
	async fn find_one_returns_single_record() {
		let source = PagedSource::new(vec![vec!["ipam-0123"]]);
		let query = Query::new().with_id("ipam-0123");

		let record = find_one(&source, &query, &ReadOptions::default()).await.unwrap();

		assert_eq!(record, "ipam-0123");
		assert_eq!(source.seen_queries.lock().unwrap()[0], query);
	}

	#[tokio::test]
	async fn find_one_zero_records_is_not_found() {
		let source = PagedSource::new(vec![vec![]]);
		let query = Query::new().with_filter(Filter::new("description", ["*none*"]));

		let err = find_one(&source, &query, &ReadOptions::default()).await.unwrap_err();

		assert!(err.is_not_found());
	}

	#[tokio::test]
	async fn find_all_zero_records_is_empty() {
		let source = PagedSource::new(vec![vec![]]);
		let query = Query::new().with_filter(Filter::new("description", ["*none*"]));

		let records = find_all(&source, &query, &ReadOptions::default()).await.unwrap();

		assert!(records.is_empty());
	}

	#[tokio::test]
	async fn empty_query_with_two_records_is_ambiguous() {
		let source = PagedSource::new(vec![vec!["ipam-a", "ipam-b"]]);
		let query = Query::new();

		let err = find_one(&source, &query, &ReadOptions::default()).await.unwrap_err();
		assert!(err.is_multiple_results());
		assert_eq!(err.count(), Some(2));

		let all = find_all(&source, &query, &ReadOptions::default()).await.unwrap();
		assert_eq!(all, vec!["ipam-a", "ipam-b"]);
	}

	#[tokio::test]
	async fn identical_records_are_still_ambiguous() {
		let source = PagedSource::new(vec![vec!["ipam-a", "ipam-a"]]);

		let err = find_one(&source, &Query::new(), &ReadOptions::default())
			.await
			.unwrap_err();

		assert_eq!(err.count(), Some(2));
	}

	#[tokio::test]
	async fn all_pages_drained_before_cardinality_check() {
		let source = PagedSource::new(vec![vec!["ipam-a"], vec![], vec!["ipam-b"]]);

		let err = find_one(&source, &Query::new(), &ReadOptions::default())
			.await
			.unwrap_err();

		assert_eq!(err.count(), Some(2));
		assert_eq!(source.calls(), 3);
	}

	#[tokio::test]
	async fn single_record_on_later_page_is_found() {
		let source = PagedSource::new(vec![vec![], vec![], vec!["ipam-late"]]);

		let record = find_one(&source, &Query::new(), &ReadOptions::default())
			.await
			.unwrap();

		assert_eq!(record, "ipam-late");
	}

	#[tokio::test]
	async fn upstream_failure_is_passed_through() {
		let source = PagedSource::new(vec![vec!["a"], vec!["b"]]).failing_on(1, || MockError::Throttled);
		let query = Query::new().with_id("ipam-1");

		let err = find_all(&source, &query, &ReadOptions::default()).await.unwrap_err();

		assert!(matches!(err.upstream(), Some(MockError::Throttled)));
		assert_eq!(err.query(), "ids=[ipam-1]");
	}

	#[tokio::test]
	async fn not_found_signal_on_first_page_is_empty_set() {
		let source = PagedSource::new(vec![vec!["x"]]).failing_on(0, || MockError::Missing);
		let query = Query::new().with_id("ipam-gone");

		assert!(find_all(&source, &query, &ReadOptions::default())
			.await
			.unwrap()
			.is_empty());
		assert!(find_one(&source, &query, &ReadOptions::default())
			.await
			.unwrap_err()
			.is_not_found());
	}

	#[tokio::test]
	async fn predicate_applies_before_cardinality() {
		let source = PagedSource::new(vec![vec!["ipam-a", "ipam-b"]]);

		let record = find_one_where(&source, &Query::new(), &ReadOptions::default(), |r| {
			r.ends_with('b')
		})
		.await
		.unwrap();

		assert_eq!(record, "ipam-b");
	}

	#[tokio::test]
	async fn record_cap_is_enforced() {
		let source = PagedSource::new(vec![vec!["a", "b"], vec!["c"]]);
		let options = ReadOptions::new().with_max_records(2);

		let err = find_all(&source, &Query::new(), &options).await.unwrap_err();

		assert!(matches!(err, FindError::LimitExceeded { limit: 2, .. }));
	}

	#[tokio::test]
	async fn deadline_yields_timeout() {
		let source = PagedSource::new(vec![vec!["a"]]).slow(Duration::from_secs(5));
		let options = ReadOptions::new().with_timeout(Duration::from_millis(20));

		let err = find_one(&source, &Query::new(), &options).await.unwrap_err();

		assert!(matches!(err, FindError::Timeout { .. }));
		assert!(!err.is_not_found());
	}

	#[tokio::test]
	async fn cancellation_aborts_in_flight_call() {
		let source = PagedSource::new(vec![vec!["a"]]).slow(Duration::from_secs(5));
		let token = CancellationToken::new();
		let options = ReadOptions::new().with_cancellation(token.clone());

		let canceller = tokio::spawn(async move {
			tokio::time::sleep(Duration::from_millis(10)).await;
			token.cancel();
		});

		let err = find_one(&source, &Query::new(), &options).await.unwrap_err();
		canceller.await.unwrap();

		assert!(matches!(err, FindError::Cancelled { .. }));
	}

	#[tokio::test]
	async fn already_cancelled_token_short_circuits() {
		let source = PagedSource::new(vec![vec!["a"]]);
		let token = CancellationToken::new();
		token.cancel();

		let err = find_all(&source, &Query::new(), &ReadOptions::new().with_cancellation(token))
			.await
			.unwrap_err();

		assert!(matches!(err, FindError::Cancelled { .. }));
	}

	#[test]
	fn single_result_cardinality() {
		let query = Query::new();
		assert_eq!(single_result::<_, MockError>(vec![7], &query).unwrap(), 7);
		assert!(single_result::<i32, MockError>(vec![], &query)
			.unwrap_err()
			.is_not_found());
		assert_eq!(
			single_result::<_, MockError>(vec![1, 2, 3], &query)
				.unwrap_err()
				.count(),
			Some(3)
		);
	}
}
