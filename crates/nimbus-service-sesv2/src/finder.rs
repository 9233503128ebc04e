// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use async_trait::async_trait;
use nimbus_finder::{find_all, find_one, FindError, ListingSource, Page, Query, ReadOptions};

use crate::client::Sesv2Api;
use crate::error::Sesv2Error;
use crate::types::{DedicatedIp, DedicatedIpPool};

/// `GetDedicatedIpPool` seen as a listing keyed by the query's identifiers.
/// Each identifier is one point lookup; a missing pool contributes nothing.
/// An empty name matches nothing and is never sent, since the bare
/// collection path is a different operation.
pub struct DedicatedIpPoolLister<'a, A: ?Sized> {
	api: &'a A,
}

impl<'a, A: Sesv2Api + ?Sized> DedicatedIpPoolLister<'a, A> {
	pub fn new(api: &'a A) -> Self {
		Self { api }
	}
}

#[async_trait]
impl<A: Sesv2Api + ?Sized> ListingSource for DedicatedIpPoolLister<'_, A> {
	type Record = DedicatedIpPool;
	type Error = Sesv2Error;

	async fn list_page(
		&self,
		query: &Query,
		_next_token: Option<String>,
	) -> Result<Page<DedicatedIpPool>, Sesv2Error> {
		let mut pools = Vec::with_capacity(query.ids().len());
		for name in query.ids().iter().filter(|name| !name.is_empty()) {
			match self.api.get_dedicated_ip_pool(name).await {
				Ok(pool) => pools.push(pool),
				Err(e) if e.is_not_found() => {}
				Err(e) => return Err(e),
			}
		}
		Ok(Page::last(pools))
	}

	fn is_not_found(&self, error: &Sesv2Error) -> bool {
		error.is_not_found()
	}
}

/// `GetDedicatedIps` for one pool.
pub struct DedicatedIpLister<'a, A: ?Sized> {
	api: &'a A,
	pool_name: String,
	page_size: Option<i32>,
}

impl<'a, A: Sesv2Api + ?Sized> DedicatedIpLister<'a, A> {
	pub fn new(api: &'a A, pool_name: impl Into<String>) -> Self {
		Self {
			api,
			pool_name: pool_name.into(),
			page_size: None,
		}
	}

	pub fn with_page_size(mut self, page_size: i32) -> Self {
		self.page_size = Some(page_size);
		self
	}
}

#[async_trait]
impl<A: Sesv2Api + ?Sized> ListingSource for DedicatedIpLister<'_, A> {
	type Record = DedicatedIp;
	type Error = Sesv2Error;

	async fn list_page(
		&self,
		_query: &Query,
		next_token: Option<String>,
	) -> Result<Page<DedicatedIp>, Sesv2Error> {
		let output = self
			.api
			.list_dedicated_ips(&self.pool_name, next_token.as_deref(), self.page_size)
			.await?;
		Ok(Page::new(output.dedicated_ips, output.next_token))
	}

	fn is_not_found(&self, error: &Sesv2Error) -> bool {
		error.is_not_found()
	}
}

pub async fn find_dedicated_ip_pool<A: Sesv2Api + ?Sized>(
	api: &A,
	pool_name: &str,
	options: &ReadOptions,
) -> Result<DedicatedIpPool, FindError<Sesv2Error>> {
	let query = Query::new().with_id(pool_name);
	find_one(&DedicatedIpPoolLister::new(api), &query, options).await
}

pub async fn find_dedicated_ips<A: Sesv2Api + ?Sized>(
	api: &A,
	pool_name: &str,
	options: &ReadOptions,
) -> Result<Vec<DedicatedIp>, FindError<Sesv2Error>> {
	find_all(&DedicatedIpLister::new(api, pool_name), &Query::new(), options).await
}

#[cfg(test)]
pub(crate) mod tests {
	use super::*;
	use crate::types::{GetDedicatedIpsOutput, ScalingMode, Tag, WarmupStatus};
	use std::collections::BTreeMap;
	use std::sync::Mutex;

	/// In-memory SESv2: pools by name, IP pages served in order, tags by ARN.
	#[derive(Default)]
	pub(crate) struct FakeSesv2 {
		pub(crate) pools: BTreeMap<String, DedicatedIpPool>,
		pub(crate) ip_pages: Mutex<Vec<GetDedicatedIpsOutput>>,
		pub(crate) tags: BTreeMap<String, Vec<Tag>>,
		pub(crate) tag_error: Option<u16>,
		pub(crate) ip_requests: Mutex<Vec<(String, Option<String>)>>,
		pub(crate) page_sizes: Mutex<Vec<Option<i32>>>,
		pub(crate) pool_requests: Mutex<Vec<String>>,
		pub(crate) tag_requests: Mutex<Vec<String>>,
	}

	impl FakeSesv2 {
		pub(crate) fn with_pool(name: &str, mode: ScalingMode) -> Self {
			let mut fake = Self::default();
			fake.pools.insert(
				name.to_string(),
				DedicatedIpPool {
					pool_name: Some(name.to_string()),
					scaling_mode: Some(mode),
				},
			);
			fake
		}

		pub(crate) fn with_ip_pages(self, pages: Vec<GetDedicatedIpsOutput>) -> Self {
			*self.ip_pages.lock().unwrap() = pages.into_iter().rev().collect();
			self
		}
	}

	fn not_found() -> Sesv2Error {
		Sesv2Error::Api {
			status: 404,
			code: "NotFoundException".to_string(),
			message: "not found".to_string(),
		}
	}

	#[async_trait]
	impl Sesv2Api for FakeSesv2 {
		async fn get_dedicated_ip_pool(&self, pool_name: &str) -> Result<DedicatedIpPool, Sesv2Error> {
			self.pool_requests.lock().unwrap().push(pool_name.to_string());
			self.pools.get(pool_name).cloned().ok_or_else(not_found)
		}

		async fn list_dedicated_ips(
			&self,
			pool_name: &str,
			next_token: Option<&str>,
			page_size: Option<i32>,
		) -> Result<GetDedicatedIpsOutput, Sesv2Error> {
			self.page_sizes.lock().unwrap().push(page_size);
			self.ip_requests
				.lock()
				.unwrap()
				.push((pool_name.to_string(), next_token.map(str::to_string)));
			Ok(self.ip_pages.lock().unwrap().pop().unwrap_or_default())
		}

		async fn list_tags_for_resource(&self, resource_arn: &str) -> Result<Vec<Tag>, Sesv2Error> {
			self.tag_requests.lock().unwrap().push(resource_arn.to_string());
			if let Some(status) = self.tag_error {
				return Err(Sesv2Error::Api {
					status,
					code: "AccessDeniedException".to_string(),
					message: "denied".to_string(),
				});
			}
			Ok(self.tags.get(resource_arn).cloned().unwrap_or_default())
		}
	}

	pub(crate) fn ip(addr: &str, status: WarmupStatus, percentage: i32) -> DedicatedIp {
		DedicatedIp {
			ip: Some(addr.to_string()),
			warmup_status: Some(status),
			warmup_percentage: Some(percentage),
			pool_name: None,
		}
	}

	#[tokio::test]
	async fn pool_lookup_resolves_by_name() {
		let api = FakeSesv2::with_pool("marketing", ScalingMode::Managed);
		let pool = find_dedicated_ip_pool(&api, "marketing", &ReadOptions::default())
			.await
			.unwrap();
		assert_eq!(pool.scaling_mode, Some(ScalingMode::Managed));
	}

	#[tokio::test]
	async fn missing_pool_is_not_found() {
		let api = FakeSesv2::default();
		let err = find_dedicated_ip_pool(&api, "nope", &ReadOptions::default())
			.await
			.unwrap_err();
		assert!(err.is_not_found());
	}

	#[tokio::test]
	async fn dedicated_ips_follow_pages() {
		let api = FakeSesv2::with_pool("p", ScalingMode::Standard).with_ip_pages(vec![
			GetDedicatedIpsOutput {
				dedicated_ips: vec![ip("192.0.2.1", WarmupStatus::Done, 100)],
				next_token: Some("n1".to_string()),
			},
			GetDedicatedIpsOutput {
				dedicated_ips: vec![ip("192.0.2.2", WarmupStatus::InProgress, 20)],
				next_token: None,
			},
		]);

		let ips = find_dedicated_ips(&api, "p", &ReadOptions::default()).await.unwrap();
		assert_eq!(ips.len(), 2);
		let requests = api.ip_requests.lock().unwrap();
		assert_eq!(requests[0], ("p".to_string(), None));
		assert_eq!(requests[1], ("p".to_string(), Some("n1".to_string())));
	}

	#[tokio::test]
	async fn empty_pool_name_is_not_found_without_a_lookup() {
		let api = FakeSesv2::with_pool("marketing", ScalingMode::Standard);
		let err = find_dedicated_ip_pool(&api, "", &ReadOptions::default())
			.await
			.unwrap_err();
		assert!(err.is_not_found());
		assert!(api.pool_requests.lock().unwrap().is_empty());
	}

	#[tokio::test]
	async fn page_size_is_forwarded() {
		let api = FakeSesv2::with_pool("p", ScalingMode::Standard);
		let lister = DedicatedIpLister::new(&api, "p").with_page_size(25);
		find_all(&lister, &Query::new(), &ReadOptions::default())
			.await
			.unwrap();
		find_dedicated_ips(&api, "p", &ReadOptions::default())
			.await
			.unwrap();
		assert_eq!(*api.page_sizes.lock().unwrap(), vec![Some(25), None]);
	}
}
