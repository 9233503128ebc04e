// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use async_trait::async_trait;
use nimbus_finder::{find_all, find_one, FindError, ListingSource, Page, Query, ReadOptions};

use crate::client::Ec2Api;
use crate::error::Ec2Error;
use crate::filters::to_wire;
use crate::types::{DescribeIpamsInput, Ipam};

/// `DescribeIpams` as a paged listing source.
pub struct IpamLister<'a, A: ?Sized> {
	api: &'a A,
	page_size: Option<i32>,
}

impl<'a, A: Ec2Api + ?Sized> IpamLister<'a, A> {
	pub fn new(api: &'a A) -> Self {
		Self {
			api,
			page_size: None,
		}
	}

	pub fn with_page_size(mut self, page_size: i32) -> Self {
		self.page_size = Some(page_size);
		self
	}
}

#[async_trait]
impl<A: Ec2Api + ?Sized> ListingSource for IpamLister<'_, A> {
	type Record = Ipam;
	type Error = Ec2Error;

	async fn list_page(
		&self,
		query: &Query,
		next_token: Option<String>,
	) -> Result<Page<Ipam>, Ec2Error> {
		let input = DescribeIpamsInput {
			ipam_ids: query.ids().to_vec(),
			filters: to_wire(query.filters()),
			// EC2 rejects a page size combined with explicit identifiers.
			max_results: self.page_size.filter(|_| query.ids().is_empty()),
			next_token,
		};
		let output = self.api.describe_ipams(&input).await?;
		Ok(Page::new(output.ipams, output.next_token))
	}

	fn is_not_found(&self, error: &Ec2Error) -> bool {
		error.is_not_found()
	}
}

pub async fn find_ipams<A: Ec2Api + ?Sized>(
	api: &A,
	query: &Query,
	options: &ReadOptions,
) -> Result<Vec<Ipam>, FindError<Ec2Error>> {
	find_all(&IpamLister::new(api), query, options).await
}

pub async fn find_ipam<A: Ec2Api + ?Sized>(
	api: &A,
	query: &Query,
	options: &ReadOptions,
) -> Result<Ipam, FindError<Ec2Error>> {
	find_one(&IpamLister::new(api), query, options).await
}
