// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Query resolution over "describe"-style listing APIs.
//!
//! A [`Query`] (optional identifiers plus server-side [`Filter`]s) is handed
//! to a [`ListingSource`]. [`find_all`] drains every page the source offers;
//! [`find_one`] does the same and then insists on exactly one record.
//!
//! ```ignore
//! let query = Query::new().with_id("ipam-0123");
//! let ipam = find_one(&lister, &query, &ReadOptions::default()).await?;
//! ```

pub mod error;
pub mod find;
pub mod query;
pub mod source;

pub use error::FindError;
pub use find::{find_all, find_all_where, find_one, find_one_where, single_result, ReadOptions};
pub use query::{Filter, Query};
pub use source::{ListingSource, Page};
pub use tokio_util::sync::CancellationToken;
