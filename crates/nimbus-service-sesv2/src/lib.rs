// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! SESv2 for the Nimbus provider: the `aws_sesv2_dedicated_ip_pool` data
//! source and schema declarations for the managed SESv2 resource types.

pub mod client;
pub mod dedicated_ip_pool;
pub mod error;
pub mod finder;
pub mod flatten;
pub mod resources;
pub mod service_package;
pub mod types;

pub use client::{Sesv2Api, Sesv2Client, SERVICE_NAME};
pub use dedicated_ip_pool::DedicatedIpPoolDataSource;
pub use error::Sesv2Error;
pub use finder::{find_dedicated_ip_pool, find_dedicated_ips, DedicatedIpLister, DedicatedIpPoolLister};
pub use service_package::Sesv2ServicePackage;
pub use types::{DedicatedIp, DedicatedIpPool, ScalingMode, WarmupStatus};
