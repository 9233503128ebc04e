// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! EC2 IPAM data sources: `aws_vpc_ipam` and `aws_vpc_ipams`.

pub mod client;
pub mod error;
pub mod filters;
pub mod finder;
pub mod flatten;
pub mod ipam;
pub mod ipams;
pub mod service_package;
pub mod types;

pub use client::{Ec2Api, Ec2Client, SERVICE_NAME};
pub use error::Ec2Error;
pub use filters::{custom_filters_schema, new_custom_filter_list};
pub use finder::{find_ipam, find_ipams, IpamLister};
pub use flatten::{expand_ipam, key_value_tags};
pub use ipam::IpamDataSource;
pub use ipams::{ipam_element_schema, IpamsDataSource};
pub use service_package::Ec2ServicePackage;
pub use types::{Ipam, IpamState, IpamTier};
