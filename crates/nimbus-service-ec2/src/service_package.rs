// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use nimbus_provider_core::{DataSourceRegistration, ResourceTags, ServicePackage};

use crate::{ipam, ipams};

pub struct Ec2ServicePackage;

impl ServicePackage for Ec2ServicePackage {
	fn service_package_name(&self) -> &'static str {
		"ec2"
	}

	fn data_sources(&self) -> Vec<DataSourceRegistration> {
		vec![
			DataSourceRegistration {
				type_name: ipam::TYPE_NAME,
				name: Some("IPAM"),
				factory: ipam::new,
				tags: Some(ResourceTags::default()),
			},
			DataSourceRegistration {
				type_name: ipams::TYPE_NAME,
				name: Some("IPAMs"),
				factory: ipams::new,
				tags: None,
			},
		]
	}
}
