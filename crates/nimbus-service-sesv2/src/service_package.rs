// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use nimbus_provider_core::{
	DataSourceRegistration, ResourceRegistration, ResourceTags, ServicePackage,
};

use crate::{dedicated_ip_pool, resources};

const TAGGED_BY_ARN: Option<ResourceTags> = Some(ResourceTags::by("arn"));

pub struct Sesv2ServicePackage;

impl ServicePackage for Sesv2ServicePackage {
	fn service_package_name(&self) -> &'static str {
		"sesv2"
	}

	fn data_sources(&self) -> Vec<DataSourceRegistration> {
		vec![DataSourceRegistration {
			type_name: dedicated_ip_pool::TYPE_NAME,
			name: Some(dedicated_ip_pool::KIND),
			factory: dedicated_ip_pool::new,
			tags: None,
		}]
	}

	fn resources(&self) -> Vec<ResourceRegistration> {
		vec![
			ResourceRegistration {
				type_name: "aws_sesv2_configuration_set",
				name: Some("Configuration Set"),
				factory: resources::configuration_set,
				tags: TAGGED_BY_ARN,
			},
			ResourceRegistration {
				type_name: "aws_sesv2_configuration_set_event_destination",
				name: None,
				factory: resources::configuration_set_event_destination,
				tags: None,
			},
			ResourceRegistration {
				type_name: "aws_sesv2_contact_list",
				name: Some("Contact List"),
				factory: resources::contact_list,
				tags: TAGGED_BY_ARN,
			},
			ResourceRegistration {
				type_name: "aws_sesv2_dedicated_ip_assignment",
				name: None,
				factory: resources::dedicated_ip_assignment,
				tags: None,
			},
			ResourceRegistration {
				type_name: "aws_sesv2_dedicated_ip_pool",
				name: Some("Dedicated IP Pool"),
				factory: resources::dedicated_ip_pool,
				tags: TAGGED_BY_ARN,
			},
			ResourceRegistration {
				type_name: "aws_sesv2_email_identity",
				name: Some("Email Identity"),
				factory: resources::email_identity,
				tags: TAGGED_BY_ARN,
			},
			ResourceRegistration {
				type_name: "aws_sesv2_email_identity_feedback_attributes",
				name: None,
				factory: resources::email_identity_feedback_attributes,
				tags: None,
			},
			ResourceRegistration {
				type_name: "aws_sesv2_email_identity_mail_from_attributes",
				name: None,
				factory: resources::email_identity_mail_from_attributes,
				tags: None,
			},
		]
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use nimbus_provider_core::Registry;

	#[test]
	fn registers_data_source_and_eight_resources() {
		let mut registry = Registry::default();
		registry.register(&Sesv2ServicePackage).unwrap();

		assert_eq!(registry.data_source_types(), vec!["aws_sesv2_dedicated_ip_pool"]);
		assert_eq!(registry.resource_types().len(), 8);
		assert_eq!(
			registry.data_source("aws_sesv2_dedicated_ip_pool").unwrap().name,
			Some(crate::dedicated_ip_pool::KIND)
		);

		let pool = registry.resource("aws_sesv2_dedicated_ip_pool").unwrap();
		assert_eq!(pool.tags, Some(ResourceTags::by("arn")));
		assert_eq!(pool.name, Some("Dedicated IP Pool"));
		assert!(registry
			.resource("aws_sesv2_dedicated_ip_assignment")
			.unwrap()
			.tags
			.is_none());
	}

	#[test]
	fn data_source_and_resource_share_a_type_name() {
		let package = Sesv2ServicePackage;
		let data_source = package.data_sources()[0].type_name;
		assert!(package
			.resources()
			.iter()
			.any(|r| r.type_name == data_source));
	}
}
