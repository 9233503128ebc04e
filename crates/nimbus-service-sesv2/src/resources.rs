// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Managed SESv2 resource types. Only their schemas are declared here.

use nimbus_provider_core::Resource;
use nimbus_schema::{tags_all_schema, tags_schema, Attribute, Schema};

/// A resource whose only behavior is its declared schema.
pub struct SchemaResource(fn() -> Schema);

impl Resource for SchemaResource {
	fn schema(&self) -> Schema {
		(self.0)()
	}
}

fn tagged(schema: Schema) -> Schema {
	schema
		.attribute("arn", Attribute::string().computed())
		.attribute("tags", tags_schema())
		.attribute("tags_all", tags_all_schema())
}

pub fn configuration_set() -> Box<dyn Resource> {
	Box::new(SchemaResource(|| {
		tagged(
			Schema::new()
				.attribute("configuration_set_name", Attribute::string().required())
				.attribute(
					"delivery_options",
					Attribute::block_list(
						Schema::new()
							.attribute("sending_pool_name", Attribute::string().optional())
							.attribute("tls_policy", Attribute::string().optional().computed()),
					)
					.optional()
					.max_items(1),
				)
				.attribute(
					"reputation_options",
					Attribute::block_list(
						Schema::new()
							.attribute("reputation_metrics_enabled", Attribute::bool().optional())
							.attribute("last_fresh_start", Attribute::string().computed()),
					)
					.optional()
					.computed()
					.max_items(1),
				)
				.attribute(
					"sending_options",
					Attribute::block_list(
						Schema::new().attribute("sending_enabled", Attribute::bool().optional()),
					)
					.optional()
					.computed()
					.max_items(1),
				),
		)
	}))
}

pub fn configuration_set_event_destination() -> Box<dyn Resource> {
	Box::new(SchemaResource(|| {
		Schema::new()
			.attribute("configuration_set_name", Attribute::string().required())
			.attribute("event_destination_name", Attribute::string().required())
			.attribute(
				"event_destination",
				Attribute::block_list(
					Schema::new()
						.attribute("enabled", Attribute::bool().optional())
						.attribute("matching_event_types", Attribute::string_set().required())
						.attribute(
							"sns_destination",
							Attribute::block_list(
								Schema::new().attribute("topic_arn", Attribute::string().required()),
							)
							.optional()
							.max_items(1),
						),
				)
				.required()
				.max_items(1),
			)
	}))
}

pub fn contact_list() -> Box<dyn Resource> {
	Box::new(SchemaResource(|| {
		tagged(
			Schema::new()
				.attribute("contact_list_name", Attribute::string().required())
				.attribute("description", Attribute::string().optional())
				.attribute("created_timestamp", Attribute::string().computed())
				.attribute("last_updated_timestamp", Attribute::string().computed())
				.attribute(
					"topic",
					Attribute::block_list(
						Schema::new()
							.attribute("default_subscription_status", Attribute::string().required())
							.attribute("description", Attribute::string().optional())
							.attribute("display_name", Attribute::string().required())
							.attribute("topic_name", Attribute::string().required()),
					)
					.optional(),
				),
		)
	}))
}

pub fn dedicated_ip_assignment() -> Box<dyn Resource> {
	Box::new(SchemaResource(|| {
		Schema::new()
			.attribute("ip", Attribute::string().required())
			.attribute("destination_pool_name", Attribute::string().required())
	}))
}

pub fn dedicated_ip_pool() -> Box<dyn Resource> {
	Box::new(SchemaResource(|| {
		tagged(
			Schema::new()
				.attribute("pool_name", Attribute::string().required())
				.attribute("scaling_mode", Attribute::string().optional().computed()),
		)
	}))
}

pub fn email_identity() -> Box<dyn Resource> {
	Box::new(SchemaResource(|| {
		tagged(
			Schema::new()
				.attribute("email_identity", Attribute::string().required())
				.attribute("configuration_set_name", Attribute::string().optional())
				.attribute("identity_type", Attribute::string().computed())
				.attribute("verified_for_sending_status", Attribute::bool().computed())
				.attribute(
					"dkim_signing_attributes",
					Attribute::block_list(
						Schema::new()
							.attribute("domain_signing_private_key", Attribute::string().optional().sensitive())
							.attribute("domain_signing_selector", Attribute::string().optional())
							.attribute("next_signing_key_length", Attribute::string().optional())
							.attribute("status", Attribute::string().computed())
							.attribute("tokens", Attribute::string_list().computed()),
					)
					.optional()
					.computed()
					.max_items(1),
				),
		)
	}))
}

pub fn email_identity_feedback_attributes() -> Box<dyn Resource> {
	Box::new(SchemaResource(|| {
		Schema::new()
			.attribute("email_identity", Attribute::string().required())
			.attribute("email_forwarding_enabled", Attribute::bool().optional())
	}))
}

pub fn email_identity_mail_from_attributes() -> Box<dyn Resource> {
	Box::new(SchemaResource(|| {
		Schema::new()
			.attribute("email_identity", Attribute::string().required())
			.attribute("behavior_on_mx_failure", Attribute::string().optional())
			.attribute("mail_from_domain", Attribute::string().optional())
	}))
}
