// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::collections::BTreeMap;

use thiserror::Error;
use tracing::debug;

use crate::data_source::{DataSource, DataSourceFactory, Resource, ResourceFactory};

/// Tagging metadata for a registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResourceTags {
	/// Attribute holding the identifier used for tag API calls.
	pub identifier_attribute: Option<&'static str>,
}

impl ResourceTags {
	pub const fn by(identifier_attribute: &'static str) -> Self {
		Self {
			identifier_attribute: Some(identifier_attribute),
		}
	}
}

#[derive(Clone)]
pub struct DataSourceRegistration {
	pub type_name: &'static str,
	pub name: Option<&'static str>,
	pub factory: DataSourceFactory,
	pub tags: Option<ResourceTags>,
}

#[derive(Clone)]
pub struct ResourceRegistration {
	pub type_name: &'static str,
	pub name: Option<&'static str>,
	pub factory: ResourceFactory,
	pub tags: Option<ResourceTags>,
}

/// Static registration table for one cloud service.
pub trait ServicePackage: Send + Sync {
	fn service_package_name(&self) -> &'static str;

	fn data_sources(&self) -> Vec<DataSourceRegistration>;

	fn resources(&self) -> Vec<ResourceRegistration> {
		Vec::new()
	}
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
	#[error("type {type_name} registered by both {first} and {second}")]
	DuplicateTypeName {
		type_name: String,
		first: &'static str,
		second: &'static str,
	},
}

/// An instantiated data source with its registration metadata.
pub struct RegisteredDataSource {
	pub package: &'static str,
	pub name: Option<&'static str>,
	pub tags: Option<ResourceTags>,
	pub handler: Box<dyn DataSource>,
}

pub struct RegisteredResource {
	pub package: &'static str,
	pub name: Option<&'static str>,
	pub tags: Option<ResourceTags>,
	pub handler: Box<dyn Resource>,
}

/// Every data source and resource type the provider serves, by type name.
#[derive(Default)]
pub struct Registry {
	data_sources: BTreeMap<String, RegisteredDataSource>,
	resources: BTreeMap<String, RegisteredResource>,
}

impl Registry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Add every registration in `package`. A type name already taken by an
	/// earlier package is an error and leaves the registry unchanged.
	pub fn register(&mut self, package: &dyn ServicePackage) -> Result<(), RegistryError> {
		let package_name = package.service_package_name();
		let data_sources = package.data_sources();
		let resources = package.resources();

		for type_name in data_sources.iter().map(|r| r.type_name) {
			if let Some(existing) = self.data_sources.get(type_name) {
				return Err(duplicate(type_name, existing.package, package_name));
			}
		}
		for type_name in resources.iter().map(|r| r.type_name) {
			if let Some(existing) = self.resources.get(type_name) {
				return Err(duplicate(type_name, existing.package, package_name));
			}
		}
		check_unique(data_sources.iter().map(|r| r.type_name), package_name)?;
		check_unique(resources.iter().map(|r| r.type_name), package_name)?;

		for registration in data_sources {
			debug!(package = package_name, type_name = registration.type_name, "registering data source");
			self.data_sources.insert(
				registration.type_name.to_string(),
				RegisteredDataSource {
					package: package_name,
					name: registration.name,
					tags: registration.tags,
					handler: (registration.factory)(),
				},
			);
		}
		for registration in resources {
			debug!(package = package_name, type_name = registration.type_name, "registering resource");
			self.resources.insert(
				registration.type_name.to_string(),
				RegisteredResource {
					package: package_name,
					name: registration.name,
					tags: registration.tags,
					handler: (registration.factory)(),
				},
			);
		}
		Ok(())
	}

	pub fn data_source(&self, type_name: &str) -> Option<&RegisteredDataSource> {
		self.data_sources.get(type_name)
	}

	pub fn resource(&self, type_name: &str) -> Option<&RegisteredResource> {
		self.resources.get(type_name)
	}

	pub fn data_source_types(&self) -> Vec<&str> {
		self.data_sources.keys().map(String::as_str).collect()
	}

	pub fn resource_types(&self) -> Vec<&str> {
		self.resources.keys().map(String::as_str).collect()
	}
}

fn duplicate(type_name: &str, first: &'static str, second: &'static str) -> RegistryError {
	RegistryError::DuplicateTypeName {
		type_name: type_name.to_string(),
		first,
		second,
	}
}

fn check_unique<'a>(
	names: impl Iterator<Item = &'a str>,
	package: &'static str,
) -> Result<(), RegistryError> {
	let mut seen = std::collections::BTreeSet::new();
	for name in names {
		if !seen.insert(name) {
			return Err(duplicate(name, package, package));
		}
	}
	Ok(())
}
