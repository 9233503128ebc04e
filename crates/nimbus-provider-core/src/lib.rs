// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared provider plumbing for Nimbus service crates.
//!
//! Service crates implement [`DataSource`] (and [`Resource`] for
//! schema-only declarations), list them in a [`ServicePackage`], and the
//! provider collects packages into a [`Registry`].

pub mod context;
pub mod data_source;
pub mod error;
pub mod registry;
pub mod tagging;

pub use context::{ProviderContext, DEFAULT_PARTITION};
pub use data_source::{DataSource, DataSourceFactory, Resource, ResourceFactory};
pub use error::{BoxError, ReadError};
pub use registry::{
	DataSourceRegistration, RegisteredDataSource, RegisteredResource, Registry, RegistryError,
	ResourceRegistration, ResourceTags, ServicePackage,
};
pub use tagging::{apply_transparent_tags, TAGS_ATTRIBUTE};
