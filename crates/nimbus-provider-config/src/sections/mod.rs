// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections for the provider.

pub mod endpoints;
pub mod ignore_tags;
pub mod logging;
pub mod provider;
pub mod read;
pub mod retry;

pub use endpoints::{EndpointsConfig, EndpointsConfigLayer};
pub use ignore_tags::{IgnoreTagsConfig, IgnoreTagsConfigLayer};
pub use logging::{LoggingConfig, LoggingConfigLayer};
pub use provider::{ProviderSection, ProviderSectionLayer, DEFAULT_PARTITION};
pub use read::{FinderConfig, FinderConfigLayer, TimeoutsConfig, TimeoutsConfigLayer};
pub use retry::RetryConfigLayer;
