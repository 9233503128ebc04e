// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! The Nimbus provider: configuration, service registration and data source
//! reads behind one [`Provider`] handle.
//!
//! ```ignore
//! let config = nimbus_provider_config::load_config()?;
//! let provider = Provider::configure(&config)?;
//! let state = provider.read_data_source("aws_vpc_ipams", AttributeMap::new()).await?;
//! ```

pub mod error;
pub mod logging;
pub mod provider;

pub use error::ProviderError;
pub use logging::{env_filter, init_logging};
pub use provider::{context_from_config, default_registry, service_packages, Provider};
