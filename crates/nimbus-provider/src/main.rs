// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! `nimbus`: read AWS data sources from the command line.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use nimbus_finder::CancellationToken;
use nimbus_provider::{default_registry, init_logging, Provider};
use nimbus_provider_config::{LoggingConfig, ProviderConfig};
use nimbus_schema::{AttributeMap, Schema, Value};

#[derive(Parser, Debug)]
#[command(name = "nimbus", about = "Read AWS data sources", version)]
struct Args {
	/// Configuration file, layered over the system and user files
	#[arg(long, global = true, env = "NIMBUS_CONFIG")]
	config: Option<PathBuf>,

	/// Log filter, e.g. `debug` or `nimbus_finder=trace`
	#[arg(long, global = true)]
	log_level: Option<String>,

	/// Emit logs as JSON
	#[arg(long, global = true)]
	json_logs: bool,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Read a data source and print its state as JSON
	Read {
		/// Data source type, e.g. `aws_vpc_ipam`
		type_name: String,

		/// JSON object with the data source configuration
		#[arg(long)]
		input: Option<PathBuf>,

		/// Set a string attribute, `key=value`; repeatable
		#[arg(long = "set", value_parser = parse_key_value)]
		set: Vec<(String, String)>,
	},
	/// List registered data source and resource types
	List,
	/// Print the attributes of a data source or resource type
	Schema { type_name: String },
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
	match s.split_once('=') {
		Some((k, v)) if !k.is_empty() => Ok((k.to_string(), v.to_string())),
		_ => Err(format!("expected key=value, got `{s}`")),
	}
}

fn build_input(input: Option<&Path>, set: Vec<(String, String)>) -> Result<AttributeMap> {
	let mut config = match input {
		Some(path) => {
			let text = std::fs::read_to_string(path)
				.with_context(|| format!("reading {}", path.display()))?;
			serde_json::from_str::<AttributeMap>(&text)
				.with_context(|| format!("parsing {}", path.display()))?
		}
		None => AttributeMap::new(),
	};
	for (key, value) in set {
		config.insert(key, Value::String(value));
	}
	Ok(config)
}

fn describe(schema: &Schema) -> String {
	let mut out = String::new();
	for (name, attr) in schema.iter() {
		let mut flags = Vec::new();
		if attr.required {
			flags.push("required");
		}
		if attr.optional {
			flags.push("optional");
		}
		if attr.computed {
			flags.push("computed");
		}
		if attr.sensitive {
			flags.push("sensitive");
		}
		out.push_str(&format!("{name}\t{}\t{}\n", attr.ty.name(), flags.join(",")));
	}
	out
}

/// Command-line logging flags layered over the configured settings.
fn log_settings(base: LoggingConfig, level: Option<String>, json: bool) -> LoggingConfig {
	LoggingConfig {
		level: level.unwrap_or(base.level),
		json: base.json || json,
	}
}

fn load_config(path: Option<&Path>) -> Result<ProviderConfig> {
	let config = match path {
		Some(path) => nimbus_provider_config::load_config_with_file(path)?,
		None => nimbus_provider_config::load_config()?,
	};
	Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
	let args = Args::parse();

	// Only reads need a region; listing and schema output work unconfigured.
	let config = match args.command {
		Command::Read { .. } => Some(load_config(args.config.as_deref())?),
		Command::List | Command::Schema { .. } => None,
	};
	let base = config
		.as_ref()
		.map(|c| c.logging.clone())
		.unwrap_or_default();
	init_logging(&log_settings(base, args.log_level, args.json_logs))?;

	match args.command {
		Command::List => {
			let registry = default_registry()?;
			for type_name in registry.data_source_types() {
				println!("data\t{type_name}");
			}
			for type_name in registry.resource_types() {
				println!("resource\t{type_name}");
			}
			Ok(())
		}
		Command::Schema { type_name } => {
			let registry = default_registry()?;
			let schema = registry
				.data_source(&type_name)
				.map(|d| d.handler.schema())
				.or_else(|| registry.resource(&type_name).map(|r| r.handler.schema()));
			match schema {
				Some(schema) => {
					print!("{}", describe(&schema));
					Ok(())
				}
				None => bail!("unknown type: {type_name}"),
			}
		}
		Command::Read {
			type_name,
			input,
			set,
		} => {
			let Some(config) = config else {
				bail!("configuration was not loaded");
			};
			let provider = Provider::configure(&config)?;
			let attributes = build_input(input.as_deref(), set)?;

			let cancel = CancellationToken::new();
			let on_signal = cancel.clone();
			tokio::spawn(async move {
				if tokio::signal::ctrl_c().await.is_ok() {
					tracing::warn!("interrupt received; cancelling read");
					on_signal.cancel();
				}
			});

			let state = provider
				.read_data_source_with_cancel(&type_name, attributes, cancel)
				.await?;
			println!("{}", serde_json::to_string_pretty(&state)?);
			Ok(())
		}
	}
}
